//! Hittable trait and HitRecord for ray-object intersection.

use lux_math::{Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Primitive tests return `Option<HitRecord>`, so a record only exists for an
/// accepted hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at intersection (unit length, never flipped toward the ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Index into the scene's material list
    pub material_index: usize,
}

impl HitRecord {
    /// Create a hit record at parameter `t` along `ray`.
    #[inline]
    pub fn new(ray: &Ray, t: f32, normal: Vec3, material_index: usize) -> Self {
        Self {
            point: ray.at(t),
            normal,
            t,
            material_index,
        }
    }

    /// Keep whichever of `self` and `candidate` is closer.
    ///
    /// Ties keep `self`, so the first primitive scanned wins.
    #[inline]
    pub fn closer(self, candidate: HitRecord) -> HitRecord {
        if candidate.t < self.t {
            candidate
        } else {
            self
        }
    }
}

/// Fold a candidate into the running closest hit.
#[inline]
pub fn closest_of(current: Option<HitRecord>, candidate: Option<HitRecord>) -> Option<HitRecord> {
    match (current, candidate) {
        (Some(current), Some(candidate)) => Some(current.closer(candidate)),
        (None, candidate) => candidate,
        (current, None) => current,
    }
}

/// Trait for objects that can be hit by rays.
///
/// Both entry points honour the ray's `[min, max]` range.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object and return the intersection details.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// Occlusion-only test for shadow rays.
    ///
    /// Never builds a record and may stop at the first accepted hit.
    fn hit_any(&self, ray: &Ray) -> bool;
}
