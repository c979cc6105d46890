//! Infinite plane primitive.

use crate::hittable::{HitRecord, Hittable};
use lux_math::{Ray, Vec3};

/// An infinite plane through `origin` with a fixed `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: usize,
}

impl Plane {
    /// Create a new plane. The normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material_index: usize) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material_index,
        }
    }

    /// Ray-plane parameter, accepted only strictly inside `(min, max)`.
    ///
    /// A ray parallel to the plane divides by zero; the resulting NaN or
    /// infinity fails the range check and is reported as a miss.
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let numerator = (self.origin - ray.origin).dot(self.normal);
        let denominator = ray.direction.dot(self.normal);
        let t = numerator / denominator;

        (t.is_finite() && ray.interval().surrounds(t)).then_some(t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = self.intersect(ray)?;
        Some(HitRecord::new(ray, t, self.normal, self.material_index))
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}
