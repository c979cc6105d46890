//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then checks the hit point against
//! each edge (inside-outside test against the face normal).

use crate::hittable::{HitRecord, Hittable};
use lux_math::{Ray, Vec3};

/// Which winding orientations are eligible for intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Reject triangles whose normal faces the ray (`dot(dir, n) < 0`).
    FrontFaceCulling,
    /// Reject triangles whose normal faces away from the ray (`dot(dir, n) > 0`).
    BackFaceCulling,
    #[default]
    NoCulling,
}

impl CullMode {
    /// Whether a face with `n_dot_v = dot(ray.direction, normal)` is culled.
    ///
    /// Occlusion queries test the opposite winding, so the test direction
    /// is inverted for them.
    #[inline]
    pub fn culls(self, n_dot_v: f32, occlusion: bool) -> bool {
        let n_dot_v = if occlusion { -n_dot_v } else { n_dot_v };
        match self {
            CullMode::BackFaceCulling => n_dot_v > 0.0,
            CullMode::FrontFaceCulling => n_dot_v < 0.0,
            CullMode::NoCulling => false,
        }
    }
}

/// Plane-then-edges triangle test shared by [`Triangle`] and the mesh.
///
/// Returns the accepted parameter `t` (inclusive bounds).
#[inline]
pub(crate) fn intersect_triangle(
    [v0, v1, v2]: [Vec3; 3],
    normal: Vec3,
    cull_mode: CullMode,
    ray: &Ray,
    occlusion: bool,
) -> Option<f32> {
    let n_dot_v = ray.direction.dot(normal);

    // Ray is parallel to the triangle's plane
    if n_dot_v == 0.0 {
        return None;
    }

    if cull_mode.culls(n_dot_v, occlusion) {
        return None;
    }

    let t = (v0 - ray.origin).dot(normal) / n_dot_v;
    if !ray.interval().contains(t) {
        return None;
    }

    let p = ray.at(t);
    for (start, end) in [(v0, v1), (v1, v2), (v2, v0)] {
        let edge = end - start;
        if edge.cross(p - start).dot(normal) < 0.0 {
            return None;
        }
    }

    Some(t)
}

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Pre-computed face normal (unit length)
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal is `normalize(cross(v1 - v0, v2 - v0))`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = face_normal(v0, v1, v2);
        Self::with_normal(v0, v1, v2, normal)
    }

    /// Create a triangle with a pre-computed normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize_or_zero(),
            cull_mode: CullMode::default(),
            material_index: 0,
        }
    }

    /// Builder method to set the cull mode.
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    /// Builder method to set the material index.
    pub fn with_material(mut self, material_index: usize) -> Self {
        self.material_index = material_index;
        self
    }

    #[inline]
    fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Unit face normal of a triangle. Degenerate triangles give `Vec3::ZERO`.
#[inline]
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = intersect_triangle(self.vertices(), self.normal, self.cull_mode, ray, false)?;
        Some(HitRecord::new(ray, t, self.normal, self.material_index))
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        intersect_triangle(self.vertices(), self.normal, self.cull_mode, ray, true).is_some()
    }
}
