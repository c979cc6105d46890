//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use lux_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material_index: usize,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(origin: Vec3, radius: f32, material_index: usize) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material_index,
        }
    }

    /// Solve `A t^2 + B t + C = 0` and pick the root in the ray's range.
    ///
    /// The smaller root is preferred; the larger one is only used when the
    /// smaller lies before `ray.min`. Bounds are inclusive.
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.origin;
        let a = ray.direction.dot(ray.direction);
        let b = (2.0 * ray.direction).dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let denominator = 2.0 * a;

        let mut t = (-b - sqrtd) / denominator;
        if t < ray.min {
            t = (-b + sqrtd) / denominator;
        }

        ray.interval().contains(t).then_some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = self.intersect(ray)?;
        let point = ray.at(t);
        let normal = (point - self.origin).normalize_or_zero();

        Some(HitRecord {
            point,
            normal,
            t,
            material_index: self.material_index,
        })
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, 3);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        let rec = sphere.hit(&ray).expect("ray aimed at the sphere should hit");

        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.point.length() - 1.0).abs() < 1e-5);
        assert!((rec.normal - rec.point.normalize()).length() < 1e-5);
        assert_eq!(rec.material_index, 3);
        assert!(sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_hit_off_center_normal_is_radial() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        let sphere = Sphere::new(center, 0.75, 0);
        let ray = Ray::new(Vec3::new(0.3, 1.2, -5.0), Vec3::Z);

        let rec = sphere.hit(&ray).unwrap();

        assert!(((rec.point - center).length() - 0.75).abs() < 1e-4);
        assert!(rec.normal.cross(rec.point - center).length() < 1e-4);
        assert!(rec.normal.dot(rec.point - center) > 0.0);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, 0);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(sphere.hit(&ray).is_none());
        assert!(!sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_tangent_is_a_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, 0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, -5.0), Vec3::Z);

        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_respects_max_bound() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.001, 5.0);

        assert!(sphere.hit(&ray).is_none());
        assert!(!sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_behind_ray_is_a_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(sphere.hit(&ray).is_none());
    }
}
