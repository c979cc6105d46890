// Transform utilities for Mat4
//
// Extends glam::Mat4 with the normal transform the mesh cache needs.
// Note: glam::Mat4 already provides transform_point3(), transform_vector3()
// (w=0, no translation) and inverse()

use glam::{Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Transform a surface normal and renormalize it.
    ///
    /// Uses the direction transform, so it is only exact for rotations and
    /// uniform scales, which is all the mesh transforms produce.
    fn transform_normal3(&self, normal: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn transform_normal3(&self, normal: Vec3) -> Vec3 {
        self.transform_vector3(normal).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn test_transform_vector3_no_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let vector = Vec3::new(1.0, 0.0, 0.0);
        let transformed = mat.transform_vector3(vector);

        // Translation should NOT affect vectors (w=0)
        assert_eq!(transformed, vector);
    }

    #[test]
    fn test_transform_vector3_rotation() {
        use std::f32::consts::PI;

        // 90 degree rotation around Z axis
        let mat = Mat4::from_rotation_z(PI / 2.0);
        let transformed = mat.transform_vector3(Vec3::X);

        // X vector should rotate to Y vector
        assert!((transformed - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_transform_normal3_renormalizes_after_scale() {
        let mat = Mat4::from_scale(Vec3::splat(3.0));
        let n = mat.transform_normal3(Vec3::Z);

        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!((n - Vec3::Z).length() < 1e-5);
    }
}
