use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Pinhole camera described by an origin, yaw/pitch and a vertical field of view.
///
/// The camera looks down +Z when yaw and pitch are zero, with +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub origin: Vec3,
    /// Field of view in degrees
    pub fov_angle: f32,
    pub total_yaw: f32,
    pub total_pitch: f32,
}

impl Camera {
    /// Create a new camera looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            total_yaw: 0.0,
            total_pitch: 0.0,
        }
    }

    /// Set the orientation in radians.
    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.total_yaw = yaw;
        self.total_pitch = pitch;
        self
    }

    /// Orientation: pitch about X first, then yaw about Y.
    fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_y(self.total_yaw) * Mat4::from_rotation_x(self.total_pitch)
    }

    /// Forward direction, +Z rotated by the camera orientation.
    pub fn forward(&self) -> Vec3 {
        self.rotation().transform_vector3(Vec3::Z).normalize()
    }

    /// Camera-to-world transform.
    ///
    /// Columns are right, up, forward and the origin, so `transform_vector3`
    /// maps a camera-space direction `(x, y, 1)` into world space. The basis
    /// is the rotated X/Y/Z axes, which stays orthonormal at any pitch,
    /// including straight up or down.
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_translation(self.origin) * self.rotation()
    }

    /// `tan(fov / 2)`, the image-plane half extent at distance 1.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);

        assert_eq!(camera.origin, Vec3::new(0.0, 1.0, -5.0));
        assert_eq!(camera.fov_angle, 45.0);
        assert!((camera.forward() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_to_world_identity_orientation() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 90.0);
        let m = camera.camera_to_world();

        assert!((m.transform_vector3(Vec3::X) - Vec3::X).length() < 1e-6);
        assert!((m.transform_vector3(Vec3::Y) - Vec3::Y).length() < 1e-6);
        assert!((m.transform_vector3(Vec3::Z) - Vec3::Z).length() < 1e-6);
        // Translation only affects points
        assert!((m.transform_point3(Vec3::ZERO) - camera.origin).length() < 1e-6);
    }

    #[test]
    fn test_camera_yaw_turns_forward() {
        use std::f32::consts::FRAC_PI_2;

        let camera = Camera::new(Vec3::ZERO, 60.0).with_rotation(FRAC_PI_2, 0.0);
        let forward = camera.forward();

        // Rotating +Z by 90 degrees about Y gives +X
        assert!((forward - Vec3::X).length() < 1e-5);

        let m = camera.camera_to_world();
        assert!((m.transform_vector3(Vec3::Z) - forward).length() < 1e-5);
        assert!(m.transform_vector3(Vec3::Y).y > 0.99);
    }

    #[test]
    fn test_fov_scale() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert!((camera.fov_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_camera_straight_down_keeps_basis() {
        use std::f32::consts::FRAC_PI_2;

        let camera = Camera::new(Vec3::new(0.0, 3.0, 0.0), 60.0).with_rotation(0.0, FRAC_PI_2);
        let m = camera.camera_to_world();

        let right = m.transform_vector3(Vec3::X);
        let up = m.transform_vector3(Vec3::Y);
        let forward = m.transform_vector3(Vec3::Z);

        assert!(m.is_finite());
        assert!((forward - (-Vec3::Y)).length() < 1e-5);
        assert!((right - Vec3::X).length() < 1e-5);
        assert!((up - Vec3::Z).length() < 1e-5);
        assert!((m.transform_point3(Vec3::ZERO) - camera.origin).length() < 1e-6);
    }
}
