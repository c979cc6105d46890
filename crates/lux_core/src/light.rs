//! Point and directional light sources.

use lux_math::{Color, Vec3};

/// Distance used to place a directional light "at infinity".
///
/// Large enough to act as unbounded for shadow rays, small enough that its
/// square still fits in an f32.
pub const DIRECTIONAL_LIGHT_DISTANCE: f32 = 1.0e18;

/// Floor on the squared distance for point-light falloff.
pub const MIN_SQUARED_DISTANCE: f32 = 1.0e-4;

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point {
        origin: Vec3,
        intensity: f32,
        color: Color,
    },
    Directional {
        /// Direction the light travels in (unit length)
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Light::Point {
            origin,
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Light::Directional {
            direction: direction.normalize_or_zero(),
            intensity,
            color,
        }
    }

    /// Unnormalized vector from `target` to the light.
    ///
    /// Its length is the distance to the light, which bounds shadow rays.
    #[inline]
    pub fn direction_to_light(&self, target: Vec3) -> Vec3 {
        match *self {
            Light::Point { origin, .. } => origin - target,
            Light::Directional { direction, .. } => -direction * DIRECTIONAL_LIGHT_DISTANCE,
        }
    }

    /// Incident radiance at `target`.
    ///
    /// Point lights fall off with the inverse square of the distance.
    #[inline]
    pub fn radiance(&self, target: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                intensity,
                color,
            } => {
                let r = origin - target;
                let squared_distance = r.dot(r).max(MIN_SQUARED_DISTANCE);
                color * (intensity / squared_distance)
            }
            Light::Directional { intensity, color, .. } => color * intensity,
        }
    }
}
