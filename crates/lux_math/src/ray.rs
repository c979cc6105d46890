use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a valid parameter range.
///
/// Rays are used for raytracing - they represent a line starting at `origin`
/// and traveling in `direction`. Intersections are only accepted for a
/// parameter `t` between `min` and `max`; each primitive decides whether the
/// bounds are open or closed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction. Use [`Ray::new`] to normalize on construction.
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

/// Default lower bound for primary rays.
pub const DEFAULT_RAY_MIN: f32 = 0.0001;

impl Ray {
    /// Create a new ray with the default `[0.0001, +inf]` range.
    ///
    /// The direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_bounds(origin, direction, DEFAULT_RAY_MIN, f32::INFINITY)
    }

    /// Create a new ray with explicit bounds. The direction is normalized.
    ///
    /// A range with `min >= max` is legal and simply accepts no hits.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            min,
            max,
        }
    }

    /// The valid parameter range as an [`Interval`].
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.min, self.max)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
            min: DEFAULT_RAY_MIN,
            max: f32::INFINITY,
        }
    }
}
