// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod camera;
mod color;
mod interval;
mod ray;
mod transform;

pub use camera::Camera;
pub use color::{colors, Color, ColorExt};
pub use interval::Interval;
pub use ray::Ray;
pub use transform::Mat4Ext;
