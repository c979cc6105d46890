//! Lux Core - geometry, materials and scene queries for the Lux ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`, all implementing `Hittable`
//! - **Shading**: the BRDF library and the closed `Material` set
//! - **Scenes**: `Scene` with closest-hit and any-hit queries, plus built-in `ReferenceScene`s
//! - **OBJ loading**: triangulated meshes via `tobj`
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{Material, Scene};
//! use lux_math::{colors, Ray, Vec3};
//!
//! let mut scene = Scene::new("example");
//! let red = scene.add_material(Material::lambert(colors::RED, 1.0));
//! scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, red);
//!
//! let hit = scene.closest_hit(&Ray::new(Vec3::new(0.0, 1.0, -5.0), Vec3::Z));
//! assert!(hit.is_some());
//! ```

pub mod brdf;
pub mod hittable;
pub mod light;
pub mod material;
pub mod mesh;
pub mod obj;
pub mod plane;
pub mod scene;
pub mod scenes;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use hittable::{HitRecord, Hittable};
pub use light::Light;
pub use material::{CookTorrance, Lambert, LambertPhong, Material, Shade, SolidColor};
pub use mesh::TriangleMesh;
pub use obj::{load_obj, parse_obj_str, ObjError, ObjGeometry};
pub use plane::Plane;
pub use scene::{Scene, SceneError};
pub use scenes::ReferenceScene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};
