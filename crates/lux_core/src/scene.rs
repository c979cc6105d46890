//! Scene description: primitives, lights, materials and the camera.
//!
//! Primitives reference materials by index into [`Scene::materials`], so one
//! material can be shared by any number of primitives.

use lux_math::{colors, Camera, Color, Ray, Vec3};
use thiserror::Error;

use crate::hittable::{closest_of, HitRecord, Hittable};
use crate::light::Light;
use crate::material::Material;
use crate::mesh::TriangleMesh;
use crate::obj::ObjError;
use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::triangle::CullMode;

/// Errors raised while building or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Unknown scene: {0}")]
    UnknownScene(String),

    #[error("{kind} {index} references material {material}, but the scene has {count} materials")]
    MaterialOutOfRange {
        kind: &'static str,
        index: usize,
        material: usize,
        count: usize,
    },

    #[error("OBJ error: {0}")]
    Obj(#[from] ObjError),
}

/// A complete scene.
///
/// Built once, queried many times per frame. Between frames only mesh
/// transforms change, which requires `&mut Scene` and therefore can't race
/// with a frame in flight.
#[derive(Clone, Debug)]
pub struct Scene {
    pub planes: Vec<Plane>,
    pub spheres: Vec<Sphere>,
    pub meshes: Vec<TriangleMesh>,
    pub lights: Vec<Light>,

    /// Materials shared by index. Index 0 is always present.
    pub materials: Vec<Material>,

    pub camera: Camera,

    /// Display name
    pub name: String,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            planes: Vec::new(),
            spheres: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::solid_color(colors::RED)],
            camera: Camera::default(),
            name: String::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene. Material 0 is a solid red fallback.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material_index: usize) -> &mut Sphere {
        self.spheres.push(Sphere::new(origin, radius, material_index));
        let last = self.spheres.len() - 1;
        &mut self.spheres[last]
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: usize) -> &mut Plane {
        self.planes.push(Plane::new(origin, normal, material_index));
        let last = self.planes.len() - 1;
        &mut self.planes[last]
    }

    /// Add an empty triangle mesh and return its index in [`Scene::meshes`].
    pub fn add_triangle_mesh(&mut self, cull_mode: CullMode, material_index: usize) -> usize {
        self.add_mesh(TriangleMesh::empty(cull_mode, material_index))
    }

    /// Add an already built mesh and return its index in [`Scene::meshes`].
    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> usize {
        let id = self.meshes.len();
        self.meshes.push(mesh);
        id
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::point(origin, intensity, color));
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::directional(direction, intensity, color));
    }

    /// Add a material to the scene and return its ID.
    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    /// Get a material by ID.
    pub fn material(&self, id: usize) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Get material count.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get total triangle count across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(TriangleMesh::triangle_count).sum()
    }

    /// Closest accepted hit over every primitive.
    ///
    /// Planes are scanned first, then spheres, then meshes. On equal `t` the
    /// primitive scanned first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest = None;

        for plane in &self.planes {
            closest = closest_of(closest, plane.hit(ray));
        }
        for sphere in &self.spheres {
            closest = closest_of(closest, sphere.hit(ray));
        }
        for mesh in &self.meshes {
            closest = closest_of(closest, mesh.hit(ray));
        }

        closest
    }

    /// Whether anything blocks `ray` within its range. Stops at the first hit.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.planes.iter().any(|p| p.hit_any(ray))
            || self.spheres.iter().any(|s| s.hit_any(ray))
            || self.meshes.iter().any(|m| m.hit_any(ray))
    }

    /// Check that every primitive references an existing material.
    pub fn validate(&self) -> Result<(), SceneError> {
        let count = self.materials.len();
        let references = self
            .planes
            .iter()
            .enumerate()
            .map(|(i, p)| ("Plane", i, p.material_index))
            .chain(
                self.spheres
                    .iter()
                    .enumerate()
                    .map(|(i, s)| ("Sphere", i, s.material_index)),
            )
            .chain(
                self.meshes
                    .iter()
                    .enumerate()
                    .map(|(i, m)| ("Mesh", i, m.material_index)),
            );

        for (kind, index, material) in references {
            if material >= count {
                return Err(SceneError::MaterialOutOfRange {
                    kind,
                    index,
                    material,
                    count,
                });
            }
        }

        Ok(())
    }
}
