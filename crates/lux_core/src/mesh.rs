//! Triangle mesh with a cached world-space copy of its geometry.
//!
//! The mesh owns its untransformed source data (`positions`, one face normal
//! per triangle, `indices`) and a derived cache of transformed positions and
//! normals. The cache is only ever replaced wholesale by
//! [`TriangleMesh::update_transforms`], so readers never see a half-updated
//! buffer, and appending geometry extends both sides together.

use crate::hittable::{closest_of, HitRecord, Hittable};
use crate::triangle::{face_normal, intersect_triangle, CullMode, Triangle};
use lux_math::{Mat4, Mat4Ext, Ray, Vec3};

/// A mesh consisting of vertex positions, per-face normals, and triangle indices.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Vertex positions in object space
    positions: Vec<Vec3>,

    /// One normal per triangle in object space
    normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    indices: Vec<u32>,

    pub cull_mode: CullMode,
    pub material_index: usize,

    /// Transform components, composed as scale, then rotation, then translation
    translation: Mat4,
    rotation: Mat4,
    scale: Mat4,

    /// The transform the cache was built with
    world_transform: Mat4,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn empty(cull_mode: CullMode, material_index: usize) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material_index,
            translation: Mat4::IDENTITY,
            rotation: Mat4::IDENTITY,
            scale: Mat4::IDENTITY,
            world_transform: Mat4::IDENTITY,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
        }
    }

    /// Create a new mesh from positions and indices.
    ///
    /// Face normals are computed from the winding. Triangles referencing
    /// missing vertices are dropped with a warning.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, cull_mode: CullMode, material_index: usize) -> Self {
        let mut mesh = Self::empty(cull_mode, material_index);
        mesh.indices = sanitize_indices(indices, positions.len());
        mesh.positions = positions;
        mesh.calculate_normals();
        mesh.update_transforms();
        mesh
    }

    /// Append a triangle as three new vertices.
    ///
    /// The new vertices are transformed with the transform the cache was
    /// last built with, so source and cache stay the same length.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let start = self.positions.len() as u32;

        for v in [triangle.v0, triangle.v1, triangle.v2] {
            self.positions.push(v);
            self.transformed_positions.push(self.world_transform.transform_point3(v));
        }
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);
        self.transformed_normals.push(self.world_transform.transform_normal3(triangle.normal));
    }

    /// Recompute face normals from the source positions.
    fn calculate_normals(&mut self) {
        self.normals = self
            .indices
            .chunks_exact(3)
            .map(|face| {
                face_normal(
                    self.positions[face[0] as usize],
                    self.positions[face[1] as usize],
                    self.positions[face[2] as usize],
                )
            })
            .collect();
    }

    /// Set the translation component. Takes effect on [`Self::update_transforms`].
    pub fn translate(&mut self, translation: Vec3) {
        self.translation = Mat4::from_translation(translation);
    }

    /// Set the rotation about Y in radians. Takes effect on [`Self::update_transforms`].
    pub fn rotate_y(&mut self, yaw: f32) {
        self.rotation = Mat4::from_rotation_y(yaw);
    }

    /// Set the scale component. Takes effect on [`Self::update_transforms`].
    pub fn scale(&mut self, scale: Vec3) {
        self.scale = Mat4::from_scale(scale);
    }

    /// Rebuild the world-space cache from the source data.
    ///
    /// Both buffers are built fresh and then swapped in.
    pub fn update_transforms(&mut self) {
        let world = self.translation * self.rotation * self.scale;

        let positions: Vec<Vec3> = self.positions.iter().map(|&p| world.transform_point3(p)).collect();
        let normals: Vec<Vec3> = self.normals.iter().map(|&n| world.transform_normal3(n)).collect();

        self.transformed_positions = positions;
        self.transformed_normals = normals;
        self.world_transform = world;
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// World-space triangles as `([v0, v1, v2], face_normal)`.
    pub fn world_triangles(&self) -> impl Iterator<Item = ([Vec3; 3], Vec3)> + '_ {
        self.indices
            .chunks_exact(3)
            .zip(self.transformed_normals.iter())
            .map(move |(face, &normal)| {
                (
                    [
                        self.transformed_positions[face[0] as usize],
                        self.transformed_positions[face[1] as usize],
                        self.transformed_positions[face[2] as usize],
                    ],
                    normal,
                )
            })
    }
}

/// Drop incomplete or out-of-range triangles.
fn sanitize_indices(indices: Vec<u32>, vertex_count: usize) -> Vec<u32> {
    if indices.len() % 3 == 0 && indices.iter().all(|&i| (i as usize) < vertex_count) {
        return indices;
    }

    let mut valid = Vec::with_capacity(indices.len());
    for face in indices.chunks(3) {
        if face.len() < 3 || face.iter().any(|&i| i as usize >= vertex_count) {
            log::warn!("Invalid triangle indices: {:?}, vertex count: {}", face, vertex_count);
            continue;
        }
        valid.extend_from_slice(face);
    }
    valid
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.world_triangles().fold(None, |closest, (vertices, normal)| {
            let candidate = intersect_triangle(vertices, normal, self.cull_mode, ray, false)
                .map(|t| HitRecord::new(ray, t, normal, self.material_index));
            closest_of(closest, candidate)
        })
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.world_triangles()
            .any(|(vertices, normal)| intersect_triangle(vertices, normal, self.cull_mode, ray, true).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    /// Unit quad in the z=0 plane facing -Z (toward a camera at negative z).
    fn quad() -> TriangleMesh {
        quad_with(CullMode::NoCulling)
    }

    fn quad_with(cull_mode: CullMode) -> TriangleMesh {
        let positions = vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
        ];
        TriangleMesh::new(positions, vec![0, 1, 2, 0, 2, 3], cull_mode, 1)
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = quad();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.normals().len(), 2);
        assert_eq!(mesh.transformed_positions(), mesh.positions());
        for n in mesh.normals() {
            assert!((*n - (-Vec3::Z)).length() < 1e-6);
        }
    }

    #[test]
    fn test_mesh_hit() {
        let mesh = quad();
        let ray = Ray::new(Vec3::new(0.1, 0.2, -3.0), Vec3::Z);

        let rec = mesh.hit(&ray).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(rec.material_index, 1);
        assert!(mesh.hit_any(&ray));

        let miss = Ray::new(Vec3::new(2.0, 0.0, -3.0), Vec3::Z);
        assert!(mesh.hit(&miss).is_none());
        assert!(!mesh.hit_any(&miss));
    }

    #[test]
    fn test_back_face_culling_flips_for_occlusion() {
        let mesh = quad_with(CullMode::BackFaceCulling);

        // Ray along +Z meets the -Z facing quad head on
        let toward_front = Ray::new(Vec3::new(0.1, 0.2, -3.0), Vec3::Z);
        assert!(mesh.hit(&toward_front).is_some());
        assert!(!mesh.hit_any(&toward_front));

        // From behind the quad the two queries swap
        let toward_back = Ray::new(Vec3::new(0.1, 0.2, 3.0), -Vec3::Z);
        assert!(mesh.hit(&toward_back).is_none());
        assert!(mesh.hit_any(&toward_back));
    }

    #[test]
    fn test_front_face_culling_flips_for_occlusion() {
        let mesh = quad_with(CullMode::FrontFaceCulling);

        let toward_front = Ray::new(Vec3::new(0.1, 0.2, -3.0), Vec3::Z);
        assert!(mesh.hit(&toward_front).is_none());
        assert!(mesh.hit_any(&toward_front));

        let toward_back = Ray::new(Vec3::new(0.1, 0.2, 3.0), -Vec3::Z);
        let rec = mesh.hit(&toward_back).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-5);
        assert!(!mesh.hit_any(&toward_back));
    }

    #[test]
    fn test_mesh_keeps_closest_triangle() {
        let mut mesh = TriangleMesh::empty(CullMode::NoCulling, 0);
        let far = Triangle::new(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
        );
        let near = Triangle::new(
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
        );
        mesh.append_triangle(&far);
        mesh.append_triangle(&near);

        let rec = mesh.hit(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_mesh_never_hits() {
        let mesh = TriangleMesh::empty(CullMode::NoCulling, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(mesh.hit(&ray).is_none());
        assert!(!mesh.hit_any(&ray));
    }

    #[test]
    fn test_translate_requires_update() {
        let mut mesh = quad();
        mesh.translate(Vec3::new(0.0, 0.0, 2.0));

        // Pending until update_transforms: the cache still matches the old transform
        assert_eq!(mesh.transformed_positions(), mesh.positions());

        mesh.update_transforms();
        let rec = mesh.hit(&Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z)).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_transform_order_scale_rotate_translate() {
        let mut mesh = quad();
        mesh.scale(Vec3::splat(2.0));
        mesh.rotate_y(PI);
        mesh.translate(Vec3::new(1.0, 0.0, 0.0));
        mesh.update_transforms();

        // (-0.5, -0.5, 0) -> scaled (-1, -1, 0) -> rotated (1, -1, 0) -> translated (2, -1, 0)
        let p = mesh.transformed_positions()[0];
        assert!((p - Vec3::new(2.0, -1.0, 0.0)).length() < 1e-5);

        // Normals rotate with the mesh and stay unit length
        for n in mesh.transformed_normals() {
            assert!((*n - Vec3::Z).length() < 1e-5);
        }
    }

    #[test]
    fn test_rotate_y_is_absolute() {
        let mut mesh = quad();
        mesh.rotate_y(PI / 2.0);
        mesh.update_transforms();
        mesh.rotate_y(PI / 2.0);
        mesh.update_transforms();

        // Same yaw twice is not a 180 degree turn
        for n in mesh.transformed_normals() {
            assert!((*n - (-Vec3::X)).length() < 1e-5);
        }
    }

    #[test]
    fn test_append_triangle_uses_current_transform() {
        let mut mesh = TriangleMesh::empty(CullMode::NoCulling, 0);
        mesh.translate(Vec3::new(0.0, 4.5, 0.0));
        mesh.update_transforms();

        mesh.append_triangle(&Triangle::new(
            Vec3::new(-0.75, 1.5, 0.0),
            Vec3::new(0.75, 0.0, 0.0),
            Vec3::new(-0.75, 0.0, 0.0),
        ));

        assert_eq!(mesh.transformed_positions().len(), mesh.positions().len());
        assert_eq!(mesh.transformed_normals().len(), mesh.normals().len());
        assert!((mesh.transformed_positions()[0] - Vec3::new(-0.75, 6.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_invalid_indices_are_dropped() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let mesh = TriangleMesh::new(positions, vec![0, 1, 2, 0, 1, 7, 2], CullMode::NoCulling, 0);

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
    }
}
