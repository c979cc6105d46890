//! Wavefront OBJ loading via `tobj`.
//!
//! Only positions and faces are used. Faces are triangulated and every
//! object in the file is merged into one vertex/index buffer.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lux_math::Vec3;
use thiserror::Error;

use crate::mesh::TriangleMesh;
use crate::triangle::CullMode;

/// Errors that can occur while loading OBJ geometry.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ load error: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("No geometry found in OBJ data")]
    NoGeometry,

    #[error("Malformed face data in model '{0}'")]
    MalformedFaces(String),
}

/// Triangulated OBJ geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjGeometry {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjGeometry, ObjError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let geometry = load_obj_reader(&mut BufReader::new(file))?;

    log::debug!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        geometry.positions.len(),
        geometry.indices.len() / 3
    );
    Ok(geometry)
}

/// Parse OBJ source held in memory.
pub fn parse_obj_str(source: &str) -> Result<ObjGeometry, ObjError> {
    load_obj_reader(&mut source.as_bytes())
}

fn load_obj_reader<R: BufRead>(reader: &mut R) -> Result<ObjGeometry, ObjError> {
    // Material libraries are never needed, so any `mtllib` fails to load and is ignored
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    let mut geometry = ObjGeometry::default();

    for model in &models {
        let mesh = &model.mesh;
        if mesh.positions.len() % 3 != 0 || mesh.indices.len() % 3 != 0 {
            return Err(ObjError::MalformedFaces(model.name.clone()));
        }

        let offset = geometry.positions.len() as u32;
        geometry
            .positions
            .extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        geometry.indices.extend(mesh.indices.iter().map(|&i| i + offset));
    }

    if geometry.indices.is_empty() {
        return Err(ObjError::NoGeometry);
    }

    Ok(geometry)
}

impl TriangleMesh {
    /// Build a mesh from an OBJ file. Face normals are computed from the winding.
    pub fn from_obj<P: AsRef<Path>>(
        path: P,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<Self, ObjError> {
        let geometry = load_obj(path)?;
        Ok(TriangleMesh::new(geometry.positions, geometry.indices, cull_mode, material_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
# unit quad facing -Z
v -0.5 -0.5 0.0
v -0.5 0.5 0.0
v 0.5 0.5 0.0
v 0.5 -0.5 0.0
f 1 2 3 4
";

    #[test]
    fn test_parse_quad_is_triangulated() {
        let geometry = parse_obj_str(QUAD).unwrap();

        assert_eq!(geometry.positions.len(), 4);
        assert_eq!(geometry.indices.len(), 6);
        assert_eq!(geometry.positions[2], Vec3::new(0.5, 0.5, 0.0));
        assert!(geometry.indices.iter().all(|&i| (i as usize) < geometry.positions.len()));
    }

    #[test]
    fn test_parse_merges_objects() {
        let source = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o second
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
        let geometry = parse_obj_str(source).unwrap();

        assert_eq!(geometry.positions.len(), 6);
        assert_eq!(geometry.indices.len(), 6);
        // Second triangle indexes into the second half of the buffer
        assert!(geometry.indices[3..].iter().all(|&i| i >= 3));
        assert_eq!(geometry.positions[geometry.indices[3] as usize].z, 1.0);
    }

    #[test]
    fn test_parse_without_faces() {
        let result = parse_obj_str("v 0 0 0\nv 1 0 0\n");
        assert!(matches!(result, Err(ObjError::NoGeometry)));
    }

    #[test]
    fn test_missing_file() {
        let _ = env_logger::builder().is_test(true).try_init();

        let result = load_obj("does/not/exist.obj");
        assert!(matches!(result, Err(ObjError::Io(_))));

        let result = TriangleMesh::from_obj("does/not/exist.obj", CullMode::NoCulling, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_mesh_from_obj_source() {
        let geometry = parse_obj_str(QUAD).unwrap();
        let mesh = TriangleMesh::new(geometry.positions, geometry.indices, CullMode::BackFaceCulling, 2);

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.material_index, 2);
        for normal in mesh.normals() {
            assert!((normal.length() - 1.0).abs() < 1e-5);
        }
    }
}
