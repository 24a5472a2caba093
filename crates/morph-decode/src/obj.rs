//! Plain OBJ shapes and same-topology merging.
//!
//! Only `v` positions and `f` vertex indices are read. Texture and normal
//! references in face tokens (`v/vt/vn`) are dropped.

use std::path::Path;

use glam::DVec3;

use crate::error::{DecodeError, DecodeResult};
use crate::parse::{parse_face, parse_point, read_text, tagged_lines};
use crate::{Face, MergedModel};

/// A single shape read from a Wavefront OBJ file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
}

/// Read and parse an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> DecodeResult<ObjMesh> {
    let text = read_text(path.as_ref())?;
    parse_obj(&text)
}

/// Parse OBJ text, keeping positions and faces.
pub fn parse_obj(text: &str) -> DecodeResult<ObjMesh> {
    let mut mesh = ObjMesh::default();

    for (line_no, tag, values) in tagged_lines(text) {
        match tag {
            "v" => mesh.vertices.push(parse_point(line_no, &values)?),
            "f" => mesh.faces.push(parse_face(line_no, &values, vertex_ref)?),
            _ => {}
        }
    }

    Ok(mesh)
}

/// Combine a start and an end shape into one merged model.
///
/// Both shapes must have the same vertex count and identical faces, so that
/// vertex `i` of the start shape morphs into vertex `i` of the end shape.
pub fn merge_shapes(start: ObjMesh, end: ObjMesh) -> DecodeResult<MergedModel> {
    if start.vertices.len() != end.vertices.len() {
        return Err(DecodeError::VertexCountMismatch {
            start: start.vertices.len(),
            end: end.vertices.len(),
        });
    }
    if start.faces != end.faces {
        return Err(DecodeError::TopologyMismatch);
    }

    Ok(MergedModel::from_parts(
        start.faces,
        start.vertices,
        end.vertices,
    ))
}

fn vertex_ref(token: &str) -> &str {
    token.split('/').next().unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
# Blender export
o Tri
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vn 0.0 0.0 1.0
s off
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn test_parse_obj_keeps_positions_and_faces() {
        let mesh = parse_obj(TRIANGLE).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[2], DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_parse_obj_face_without_texture() {
        let mesh = parse_obj("f 5//1 3//1 1//1\n").unwrap();
        assert_eq!(mesh.faces, vec![vec![4, 2, 0]]);
    }

    #[test]
    fn test_parse_obj_bad_index() {
        let err = parse_obj("f a/1 2 3\n").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidIndex { line: 1, .. }));
    }

    #[test]
    fn test_merge_shapes() {
        let start = parse_obj(TRIANGLE).unwrap();
        let mut end = start.clone();
        for v in &mut end.vertices {
            *v *= 2.0;
        }

        let model = merge_shapes(start, end).unwrap();
        assert_eq!(model.faces(), &[vec![0, 1, 2]]);
        assert_eq!(model.verts2()[1], DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(model.interpolate(0.5).vertices[1], DVec3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn test_merge_vertex_count_mismatch() {
        let start = parse_obj(TRIANGLE).unwrap();
        let mut end = start.clone();
        end.vertices.pop();

        let err = merge_shapes(start, end).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::VertexCountMismatch { start: 3, end: 2 }
        ));
    }

    #[test]
    fn test_merge_topology_mismatch() {
        let start = parse_obj(TRIANGLE).unwrap();
        let mut end = start.clone();
        end.faces[0].reverse();

        let err = merge_shapes(start, end).unwrap_err();
        assert!(matches!(err, DecodeError::TopologyMismatch));
    }
}
