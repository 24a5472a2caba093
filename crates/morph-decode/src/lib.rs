//! Parse and interpolate two-shape merged mesh files.
//!
//! A merged file carries one face topology and two index-aligned vertex sets:
//! the start shape (`v` lines) and the end shape (`u` lines). This crate reads
//! that format, writes it back, and blends the two shapes at any ratio.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Pure**: The only side effect is the file read in [`load_merged`]
//! - **Lenient lines, strict numbers**: Short lines and unknown tags are
//!   skipped, unparsable numbers abort the load
//!
//! # Key functions
//!
//! - [`parse_merged`] / [`load_merged`]: Read the merged `v`/`u`/`f` format
//! - [`interpolate`]: Linearly blend start and end shapes
//! - [`write_merged`]: Emit the merged format
//! - [`parse_obj`] / [`merge_shapes`]: Build a merged model from two OBJ shapes

mod error;

pub mod interpolate;
pub mod obj;
pub mod parse;
pub mod write;

pub use error::{DecodeError, DecodeResult};
pub use interpolate::{Interpolated, interpolate};
pub use obj::{ObjMesh, load_obj, merge_shapes, parse_obj};
pub use parse::{load_merged, parse_merged};
pub use write::{MIN_FACE_INDICES, write_merged};

use std::path::Path;
use std::str::FromStr;

use glam::DVec3;

/// One polygon: zero-based indices into the vertex sets.
pub type Face = Vec<usize>;

/// Face topology shared by a start shape and an end shape.
///
/// `verts1` and `verts2` are expected to have the same length. This is not
/// enforced; see [`MergedModel::is_balanced`] and [`interpolate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedModel {
    faces: Vec<Face>,
    verts1: Vec<DVec3>,
    verts2: Vec<DVec3>,
}

impl MergedModel {
    /// Assemble a model from already-decoded parts.
    #[must_use]
    pub fn from_parts(faces: Vec<Face>, verts1: Vec<DVec3>, verts2: Vec<DVec3>) -> Self {
        Self {
            faces,
            verts1,
            verts2,
        }
    }

    /// Load a merged file from disk.
    pub fn load(path: impl AsRef<Path>) -> DecodeResult<Self> {
        load_merged(path)
    }

    /// Write the model to disk in the merged format.
    pub fn save(&self, path: impl AsRef<Path>) -> DecodeResult<()> {
        write::save_merged(self, path.as_ref())
    }

    /// Blend the start shape toward the end shape.
    #[must_use]
    pub fn interpolate(&self, ratio: f64) -> Interpolated<'_> {
        interpolate(self, ratio)
    }

    /// Shared face topology, zero-based.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Start shape positions.
    #[must_use]
    pub fn verts1(&self) -> &[DVec3] {
        &self.verts1
    }

    /// End shape positions.
    #[must_use]
    pub fn verts2(&self) -> &[DVec3] {
        &self.verts2
    }

    /// Number of vertices an interpolation yields (the shorter vertex set).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.verts1.len().min(self.verts2.len())
    }

    /// Whether both vertex sets have the same length.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.verts1.len() == self.verts2.len()
    }
}

impl FromStr for MergedModel {
    type Err = DecodeError;

    fn from_str(s: &str) -> DecodeResult<Self> {
        parse_merged(s)
    }
}
