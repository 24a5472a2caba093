//! Linear blending between the start and end shapes.

use glam::DVec3;

use crate::{Face, MergedModel};

/// Vertex positions at one ratio, paired with the model's unchanged faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolated<'a> {
    pub vertices: Vec<DVec3>,
    /// Borrowed from the model; topology is identical at every ratio.
    pub faces: &'a [Face],
}

/// Blend `verts1` toward `verts2`.
///
/// Each output vertex is `v1 + (v2 - v1) * ratio`. The ratio is not clamped:
/// values outside `[0, 1]` extrapolate along the same line.
///
/// Vertices are paired by index and pairing stops at the shorter set, so
/// trailing vertices of an unbalanced model are dropped.
#[must_use]
pub fn interpolate(model: &MergedModel, ratio: f64) -> Interpolated<'_> {
    let vertices = model
        .verts1()
        .iter()
        .zip(model.verts2())
        .map(|(&v1, &v2)| v1 + (v2 - v1) * ratio)
        .collect();

    Interpolated {
        vertices,
        faces: model.faces(),
    }
}
