//! Animation plan building and export.
//!
//! The plan owns everything a host needs to recreate the morph: the mesh
//! object at ratio 0, an action with one curve per vertex axis, a material with
//! color keyframes, and the camera. Nothing refers to anything else by name.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use morph_decode::{Face, MergedModel};
use serde::Serialize;

use crate::camera::CameraPlacement;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::settings::AnimationSettings;

/// Name of the action holding the vertex curves.
pub const ACTION_NAME: &str = "MeshAnimation";
/// Name of the material carrying the color gradient.
pub const MATERIAL_NAME: &str = "PKHG";

/// A value pinned to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe<T> {
    pub frame: u32,
    pub value: T,
}

/// The animated mesh as it appears before the first keyframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshObject {
    pub name: String,
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
}

/// Keyframes for one component of one vertex position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FCurve {
    /// Property path, `vertices[<n>].co`.
    pub data_path: String,
    /// Component: 0 = x, 1 = y, 2 = z.
    pub index: usize,
    pub keyframes: Vec<Keyframe<f64>>,
}

impl FCurve {
    fn for_vertex(vertex: usize, index: usize) -> Self {
        Self {
            data_path: format!("vertices[{vertex}].co"),
            index,
            keyframes: Vec::new(),
        }
    }
}

/// Vertex curves, laid out vertex-major: three consecutive curves per vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub name: String,
    pub curves: Vec<FCurve>,
}

impl Action {
    /// Curve for `axis` (0..3) of `vertex`.
    #[must_use]
    pub fn curve(&self, vertex: usize, axis: usize) -> Option<&FCurve> {
        if axis >= 3 {
            return None;
        }
        self.curves.get(vertex * 3 + axis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub name: String,
    /// Current diffuse RGBA, i.e. the last keyed value.
    pub diffuse_color: [f32; 4],
    pub keyframes: Vec<Keyframe<[f32; 4]>>,
}

impl Material {
    fn insert_keyframe(&mut self, frame: u32, color: [f32; 4]) {
        self.diffuse_color = color;
        self.keyframes.push(Keyframe { frame, value: color });
    }
}

/// A complete morph animation, ready to be replayed by a host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub frame_start: u32,
    pub frame_end: u32,
    pub fps: u32,
    pub object: MeshObject,
    pub action: Action,
    pub material: Material,
    pub camera: CameraPlacement,
}

/// Sample the morph of `model` according to `settings`.
///
/// Every sampled frame gets one keyframe on each vertex curve and one on the
/// material. Vertex sets of different lengths are truncated to the shorter
/// one, with a warning.
pub fn build_animation(model: &MergedModel, settings: &AnimationSettings) -> Result<Animation> {
    settings.validate()?;

    if !model.is_balanced() {
        tracing::warn!(
            start = model.verts1().len(),
            end = model.verts2().len(),
            "Start and end shapes differ in vertex count, extra vertices are dropped"
        );
    }

    let base = model.interpolate(0.0);
    let object = MeshObject {
        name: settings.object_name.clone(),
        vertices: base.vertices,
        faces: base.faces.to_vec(),
    };

    let mut curves: Vec<FCurve> = (0..object.vertices.len())
        .flat_map(|vertex| (0..3).map(move |axis| FCurve::for_vertex(vertex, axis)))
        .collect();

    let mut material = Material {
        name: MATERIAL_NAME.to_string(),
        diffuse_color: settings.start_color.to_rgba(),
        keyframes: Vec::new(),
    };

    let schedule = settings.schedule();
    tracing::debug!(
        frames = schedule.frame_count(),
        increment = schedule.increment(),
        keyed = schedule.len(),
        "Sampling morph"
    );

    for sample in &schedule {
        let vertices = model.interpolate(sample.ratio).vertices;

        let color = Rgb::lerp(settings.start_color, settings.end_color, sample.ratio);
        material.insert_keyframe(sample.frame, color.to_rgba());

        for (axes, position) in curves.chunks_exact_mut(3).zip(&vertices) {
            for (curve, value) in axes.iter_mut().zip(position.to_array()) {
                curve.keyframes.push(Keyframe {
                    frame: sample.frame,
                    value,
                });
            }
        }
    }

    tracing::info!(
        "Built animation: {} vertices, {} faces, {} keyed frames",
        object.vertices.len(),
        object.faces.len(),
        schedule.len()
    );

    Ok(Animation {
        frame_start: 0,
        frame_end: schedule.frame_count(),
        fps: settings.fps,
        object,
        action: Action {
            name: ACTION_NAME.to_string(),
            curves,
        },
        material,
        camera: CameraPlacement::from_settings(&settings.camera),
    })
}

impl Animation {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the plan as pretty JSON.
    pub fn write_json_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(|err| {
            if err.is_io() {
                Error::Write(err.into())
            } else {
                Error::Json(err)
            }
        })?;
        writer.write_all(b"\n").map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)?;
        Ok(())
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_json_to(BufWriter::new(file))
            .map_err(|err| match err {
                Error::Write(source) => Error::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        tracing::info!("Wrote animation to {}", path.display());
        Ok(())
    }
}
