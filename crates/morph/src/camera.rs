//! Camera placement for the morph scene.
//!
//! The camera tracks a focus point: its local +Z axis points from the focus
//! toward the requested location (the camera looks down its -Z), and its
//! local +Y stays as close to world +Z as possible.

use glam::{DMat3, DQuat, DVec3, EulerRot};
use serde::Serialize;

use crate::settings::CameraSettings;

/// A resolved camera transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPlacement {
    pub rotation: DQuat,
    /// The same rotation as X, Y, Z angles in radians, applied X first.
    pub rotation_euler: DVec3,
    pub position: DVec3,
    /// Focal length in millimeters.
    pub lens_mm: f64,
}

impl CameraPlacement {
    /// Place a camera `distance` away from `focus`, on the line from `focus`
    /// through `location`.
    #[must_use]
    pub fn look_from(location: DVec3, focus: DVec3, distance: f64, lens_mm: f64) -> Self {
        let rotation = track_rotation(location - focus);
        let (z, y, x) = rotation.to_euler(EulerRot::ZYX);

        Self {
            rotation,
            rotation_euler: DVec3::new(x, y, z),
            position: focus + rotation * DVec3::new(0.0, 0.0, distance),
            lens_mm,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::look_from(
            settings.location,
            settings.focus,
            settings.distance,
            settings.lens_mm,
        )
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn view_direction(&self) -> DVec3 {
        self.rotation * DVec3::NEG_Z
    }
}

/// Rotation taking local +Z onto `direction` with local +Y toward world +Z.
///
/// A zero direction gives the identity. When `direction` is vertical, local +Y
/// falls back to world +Y.
fn track_rotation(direction: DVec3) -> DQuat {
    let Some(forward) = direction.try_normalize() else {
        return DQuat::IDENTITY;
    };
    let up = (DVec3::Z - forward * forward.dot(DVec3::Z))
        .try_normalize()
        .unwrap_or(DVec3::Y);
    let right = up.cross(forward);

    DQuat::from_mat3(&DMat3::from_cols(right, up, forward)).normalize()
}
