//! Animation configuration.
//!
//! Settings start from [`AnimationSettings::default`], may be loaded from a
//! JSON file where every field is optional, and are validated before use.

use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::schedule::FrameSchedule;

/// Default frames per second.
pub const DEFAULT_FPS: u32 = 24;
/// Default animation length in seconds.
pub const DEFAULT_DURATION: f64 = 5.0;
/// Default upper bound on keyframed frames.
pub const DEFAULT_SAMPLE: u32 = 1000;

/// Everything needed to turn a merged model into an animation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Merged model file to animate.
    pub model_path: PathBuf,
    /// Name given to the animated mesh object.
    pub object_name: String,
    /// Frames per second.
    pub fps: u32,
    /// Length of the morph in seconds.
    pub duration: f64,
    /// At most this many frames receive keyframes.
    pub sample: u32,
    /// Diffuse color at ratio 0.
    pub start_color: Rgb,
    /// Diffuse color at ratio 1.
    pub end_color: Rgb,
    pub camera: CameraSettings,
}

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Point whose direction from `focus` fixes the viewing axis.
    pub location: DVec3,
    pub focus: DVec3,
    /// Distance from `focus` along the viewing axis.
    pub distance: f64,
    /// Focal length in millimeters.
    pub lens_mm: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("cube_cube2.obj"),
            object_name: "OBJECT".to_string(),
            fps: DEFAULT_FPS,
            duration: DEFAULT_DURATION,
            sample: DEFAULT_SAMPLE,
            start_color: Rgb::new(240.0, 60.0, 50.0),
            end_color: Rgb::new(255.0, 255.0, 221.0),
            camera: CameraSettings::default(),
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            location: DVec3::new(-0.1, 1.9, -4.0),
            focus: DVec3::ZERO,
            distance: 10.0,
            lens_mm: 70.0,
        }
    }
}

impl AnimationSettings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&text)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(Error::InvalidSettings("fps must be positive".to_string()));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration
            )));
        }
        if self.sample == 0 {
            return Err(Error::InvalidSettings(
                "sample must be at least 1".to_string(),
            ));
        }
        if !self.camera.distance.is_finite() {
            return Err(Error::InvalidSettings(
                "camera distance must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Total frames in the scene: `floor(fps * duration)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame_count(&self) -> u32 {
        (f64::from(self.fps) * self.duration).floor() as u32
    }

    /// Step between keyframed frames, so at most `sample` frames are keyed.
    #[must_use]
    pub fn frame_increment(&self) -> u32 {
        (self.frame_count() / self.sample.max(1)).max(1)
    }

    #[must_use]
    pub fn schedule(&self) -> FrameSchedule {
        FrameSchedule::new(self.frame_count(), self.frame_increment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnimationSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_count(), 120);
        assert_eq!(settings.frame_increment(), 1);
    }

    #[test]
    fn test_increment_limits_keyed_frames() {
        let settings = AnimationSettings {
            fps: 30,
            duration: 10.0,
            sample: 100,
            ..AnimationSettings::default()
        };
        assert_eq!(settings.frame_count(), 300);
        assert_eq!(settings.frame_increment(), 3);
        assert_eq!(settings.schedule().len(), 100);
    }

    #[test]
    fn test_frame_count_truncates() {
        let settings = AnimationSettings {
            fps: 24,
            duration: 0.99,
            ..AnimationSettings::default()
        };
        assert_eq!(settings.frame_count(), 23);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_fps = AnimationSettings {
            fps: 0,
            ..AnimationSettings::default()
        };
        assert!(matches!(zero_fps.validate(), Err(Error::InvalidSettings(_))));

        let negative = AnimationSettings {
            duration: -1.0,
            ..AnimationSettings::default()
        };
        assert!(matches!(negative.validate(), Err(Error::InvalidSettings(_))));

        let nan = AnimationSettings {
            duration: f64::NAN,
            ..AnimationSettings::default()
        };
        assert!(matches!(nan.validate(), Err(Error::InvalidSettings(_))));

        let no_samples = AnimationSettings {
            sample: 0,
            ..AnimationSettings::default()
        };
        assert!(matches!(
            no_samples.validate(),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: AnimationSettings = serde_json::from_str(
            r#"{
                "fps": 60,
                "end_color": { "r": 226.0, "g": 146.0, "b": 177.0 },
                "camera": { "lens_mm": 50.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.fps, 60);
        assert!((settings.duration - DEFAULT_DURATION).abs() < f64::EPSILON);
        assert_eq!(settings.end_color, Rgb::new(226.0, 146.0, 177.0));
        assert_eq!(settings.start_color, AnimationSettings::default().start_color);
        assert!((settings.camera.lens_mm - 50.0).abs() < f64::EPSILON);
        assert_eq!(settings.camera.location, DVec3::new(-0.1, 1.9, -4.0));
    }

    #[test]
    fn test_camera_location_from_array() {
        let settings: AnimationSettings =
            serde_json::from_str(r#"{ "camera": { "location": [1.0, 2.0, 3.0] } }"#).unwrap();
        assert_eq!(settings.camera.location, DVec3::new(1.0, 2.0, 3.0));
    }
}
