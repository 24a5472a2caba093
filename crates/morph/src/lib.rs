//! Build keyframed morph animations from merged mesh files.
//!
//! The decode crate answers "where is every vertex at ratio `r`". This crate
//! turns that into a complete, host-independent animation plan: the sampled
//! frame schedule, one curve per vertex axis, a material color gradient and a
//! camera placement. A host adapter replays the exported plan.
//!
//! ```no_run
//! use morph::{AnimationSettings, build_animation};
//! use morph_decode::MergedModel;
//!
//! let settings = AnimationSettings::default();
//! let model = MergedModel::load(&settings.model_path)?;
//! let animation = build_animation(&model, &settings)?;
//! animation.write_json("morph.json")?;
//! # Ok::<(), morph::Error>(())
//! ```

mod error;

pub mod animation;
pub mod camera;
pub mod color;
pub mod schedule;
pub mod settings;
pub mod telemetry;

pub use animation::{Action, Animation, FCurve, Keyframe, Material, MeshObject, build_animation};
pub use camera::CameraPlacement;
pub use color::Rgb;
pub use error::{Error, Result};
pub use schedule::{FrameSchedule, SampledFrame};
pub use settings::{AnimationSettings, CameraSettings};
