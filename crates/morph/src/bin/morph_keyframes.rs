//! Build a keyframed morph animation plan from a merged model file.
//!
//! Settings come from defaults, then an optional JSON config file, then flags.
//!
//! Run: `cargo run -p morph --bin morph-keyframes -- cube_cube2.obj --output morph.json`

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use morph::{AnimationSettings, build_animation};
use morph_decode::MergedModel;

#[derive(Parser, Debug)]
#[command(name = "morph-keyframes")]
#[command(about = "Sample a two-shape morph into vertex and color keyframes")]
struct Cli {
    /// Merged model file (`v`/`u`/`f` lines); overrides the config
    model: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Animation length in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Maximum number of keyframed frames
    #[arg(long)]
    sample: Option<u32>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<AnimationSettings> {
        let mut settings = match &self.config {
            Some(path) => AnimationSettings::from_json_file(path)
                .with_context(|| format!("load settings: {}", path.display()))?,
            None => AnimationSettings::default(),
        };
        if let Some(model) = &self.model {
            settings.model_path.clone_from(model);
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        if let Some(duration) = self.duration {
            settings.duration = duration;
        }
        if let Some(sample) = self.sample {
            settings.sample = sample;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    morph::telemetry::init();
    let cli = Cli::parse();
    let settings = cli.settings()?;

    tracing::info!("Loading model {}", settings.model_path.display());
    let model = MergedModel::load(&settings.model_path)
        .with_context(|| format!("load model: {}", settings.model_path.display()))?;

    let animation = build_animation(&model, &settings).context("build animation")?;

    match &cli.output {
        Some(path) => animation.write_json(path)?,
        None => animation.write_json_to(io::stdout().lock())?,
    }

    Ok(())
}
