//! Merge two same-topology OBJ shapes into one merged model file.
//!
//! Run: `cargo run -p morph --bin merge-shapes -- cube.obj cube2.obj cube_cube2.obj`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use morph_decode::{load_obj, merge_shapes};

#[derive(Parser, Debug)]
#[command(name = "merge-shapes")]
#[command(about = "Combine start and end OBJ shapes into the merged v/u/f format")]
struct Cli {
    /// Start shape (OBJ)
    start: PathBuf,
    /// End shape (OBJ), same vertex count and faces as the start shape
    end: PathBuf,
    /// Merged output file
    output: PathBuf,
}

fn main() -> Result<()> {
    morph::telemetry::init();
    let cli = Cli::parse();

    let start = load_obj(&cli.start).with_context(|| format!("read OBJ: {}", cli.start.display()))?;
    let end = load_obj(&cli.end).with_context(|| format!("read OBJ: {}", cli.end.display()))?;
    tracing::info!(
        "Start shape: {} vertices, {} faces; end shape: {} vertices, {} faces",
        start.vertices.len(),
        start.faces.len(),
        end.vertices.len(),
        end.faces.len()
    );

    let model = merge_shapes(start, end).context("merge shapes")?;
    model
        .save(&cli.output)
        .with_context(|| format!("write merged model: {}", cli.output.display()))?;
    tracing::info!("Wrote {}", cli.output.display());

    Ok(())
}
