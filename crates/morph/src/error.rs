//! Error types for animation building.

use std::path::PathBuf;

use morph_decode::DecodeError;
use thiserror::Error;

/// Errors that can occur while configuring, building or exporting an animation.
#[derive(Debug, Error)]
pub enum Error {
    /// The merged model could not be read.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a stream without a path (stdout) failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for animation operations.
pub type Result<T> = std::result::Result<T, Error>;
