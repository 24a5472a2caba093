//! Decode errors.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or merging mesh files.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid coordinate {token:?}: {source}")]
    InvalidFloat {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: invalid face index {token:?}: {source}")]
    InvalidIndex {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: face index 0 is not valid, indices start at 1")]
    ZeroIndex { line: usize },

    #[error("face {face} has {len} indices, at least 3 are needed to write it")]
    ShortFace { face: usize, len: usize },

    #[error("failed to write merged model: {0}")]
    Write(#[source] std::io::Error),

    #[error("shapes have different vertex counts: start has {start}, end has {end}")]
    VertexCountMismatch { start: usize, end: usize },

    #[error("shapes have different face topology")]
    TopologyMismatch,
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
