//! Merged format parsing.
//!
//! Each meaningful line is `<tag> <n1> <n2> ... <nk>`:
//!
//! | tag | meaning                       | tokens   |
//! |-----|-------------------------------|----------|
//! | `f` | face, 1-based vertex indices  | integers |
//! | `v` | start shape vertex position   | floats   |
//! | `u` | end shape vertex position     | floats   |
//!
//! Lines with fewer than [`MIN_TOKENS`] tokens and lines with any other tag are
//! skipped.

use std::path::Path;

use glam::DVec3;

use crate::error::{DecodeError, DecodeResult};
use crate::{Face, MergedModel};

/// Minimum whitespace-separated tokens for a line to be considered.
pub const MIN_TOKENS: usize = 4;

/// Read and parse a merged file.
pub fn load_merged(path: impl AsRef<Path>) -> DecodeResult<MergedModel> {
    let text = read_text(path.as_ref())?;
    parse_merged(&text)
}

/// Parse merged-format text.
///
/// The first unparsable number aborts the whole parse; no partial model is
/// returned.
pub fn parse_merged(text: &str) -> DecodeResult<MergedModel> {
    let mut faces = Vec::new();
    let mut verts1 = Vec::new();
    let mut verts2 = Vec::new();

    for (line_no, tag, values) in tagged_lines(text) {
        match tag {
            "f" => faces.push(parse_face(line_no, &values, |t| t)?),
            "v" => verts1.push(parse_point(line_no, &values)?),
            "u" => verts2.push(parse_point(line_no, &values)?),
            _ => {}
        }
    }

    Ok(MergedModel::from_parts(faces, verts1, verts2))
}

pub(crate) fn read_text(path: &Path) -> DecodeResult<String> {
    std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Yield `(line number, tag, value tokens)` for every line long enough to matter.
pub(crate) fn tagged_lines(text: &str) -> impl Iterator<Item = (usize, &str, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            return None;
        }
        Some((i + 1, tokens[0], tokens[1..].to_vec()))
    })
}

/// Parse coordinate tokens. Every token must be a float; the first three are kept.
pub(crate) fn parse_point(line: usize, tokens: &[&str]) -> DecodeResult<DVec3> {
    let mut coords = [0.0_f64; 3];
    for (i, &token) in tokens.iter().enumerate() {
        let value = token
            .parse::<f64>()
            .map_err(|source| DecodeError::InvalidFloat {
                line,
                token: token.to_string(),
                source,
            })?;
        if let Some(slot) = coords.get_mut(i) {
            *slot = value;
        }
    }
    Ok(DVec3::from_array(coords))
}

/// Parse 1-based face index tokens into a zero-based face.
///
/// `index_part` selects the index text within a token (OBJ faces carry
/// `v/vt/vn` triples).
pub(crate) fn parse_face(
    line: usize,
    tokens: &[&str],
    index_part: impl Fn(&str) -> &str,
) -> DecodeResult<Face> {
    tokens
        .iter()
        .map(|&token| {
            let index = index_part(token)
                .parse::<usize>()
                .map_err(|source| DecodeError::InvalidIndex {
                    line,
                    token: token.to_string(),
                    source,
                })?;
            index.checked_sub(1).ok_or(DecodeError::ZeroIndex { line })
        })
        .collect()
}
