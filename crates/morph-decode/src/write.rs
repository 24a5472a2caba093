//! Merged format writing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::MergedModel;
use crate::error::{DecodeError, DecodeResult};
use crate::parse::MIN_TOKENS;

/// Fewest indices a face needs for its `f` line to be read back.
pub const MIN_FACE_INDICES: usize = MIN_TOKENS - 1;

/// Write `model` in the merged format.
///
/// Start vertices (`v`) come first, then end vertices (`u`), then faces (`f`)
/// with 1-based indices. The output parses back to an equal model.
///
/// Faces with fewer than [`MIN_FACE_INDICES`] indices would be skipped on
/// reload, so they are rejected with [`DecodeError::ShortFace`] before
/// anything is written.
pub fn write_merged<W: Write>(model: &MergedModel, writer: W) -> DecodeResult<()> {
    check_faces(model)?;
    write_lines(model, writer).map_err(DecodeError::Write)
}

fn check_faces(model: &MergedModel) -> DecodeResult<()> {
    if let Some((face, indices)) = model
        .faces()
        .iter()
        .enumerate()
        .find(|(_, indices)| indices.len() < MIN_FACE_INDICES)
    {
        return Err(DecodeError::ShortFace {
            face,
            len: indices.len(),
        });
    }
    Ok(())
}

fn write_lines<W: Write>(model: &MergedModel, mut writer: W) -> io::Result<()> {
    for v in model.verts1() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for u in model.verts2() {
        writeln!(writer, "u {} {} {}", u.x, u.y, u.z)?;
    }
    for face in model.faces() {
        write!(writer, "f")?;
        for index in face {
            write!(writer, " {}", index + 1)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

pub(crate) fn save_merged(model: &MergedModel, path: &Path) -> DecodeResult<()> {
    let io_err = |source: io::Error| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    };
    check_faces(model)?;
    let file = File::create(path).map_err(io_err)?;
    match write_merged(model, BufWriter::new(file)) {
        Err(DecodeError::Write(source)) => Err(io_err(source)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::parse_merged;

    #[test]
    fn test_write_layout() {
        let model = MergedModel::from_parts(
            vec![vec![0, 1, 2]],
            vec![DVec3::new(0.0, 0.5, -1.0)],
            vec![DVec3::new(2.0, 3.25, 4.0)],
        );
        let mut out = Vec::new();
        write_merged(&model, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "v 0 0.5 -1\nu 2 3.25 4\nf 1 2 3\n"
        );
    }

    #[test]
    fn test_written_text_parses_back() {
        let model = MergedModel::from_parts(
            vec![vec![0, 1, 2], vec![2, 3, 0, 1]],
            vec![
                DVec3::new(0.1, 0.2, 0.3),
                DVec3::new(-1.0, 1e-7, 12345.678),
                DVec3::ZERO,
                DVec3::ONE,
            ],
            vec![
                DVec3::new(1.0 / 3.0, 2.0, 3.0),
                DVec3::NEG_ONE,
                DVec3::X,
                DVec3::Y,
            ],
        );
        let mut out = Vec::new();
        write_merged(&model, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(parse_merged(&text).unwrap(), model);
    }

    #[test]
    fn test_three_index_face_round_trips() {
        let model = MergedModel::from_parts(
            vec![vec![0, 1, 0]],
            vec![DVec3::ZERO, DVec3::X],
            vec![DVec3::Z, DVec3::Y],
        );
        let mut out = Vec::new();
        write_merged(&model, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(parse_merged(&text).unwrap(), model);
    }

    #[test]
    fn test_short_face_is_rejected() {
        let model = MergedModel::from_parts(
            vec![vec![0, 1, 2], vec![0, 1]],
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        );
        let mut out = Vec::new();
        let err = write_merged(&model, &mut out).unwrap_err();
        assert!(matches!(err, DecodeError::ShortFace { face: 1, len: 2 }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_save_rejects_short_face() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("short.obj");
        let model = MergedModel::from_parts(vec![Vec::new()], Vec::new(), Vec::new());

        let err = model.save(&path).unwrap_err();
        assert!(matches!(err, DecodeError::ShortFace { face: 0, len: 0 }));
        assert!(!path.exists());
    }
}
