use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NdftError, Result};

use super::model::{SpectrumResult, TransformKind};

/// Where the spectrum of `kind` for `input` is written.
///
/// A 3-letter extension (`.txt`, `.dat`, …) is replaced by the kind's suffix,
/// anything else gets the suffix appended. With `output_dir` the file lands
/// there instead of next to the input.
pub fn output_path(input: &Path, kind: TransformKind, output_dir: Option<&Path>) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let has_short_ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.len() == 3)
        .unwrap_or(false);
    let stem = if has_short_ext {
        &name[..name.len() - 4]
    } else {
        name.as_str()
    };
    let file_name = format!("{stem}{}", kind.file_suffix());

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Write `w<TAB>value` lines, one per point, in grid order.
pub fn write_spectrum<W: Write>(out: W, spectrum: &SpectrumResult) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    for p in &spectrum.points {
        writer.write_record([p.frequency.to_string(), p.value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create `path` and write `spectrum` into it; a partial file is removed on failure.
pub fn save_spectrum(path: &Path, spectrum: &SpectrumResult) -> Result<()> {
    let file = File::create(path).map_err(|e| NdftError::io(path, e))?;
    if let Err(e) = write_spectrum(file, spectrum) {
        // don't leave a truncated spectrum behind
        let _ = std::fs::remove_file(path);
        return Err(NdftError::io(path, e.into()));
    }
    log::info!("Wrote {} points of {} to {}", spectrum.len(), spectrum.kind, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SpectrumPoint;

    #[test]
    fn replaces_three_letter_extension() {
        let p = Path::new("/data/run/threesines.txt");
        assert_eq!(
            output_path(p, TransformKind::Cosine, None),
            Path::new("/data/run/threesines_DCT.pef")
        );
        assert_eq!(
            output_path(p, TransformKind::Sine, None),
            Path::new("/data/run/threesines_DST.pef")
        );
    }

    #[test]
    fn appends_when_extension_is_not_three_letters() {
        assert_eq!(
            output_path(Path::new("sig.dat2"), TransformKind::Cosine, None),
            Path::new("sig.dat2_DCT.pef")
        );
        assert_eq!(
            output_path(Path::new("dir/signal"), TransformKind::Sine, None),
            Path::new("dir/signal_DST.pef")
        );
    }

    #[test]
    fn output_dir_overrides_parent() {
        assert_eq!(
            output_path(
                Path::new("/in/a.txt"),
                TransformKind::Cosine,
                Some(Path::new("/out"))
            ),
            Path::new("/out/a_DCT.pef")
        );
    }

    #[test]
    fn writes_tab_separated_lines_in_order() {
        let spectrum = SpectrumResult {
            kind: TransformKind::Cosine,
            points: vec![
                SpectrumPoint { frequency: 2.0, value: -0.5 },
                SpectrumPoint { frequency: 0.25, value: 1.125 },
            ],
        };
        let mut buf = Vec::new();
        write_spectrum(&mut buf, &spectrum).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\t-0.5\n0.25\t1.125\n");
    }

    #[test]
    fn save_into_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x_DCT.pef");
        let spectrum = SpectrumResult {
            kind: TransformKind::Cosine,
            points: vec![],
        };
        match save_spectrum(&path, &spectrum) {
            Err(NdftError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected {other:?}"),
        }
    }
}
