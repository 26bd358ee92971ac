use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{NdftError, Result};

use super::model::{FrequencyGrid, Sample, SampleSeries};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a two-column `t<TAB>f(t)` file into a validated series.
pub fn load_series(path: &Path) -> Result<SampleSeries> {
    let file = File::open(path).map_err(|e| NdftError::io(path, e))?;
    read_series(file, path)
}

/// Load an explicit frequency grid: one value per line (first column used).
pub fn load_grid(path: &Path) -> Result<FrequencyGrid> {
    let file = File::open(path).map_err(|e| NdftError::io(path, e))?;
    read_grid(file, path)
}

/// Parse a series from any reader. `origin` is only used in I/O errors.
pub fn read_series<R: Read>(reader: R, origin: &Path) -> Result<SampleSeries> {
    let rows = read_columns(reader, origin, 2)?;
    let samples = rows.into_iter().map(|row| Sample::new(row[0], row[1])).collect();
    let series = SampleSeries::new(samples)?;
    log::info!("Read {} samples from {}", series.len(), origin.display());
    Ok(series)
}

pub fn read_grid<R: Read>(reader: R, origin: &Path) -> Result<FrequencyGrid> {
    let rows = read_columns(reader, origin, 1)?;
    FrequencyGrid::new(rows.into_iter().map(|row| row[0]).collect())
}

// ---------------------------------------------------------------------------
// Tab-separated numeric columns
// ---------------------------------------------------------------------------

/// Layout: no header, tab-delimited, every line is data.
/// Each line must carry at least `columns` numeric fields; further fields are
/// ignored. Empty lines are skipped by the csv reader.
fn read_columns<R: Read>(reader: R, origin: &Path, columns: usize) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut extra_columns = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(origin, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < columns {
            return Err(NdftError::MalformedInput {
                line,
                reason: format!(
                    "expected {columns} tab-separated fields, found {}",
                    record.len()
                ),
            });
        }
        if record.len() > columns {
            extra_columns += 1;
        }

        let row = record
            .iter()
            .take(columns)
            .enumerate()
            .map(|(col, field)| parse_field(field, line, col))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if extra_columns > 0 {
        log::warn!(
            "{}: ignored fields beyond column {columns} on {extra_columns} line(s)",
            origin.display()
        );
    }
    Ok(rows)
}

fn parse_field(field: &str, line: u64, col: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| NdftError::MalformedInput {
        line,
        reason: format!("column {}: '{field}' is not a number", col + 1),
    })?;
    if !value.is_finite() {
        return Err(NdftError::MalformedInput {
            line,
            reason: format!("column {}: '{field}' is not finite", col + 1),
        });
    }
    Ok(value)
}

fn csv_error(origin: &Path, err: csv::Error) -> NdftError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => NdftError::io(origin, e),
        _ => NdftError::MalformedInput { line, reason },
    }
}
