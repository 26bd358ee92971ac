use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::config::{GridSource, RunConfig};
use crate::data::loader::{load_grid, load_series};
use crate::data::model::{FrequencyGrid, SampleSeries, SpectrumResult, TransformKind};
use crate::data::writer::{output_path, save_spectrum};
use crate::transform;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub input: PathBuf,
    pub samples: usize,
    pub cosine: SpectrumResult,
    pub sine: SpectrumResult,
    pub written: Vec<PathBuf>,
    /// Transform plus output writing, as reported to the user.
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn spectrum(&self, kind: TransformKind) -> &SpectrumResult {
        match kind {
            TransformKind::Cosine => &self.cosine,
            TransformKind::Sine => &self.sine,
        }
    }
}

/// Resolve the frequency grid for `series` according to `source`.
pub fn frequency_grid(series: &SampleSeries, source: &GridSource) -> Result<FrequencyGrid> {
    match source {
        GridSource::Reciprocal => {
            FrequencyGrid::reciprocal(series).context("building reciprocal frequency grid")
        }
        GridSource::File(path) => load_grid(path)
            .with_context(|| format!("loading frequency grid {}", path.display())),
    }
}

/// Load `input`, transform it, and write both spectra.
///
/// Every validation step runs before the first output file is created, and a
/// failed write removes whatever this run already wrote.
pub fn run(input: &Path, config: &RunConfig) -> Result<RunOutcome> {
    let series =
        load_series(input).with_context(|| format!("loading samples {}", input.display()))?;
    let grid = frequency_grid(&series, &config.grid)?;
    log::info!(
        "Transforming {} samples at {} frequencies",
        series.len(),
        grid.len()
    );

    let start = Instant::now();
    let (cosine, sine) = transform::ndft(&grid, &series);

    let output_dir = config.output_dir.as_deref();
    let mut written = Vec::with_capacity(2);
    for spectrum in [&cosine, &sine] {
        let path = output_path(input, spectrum.kind, output_dir);
        if let Err(e) = save_spectrum(&path, spectrum) {
            remove_outputs(&written);
            return Err(anyhow::Error::new(e)
                .context(format!("writing {} spectrum", spectrum.kind)));
        }
        written.push(path);
    }
    let elapsed = start.elapsed();
    log::info!("nDFT of {} took {:.3}s", input.display(), elapsed.as_secs_f64());

    Ok(RunOutcome {
        input: input.to_path_buf(),
        samples: series.len(),
        cosine,
        sine,
        written,
        elapsed,
    })
}

/// Roll back outputs of a run that failed part way through writing.
fn remove_outputs(paths: &[PathBuf]) {
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => log::info!("Removed {} after failed run", path.display()),
            Err(e) => log::warn!("Could not remove {}: {e}", path.display()),
        }
    }
}
