use std::collections::BTreeSet;
use std::path::Path;

use crate::config::RunConfig;
use crate::data::model::{SpectrumResult, TransformKind};
use crate::pipeline::{self, RunOutcome};

use super::color::ColorMap;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct ViewerState {
    /// Settings used when another input file is opened from the viewer.
    pub config: RunConfig,

    /// Latest successful run (None until a file has been transformed).
    pub outcome: Option<RunOutcome>,

    /// Spectra currently drawn.
    pub visible: BTreeSet<TransformKind>,

    pub color_map: ColorMap,

    /// Rescale each drawn spectrum to [0, 1].
    pub minmax_scaling: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            outcome: None,
            visible: TransformKind::ALL.into_iter().collect(),
            color_map: ColorMap::default(),
            minmax_scaling: false,
            status_message: None,
        }
    }

    pub fn set_outcome(&mut self, outcome: RunOutcome) {
        self.status_message = Some(format!(
            "{}: {} samples, {:.3}s",
            outcome.input.display(),
            outcome.samples,
            outcome.elapsed.as_secs_f64()
        ));
        self.outcome = Some(outcome);
    }

    /// Run the pipeline on `path`; on failure keep the previous outcome.
    pub fn load(&mut self, path: &Path) {
        match pipeline::run(path, &self.config) {
            Ok(outcome) => {
                log::info!("Transformed {} ({} samples)", path.display(), outcome.samples);
                self.set_outcome(outcome);
            }
            Err(e) => {
                log::error!("Failed to transform file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn toggle(&mut self, kind: TransformKind) {
        if !self.visible.remove(&kind) {
            self.visible.insert(kind);
        }
    }

    pub fn is_visible(&self, kind: TransformKind) -> bool {
        self.visible.contains(&kind)
    }

    /// Visible spectra with the values the plot should draw.
    pub fn plotted(&self) -> Vec<(TransformKind, Vec<[f64; 2]>)> {
        let Some(outcome) = &self.outcome else {
            return Vec::new();
        };
        TransformKind::ALL
            .into_iter()
            .filter(|k| self.is_visible(*k))
            .map(|k| (k, plot_points(outcome.spectrum(k), self.minmax_scaling)))
            .collect()
    }
}

fn plot_points(spectrum: &SpectrumResult, minmax: bool) -> Vec<[f64; 2]> {
    let values: Vec<f64> = if minmax {
        let min = spectrum.values().fold(f64::INFINITY, f64::min);
        let max = spectrum.values().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if range.abs() < f64::EPSILON {
            vec![0.0; spectrum.len()]
        } else {
            spectrum.values().map(|v| (v - min) / range).collect()
        }
    } else {
        spectrum.values().collect()
    };

    spectrum
        .points
        .iter()
        .zip(values)
        .map(|(p, v)| [p.frequency, v])
        .collect()
}
