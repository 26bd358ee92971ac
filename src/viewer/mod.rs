/// Spectrum viewer: plots the nDCT / nDST of the last run and can
/// transform further files picked from the File menu.
mod app;
mod color;
mod panels;
mod plot;
mod state;

pub use panels::pick_input_file;

use eframe::egui;

use crate::config::RunConfig;
use crate::pipeline::RunOutcome;

use app::NdftViewerApp;
use state::ViewerState;

/// Open the viewer window, blocking until it is closed.
pub fn run(config: RunConfig, outcome: Option<RunOutcome>) -> anyhow::Result<()> {
    let mut state = ViewerState::new(config);
    if let Some(outcome) = outcome {
        state.set_outcome(outcome);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "nDFT – Spectrum Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(NdftViewerApp { state }))),
    )
    .map_err(|e| anyhow::anyhow!("spectrum viewer: {e}"))
}
