use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::state::ViewerState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

pub fn spectrum_plot(ui: &mut Ui, state: &ViewerState) {
    if state.outcome.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a t<TAB>f(t) file to transform it  (File → Open…)");
        });
        return;
    }

    let y_label = if state.minmax_scaling {
        "g(ω), min-max scaled"
    } else {
        "g(ω)"
    };

    Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label("ω")
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (kind, points) in state.plotted() {
                let line = Line::new(PlotPoints::from(points))
                    .name(kind.to_string())
                    .color(state.color_map.color_for(kind))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}
