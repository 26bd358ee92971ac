use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::TransformKind;

use super::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – spectrum toggles and legend
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Spectra");
    ui.separator();

    let Some(outcome) = &state.outcome else {
        ui.label("No input transformed.");
        return;
    };
    let lengths: Vec<(TransformKind, usize)> = TransformKind::ALL
        .into_iter()
        .map(|k| (k, outcome.spectrum(k).len()))
        .collect();
    let written = outcome.written.clone();

    for (kind, len) in lengths {
        let text = RichText::new(format!("{kind}  ({len} points)"))
            .color(state.color_map.color_for(kind));
        let mut checked = state.is_visible(kind);
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle(kind);
        }
    }

    ui.separator();
    ui.strong("Written");
    for path in &written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(name).on_hover_text(path.display().to_string());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                ui.close_menu();
                if let Some(path) = pick_input_file() {
                    state.load(&path);
                }
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.minmax_scaling, "Min-Max Scaling")
            .clicked()
        {
            state.minmax_scaling = !state.minmax_scaling;
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for a two-column input file.
pub fn pick_input_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open t<TAB>f(t) data")
        .add_filter("SF", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file()
}
