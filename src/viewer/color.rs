use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::TransformKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0 + 200.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: transform kind → Color32
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<TransformKind, Color32>,
}

impl Default for ColorMap {
    fn default() -> Self {
        let mapping = TransformKind::ALL
            .into_iter()
            .zip(generate_palette(TransformKind::ALL.len()))
            .collect();
        ColorMap { mapping }
    }
}

impl ColorMap {
    pub fn color_for(&self, kind: TransformKind) -> Color32 {
        self.mapping.get(&kind).copied().unwrap_or(Color32::GRAY)
    }
}
