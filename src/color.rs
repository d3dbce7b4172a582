use eframe::egui::Color32;
use indexmap::IndexMap;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Series;

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
            let hue = (i as f32 / n as f32) * 360.0;
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
// Color mapping: thread → Color32
// ---------------------------------------------------------------------------

/// Assigns each thread a distinct colour, in series order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: IndexMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(series: &[Series]) -> Self {
        let palette = generate_palette(series.len());
        let mapping = series
            .iter()
            .zip(palette)
            .map(|(s, c)| (s.thread.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Look up the colour for a given thread.
    pub fn color_for(&self, thread: &str) -> Color32 {
        self.mapping
            .get(thread)
            .copied()
            .unwrap_or(self.default_color)
    }
}
