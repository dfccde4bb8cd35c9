use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{LABEL_FULFILLED, LABEL_NEUTRAL, LABEL_UNFULFILLED};

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

/// The three labels the upstream classifier emits keep their traditional
/// dashboard colours; anything else falls back to the generated palette.
fn fixed_color(label: &str) -> Option<Color32> {
    match label {
        LABEL_FULFILLED => Some(Color32::from_rgb(0x2c, 0xa0, 0x2c)),
        LABEL_UNFULFILLED => Some(Color32::from_rgb(0xd6, 0x27, 0x28)),
        LABEL_NEUTRAL => Some(Color32::from_rgb(0xff, 0x7f, 0x0e)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Color mapping: predicted label → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct predicted label to a colour, shared by the metric
/// boxes, charts, and filter checkboxes.
#[derive(Debug, Clone)]
pub struct LabelColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl LabelColors {
    /// Build the map from the dataset's distinct labels.
    pub fn new(labels: &BTreeSet<String>) -> Self {
        let unknown: Vec<&String> = labels
            .iter()
            .filter(|l| fixed_color(l).is_none())
            .collect();
        let palette = generate_palette(unknown.len());

        let mut mapping = BTreeMap::new();
        for label in labels {
            if let Some(c) = fixed_color(label) {
                mapping.insert(label.clone(), c);
            }
        }
        for (label, color) in unknown.into_iter().zip(palette) {
            mapping.insert(label.clone(), color);
        }

        LabelColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn well_known_labels_keep_fixed_colors() {
        let colors = LabelColors::new(&labels(&[LABEL_FULFILLED, LABEL_UNFULFILLED]));
        assert_eq!(
            colors.color_for(LABEL_FULFILLED),
            Color32::from_rgb(0x2c, 0xa0, 0x2c)
        );
        assert_eq!(
            colors.color_for(LABEL_UNFULFILLED),
            Color32::from_rgb(0xd6, 0x27, 0x28)
        );
    }

    #[test]
    fn unknown_labels_get_distinct_palette_colors() {
        let colors = LabelColors::new(&labels(&["Alpha", "Beta"]));
        let a = colors.color_for("Alpha");
        let b = colors.color_for("Beta");
        assert_ne!(a, b);
        assert_ne!(a, Color32::GRAY);
    }

    #[test]
    fn unmapped_label_falls_back_to_gray() {
        let colors = LabelColors::new(&labels(&[LABEL_FULFILLED]));
        assert_eq!(colors.color_for("never seen"), Color32::GRAY);
    }

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }
}
