use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot};

use crate::data::summary::{confidence_spread, label_counts};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Prediction distribution (bar chart)
// ---------------------------------------------------------------------------

/// Row count per predicted label over the current filtered view.
pub fn distribution_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let counts = label_counts(dataset, &state.visible_indices);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, n))| {
            Bar::new(i as f64, *n as f64)
                .width(0.6)
                .name(label)
                .fill(color_for(state, label))
        })
        .collect();

    ui.strong("Prediction distribution");
    let axis_labels: Vec<String> = counts.into_iter().map(|(label, _)| label).collect();
    Plot::new("label_distribution")
        .height(CHART_HEIGHT)
        .y_axis_label("Pairs")
        .x_axis_formatter(move |mark, _range| {
            // Only label integer grid positions that map to a bar.
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            axis_labels
                .get(i as usize)
                .cloned()
                .unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Confidence analysis (box plot)
// ---------------------------------------------------------------------------

/// Confidence spread per predicted label over the current filtered view.
pub fn confidence_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let spreads = confidence_spread(dataset, &state.visible_indices);

    let boxes: Vec<BoxElem> = spreads
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = color_for(state, &s.label);
            BoxElem::new(i as f64, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
                .box_width(0.5)
                .name(&s.label)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color))
        })
        .collect();

    ui.strong("Confidence analysis");
    let axis_labels: Vec<String> = spreads.into_iter().map(|s| s.label).collect();
    Plot::new("confidence_analysis")
        .height(CHART_HEIGHT)
        .y_axis_label("Confidence")
        .include_y(0.0)
        .include_y(1.0)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            axis_labels
                .get(i as usize)
                .cloned()
                .unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
        });
}

fn color_for(state: &AppState, label: &str) -> Color32 {
    state
        .colors
        .as_ref()
        .map(|c| c.color_for(label))
        .unwrap_or(Color32::LIGHT_BLUE)
}
