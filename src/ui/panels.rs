use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{LABEL_FULFILLED, LABEL_UNFULFILLED};
use crate::data::summary::summarize;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the controls panel: label checkboxes and the confidence slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // Clone what we need so we can mutate state inside the loop.
    let (labels, total) = match &state.dataset {
        Some(ds) => (ds.labels.iter().cloned().collect::<Vec<_>>(), ds.len()),
        None => {
            ui.label("No predictions loaded.");
            return;
        }
    };

    ui.strong("Predicted label");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_labels();
        }
        if ui.small_button("None").clicked() {
            state.select_no_labels();
        }
    });

    for label in &labels {
        let mut checked = state.criteria.selected_labels.contains(label);

        let mut text = RichText::new(label);
        if let Some(colors) = &state.colors {
            text = text.color(colors.color_for(label));
        }

        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_label(label);
        }
    }

    ui.separator();

    ui.strong("Minimum confidence");
    let mut threshold = state.criteria.min_confidence;
    if ui
        .add(egui::Slider::new(&mut threshold, 0.0..=1.0).step_by(0.05))
        .changed()
    {
        state.set_min_confidence(threshold);
    }

    ui.separator();
    ui.label(format!(
        "{} of {total} pairs shown",
        state.visible_indices.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} claim/report pairs loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Metric boxes
// ---------------------------------------------------------------------------

/// Render the four headline metric boxes over the current filtered view.
pub fn metrics_strip(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let metrics = summarize(dataset, &state.visible_indices);

    let neutral = Color32::from_rgb(0x45, 0x4d, 0x5e);
    let fulfilled = label_color(state, LABEL_FULFILLED);
    let unfulfilled = label_color(state, LABEL_UNFULFILLED);

    ui.columns(4, |columns: &mut [Ui]| {
        metric_box(&mut columns[0], "Total", &metrics.total.to_string(), neutral);
        metric_box(
            &mut columns[1],
            "Fulfilled",
            &metrics.fulfilled.to_string(),
            fulfilled,
        );
        metric_box(
            &mut columns[2],
            "Unfulfilled",
            &metrics.unfulfilled.to_string(),
            unfulfilled,
        );
        metric_box(
            &mut columns[3],
            "Avg confidence",
            &format!("{:.2}", metrics.avg_confidence),
            neutral,
        );
    });
}

fn label_color(state: &AppState, label: &str) -> Color32 {
    state
        .colors
        .as_ref()
        .map(|c| c.color_for(label))
        .unwrap_or(Color32::GRAY)
}

fn metric_box(ui: &mut Ui, title: &str, value: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(title).color(Color32::WHITE));
                ui.label(
                    RichText::new(value)
                        .color(Color32::WHITE)
                        .strong()
                        .size(20.0),
                );
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open predictions file")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
