use eframe::egui::{RichText, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Detail table (filtered view, dataset order)
// ---------------------------------------------------------------------------

/// Render the detailed results table for the current filtered view.
pub fn detail_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Detailed results");
    if state.visible_indices.is_empty() {
        ui.label("No pairs match the current filters.");
        return;
    }

    let row_height = TextStyle::Body.resolve(ui.style()).size + 8.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(180.0).clip(true))
        .column(Column::remainder().at_least(180.0).clip(true))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .header(24.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Claim");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Report");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Prediction");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Confidence");
            });
        })
        .body(|body| {
            body.rows(row_height, state.visible_indices.len(), |mut row| {
                let record = &dataset.records[state.visible_indices[row.index()]];

                row.col(|ui: &mut Ui| {
                    ui.label(&record.claim_text);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&record.report_text);
                });
                row.col(|ui: &mut Ui| {
                    let mut text = RichText::new(&record.predicted_label);
                    if let Some(colors) = &state.colors {
                        text = text.color(colors.color_for(&record.predicted_label));
                    }
                    ui.label(text);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", record.confidence));
                });
            });
        });
}
