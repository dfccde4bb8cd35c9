use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

/// The file name the upstream classifier writes its predictions to. Loaded
/// automatically at startup when present in the working directory.
pub const DEFAULT_INPUT_FILE: &str = "pairs_with_predictions.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PolicyGapApp {
    pub state: AppState,
}

impl PolicyGapApp {
    pub fn new() -> Self {
        let mut state = AppState::default();
        let default_input = Path::new(DEFAULT_INPUT_FILE);
        if default_input.exists() {
            state.load_from_path(default_input);
        }
        Self { state }
    }
}

impl Default for PolicyGapApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for PolicyGapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, detail table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a predictions file to begin  (File → Open…)");
                });
                return;
            }

            panels::metrics_strip(ui, &self.state);
            ui.add_space(8.0);

            ui.columns(2, |columns: &mut [egui::Ui]| {
                plot::distribution_chart(&mut columns[0], &self.state);
                plot::confidence_chart(&mut columns[1], &self.state);
            });

            ui.add_space(8.0);
            ui.separator();

            table::detail_table(ui, &self.state);
        });
    }
}
