use std::path::Path;

use crate::color::LabelColors;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::loader::load_file;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Current label selection and confidence threshold.
    pub criteria: FilterCriteria,

    /// Indices of rows passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Label → colour map for the current dataset.
    pub colors: Option<LabelColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise criteria and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.criteria = FilterCriteria::for_dataset(&dataset);
        self.visible_indices = filtered_indices(&dataset, &self.criteria);
        self.colors = Some(LabelColors::new(&dataset.labels));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Load a predictions file and install it, or surface the error in the
    /// status line. A failed load leaves any previously loaded dataset and
    /// its criteria untouched.
    pub fn load_from_path(&mut self, path: &Path) {
        self.loading = true;
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} claim/report pairs with labels {:?}",
                    dataset.len(),
                    dataset.labels
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
        }
    }

    /// Toggle a single label in the selection.
    pub fn toggle_label(&mut self, label: &str) {
        if self.criteria.selected_labels.contains(label) {
            self.criteria.selected_labels.remove(label);
        } else {
            self.criteria.selected_labels.insert(label.to_string());
        }
        self.refilter();
    }

    /// Select every label present in the dataset.
    pub fn select_all_labels(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.selected_labels = ds.labels.clone();
            self.refilter();
        }
    }

    /// Deselect every label (hides all rows).
    pub fn select_no_labels(&mut self) {
        self.criteria.selected_labels.clear();
        self.refilter();
    }

    /// Set the confidence threshold and refilter.
    pub fn set_min_confidence(&mut self, value: f64) {
        self.criteria.min_confidence = value;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::DEFAULT_MIN_CONFIDENCE;
    use crate::data::model::{Dataset, Record};

    fn record(label: &str, confidence: f64) -> Record {
        Record {
            claim_text: "claim".into(),
            report_text: "report".into(),
            predicted_label: label.into(),
            confidence,
        }
    }

    fn state_with_dataset() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(Dataset::from_records(vec![
            record("Fulfilled", 0.9),
            record("Unfulfilled", 0.2),
            record("Fulfilled", 0.4),
        ]));
        state
    }

    #[test]
    fn set_dataset_applies_default_criteria() {
        let state = state_with_dataset();
        assert_eq!(state.criteria.min_confidence, DEFAULT_MIN_CONFIDENCE);
        // 0.2 < default threshold, so only two rows are visible.
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn toggle_label_refilters() {
        let mut state = state_with_dataset();
        state.toggle_label("Fulfilled");
        assert!(state.visible_indices.is_empty());
        state.toggle_label("Fulfilled");
        assert_eq!(state.visible_indices, vec![0, 2]);
    }

    #[test]
    fn select_none_then_all_round_trips() {
        let mut state = state_with_dataset();
        state.select_no_labels();
        assert!(state.visible_indices.is_empty());
        state.select_all_labels();
        assert_eq!(state.visible_indices, vec![0, 2]);
    }

    #[test]
    fn threshold_change_refilters() {
        let mut state = state_with_dataset();
        state.set_min_confidence(0.0);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        state.set_min_confidence(0.95);
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn failed_load_keeps_existing_dataset() {
        let mut state = state_with_dataset();
        state.load_from_path(Path::new("/nonexistent/predictions.csv"));
        assert!(state.status_message.is_some());
        assert!(state.dataset.is_some());
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert!(!state.loading);
    }
}
