use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter criteria: label selection + confidence threshold
// ---------------------------------------------------------------------------

/// Canonical default for the confidence slider. The upstream dashboard
/// shipped with 0.3; below that the classifier's verdicts are mostly noise.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// User-adjustable filter over the loaded dataset.
///
/// Both predicates are conjunctive: a row is shown iff its label is in
/// `selected_labels` AND its confidence is at least `min_confidence`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Subset of the dataset's distinct labels. Empty set means show nothing.
    pub selected_labels: BTreeSet<String>,
    /// Threshold in [0.0, 1.0]; rows strictly below it are hidden.
    pub min_confidence: f64,
}

impl FilterCriteria {
    /// Default criteria for a freshly loaded dataset: every label selected,
    /// threshold at [`DEFAULT_MIN_CONFIDENCE`].
    pub fn for_dataset(dataset: &Dataset) -> Self {
        FilterCriteria {
            selected_labels: dataset.labels.clone(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Return indices of rows that pass the current criteria.
///
/// Pure function of its arguments; output order equals dataset order.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            criteria.selected_labels.contains(&r.predicted_label)
                && r.confidence >= criteria.min_confidence
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(claim: &str, report: &str, label: &str, confidence: f64) -> Record {
        Record {
            claim_text: claim.into(),
            report_text: report.into(),
            predicted_label: label.into(),
            confidence,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("c1", "r1", "Fulfilled", 0.9),
            record("c2", "r2", "Unfulfilled", 0.2),
            record("c3", "r3", "Fulfilled", 0.4),
        ])
    }

    fn labels(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn conjunctive_filter_keeps_only_matching_rows() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            selected_labels: labels(&["Fulfilled"]),
            min_confidence: 0.5,
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            selected_labels: labels(&["Fulfilled", "Unfulfilled"]),
            min_confidence: 0.4,
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 2]);
    }

    #[test]
    fn output_order_matches_dataset_order() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            selected_labels: labels(&["Fulfilled", "Unfulfilled"]),
            min_confidence: 0.0,
        };
        let indices = filtered_indices(&ds, &criteria);
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_label_selection_hides_everything() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            selected_labels: BTreeSet::new(),
            min_confidence: 0.0,
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn empty_dataset_yields_empty_view() {
        let ds = Dataset::from_records(Vec::new());
        let criteria = FilterCriteria {
            selected_labels: labels(&["Fulfilled"]),
            min_confidence: 0.0,
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            selected_labels: labels(&["Fulfilled"]),
            min_confidence: 0.3,
        };
        let first = filtered_indices(&ds, &criteria);
        let second = filtered_indices(&ds, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn default_criteria_selects_every_label() {
        let ds = sample_dataset();
        let criteria = FilterCriteria::for_dataset(&ds);
        assert_eq!(criteria.selected_labels, ds.labels);
        assert_eq!(criteria.min_confidence, DEFAULT_MIN_CONFIDENCE);
    }
}
