use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one claim/report pair with its prediction
// ---------------------------------------------------------------------------

/// Label assigned when a claim is judged to match the ground report.
pub const LABEL_FULFILLED: &str = "Fulfilled";
/// Label assigned when a claim contradicts the ground report.
pub const LABEL_UNFULFILLED: &str = "Unfulfilled";
/// Label assigned when the classifier could not decide.
pub const LABEL_NEUTRAL: &str = "Neutral / Unclear";

/// One row of the predictions table: a policy claim paired with a ground
/// report, plus the classifier's verdict.
///
/// `predicted_label` is an open set: the three constants above are the values
/// the upstream classifier emits today, but the rest of the crate treats the
/// label as an uninterpreted string so new categories flow through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub claim_text: String,
    pub report_text: String,
    pub predicted_label: String,
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded predictions table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable after load; filtering produces index
/// views into `records`, never a mutated copy.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in source order.
    pub records: Vec<Record>,
    /// Distinct `predicted_label` values observed in the data, sorted.
    pub labels: BTreeSet<String>,
}

impl Dataset {
    /// Build the label index from the loaded rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let labels: BTreeSet<String> = records
            .iter()
            .map(|r| r.predicted_label.clone())
            .collect();
        Dataset { records, labels }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
