use std::collections::BTreeMap;

use super::model::{Dataset, LABEL_FULFILLED, LABEL_UNFULFILLED};

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Aggregate metrics over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Rows in the view.
    pub total: usize,
    /// Rows labelled exactly "Fulfilled" (case-sensitive).
    pub fulfilled: usize,
    /// Rows labelled exactly "Unfulfilled".
    pub unfulfilled: usize,
    /// Mean confidence over the view; 0.0 when the view is empty.
    pub avg_confidence: f64,
}

/// Compute headline metrics in a single pass over the view.
///
/// `indices` is a filtered view into `dataset` (see
/// [`super::filter::filtered_indices`]). Recomputed on every call; nothing is
/// cached, so the result is always consistent with the view passed in.
pub fn summarize(dataset: &Dataset, indices: &[usize]) -> Metrics {
    let mut metrics = Metrics {
        total: indices.len(),
        ..Metrics::default()
    };

    let mut confidence_sum = 0.0;
    for &i in indices {
        let record = &dataset.records[i];
        match record.predicted_label.as_str() {
            LABEL_FULFILLED => metrics.fulfilled += 1,
            LABEL_UNFULFILLED => metrics.unfulfilled += 1,
            _ => {}
        }
        confidence_sum += record.confidence;
    }

    if metrics.total > 0 {
        metrics.avg_confidence = confidence_sum / metrics.total as f64;
    }
    metrics
}

// ---------------------------------------------------------------------------
// Per-label aggregates for the charts
// ---------------------------------------------------------------------------

/// Row count per label in the view, sorted by label. Labels with no rows in
/// the view are omitted.
pub fn label_counts(dataset: &Dataset, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in indices {
        *counts
            .entry(dataset.records[i].predicted_label.as_str())
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect()
}

/// Five-number summary of confidence for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceSpread {
    pub label: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Per-label confidence spread over the view, sorted by label, for the box
/// plot. Labels with no rows in the view are omitted.
pub fn confidence_spread(dataset: &Dataset, indices: &[usize]) -> Vec<ConfidenceSpread> {
    let mut by_label: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for &i in indices {
        let record = &dataset.records[i];
        by_label
            .entry(record.predicted_label.as_str())
            .or_default()
            .push(record.confidence);
    }

    by_label
        .into_iter()
        .map(|(label, mut values)| {
            values.sort_by(f64::total_cmp);
            ConfidenceSpread {
                label: label.to_string(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect()
}

/// Linear-interpolation quantile over an already-sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let weight = position - lo as f64;
        sorted[lo] * (1.0 - weight) + sorted[hi] * weight
    }
}
