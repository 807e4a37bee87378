//! Insight classification and per-selection analysis

use crate::join::{chart_series, filter_and_join};
use crate::models::{Dataset, JoinedField};
use crate::stats::correlation;

use super::types::{Insight, SelectionAnalysis, STRONG_NEGATIVE_THRESHOLD, STRONG_POSITIVE_THRESHOLD};

/// Map a defined correlation onto an insight category
///
/// Both thresholds are strict, so exactly 0.5 and -0.5 are [`Insight::Weak`].
/// Callers branch on an undefined correlation before classifying.
pub fn classify_insight(correlation: f64) -> Insight {
    if correlation > STRONG_POSITIVE_THRESHOLD {
        Insight::StronglyPositive
    } else if correlation < STRONG_NEGATIVE_THRESHOLD {
        Insight::StronglyNegative
    } else {
        Insight::Weak
    }
}

/// Join, correlate and classify one (state, crop) selection
pub fn analyze_selection(dataset: &Dataset, state: &str, crop: &str) -> SelectionAnalysis {
    let joined = filter_and_join(&dataset.production, &dataset.rainfall, state, crop);
    let series = chart_series(&joined);

    let correlation = if joined.is_empty() {
        None
    } else {
        correlation(&joined, JoinedField::Production, JoinedField::Rainfall)
    };
    let insight = correlation.map(classify_insight);

    tracing::debug!(
        state,
        crop,
        rows = joined.len(),
        correlation = ?correlation,
        insight = ?insight,
        "Selection analyzed"
    );

    SelectionAnalysis {
        state: state.to_string(),
        crop: crop.to_string(),
        joined,
        series,
        correlation,
        insight,
    }
}
