//! Group-by aggregations behind the canned queries
//!
//! Groups come out sorted by key, the same order a sorted group-by produces.

use std::collections::BTreeMap;

use crate::models::{ExtremeMode, ProductionExtreme, ProductionRecord, RainfallMean, RainfallRecord};

/// Highest or lowest production for each (state, crop)
///
/// Only the extreme value is reported, not the row it came from, so ties need
/// no resolution.
pub fn aggregate_extreme(records: &[ProductionRecord], mode: ExtremeMode) -> Vec<ProductionExtreme> {
    let pick: fn(f64, f64) -> f64 = match mode {
        ExtremeMode::Max => f64::max,
        ExtremeMode::Min => f64::min,
    };

    let mut groups: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.state.as_str(), record.crop.as_str()))
            .and_modify(|current| *current = pick(*current, record.production))
            .or_insert(record.production);
    }

    groups
        .into_iter()
        .map(|((state, crop), production)| ProductionExtreme {
            state: state.to_string(),
            crop: crop.to_string(),
            production,
        })
        .collect()
}

/// Arithmetic mean rainfall for each state
pub fn aggregate_mean(records: &[RainfallRecord]) -> Vec<RainfallMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let (sum, count) = groups.entry(record.state.as_str()).or_insert((0.0, 0));
        *sum += record.rainfall_mm;
        *count += 1;
    }

    groups
        .into_iter()
        .map(|(state, (sum, count))| RainfallMean {
            state: state.to_string(),
            rainfall_mm: sum / count as f64,
        })
        .collect()
}
