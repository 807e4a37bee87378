//! Filtering and inner joins of production and rainfall rows
//!
//! All joins are inner joins on (state, year) and preserve the order of the
//! production rows. A production row matching several rainfall rows yields
//! one joined row per match.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{ChartSeries, JoinedRecord, ProductionRecord, RainfallRecord};

/// Sorted, de-duplicated state names (case-sensitive, byte order)
pub fn distinct_states(records: &[ProductionRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.state.as_str()))
}

/// Sorted, de-duplicated crop names (case-sensitive, byte order)
pub fn distinct_crops(records: &[ProductionRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.crop.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Join one (state, crop) selection against the state's rainfall
///
/// Returns an empty vector when nothing matches; an unknown state or crop is
/// not an error.
pub fn filter_and_join(
    production: &[ProductionRecord],
    rainfall: &[RainfallRecord],
    state: &str,
    crop: &str,
) -> Vec<JoinedRecord> {
    let selected = production
        .iter()
        .filter(|r| r.state == state && r.crop == crop);
    let state_rain = rainfall.iter().filter(|r| r.state == state);

    let joined = inner_join(selected, state_rain);
    debug!(state, crop, rows = joined.len(), "Joined selection");
    joined
}

/// Join every production row against rainfall
pub fn join_all(production: &[ProductionRecord], rainfall: &[RainfallRecord]) -> Vec<JoinedRecord> {
    let joined = inner_join(production.iter(), rainfall.iter());
    debug!(rows = joined.len(), "Joined all records");
    joined
}

fn inner_join<'a>(
    production: impl Iterator<Item = &'a ProductionRecord>,
    rainfall: impl Iterator<Item = &'a RainfallRecord>,
) -> Vec<JoinedRecord> {
    let mut by_key: HashMap<(&str, i32), Vec<&RainfallRecord>> = HashMap::new();
    for rain in rainfall {
        by_key
            .entry((rain.state.as_str(), rain.year))
            .or_default()
            .push(rain);
    }

    let mut joined = Vec::new();
    for crop in production {
        if let Some(matches) = by_key.get(&(crop.state.as_str(), crop.year)) {
            joined.extend(matches.iter().map(|rain| JoinedRecord::new(crop, rain)));
        }
    }
    joined
}

/// Split joined rows into the parallel series a dual-axis chart plots
pub fn chart_series(joined: &[JoinedRecord]) -> ChartSeries {
    ChartSeries {
        years: joined.iter().map(|r| r.year).collect(),
        production: joined.iter().map(|r| r.production).collect(),
        rainfall_mm: joined.iter().map(|r| r.rainfall_mm).collect(),
    }
}
