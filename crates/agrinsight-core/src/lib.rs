//! AgriInsight Core Library
//!
//! Data join and insight engine for crop production and rainfall data:
//! - CSV loaders with required-column validation
//! - Read-through dataset cache with manual invalidation
//! - Inner join of production and rainfall on (state, year)
//! - Pearson correlation and insight classification
//! - Group-by aggregations and the canned query dispatcher
//! - Joined-record CSV export
//! - Bilingual string table and application config
//!
//! Every operation is a plain function over in-memory relations; front ends
//! call into it once per user action.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod insights;
pub mod join;
pub mod locale;
pub mod models;
pub mod query;
pub mod stats;

/// Fixture datasets for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{aggregate_extreme, aggregate_mean};
pub use cache::{DatasetCache, DatasetKey};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use export::{export_file_name, export_joined_csv, read_joined_csv, write_joined_csv};
pub use import::load;
pub use insights::{analyze_selection, classify_insight, Insight, SelectionAnalysis};
pub use join::{chart_series, distinct_crops, distinct_states, filter_and_join, join_all};
pub use locale::{Locale, MessageKey, StringTable};
pub use models::{
    ChartSeries, Dataset, ExtremeMode, JoinedField, JoinedRecord, ProductionExtreme,
    ProductionRecord, RainfallMean, RainfallRecord,
};
pub use query::{answer_query, classify_query, QueryIntent, QueryResult};
pub use stats::correlation;
