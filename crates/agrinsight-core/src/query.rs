//! Canned query dispatcher
//!
//! Free text is lower-cased and checked against a fixed table of trigger
//! phrases (English and Hindi). Intents are tried in declared priority order
//! and the first one with any matching phrase wins; there is no scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::aggregate::{aggregate_extreme, aggregate_mean};
use crate::join::join_all;
use crate::models::{ExtremeMode, JoinedField, ProductionExtreme, ProductionRecord, RainfallMean, RainfallRecord};
use crate::stats::correlation;

/// Query handlers, in dispatch priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    HighestProduction,
    LowestProduction,
    AverageRainfall,
    Correlation,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighestProduction => "highest_production",
            Self::LowestProduction => "lowest_production",
            Self::AverageRainfall => "average_rainfall",
            Self::Correlation => "correlation",
        }
    }

    /// All intents, highest priority first
    pub fn all() -> &'static [QueryIntent] {
        &[
            Self::HighestProduction,
            Self::LowestProduction,
            Self::AverageRainfall,
            Self::Correlation,
        ]
    }

    /// Lower-case trigger phrases for this intent
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::HighestProduction => &["highest production", "सबसे अधिक उत्पादन"],
            Self::LowestProduction => &["lowest production", "सबसे कम उत्पादन"],
            Self::AverageRainfall => &["average rainfall", "औसत वर्षा"],
            Self::Correlation => &["correlation", "संबंध"],
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a free-text query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum QueryResult {
    HighestProduction(Vec<ProductionExtreme>),
    LowestProduction(Vec<ProductionExtreme>),
    AverageRainfall(Vec<RainfallMean>),
    /// Production vs rainfall over every joined row; `None` when undefined
    Correlation(Option<f64>),
    /// No trigger phrase matched; the caller shows a help hint
    Unrecognized,
}

impl QueryResult {
    pub fn intent(&self) -> Option<QueryIntent> {
        match self {
            Self::HighestProduction(_) => Some(QueryIntent::HighestProduction),
            Self::LowestProduction(_) => Some(QueryIntent::LowestProduction),
            Self::AverageRainfall(_) => Some(QueryIntent::AverageRainfall),
            Self::Correlation(_) => Some(QueryIntent::Correlation),
            Self::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// First intent whose trigger phrase occurs anywhere in `text`
pub fn classify_query(text: &str) -> Option<QueryIntent> {
    let text = text.to_lowercase();
    QueryIntent::all()
        .iter()
        .copied()
        .find(|intent| intent.triggers().iter().any(|t| text.contains(t)))
}

/// Answer a free-text question against the loaded relations
pub fn answer_query(
    text: &str,
    production: &[ProductionRecord],
    rainfall: &[RainfallRecord],
) -> QueryResult {
    let Some(intent) = classify_query(text) else {
        debug!(query = text, "Query not recognized");
        return QueryResult::Unrecognized;
    };

    debug!(query = text, intent = intent.as_str(), "Dispatching query");

    match intent {
        QueryIntent::HighestProduction => {
            QueryResult::HighestProduction(aggregate_extreme(production, ExtremeMode::Max))
        }
        QueryIntent::LowestProduction => {
            QueryResult::LowestProduction(aggregate_extreme(production, ExtremeMode::Min))
        }
        QueryIntent::AverageRainfall => QueryResult::AverageRainfall(aggregate_mean(rainfall)),
        QueryIntent::Correlation => {
            let joined = join_all(production, rainfall);
            QueryResult::Correlation(correlation(
                &joined,
                JoinedField::Production,
                JoinedField::Rainfall,
            ))
        }
    }
}
