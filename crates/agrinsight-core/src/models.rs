//! Domain models for AgriInsight

use serde::{Deserialize, Serialize};

/// Column header for the rainfall measurement, shared by the rainfall input
/// and the joined export
pub const RAINFALL_COLUMN: &str = "Rainfall (mm)";

/// One row of `crop_production.csv`
///
/// Expected to be unique on (state, crop, year). This is not enforced; a
/// duplicated key produces duplicated joined rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Production in tonnes
    #[serde(rename = "Production")]
    pub production: f64,
}

/// One row of `rainfall_data.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Rainfall (mm)")]
    pub rainfall_mm: f64,
}

/// A production row joined with the rainfall row for the same (state, year)
///
/// Field order matches the exported CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Production")]
    pub production: f64,
    #[serde(rename = "Rainfall (mm)")]
    pub rainfall_mm: f64,
}

impl JoinedRecord {
    pub fn new(production: &ProductionRecord, rainfall: &RainfallRecord) -> Self {
        Self {
            state: production.state.clone(),
            crop: production.crop.clone(),
            year: production.year,
            production: production.production,
            rainfall_mm: rainfall.rainfall_mm,
        }
    }
}

/// The two base relations, loaded together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub production: Vec<ProductionRecord>,
    pub rainfall: Vec<RainfallRecord>,
}

impl Dataset {
    pub fn new(production: Vec<ProductionRecord>, rainfall: Vec<RainfallRecord>) -> Self {
        Self {
            production,
            rainfall,
        }
    }
}

/// Numeric fields of a joined record that can be correlated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinedField {
    Year,
    Production,
    Rainfall,
}

impl JoinedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Production => "Production",
            Self::Rainfall => RAINFALL_COLUMN,
        }
    }

    /// Read this field from a joined record
    pub fn value(&self, record: &JoinedRecord) -> f64 {
        match self {
            Self::Year => f64::from(record.year),
            Self::Production => record.production,
            Self::Rainfall => record.rainfall_mm,
        }
    }
}

impl std::fmt::Display for JoinedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which extreme to keep when reducing a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremeMode {
    Max,
    Min,
}

impl ExtremeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

/// Highest or lowest production for one (state, crop) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionExtreme {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Production")]
    pub production: f64,
}

/// Mean rainfall for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallMean {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Rainfall (mm)")]
    pub rainfall_mm: f64,
}

/// Dual-axis time series for a (state, crop) selection
///
/// `years`, `production` and `rainfall_mm` are parallel vectors in join order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub years: Vec<i32>,
    pub production: Vec<f64>,
    pub rainfall_mm: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
