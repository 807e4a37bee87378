//! Core types for the insight classifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{ChartSeries, JoinedRecord};

/// Correlation above this is a strong positive effect (strict)
pub const STRONG_POSITIVE_THRESHOLD: f64 = 0.5;

/// Correlation below this is a strong negative effect (strict)
pub const STRONG_NEGATIVE_THRESHOLD: f64 = -0.5;

/// How rainfall relates to production for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    /// More rainfall went with more production
    StronglyPositive,
    /// More rainfall went with less production
    StronglyNegative,
    /// Rainfall had little linear effect
    Weak,
}

impl Insight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Insight::StronglyPositive => "strongly_positive",
            Insight::StronglyNegative => "strongly_negative",
            Insight::Weak => "weak",
        }
    }

    pub fn all() -> &'static [Insight] {
        &[
            Insight::StronglyPositive,
            Insight::StronglyNegative,
            Insight::Weak,
        ]
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Insight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strongly_positive" => Ok(Insight::StronglyPositive),
            "strongly_negative" => Ok(Insight::StronglyNegative),
            "weak" => Ok(Insight::Weak),
            _ => Err(format!("Unknown insight: {}", s)),
        }
    }
}

/// Everything one (state, crop) selection needs for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionAnalysis {
    pub state: String,
    pub crop: String,
    /// Joined rows; empty when the selection has no overlapping years
    pub joined: Vec<JoinedRecord>,
    pub series: ChartSeries,
    /// Production vs rainfall; `None` when undefined
    pub correlation: Option<f64>,
    /// Present only when `correlation` is defined
    pub insight: Option<Insight>,
}

impl SelectionAnalysis {
    /// True when the selection matched no rows
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }
}
