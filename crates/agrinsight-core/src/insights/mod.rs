//! Insight Engine - rainfall/production insight classification
//!
//! A selection's Pearson correlation between production and rainfall is
//! classified into one of three categories, and that category (not the raw
//! coefficient) picks the sentence shown to the user.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agrinsight_core::insights::analyze_selection;
//!
//! let analysis = analyze_selection(&dataset, "Punjab", "Wheat");
//! match analysis.insight {
//!     Some(insight) => println!("{}", strings.insight_sentence(locale, insight, "Punjab", "Wheat")),
//!     None => println!("no data"),
//! }
//! ```

pub mod engine;
pub mod types;

pub use engine::{analyze_selection, classify_insight};
pub use types::{Insight, SelectionAnalysis, STRONG_NEGATIVE_THRESHOLD, STRONG_POSITIVE_THRESHOLD};
