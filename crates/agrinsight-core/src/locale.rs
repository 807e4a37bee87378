//! Bilingual string table
//!
//! User-facing text lives in a TOML table keyed by locale and message key,
//! kept apart from the engine so any front end can render results in either
//! language.
//!
//! ## Resolution
//!
//! 1. Explicit path, if given and present
//! 2. Override in data dir (~/.local/share/agrinsight/strings.toml)
//! 3. Embedded defaults (compiled into binary)

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insights::Insight;
use crate::query::QueryIntent;

/// Embedded default strings (compiled into binary)
const DEFAULT_STRINGS: &str = include_str!("../../../config/strings.toml");

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Locale {
    /// Table name in the strings file
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Self::English, Self::Hindi]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "hi" | "hindi" | "हिन्दी" | "हिंदी" => Ok(Self::Hindi),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Every user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    Tagline,
    Caption,
    SelectState,
    SelectCrop,
    ChartTitle,
    AxisYear,
    AxisProduction,
    AxisRainfall,
    CorrelationText,
    CorrelationUndefined,
    InsightPositive,
    InsightNegative,
    InsightWeak,
    NoData,
    DownloadLabel,
    ExportWritten,
    ViewDataset,
    QueryHeader,
    QueryPlaceholder,
    QueryHelp,
    HighestProductionHeader,
    LowestProductionHeader,
    AverageRainfallHeader,
    OverallCorrelation,
    OverallCorrelationUndefined,
    SourcesHeader,
    SourcesBody,
}

impl MessageKey {
    /// Key in the strings file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppTitle => "app_title",
            Self::Tagline => "tagline",
            Self::Caption => "caption",
            Self::SelectState => "select_state",
            Self::SelectCrop => "select_crop",
            Self::ChartTitle => "chart_title",
            Self::AxisYear => "axis_year",
            Self::AxisProduction => "axis_production",
            Self::AxisRainfall => "axis_rainfall",
            Self::CorrelationText => "correlation_text",
            Self::CorrelationUndefined => "correlation_undefined",
            Self::InsightPositive => "insight_positive",
            Self::InsightNegative => "insight_negative",
            Self::InsightWeak => "insight_weak",
            Self::NoData => "no_data",
            Self::DownloadLabel => "download_label",
            Self::ExportWritten => "export_written",
            Self::ViewDataset => "view_dataset",
            Self::QueryHeader => "query_header",
            Self::QueryPlaceholder => "query_placeholder",
            Self::QueryHelp => "query_help",
            Self::HighestProductionHeader => "highest_production_header",
            Self::LowestProductionHeader => "lowest_production_header",
            Self::AverageRainfallHeader => "average_rainfall_header",
            Self::OverallCorrelation => "overall_correlation",
            Self::OverallCorrelationUndefined => "overall_correlation_undefined",
            Self::SourcesHeader => "sources_header",
            Self::SourcesBody => "sources_body",
        }
    }

    pub fn all() -> &'static [MessageKey] {
        &[
            Self::AppTitle,
            Self::Tagline,
            Self::Caption,
            Self::SelectState,
            Self::SelectCrop,
            Self::ChartTitle,
            Self::AxisYear,
            Self::AxisProduction,
            Self::AxisRainfall,
            Self::CorrelationText,
            Self::CorrelationUndefined,
            Self::InsightPositive,
            Self::InsightNegative,
            Self::InsightWeak,
            Self::NoData,
            Self::DownloadLabel,
            Self::ExportWritten,
            Self::ViewDataset,
            Self::QueryHeader,
            Self::QueryPlaceholder,
            Self::QueryHelp,
            Self::HighestProductionHeader,
            Self::LowestProductionHeader,
            Self::AverageRainfallHeader,
            Self::OverallCorrelation,
            Self::OverallCorrelationUndefined,
            Self::SourcesHeader,
            Self::SourcesBody,
        ]
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown message key: {}", s))
    }
}

/// Message templates for every locale
#[derive(Debug, Clone)]
pub struct StringTable {
    messages: HashMap<Locale, HashMap<MessageKey, String>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::embedded()
    }
}

impl StringTable {
    /// The table compiled into the binary
    pub fn embedded() -> Self {
        Self::parse(DEFAULT_STRINGS).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Embedded string table is invalid");
            Self {
                messages: HashMap::new(),
            }
        })
    }

    /// Load with override resolution (explicit path, then data dir, then embedded)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        Self::resolve(override_path, default_strings_path().as_deref())
    }

    fn resolve(explicit: Option<&Path>, data_dir_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if path.exists() {
                return Self::read(path);
            }
            tracing::warn!(path = %path.display(), "String table not found, trying defaults");
        }

        match data_dir_file {
            Some(path) if path.exists() => Self::read(path),
            _ => Self::parse(DEFAULT_STRINGS),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "Loaded string table override");
        Self::parse(&content)
    }

    /// Parse a strings file; every locale must define every key
    pub fn parse(content: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, String>> = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid strings TOML: {}", e)))?;

        let mut messages = HashMap::new();
        for locale in Locale::all() {
            let table = raw.get(locale.code()).ok_or_else(|| {
                Error::Config(format!("Missing [{}] table in strings file", locale.code()))
            })?;

            let mut entries = HashMap::new();
            for key in MessageKey::all() {
                let text = table.get(key.as_str()).ok_or_else(|| {
                    Error::Config(format!(
                        "Missing key '{}' in [{}] table",
                        key.as_str(),
                        locale.code()
                    ))
                })?;
                entries.insert(*key, text.clone());
            }

            for extra in table.keys().filter(|k| k.parse::<MessageKey>().is_err()) {
                tracing::warn!(locale = locale.code(), key = %extra, "Ignoring unknown message key");
            }

            messages.insert(*locale, entries);
        }

        Ok(Self { messages })
    }

    /// Raw template for a message; falls back to the key name if absent
    pub fn get(&self, locale: Locale, key: MessageKey) -> &str {
        self.messages
            .get(&locale)
            .and_then(|m| m.get(&key))
            .map(String::as_str)
            .unwrap_or_else(|| key.as_str())
    }

    /// Template with `{name}` placeholders substituted
    ///
    /// Substituted values are never rescanned, and unknown placeholders are
    /// left as written.
    pub fn render(&self, locale: Locale, key: MessageKey, args: &[(&str, &str)]) -> String {
        let template = self.get(locale, key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after.find('}').and_then(|close| {
                let name = &after[..close];
                args.iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, value)| (*value, close))
            });
            match value {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Correlation line for a selection, or the "cannot be computed" line
    pub fn correlation_text(&self, locale: Locale, correlation: Option<f64>) -> String {
        match correlation {
            Some(r) => self.render(
                locale,
                MessageKey::CorrelationText,
                &[("corr", format_correlation(r).as_str())],
            ),
            None => self.get(locale, MessageKey::CorrelationUndefined).to_string(),
        }
    }

    /// Correlation line for the whole dataset
    pub fn overall_correlation_text(&self, locale: Locale, correlation: Option<f64>) -> String {
        match correlation {
            Some(r) => self.render(
                locale,
                MessageKey::OverallCorrelation,
                &[("corr", format_correlation(r).as_str())],
            ),
            None => self
                .get(locale, MessageKey::OverallCorrelationUndefined)
                .to_string(),
        }
    }

    /// Sentence describing an insight for a (state, crop) selection
    pub fn insight_sentence(&self, locale: Locale, insight: Insight, state: &str, crop: &str) -> String {
        let key = match insight {
            Insight::StronglyPositive => MessageKey::InsightPositive,
            Insight::StronglyNegative => MessageKey::InsightNegative,
            Insight::Weak => MessageKey::InsightWeak,
        };
        self.render(locale, key, &[("state", state), ("crop", crop)])
    }

    /// Heading printed above a tabular query result
    ///
    /// `None` for [`QueryIntent::Correlation`]: its answer is a single line,
    /// rendered by [`StringTable::overall_correlation_text`].
    pub fn query_header(&self, locale: Locale, intent: QueryIntent) -> Option<&str> {
        let key = match intent {
            QueryIntent::HighestProduction => MessageKey::HighestProductionHeader,
            QueryIntent::LowestProduction => MessageKey::LowestProductionHeader,
            QueryIntent::AverageRainfall => MessageKey::AverageRainfallHeader,
            QueryIntent::Correlation => return None,
        };
        Some(self.get(locale, key))
    }
}

/// Two decimal places, as shown to users
pub fn format_correlation(r: f64) -> String {
    format!("{:.2}", r)
}

/// Default override location for the strings file
pub fn default_strings_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("agrinsight").join("strings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_complete() {
        let table = StringTable::parse(DEFAULT_STRINGS).unwrap();
        for locale in Locale::all() {
            for key in MessageKey::all() {
                assert_ne!(table.get(*locale, *key), key.as_str(), "{} {}", locale, key);
            }
        }
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("hi".parse::<Locale>().unwrap(), Locale::Hindi);
        assert_eq!("हिन्दी".parse::<Locale>().unwrap(), Locale::Hindi);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_render_placeholders() {
        let table = StringTable::embedded();
        let title = table.render(
            Locale::English,
            MessageKey::ChartTitle,
            &[("state", "Punjab"), ("crop", "Wheat")],
        );
        assert_eq!(title, "Wheat Production vs Rainfall in Punjab (2013–2022)");
    }

    #[test]
    fn test_insight_sentences() {
        let table = StringTable::embedded();
        assert_eq!(
            table.insight_sentence(Locale::English, Insight::StronglyPositive, "Punjab", "Wheat"),
            "🌦️ Higher rainfall generally increased Wheat production in Punjab."
        );
        assert_eq!(
            table.insight_sentence(Locale::Hindi, Insight::StronglyNegative, "पंजाब", "गेहूं"),
            "🌤️ अधिक वर्षा से पंजाब में गेहूं उत्पादन घटा।"
        );
        assert!(table
            .insight_sentence(Locale::English, Insight::Weak, "Kerala", "Rice")
            .contains("limited effect on Rice production in Kerala"));
    }

    #[test]
    fn test_correlation_text() {
        let table = StringTable::embedded();
        assert_eq!(
            table.correlation_text(Locale::English, Some(0.8765)),
            "📈 Correlation between rainfall and production: 0.88"
        );
        let undefined = table.correlation_text(Locale::English, None);
        assert!(undefined.contains("cannot be computed"));
        assert!(!undefined.contains("0.00"));
    }

    #[test]
    fn test_missing_key_rejected() {
        let content = "[en]\napp_title = \"x\"\n[hi]\napp_title = \"y\"\n";
        let err = StringTable::parse(content).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("tagline")));
    }

    #[test]
    fn test_missing_locale_rejected() {
        let content = DEFAULT_STRINGS.replace("[hi]", "[fr]");
        assert!(matches!(StringTable::parse(&content), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.toml");
        let content = DEFAULT_STRINGS.replacen("No matching records found.", "Nothing here.", 1);
        fs::write(&path, content).unwrap();

        let table = StringTable::load(Some(&path)).unwrap();
        assert_eq!(table.get(Locale::English, MessageKey::NoData), "Nothing here.");
    }

    #[test]
    fn test_missing_explicit_file_falls_through_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let data_dir_file = dir.path().join("strings.toml");
        let content = DEFAULT_STRINGS.replacen("No matching records found.", "From data dir.", 1);
        fs::write(&data_dir_file, content).unwrap();

        let table = StringTable::resolve(Some(&absent), Some(&data_dir_file)).unwrap();
        assert_eq!(table.get(Locale::English, MessageKey::NoData), "From data dir.");
    }

    #[test]
    fn test_missing_everywhere_uses_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let table = StringTable::resolve(Some(&absent), Some(&absent)).unwrap();
        assert_eq!(
            table.get(Locale::English, MessageKey::NoData),
            "No matching records found."
        );
        assert!(StringTable::resolve(None, None).is_ok());
    }

    #[test]
    fn test_query_headers() {
        let table = StringTable::embedded();
        assert!(table
            .query_header(Locale::English, QueryIntent::AverageRainfall)
            .is_some_and(|h| h.contains("Average annual rainfall")));
        for locale in Locale::all() {
            for intent in QueryIntent::all() {
                if let Some(header) = table.query_header(*locale, *intent) {
                    assert!(!header.contains('{'), "{} {}", locale, intent.as_str());
                }
            }
            assert_eq!(table.query_header(*locale, QueryIntent::Correlation), None);
        }
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let table = StringTable::embedded();
        let title = table.render(
            Locale::English,
            MessageKey::ChartTitle,
            &[("state", "{crop}"), ("crop", "Wheat")],
        );
        assert_eq!(title, "Wheat Production vs Rainfall in {crop} (2013–2022)");
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let table = StringTable::embedded();
        assert_eq!(
            table.render(Locale::English, MessageKey::ChartTitle, &[("crop", "Rice")]),
            "Rice Production vs Rainfall in {state} (2013–2022)"
        );
        assert_eq!(
            table.render(Locale::English, MessageKey::ExportWritten, &[("path", "a{b")]),
            "⬇️ Analysis data written to a{b"
        );
    }
}
