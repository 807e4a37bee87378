//! Shared command utilities
//!
//! This module contains:
//! - `Settings` - resolved file paths and language (flags > env > config file)
//! - `open_dataset` - load both CSVs through the process-wide cache
//! - `load_strings` - load the string table
//! - table formatting helpers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use agrinsight_core::{AppConfig, Dataset, DatasetCache, Locale, StringTable};

/// Everything a command needs to know before touching the data
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub production_path: PathBuf,
    pub rainfall_path: PathBuf,
    pub locale: Locale,
}

impl Settings {
    /// Merge the config file and environment with command-line flags
    pub fn resolve(
        config_path: Option<&Path>,
        data_dir: Option<&Path>,
        production: Option<&Path>,
        rainfall: Option<&Path>,
        lang: Option<&str>,
    ) -> Result<Self> {
        let mut config = AppConfig::load(config_path)
            .context("Failed to load config")?
            .with_env_overrides()
            .context("Invalid environment override")?;

        if let Some(dir) = data_dir {
            config.data_dir = dir.to_path_buf();
        }

        let locale = match lang {
            Some(lang) => lang
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid --lang (use en or hi)")?,
            None => config.locale,
        };

        Ok(Self {
            production_path: production
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.production_path()),
            rainfall_path: rainfall
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.rainfall_path()),
            locale,
        })
    }
}

/// Load (or reuse) the datasets named by `settings`
pub fn open_dataset(settings: &Settings) -> Result<Arc<Dataset>> {
    DatasetCache::global()
        .get_or_load(&settings.production_path, &settings.rainfall_path)
        .context("Failed to load datasets")
}

/// Load the string table, honoring an explicit override file
pub fn load_strings(path: Option<&Path>) -> Result<StringTable> {
    StringTable::load(path).context("Failed to load string table")
}

/// Print a value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Horizontal rule used under section titles
pub const RULE: &str = "   ─────────────────────────────────────────────────────────────";

/// Format a measurement for tables
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
