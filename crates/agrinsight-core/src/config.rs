//! Application configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/agrinsight/config.toml)
//! 2. Built-in defaults
//!
//! Environment variables (`AGRINSIGHT_DATA_DIR`, `AGRINSIGHT_LANG`) are applied
//! on top by [`AppConfig::with_env_overrides`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locale::Locale;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "AGRINSIGHT_DATA_DIR";

/// Environment variable overriding the display language
pub const LANG_ENV: &str = "AGRINSIGHT_LANG";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the two dataset files
    pub data_dir: PathBuf,
    /// Production file name, relative to `data_dir` unless absolute
    pub production_file: PathBuf,
    /// Rainfall file name, relative to `data_dir` unless absolute
    pub rainfall_file: PathBuf,
    /// Default display language
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            production_file: PathBuf::from("crop_production.csv"),
            rainfall_file: PathBuf::from("rainfall_data.csv"),
            locale: Locale::English,
        }
    }
}

impl AppConfig {
    /// Load configuration (override first, then defaults)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
                tracing::debug!(path = %path.display(), "Loaded config");
                Self::parse(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML config; absent keys keep their defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();
        if let Some(dir) = raw.data_dir {
            config.data_dir = dir;
        }
        if let Some(file) = raw.production_file {
            config.production_file = file;
        }
        if let Some(file) = raw.rainfall_file {
            config.rainfall_file = file;
        }
        if let Some(locale) = raw.locale {
            config.locale = locale.parse().map_err(Error::Config)?;
        }
        Ok(config)
    }

    /// Apply `AGRINSIGHT_DATA_DIR` and `AGRINSIGHT_LANG` if set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(
            std::env::var(DATA_DIR_ENV).ok().as_deref(),
            std::env::var(LANG_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, data_dir: Option<&str>, lang: Option<&str>) -> Result<Self> {
        if let Some(dir) = data_dir.filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(lang) = lang.filter(|l| !l.is_empty()) {
            self.locale = lang
                .parse()
                .map_err(|e: String| Error::Config(format!("{}: {}", LANG_ENV, e)))?;
        }
        Ok(self)
    }

    pub fn production_path(&self) -> PathBuf {
        self.data_dir.join(&self.production_file)
    }

    pub fn rainfall_path(&self) -> PathBuf {
        self.data_dir.join(&self.rainfall_file)
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    production_file: Option<PathBuf>,
    rainfall_file: Option<PathBuf>,
    locale: Option<String>,
}

/// Default override location for the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("agrinsight").join("config.toml"))
}
