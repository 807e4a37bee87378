//! Error types for AgriInsight

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A dataset file is missing, unreadable, malformed, or lacks a required column
    #[error("Failed to load {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    pub fn data_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::DataLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
