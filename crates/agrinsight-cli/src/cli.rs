//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AgriInsight - Crop production trends with rainfall correlation
#[derive(Parser)]
#[command(name = "agrinsight")]
#[command(about = "Crop production vs rainfall analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing crop_production.csv and rainfall_data.csv
    ///
    /// Overrides the config file and AGRINSIGHT_DATA_DIR.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Production CSV (overrides the data directory for this file)
    #[arg(long, global = true)]
    pub production: Option<PathBuf>,

    /// Rainfall CSV (overrides the data directory for this file)
    #[arg(long, global = true)]
    pub rainfall: Option<PathBuf>,

    /// Display language: en or hi
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Strings file (defaults to the built-in English/Hindi table)
    #[arg(long, global = true)]
    pub strings: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List states present in the production data
    States,

    /// List crops present in the production data
    Crops,

    /// Join production and rainfall for one state and crop
    Analyze {
        /// State name (exact, case-sensitive)
        #[arg(short, long)]
        state: String,

        /// Crop name (exact, case-sensitive)
        #[arg(short, long)]
        crop: String,

        /// Also write the joined rows as CSV into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Write the joined rows for one state and crop as CSV
    Export {
        /// State name (exact, case-sensitive)
        #[arg(short, long)]
        state: String,

        /// Crop name (exact, case-sensitive)
        #[arg(short, long)]
        crop: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Ask a canned question (e.g. "highest production", "average rainfall")
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Show the string table for the selected language
    Strings,
}
