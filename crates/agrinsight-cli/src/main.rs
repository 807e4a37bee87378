//! AgriInsight CLI - Crop production vs rainfall
//!
//! Usage:
//!   agrinsight states                          List states
//!   agrinsight crops                           List crops
//!   agrinsight analyze -s Punjab -c Wheat      Join, correlate, explain
//!   agrinsight export -s Punjab -c Wheat       Write the joined rows as CSV
//!   agrinsight ask "highest production"        Canned questions (English or Hindi)

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let settings = commands::Settings::resolve(
        cli.config.as_deref(),
        cli.data_dir.as_deref(),
        cli.production.as_deref(),
        cli.rainfall.as_deref(),
        cli.lang.as_deref(),
    )?;
    let strings = commands::load_strings(cli.strings.as_deref())?;
    let locale = settings.locale;

    if let Commands::Strings = cli.command {
        return commands::cmd_strings(&strings, locale, cli.json);
    }

    let dataset = commands::open_dataset(&settings)?;

    match cli.command {
        Commands::States => commands::cmd_states(&dataset, &strings, locale, cli.json),
        Commands::Crops => commands::cmd_crops(&dataset, &strings, locale, cli.json),
        Commands::Analyze {
            state,
            crop,
            export_dir,
        } => commands::cmd_analyze(
            &dataset,
            &strings,
            locale,
            &state,
            &crop,
            export_dir.as_deref(),
            cli.json,
        ),
        Commands::Export {
            state,
            crop,
            out_dir,
        } => commands::cmd_export(&dataset, &strings, locale, &state, &crop, &out_dir),
        Commands::Ask { question } => {
            commands::cmd_ask(&dataset, &strings, locale, &question.join(" "), cli.json)
        }
        Commands::Strings => commands::cmd_strings(&strings, locale, cli.json),
    }
}
