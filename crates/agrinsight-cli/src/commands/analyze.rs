//! Selection commands (analyze, export)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use agrinsight_core::{
    analyze_selection, export_file_name, export_joined_csv, Dataset, JoinedRecord, Locale,
    MessageKey, SelectionAnalysis, StringTable,
};
use tracing::info;

use super::{format_amount, print_json, RULE};

pub fn cmd_analyze(
    dataset: &Dataset,
    strings: &StringTable,
    locale: Locale,
    state: &str,
    crop: &str,
    export_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let analysis = analyze_selection(dataset, state, crop);

    if json {
        print_json(&analysis)?;
    } else {
        print!("{}", render_analysis(strings, locale, &analysis));
    }

    if let Some(dir) = export_dir {
        if analysis.is_empty() {
            info!(state, crop, "Nothing to export");
        } else {
            let path = write_export(dir, state, crop, &analysis.joined)?;
            if !json {
                println!(
                    "   💾 {}",
                    strings.render(
                        locale,
                        MessageKey::ExportWritten,
                        &[("path", path.display().to_string().as_str())]
                    )
                );
                println!();
            }
        }
    }

    Ok(())
}

pub fn cmd_export(
    dataset: &Dataset,
    strings: &StringTable,
    locale: Locale,
    state: &str,
    crop: &str,
    out_dir: &Path,
) -> Result<()> {
    let analysis = analyze_selection(dataset, state, crop);
    if analysis.is_empty() {
        println!("⚠️  {}", strings.get(locale, MessageKey::NoData));
        return Ok(());
    }

    let path = write_export(out_dir, state, crop, &analysis.joined)?;
    println!(
        "✅ {}",
        strings.render(
            locale,
            MessageKey::ExportWritten,
            &[("path", path.display().to_string().as_str())]
        )
    );
    Ok(())
}

/// Write the joined rows under `dir` using the standard export file name
pub fn write_export(dir: &Path, state: &str, crop: &str, joined: &[JoinedRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join(export_file_name(state, crop));
    let content = export_joined_csv(joined).context("Failed to encode joined rows")?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = joined.len(), "Exported joined rows");
    Ok(path)
}

/// Text rendering of one selection: title, table, correlation and insight
pub fn render_analysis(strings: &StringTable, locale: Locale, analysis: &SelectionAnalysis) -> String {
    let mut out = String::new();
    let title = strings.render(
        locale,
        MessageKey::ChartTitle,
        &[("state", analysis.state.as_str()), ("crop", analysis.crop.as_str())],
    );

    out.push('\n');
    out.push_str(&format!("📊 {}\n", title));
    out.push_str(RULE);
    out.push('\n');

    if analysis.is_empty() {
        out.push_str(&format!("   {}\n\n", strings.get(locale, MessageKey::NoData)));
        return out;
    }

    out.push_str(&format!(
        "   {:>6} │ {:>14} │ {:>14}\n",
        strings.get(locale, MessageKey::AxisYear),
        strings.get(locale, MessageKey::AxisProduction),
        strings.get(locale, MessageKey::AxisRainfall),
    ));
    for record in &analysis.joined {
        out.push_str(&format!(
            "   {:>6} │ {:>14} │ {:>14}\n",
            record.year,
            format_amount(record.production),
            format_amount(record.rainfall_mm),
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "   {}\n",
        strings.correlation_text(locale, analysis.correlation)
    ));
    if let Some(insight) = analysis.insight {
        out.push_str(&format!(
            "   {}\n",
            strings.insight_sentence(locale, insight, &analysis.state, &analysis.crop)
        ));
    }
    out.push('\n');
    out
}
