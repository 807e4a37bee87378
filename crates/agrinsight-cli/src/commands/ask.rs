//! Free-text query command

use anyhow::Result;
use agrinsight_core::{
    answer_query, Dataset, Locale, MessageKey, QueryIntent, QueryResult, StringTable,
};

use super::{format_amount, print_json, RULE};

pub fn cmd_ask(
    dataset: &Dataset,
    strings: &StringTable,
    locale: Locale,
    question: &str,
    json: bool,
) -> Result<()> {
    let result = answer_query(question, &dataset.production, &dataset.rainfall);
    if json {
        return print_json(&result);
    }
    print!("{}", render_query_result(strings, locale, &result));
    Ok(())
}

/// Text rendering of a query answer
pub fn render_query_result(strings: &StringTable, locale: Locale, result: &QueryResult) -> String {
    let mut out = String::new();
    out.push('\n');

    match result {
        QueryResult::HighestProduction(rows) | QueryResult::LowestProduction(rows) => {
            if let Some(header) = result.intent().and_then(|i| strings.query_header(locale, i)) {
                out.push_str(&format!("🌾 {}\n", header));
            }
            out.push_str(RULE);
            out.push('\n');
            if rows.is_empty() {
                out.push_str(&format!("   {}\n", strings.get(locale, MessageKey::NoData)));
            }
            for row in rows {
                out.push_str(&format!(
                    "   {:25} │ {:15} │ {:>14}\n",
                    row.state,
                    row.crop,
                    format_amount(row.production)
                ));
            }
        }
        QueryResult::AverageRainfall(rows) => {
            if let Some(header) = strings.query_header(locale, QueryIntent::AverageRainfall) {
                out.push_str(&format!("🌧️ {}\n", header));
            }
            out.push_str(RULE);
            out.push('\n');
            if rows.is_empty() {
                out.push_str(&format!("   {}\n", strings.get(locale, MessageKey::NoData)));
            }
            for row in rows {
                out.push_str(&format!(
                    "   {:25} │ {:>14}\n",
                    row.state,
                    format_amount(row.rainfall_mm)
                ));
            }
        }
        QueryResult::Correlation(r) => {
            out.push_str(&format!("📈 {}\n", strings.overall_correlation_text(locale, *r)));
        }
        QueryResult::Unrecognized => {
            out.push_str(&format!("💡 {}\n", strings.get(locale, MessageKey::QueryHelp)));
        }
    }

    out.push('\n');
    out
}
