//! State and crop listing commands

use anyhow::Result;
use agrinsight_core::{distinct_crops, distinct_states, Dataset, Locale, MessageKey, StringTable};

use super::print_json;

pub fn cmd_states(dataset: &Dataset, strings: &StringTable, locale: Locale, json: bool) -> Result<()> {
    let states = distinct_states(&dataset.production);
    if json {
        return print_json(&states);
    }
    print_list(strings.get(locale, MessageKey::SelectState), &states);
    Ok(())
}

pub fn cmd_crops(dataset: &Dataset, strings: &StringTable, locale: Locale, json: bool) -> Result<()> {
    let crops = distinct_crops(&dataset.production);
    if json {
        return print_json(&crops);
    }
    print_list(strings.get(locale, MessageKey::SelectCrop), &crops);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!();
    println!("🔍 {} ({})", title, items.len());
    for item in items {
        println!("   • {}", item);
    }
    println!();
}
