//! String table inspection

use anyhow::Result;
use agrinsight_core::{Locale, MessageKey, StringTable};

use super::{print_json, RULE};

pub fn cmd_strings(strings: &StringTable, locale: Locale, json: bool) -> Result<()> {
    if json {
        let map: std::collections::BTreeMap<&str, &str> = MessageKey::all()
            .iter()
            .map(|key| (key.as_str(), strings.get(locale, *key)))
            .collect();
        return print_json(&map);
    }

    println!();
    println!("🌐 {} ({})", strings.get(locale, MessageKey::AppTitle), locale.native_name());
    println!("{}", RULE);
    for key in MessageKey::all() {
        println!("   {:32} │ {}", key.as_str(), strings.get(locale, *key));
    }
    println!();
    Ok(())
}
