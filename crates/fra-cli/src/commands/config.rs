use anyhow::Result;
use fra_core::config::LayeredConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::Tabled;

use crate::output::OutputWriter;

#[derive(Serialize)]
struct ConfigEntry {
    value: String,
    source: String,
}

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let entries: BTreeMap<String, ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| (key, ConfigEntry { value, source: format!("{:?}", source) }))
        .collect();

    if output.is_json() {
        return output.result(entries);
    }

    output.section("Configuration Values");
    output.table(
        entries
            .into_iter()
            .map(|(key, entry)| ConfigRow { key, value: entry.value, source: entry.source })
            .collect(),
    );

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}
