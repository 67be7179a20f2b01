//! `claims`, `claim` and `export`

use anyhow::{Context, Result};
use fra_core::models::{ClaimRecord, FilterCriteria};
use fra_core::{DatasetStore, FraError};
use std::fs;
use tabled::Tabled;

use crate::cli::{ClaimArgs, ClaimsArgs, ExportArgs};
use crate::output::{format_area, OutputWriter};

#[derive(Tabled)]
struct ClaimRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "District")]
    district: String,
    #[tabled(rename = "Village")]
    village: String,
    #[tabled(rename = "Type")]
    fra_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Area (ha)")]
    area: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
}

impl From<&ClaimRecord> for ClaimRow {
    fn from(record: &ClaimRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

        Self {
            id: record.claim_id.clone(),
            state: text(&record.state),
            district: text(&record.district),
            village: text(&record.village),
            fra_type: text(&record.fra_type),
            status: text(&record.status),
            area: format_area(record.claim_area_ha),
            submitted: record
                .submission_date
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

pub fn list(args: ClaimsArgs, store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let criteria = FilterCriteria::from(args.filters);

    if output.is_json() {
        return output.result(store.filter(&criteria)?);
    }

    let filter = criteria.compile()?;
    let matching: Vec<&ClaimRecord> = store.matching(&filter).collect();
    let shown = args.limit.unwrap_or(matching.len()).min(matching.len());

    output.section("Claims");
    output.table(matching.iter().take(shown).map(|r| ClaimRow::from(*r)).collect());

    if shown < matching.len() {
        output.info(format!("Showing {} of {} matching claims", shown, matching.len()));
    } else {
        output.info(format!("{} of {} claims match", matching.len(), store.len()));
    }

    let applied = criteria.applied();
    if !applied.is_empty() {
        let filters: Vec<String> = applied.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        output.kv("Filters", filters.join(", "));
    }

    Ok(())
}

pub fn show(args: ClaimArgs, store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let record = store
        .get(&args.claim_id)
        .ok_or_else(|| FraError::ClaimNotFound { claim_id: args.claim_id.clone() })?;

    if output.is_json() {
        return output.result(record.details());
    }

    output.section(format!("Claim {}", record.claim_id));
    for (key, value) in record.properties() {
        if key == "claim_id" {
            continue;
        }
        let shown = match value {
            serde_json::Value::Null => "-".to_string(),
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        output.kv(key, shown);
    }
    output.kv("geometry", record.geometry_type().unwrap_or_else(|| "none".to_string()));

    Ok(())
}

pub fn export(args: ExportArgs, store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let criteria = FilterCriteria::from(args.filters);
    let collection = store.export(&criteria)?;

    match args.output {
        Some(path) => {
            let content = serde_json::to_string_pretty(&collection)?;
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if output.is_json() {
                output.result(serde_json::json!({
                    "path": path.display().to_string(),
                    "total_claims": collection.len(),
                }))?;
            } else {
                output.success(format!(
                    "Exported {} claims to {}",
                    collection.len(),
                    path.display()
                ));
            }
            Ok(())
        }
        None => output.data(&collection),
    }
}
