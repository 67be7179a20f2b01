use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::claim::ClaimRecord;

/// A claim re-serialized as a GeoJSON feature
#[derive(Debug, Clone, Serialize)]
pub struct ClaimFeature {
    #[serde(rename = "type")]
    kind: &'static str,

    pub properties: Map<String, Value>,

    /// Geometry text exactly as loaded
    pub geometry: Option<Box<RawValue>>,
}

impl From<&ClaimRecord> for ClaimFeature {
    fn from(record: &ClaimRecord) -> Self {
        Self {
            kind: "Feature",
            properties: record.properties(),
            geometry: record.geometry.clone(),
        }
    }
}

/// Metadata injected into a filtered collection
#[derive(Debug, Clone, Serialize)]
pub struct CollectionProperties {
    pub total_claims: usize,
    pub filters_applied: BTreeMap<String, String>,
}

/// Export metadata attached to an exported collection
#[derive(Debug, Clone, Serialize)]
pub struct ExportInfo {
    pub exported_at: DateTime<Utc>,
    pub filters_applied: BTreeMap<String, String>,
    pub total_claims: usize,
}

/// Filter result: a GeoJSON FeatureCollection with query metadata
#[derive(Debug, Clone, Serialize)]
pub struct ClaimCollection {
    #[serde(rename = "type")]
    kind: &'static str,

    pub features: Vec<ClaimFeature>,

    pub properties: CollectionProperties,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_info: Option<ExportInfo>,
}

impl ClaimCollection {
    pub fn new<'a>(
        records: impl IntoIterator<Item = &'a ClaimRecord>,
        filters_applied: BTreeMap<String, String>,
    ) -> Self {
        let features: Vec<ClaimFeature> = records.into_iter().map(ClaimFeature::from).collect();

        Self {
            kind: "FeatureCollection",
            properties: CollectionProperties {
                total_claims: features.len(),
                filters_applied,
            },
            features,
            export_info: None,
        }
    }

    /// Attach export metadata
    pub fn with_export_info(mut self, exported_at: DateTime<Utc>) -> Self {
        self.export_info = Some(ExportInfo {
            exported_at,
            filters_applied: self.properties.filters_applied.clone(),
            total_claims: self.features.len(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
