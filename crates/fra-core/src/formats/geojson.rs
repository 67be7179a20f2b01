//! GeoJSON claim collection reader

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::non_finite::null_non_finite;
use crate::error::{FraError, Result};
use crate::models::ClaimRecord;

/// Claims decoded from a GeoJSON FeatureCollection
#[derive(Debug, Default)]
pub struct ClaimsFile {
    pub records: Vec<ClaimRecord>,

    /// Features whose geometry is not a valid GeoJSON geometry.
    /// They are still loaded; the geometry is passed through as-is.
    pub invalid_geometries: usize,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    geometry: Option<Box<RawValue>>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Read a claim FeatureCollection from disk
pub fn read_claims(path: &Path) -> Result<ClaimsFile> {
    let content = fs::read_to_string(path)?;

    parse_claims(&content).map_err(|e| match e {
        FraError::Serialization(reason) => FraError::Parse { path: path.to_path_buf(), reason },
        other => other,
    })
}

/// Parse a claim FeatureCollection from GeoJSON text.
///
/// Bare `NaN`/`Infinity` values are read as `null`.
pub fn parse_claims(content: &str) -> Result<ClaimsFile> {
    let content = null_non_finite(content);
    let collection: RawCollection = serde_json::from_str(&content)
        .map_err(|e| FraError::Serialization(format!("Failed to parse GeoJSON: {}", e)))?;

    if collection.kind != "FeatureCollection" {
        return Err(FraError::NotFeatureCollection { found: collection.kind });
    }

    let mut invalid_geometries = 0;
    let records = collection
        .features
        .into_iter()
        .map(|feature| {
            if !is_valid_geometry(feature.geometry.as_deref()) {
                invalid_geometries += 1;
            }
            convert_feature(feature)
        })
        .collect();

    Ok(ClaimsFile { records, invalid_geometries })
}

/// Convert a raw feature into a claim, falling back to the feature `id`
/// when the properties carry no usable `claim_id`
fn convert_feature(feature: RawFeature) -> ClaimRecord {
    let mut properties = feature.properties.unwrap_or_default();

    if !has_claim_id(&properties) {
        if let Some(id) = feature.id {
            properties.insert("claim_id".to_string(), id);
        }
    }

    ClaimRecord::from_properties(properties, feature.geometry)
}

/// Absent, null and blank ids are all unusable
fn has_claim_id(properties: &Map<String, Value>) -> bool {
    match properties.get("claim_id") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// A null geometry is valid GeoJSON; anything else must decode as a geometry
fn is_valid_geometry(raw: Option<&RawValue>) -> bool {
    match raw {
        None => true,
        Some(raw) => serde_json::from_str::<::geojson::Geometry>(raw.get()).is_ok(),
    }
}
