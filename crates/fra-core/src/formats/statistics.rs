//! Precomputed statistics reader

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::non_finite::null_non_finite;
use crate::error::{FraError, Result};

/// Read the statistics blob. Any well-formed JSON document is accepted,
/// with bare `NaN`/`Infinity` values read as `null`.
pub fn read_statistics(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    serde_json::from_str(&null_non_finite(&content)).map_err(|e| FraError::Parse {
        path: path.to_path_buf(),
        reason: format!("Failed to parse statistics JSON: {}", e),
    })
}
