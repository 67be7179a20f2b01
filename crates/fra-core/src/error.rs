//! Error types for the FRA claim store

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FraError {
    // Load errors
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Input file check failed: {reasons}")]
    InputRejected { reasons: String },

    #[error("Expected a FeatureCollection, found {found}")]
    NotFeatureCollection { found: String },

    // Query errors
    #[error("Invalid value for {key}: '{value}' is not a number")]
    InvalidParameter { key: String, value: String },

    #[error("Claim not found: {claim_id}")]
    ClaimNotFound { claim_id: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, FraError>;
