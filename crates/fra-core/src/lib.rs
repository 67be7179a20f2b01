//! FRA Core - claim records, the in-memory claim store and configuration
//!
//! Loads Forest Rights Act claims from a GeoJSON FeatureCollection, answers
//! filter and lookup queries, and computes the aggregate views (rollups,
//! timeline, performance metrics) served by the API and CLI.

pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod store;

pub use error::{FraError, Result};
pub use store::DatasetStore;
