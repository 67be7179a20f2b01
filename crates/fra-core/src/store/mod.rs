//! In-memory claim store.
//!
//! The store is built once from the claim FeatureCollection and the
//! precomputed statistics file, and is never mutated afterwards. Every
//! query is a pure function of its arguments and the loaded records, so a
//! store can be shared across threads behind an `Arc` without locking.

mod analytics;
pub mod index;
mod options;
mod performance;
mod rollup;
mod timeline;

pub use analytics::SIMPLIFIED_ANALYTICS_ERROR;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FraError, Result};
use crate::formats::{read_claims, read_statistics, FileValidator};
use crate::models::{ClaimCollection, ClaimFilter, ClaimRecord, FilterCriteria};

/// Read-only store of FRA claims plus the precomputed analytics blob
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<ClaimRecord>,
    analytics: Value,
    by_id: HashMap<String, usize>,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl DatasetStore {
    /// A store with no claims and an empty analytics object
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Value::Object(Map::new()))
    }

    /// Build a store from already decoded records
    pub fn from_parts(records: Vec<ClaimRecord>, analytics: Value) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;

        for (idx, record) in records.iter().enumerate() {
            if record.claim_id.is_empty() {
                continue;
            }
            if by_id.contains_key(&record.claim_id) {
                duplicates += 1;
                continue;
            }
            by_id.insert(record.claim_id.clone(), idx);
        }

        if duplicates > 0 {
            tracing::warn!(duplicates, "Duplicate claim ids found; lookups return the first");
        }

        Self { records, analytics, by_id }
    }

    /// Load both input files, falling back to an empty store on any failure.
    ///
    /// The failure is logged and never returned, so a server can always
    /// start and answer with "no data".
    pub fn load(claims_path: &Path, analytics_path: &Path) -> Self {
        match Self::try_load(claims_path, analytics_path) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    claims = %claims_path.display(),
                    analytics = %analytics_path.display(),
                    "Error loading FRA data, serving an empty dataset"
                );
                Self::empty()
            }
        }
    }

    /// Load both input files, returning the first failure
    pub fn try_load(claims_path: &Path, analytics_path: &Path) -> Result<Self> {
        let validation = FileValidator::merge(vec![
            FileValidator::validate_claims_file(claims_path),
            FileValidator::validate_statistics_file(analytics_path),
        ]);
        for warning in &validation.warnings {
            tracing::warn!("{}", warning);
        }
        if !validation.is_valid() {
            return Err(FraError::InputRejected { reasons: validation.errors.join("; ") });
        }

        let claims = read_claims(claims_path)?;
        let analytics = read_statistics(analytics_path)?;

        if claims.invalid_geometries > 0 {
            tracing::warn!(
                count = claims.invalid_geometries,
                "Claims carry geometries that are not valid GeoJSON; passing them through unchanged"
            );
        }

        let store = Self::from_parts(claims.records, analytics);
        tracing::info!(
            path = %claims_path.display(),
            count = store.len(),
            "Loaded FRA claims"
        );

        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in dataset order
    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    /// Look up a claim by id
    pub fn get(&self, claim_id: &str) -> Option<&ClaimRecord> {
        self.by_id.get(claim_id).map(|&idx| &self.records[idx])
    }

    /// Records accepted by a compiled filter, in dataset order
    pub fn matching<'a>(
        &'a self,
        filter: &'a ClaimFilter,
    ) -> impl Iterator<Item = &'a ClaimRecord> + 'a {
        self.records.iter().filter(move |record| filter.matches(record))
    }

    /// Filter the claims and return them as a FeatureCollection.
    ///
    /// Fails only when a numeric bound is not a number; nothing is
    /// filtered in that case.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<ClaimCollection> {
        let filter = criteria.compile()?;
        let collection = ClaimCollection::new(self.matching(&filter), criteria.applied());

        tracing::debug!(
            matched = collection.len(),
            total = self.len(),
            "Filtered claims"
        );

        Ok(collection)
    }

    /// Filter the claims and stamp the result with export metadata
    pub fn export(&self, criteria: &FilterCriteria) -> Result<ClaimCollection> {
        self.export_at(criteria, Utc::now())
    }

    pub fn export_at(
        &self,
        criteria: &FilterCriteria,
        exported_at: DateTime<Utc>,
    ) -> Result<ClaimCollection> {
        Ok(self.filter(criteria)?.with_export_info(exported_at))
    }
}
