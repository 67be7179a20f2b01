use serde::Serialize;
use serde_json::Value;

use super::index::value_counts;
use super::DatasetStore;
use crate::models::{Analytics, ClaimCounts, SimplifiedAnalytics};

/// Error tag carried by the simplified analytics fallback
pub const SIMPLIFIED_ANALYTICS_ERROR: &str = "Analytics data simplified due to serialization issues";

impl DatasetStore {
    /// The precomputed statistics blob as loaded
    pub fn analytics_blob(&self) -> &Value {
        &self.analytics
    }

    /// Precomputed analytics, or counts computed from the claims when the
    /// blob cannot be serialized
    pub fn analytics(&self) -> Analytics {
        self.analytics_or_fallback(&self.analytics)
    }

    /// Serialize `blob` as the analytics answer, degrading to the simplified
    /// summary instead of failing
    pub fn analytics_or_fallback<T>(&self, blob: &T) -> Analytics
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(blob) {
            Ok(value) => Analytics::Precomputed(value),
            Err(e) => {
                tracing::warn!(error = %e, "Analytics blob failed to serialize, using simplified summary");
                Analytics::Simplified(SimplifiedAnalytics {
                    summary: self.claim_counts(),
                    error: SIMPLIFIED_ANALYTICS_ERROR.to_string(),
                })
            }
        }
    }

    /// Headline counts by type, status and state
    pub fn claim_counts(&self) -> ClaimCounts {
        let records = self.records();
        let all: Vec<usize> = (0..records.len()).collect();

        ClaimCounts {
            total_claims: records.len(),
            claims_by_type: value_counts(records, &all, |r| r.fra_type.as_deref()),
            claims_by_status: value_counts(records, &all, |r| r.status.as_deref()),
            claims_by_state: value_counts(records, &all, |r| r.state.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimRecord;
    use serde_json::json;
    use std::collections::HashMap;

    fn store(analytics: Value) -> DatasetStore {
        let records = [
            json!({"claim_id": "A", "state": "Odisha", "fra_type": "IFR", "status": "approved"}),
            json!({"claim_id": "B", "state": "Odisha", "fra_type": "CFR", "status": "submitted"}),
            json!({"claim_id": "C", "state": "Tripura", "fra_type": "IFR", "status": null}),
        ]
        .into_iter()
        .map(|p| ClaimRecord::from_properties(p.as_object().cloned().unwrap(), None))
        .collect();

        DatasetStore::from_parts(records, analytics)
    }

    #[test]
    fn test_precomputed_blob_is_returned_verbatim() {
        let blob = json!({"summary": {"total_claims": 999}, "charts": [1, 2, 3]});
        let analytics = store(blob.clone()).analytics();

        assert!(!analytics.is_simplified());
        assert_eq!(serde_json::to_value(&analytics).unwrap(), blob);
    }

    #[test]
    fn test_unserializable_blob_falls_back_to_counts() {
        let mut blob: HashMap<(i32, i32), i32> = HashMap::new();
        blob.insert((2023, 1), 4);

        let analytics = store(json!({})).analytics_or_fallback(&blob);
        assert!(analytics.is_simplified());

        let json = serde_json::to_value(&analytics).unwrap();
        assert_eq!(json["error"], json!(SIMPLIFIED_ANALYTICS_ERROR));
        assert_eq!(json["summary"]["total_claims"], json!(3));
        assert_eq!(json["summary"]["claims_by_type"], json!({"CFR": 1, "IFR": 2}));
        assert_eq!(json["summary"]["claims_by_status"], json!({"approved": 1, "submitted": 1}));
        assert_eq!(json["summary"]["claims_by_state"], json!({"Odisha": 2, "Tripura": 1}));
    }

    #[test]
    fn test_claim_counts_on_empty_store() {
        assert_eq!(DatasetStore::empty().claim_counts(), ClaimCounts::default());
    }
}
