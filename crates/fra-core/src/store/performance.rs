use super::index::{percentage, round2};
use super::DatasetStore;
use crate::models::PerformanceMetrics;

impl DatasetStore {
    /// Implementation performance across the whole dataset
    pub fn performance(&self) -> PerformanceMetrics {
        let records = self.records();
        let total = records.len();
        if total == 0 {
            return PerformanceMetrics::default();
        }

        let approved = records.iter().filter(|r| r.is_approved()).count();
        let pending = records.iter().filter(|r| r.is_pending()).count();
        let rejected = records.iter().filter(|r| r.is_rejected()).count();
        let field_verified = records.iter().filter(|r| r.field_verification_done).count();
        let gps_verified = records.iter().filter(|r| r.gps_coordinates_verified).count();

        let areas: Vec<f64> = records.iter().filter_map(|r| r.claim_area_ha).collect();
        let total_area: f64 = areas.iter().sum();
        let average_area = if areas.is_empty() { 0.0 } else { total_area / areas.len() as f64 };

        PerformanceMetrics {
            total_claims: total,
            approved_claims: approved,
            pending_claims: pending,
            rejected_claims: rejected,
            approval_rate: percentage(approved, total),
            pending_rate: percentage(pending, total),
            total_area_ha: round2(total_area),
            average_claim_size_ha: round2(average_area),
            field_verification_rate: percentage(field_verified, total),
            gps_verification_rate: percentage(gps_verified, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimRecord;
    use serde_json::{json, Value};

    fn store(records: Vec<Value>) -> DatasetStore {
        let records = records
            .into_iter()
            .map(|p| ClaimRecord::from_properties(p.as_object().cloned().unwrap(), None))
            .collect();
        DatasetStore::from_parts(records, json!({}))
    }

    #[test]
    fn test_performance_metrics() {
        let store = store(vec![
            json!({"claim_id": "A", "status": "approved", "claim_area_ha": 2.0, "field_verification_done": true}),
            json!({"claim_id": "B", "status": "submitted", "claim_area_ha": 3.0, "gps_coordinates_verified": true}),
            json!({"claim_id": "C", "status": "approved", "claim_area_ha": null, "field_verification_done": true}),
        ]);

        let metrics = store.performance();

        assert_eq!(metrics.total_claims, 3);
        assert_eq!(metrics.approved_claims, 2);
        assert_eq!(metrics.pending_claims, 1);
        assert_eq!(metrics.rejected_claims, 0);
        assert_eq!(metrics.approval_rate, 66.67);
        assert_eq!(metrics.pending_rate, 33.33);
        assert_eq!(metrics.total_area_ha, 5.0);
        assert_eq!(metrics.average_claim_size_ha, 2.5);
        assert_eq!(metrics.field_verification_rate, 66.67);
        assert_eq!(metrics.gps_verification_rate, 33.33);
    }

    #[test]
    fn test_rejected_claims_are_outside_both_rates() {
        let store = store(vec![
            json!({"claim_id": "A", "status": "approved"}),
            json!({"claim_id": "B", "status": "under_review"}),
            json!({"claim_id": "C", "status": "rejected"}),
            json!({"claim_id": "D", "status": "appealed"}),
        ]);

        let metrics = store.performance();

        assert_eq!(metrics.rejected_claims, 1);
        assert_eq!(metrics.approval_rate, 25.0);
        assert_eq!(metrics.pending_rate, 25.0);
        assert!(metrics.approval_rate + metrics.pending_rate < 100.0);
    }

    #[test]
    fn test_average_without_areas_is_zero() {
        let store = store(vec![json!({"claim_id": "A", "claim_area_ha": "n/a"})]);
        let metrics = store.performance();

        assert_eq!(metrics.total_area_ha, 0.0);
        assert_eq!(metrics.average_claim_size_ha, 0.0);
    }

    #[test]
    fn test_rounding() {
        let store = store(vec![
            json!({"claim_id": "A", "claim_area_ha": 1.005}),
            json!({"claim_id": "B", "claim_area_ha": 2.3333}),
        ]);
        let metrics = store.performance();

        assert_eq!(metrics.total_area_ha, round2(1.005 + 2.3333));
        assert_eq!(metrics.average_claim_size_ha, round2((1.005 + 2.3333) / 2.0));
    }

    #[test]
    fn test_empty_store_is_all_zero() {
        assert_eq!(DatasetStore::empty().performance(), PerformanceMetrics::default());
    }
}
