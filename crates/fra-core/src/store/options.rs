use std::collections::BTreeSet;

use super::DatasetStore;
use crate::models::{ClaimField, FilterOptions};

impl DatasetStore {
    /// Sorted distinct values of every filterable attribute
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            states: self.distinct(ClaimField::State),
            districts: self.distinct(ClaimField::District),
            villages: self.distinct(ClaimField::Village),
            fra_types: self.distinct(ClaimField::FraType),
            statuses: self.distinct(ClaimField::Status),
            tribal_communities: self.distinct(ClaimField::TribalCommunity),
        }
    }

    /// Sorted distinct non-null values of one attribute
    pub fn distinct(&self, field: ClaimField) -> Vec<String> {
        self.records()
            .iter()
            .filter_map(|r| r.field(field))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimRecord;
    use serde_json::json;

    #[test]
    fn test_filter_options_are_sorted_and_unique() {
        let records = [
            json!({"claim_id": "1", "state": "Tripura", "fra_type": "IFR", "village": "Kanchanpur"}),
            json!({"claim_id": "2", "state": "Odisha", "fra_type": "CFR", "village": null}),
            json!({"claim_id": "3", "state": "Tripura", "fra_type": "IFR", "status": "approved"}),
        ]
        .into_iter()
        .map(|p| ClaimRecord::from_properties(p.as_object().cloned().unwrap(), None))
        .collect();
        let store = DatasetStore::from_parts(records, json!({}));

        let options = store.filter_options();

        assert_eq!(options.states, vec!["Odisha", "Tripura"]);
        assert_eq!(options.fra_types, vec!["CFR", "IFR"]);
        assert_eq!(options.villages, vec!["Kanchanpur"]);
        assert_eq!(options.statuses, vec!["approved"]);
        assert!(options.districts.is_empty());
        assert!(options.tribal_communities.is_empty());
    }

    #[test]
    fn test_filter_options_on_empty_store() {
        assert_eq!(DatasetStore::empty().filter_options(), FilterOptions::default());
    }
}
