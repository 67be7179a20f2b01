use std::collections::BTreeMap;

use super::index::{count_where, group_indices, sum_area, value_counts};
use super::DatasetStore;
use crate::models::{ClaimField, GroupSummary};

impl DatasetStore {
    /// Roll claims up by one of the string attributes.
    ///
    /// Claims with no value for `field` belong to no group.
    pub fn rollup(&self, field: ClaimField) -> BTreeMap<String, GroupSummary> {
        let records = self.records();

        group_indices(records, |r| r.field(field).map(str::to_string))
            .into_iter()
            .map(|(key, indices)| {
                let summary = GroupSummary {
                    total_claims: indices.len(),
                    total_area_ha: sum_area(records, &indices),
                    approved_claims: count_where(records, &indices, |r| r.is_approved()),
                    claims_by_type: value_counts(records, &indices, |r| r.fra_type.as_deref()),
                };
                (key, summary)
            })
            .collect()
    }

    /// State-wise summary
    pub fn state_summary(&self) -> BTreeMap<String, GroupSummary> {
        self.rollup(ClaimField::State)
    }

    /// Tribal-community-wise summary
    pub fn tribal_summary(&self) -> BTreeMap<String, GroupSummary> {
        self.rollup(ClaimField::TribalCommunity)
    }
}
