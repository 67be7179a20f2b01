//! Aggregate views computed over the claim collection

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rollup of one group of claims (a state, a tribal community, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub total_claims: usize,

    /// Sum of known areas; claims without an area are left out
    pub total_area_ha: f64,

    pub approved_claims: usize,

    /// Claim count per FRA type within the group
    pub claims_by_type: BTreeMap<String, usize>,
}

/// Claims submitted in one calendar year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub claims_submitted: usize,
    pub total_area_ha: f64,
    pub claims_approved: usize,
}

/// Claims submitted in one month of the reference year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub claims_submitted: usize,
    pub total_area_ha: f64,
}

/// Submission timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Keyed by calendar year
    pub yearly: BTreeMap<i32, YearSummary>,

    /// Keyed by month (1-12) of the reference year
    pub monthly: BTreeMap<u32, MonthSummary>,
}

/// Implementation performance metrics. Rates are percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_claims: usize,
    pub approved_claims: usize,
    pub pending_claims: usize,
    pub rejected_claims: usize,
    pub approval_rate: f64,
    pub pending_rate: f64,
    pub total_area_ha: f64,
    pub average_claim_size_ha: f64,
    pub field_verification_rate: f64,
    pub gps_verification_rate: f64,
}

/// Sorted distinct values for each filterable attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub districts: Vec<String>,
    pub villages: Vec<String>,
    pub fra_types: Vec<String>,
    pub statuses: Vec<String>,
    pub tribal_communities: Vec<String>,
}

/// Claim counts used when the precomputed analytics cannot be served
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCounts {
    pub total_claims: usize,
    pub claims_by_type: BTreeMap<String, usize>,
    pub claims_by_status: BTreeMap<String, usize>,
    pub claims_by_state: BTreeMap<String, usize>,
}

/// Locally computed stand-in for the precomputed analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAnalytics {
    pub summary: ClaimCounts,
    pub error: String,
}

/// Analytics response: the precomputed blob, or the simplified fallback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analytics {
    Precomputed(serde_json::Value),
    Simplified(SimplifiedAnalytics),
}

impl Analytics {
    pub fn is_simplified(&self) -> bool {
        matches!(self, Analytics::Simplified(_))
    }
}
