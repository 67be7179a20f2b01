use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::claim::{ClaimField, ClaimRecord};
use crate::error::{FraError, Result};

pub const CLAIM_AREA_MIN: &str = "claim_area_min";
pub const CLAIM_AREA_MAX: &str = "claim_area_max";

/// Raw filter criteria as supplied by a caller.
///
/// Values are kept as strings exactly as received; empty or whitespace-only
/// values do not constrain anything. Numeric bounds are only validated when
/// the criteria are compiled into a [`ClaimFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fra_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribal_community: Option<String>,

    /// Inclusive lower bound on `claim_area_ha`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_area_min: Option<String>,

    /// Inclusive upper bound on `claim_area_ha`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_area_max: Option<String>,
}

impl FilterCriteria {
    /// Create empty criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from key/value pairs, ignoring unrecognized keys
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::new();
        for (key, value) in pairs {
            criteria.set(key.as_ref(), value);
        }
        criteria
    }

    /// Set a criterion by key. Returns `false` for an unrecognized key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            CLAIM_AREA_MIN => &mut self.claim_area_min,
            CLAIM_AREA_MAX => &mut self.claim_area_max,
            other => match ClaimField::from_key(other) {
                Some(field) => self.field_slot(field),
                None => return false,
            },
        };
        *slot = Some(value.into());
        true
    }

    /// Require an exact match on a string attribute
    pub fn with(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        *self.field_slot(field) = Some(value.into());
        self
    }

    /// Bound `claim_area_ha` from below (inclusive)
    pub fn with_area_min(mut self, min: f64) -> Self {
        self.claim_area_min = Some(min.to_string());
        self
    }

    /// Bound `claim_area_ha` from above (inclusive)
    pub fn with_area_max(mut self, max: f64) -> Self {
        self.claim_area_max = Some(max.to_string());
        self
    }

    fn field_slot(&mut self, field: ClaimField) -> &mut Option<String> {
        match field {
            ClaimField::State => &mut self.state,
            ClaimField::District => &mut self.district,
            ClaimField::Village => &mut self.village,
            ClaimField::FraType => &mut self.fra_type,
            ClaimField::Status => &mut self.status,
            ClaimField::TribalCommunity => &mut self.tribal_community,
        }
    }

    fn field_value(&self, field: ClaimField) -> Option<&str> {
        let value = match field {
            ClaimField::State => &self.state,
            ClaimField::District => &self.district,
            ClaimField::Village => &self.village,
            ClaimField::FraType => &self.fra_type,
            ClaimField::Status => &self.status,
            ClaimField::TribalCommunity => &self.tribal_community,
        };
        active(value)
    }

    /// Criteria that actually constrain the result, keyed by filter key
    pub fn applied(&self) -> BTreeMap<String, String> {
        let mut applied: BTreeMap<String, String> = ClaimField::ALL
            .into_iter()
            .filter_map(|field| Some((field.key().to_string(), self.field_value(field)?.to_string())))
            .collect();

        if let Some(min) = active(&self.claim_area_min) {
            applied.insert(CLAIM_AREA_MIN.to_string(), min.to_string());
        }
        if let Some(max) = active(&self.claim_area_max) {
            applied.insert(CLAIM_AREA_MAX.to_string(), max.to_string());
        }

        applied
    }

    /// Check if no criterion is active
    pub fn is_empty(&self) -> bool {
        self.applied().is_empty()
    }

    /// Validate the criteria and compile them into a reusable predicate
    pub fn compile(&self) -> Result<ClaimFilter> {
        let equals = ClaimField::ALL
            .into_iter()
            .filter_map(|field| Some((field, self.field_value(field)?.to_string())))
            .collect();

        Ok(ClaimFilter {
            equals,
            area_min: parse_bound(CLAIM_AREA_MIN, &self.claim_area_min)?,
            area_max: parse_bound(CLAIM_AREA_MAX, &self.claim_area_max)?,
        })
    }
}

/// Compiled filter: AND of exact matches and inclusive area bounds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimFilter {
    equals: Vec<(ClaimField, String)>,
    area_min: Option<f64>,
    area_max: Option<f64>,
}

impl ClaimFilter {
    /// Check if the filter lets every record through
    pub fn is_unconstrained(&self) -> bool {
        self.equals.is_empty() && self.area_min.is_none() && self.area_max.is_none()
    }

    /// Check if a record satisfies every active criterion.
    ///
    /// A record with a null attribute never matches a criterion on that
    /// attribute, and a record without an area never satisfies an area bound.
    pub fn matches(&self, record: &ClaimRecord) -> bool {
        let equals_ok = self
            .equals
            .iter()
            .all(|(field, wanted)| record.field(*field) == Some(wanted.as_str()));
        if !equals_ok {
            return false;
        }

        if self.area_min.is_none() && self.area_max.is_none() {
            return true;
        }

        let Some(area) = record.claim_area_ha else {
            return false;
        };

        self.area_min.map_or(true, |min| area >= min) && self.area_max.map_or(true, |max| area <= max)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_bound(key: &str, value: &Option<String>) -> Result<Option<f64>> {
    let Some(raw) = active(value) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(Some(bound)),
        _ => Err(FraError::InvalidParameter {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(state: &str, status: &str, area: Option<f64>) -> ClaimRecord {
        let properties = json!({
            "claim_id": format!("{state}-{status}"),
            "state": state,
            "status": status,
            "claim_area_ha": area,
        });
        ClaimRecord::from_properties(properties.as_object().cloned().unwrap(), None)
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());

        let filter = criteria.compile().unwrap();
        assert!(filter.is_unconstrained());
        assert!(filter.matches(&record("Odisha", "approved", None)));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let criteria =
            FilterCriteria::from_pairs([("state", ""), ("status", "   "), ("claim_area_min", "")]);
        assert!(criteria.is_empty());
        assert!(criteria.compile().unwrap().is_unconstrained());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut criteria = FilterCriteria::new();
        assert!(!criteria.set("page", "2"));
        assert!(criteria.set("district", "Koraput"));
        assert_eq!(criteria.district.as_deref(), Some("Koraput"));
    }

    #[test]
    fn test_equality_and_semantics() {
        let filter = FilterCriteria::new()
            .with(ClaimField::State, "Odisha")
            .with(ClaimField::Status, "approved")
            .compile()
            .unwrap();

        assert!(filter.matches(&record("Odisha", "approved", Some(1.0))));
        assert!(!filter.matches(&record("Odisha", "submitted", Some(1.0))));
        assert!(!filter.matches(&record("Jharkhand", "approved", Some(1.0))));
    }

    #[test]
    fn test_area_bounds_are_inclusive() {
        let filter = FilterCriteria::new().with_area_min(2.0).with_area_max(4.0).compile().unwrap();

        assert!(filter.matches(&record("X", "approved", Some(2.0))));
        assert!(filter.matches(&record("X", "approved", Some(4.0))));
        assert!(!filter.matches(&record("X", "approved", Some(4.01))));
        assert!(!filter.matches(&record("X", "approved", None)));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let filter = FilterCriteria::new().with_area_min(5.0).with_area_max(1.0).compile().unwrap();
        assert!(!filter.matches(&record("X", "approved", Some(3.0))));
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let criteria = FilterCriteria::from_pairs([("claim_area_max", "ten")]);
        let err = criteria.compile().unwrap_err();

        match err {
            FraError::InvalidParameter { key, value } => {
                assert_eq!(key, "claim_area_max");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_bound_is_rejected() {
        let criteria = FilterCriteria::from_pairs([("claim_area_min", "NaN")]);
        assert!(matches!(criteria.compile(), Err(FraError::InvalidParameter { .. })));
    }

    #[test]
    fn test_applied_echo() {
        let criteria = FilterCriteria::from_pairs([
            ("state", "Odisha"),
            ("village", ""),
            ("claim_area_min", "1.5"),
            ("unknown", "x"),
        ]);

        let applied = criteria.applied();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied["state"], "Odisha");
        assert_eq!(applied["claim_area_min"], "1.5");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let criteria: FilterCriteria =
            serde_json::from_value(json!({ "fra_type": "CFR", "sort": "desc" })).unwrap();
        assert_eq!(criteria.fra_type.as_deref(), Some("CFR"));
    }
}
