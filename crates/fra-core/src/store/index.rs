//! Group-by helpers over the record collection.
//!
//! Groups hold record indices in ascending order, so every aggregate sees
//! its records in dataset order.

use std::collections::BTreeMap;

use crate::models::ClaimRecord;

/// Group record indices by a key; records without a key are skipped
pub fn group_indices<K, F>(records: &[ClaimRecord], key: F) -> BTreeMap<K, Vec<usize>>
where
    K: Ord,
    F: Fn(&ClaimRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(k) = key(record) {
            groups.entry(k).or_default().push(idx);
        }
    }
    groups
}

/// Sum of known areas over the given records
pub fn sum_area(records: &[ClaimRecord], indices: &[usize]) -> f64 {
    indices.iter().filter_map(|&i| records[i].claim_area_ha).sum()
}

/// Number of the given records satisfying a predicate
pub fn count_where<F>(records: &[ClaimRecord], indices: &[usize], predicate: F) -> usize
where
    F: Fn(&ClaimRecord) -> bool,
{
    indices.iter().filter(|&&i| predicate(&records[i])).count()
}

/// Occurrences of each distinct key among the given records
pub fn value_counts<F>(records: &[ClaimRecord], indices: &[usize], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&ClaimRecord) -> Option<&str>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for &i in indices {
        if let Some(k) = key(&records[i]) {
            *counts.entry(k.to_string()).or_default() += 1;
        }
    }
    counts
}

/// Round to two decimal places, exact halves to even (0.125 -> 0.12)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `count` as a percentage of `total`, 0 when there is nothing to divide by
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, state: Option<&str>, area: Option<f64>) -> ClaimRecord {
        let properties = json!({ "claim_id": id, "state": state, "claim_area_ha": area });
        ClaimRecord::from_properties(properties.as_object().cloned().unwrap(), None)
    }

    #[test]
    fn test_group_indices_keeps_dataset_order() {
        let records = vec![
            record("a", Some("Y"), None),
            record("b", Some("X"), None),
            record("c", Some("Y"), None),
            record("d", None, None),
        ];

        let groups = group_indices(&records, |r| r.state.clone());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["X"], vec![1]);
        assert_eq!(groups["Y"], vec![0, 2]);
    }

    #[test]
    fn test_sum_area_skips_missing() {
        let records = vec![
            record("a", None, Some(1.5)),
            record("b", None, None),
            record("c", None, Some(2.0)),
        ];
        assert_eq!(sum_area(&records, &[0, 1, 2]), 3.5);
        assert_eq!(sum_area(&records, &[1]), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        assert_eq!(percentage(1, 800), 0.12);
        assert_eq!(percentage(3, 800), 0.38);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(1.234), 1.23);
    }
}
