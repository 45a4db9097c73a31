use firesight_common::Record;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

/// The reduced value of one group of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Raw key field value shared by the group. Absent keys use `""`.
    pub key: String,
    /// Sum of the coerced measure, with absent measures contributing 0
    pub total: f64,
    /// Number of member records, including those whose measure is absent
    pub count: usize,
}

/// Groups records by the raw value of `key_field` and sums `measure_field` per group.
///
/// Groups are returned in order of first occurrence. Records with an absent key
/// are kept under the empty-string key; callers filter it out for display.
pub fn aggregate(records: &[Record], key_field: &str, measure_field: &str) -> Vec<GroupSummary> {
    let mut groups: IndexMap<&str, (f64, usize)> = IndexMap::new();
    for record in records {
        let entry = groups.entry(record.key(key_field)).or_insert((0.0, 0));
        entry.0 += record.number(measure_field).or_zero();
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(key, (total, count))| GroupSummary {
            key: key.to_string(),
            total,
            count,
        })
        .collect()
}

/// Counts member records per raw value of `key_field`, in first-seen order.
///
/// `total` carries the same value as `count` so frequency groups can feed any
/// consumer of [`GroupSummary`] totals.
pub fn count_by(records: &[Record], key_field: &str) -> Vec<GroupSummary> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.key(key_field)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| GroupSummary {
            key: key.to_string(),
            total: count as f64,
            count,
        })
        .collect()
}

pub fn sort_by_key(groups: &mut [GroupSummary]) {
    groups.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Sorts by descending total. Ties keep their existing relative order.
pub fn sort_by_total_desc(groups: &mut [GroupSummary]) {
    groups.sort_by_key(|g| Reverse(OrderedFloat(g.total)));
}

/// Largest group total, or `None` for no groups
pub fn max_total(groups: &[GroupSummary]) -> Option<f64> {
    groups
        .iter()
        .map(|g| OrderedFloat(g.total))
        .max()
        .map(|v| v.into_inner())
}

/// Drops the group collecting records with an absent key
pub fn without_empty_key(groups: Vec<GroupSummary>) -> Vec<GroupSummary> {
    groups.into_iter().filter(|g| !g.key.is_empty()).collect()
}
