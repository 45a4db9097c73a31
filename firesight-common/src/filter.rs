//! Sample extraction over records.
//!
//! These functions decide which coerced values reach a statistic. They run
//! upstream of the statistics themselves, which only ever see clean samples.

use indexmap::IndexSet;

use crate::record::{Record, RecordSet};

/// Coerced values of `field` that are strictly positive.
///
/// Absent, zero and negative values are excluded. Box-plot casualty samples
/// use this policy: incidents with zero casualties do not inform the spread.
pub fn positive_sample(records: &[Record], field: &str) -> Vec<f64> {
    records
        .iter()
        .filter_map(|r| r.number(field).value())
        .filter(|v| *v > 0.0)
        .collect()
}

/// `(x, y)` pairs for records where both fields coerce to numbers
pub fn paired_sample(records: &[Record], x_field: &str, y_field: &str) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| Some((r.number(x_field).value()?, r.number(y_field).value()?)))
        .collect()
}

/// Distinct raw values of `field` in first-seen order. Absent values are skipped.
pub fn distinct_values(records: &[Record], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.raw(field))
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Records whose raw value of `field` equals `value`
pub fn filter_by_value(records: &[Record], field: &str, value: &str) -> RecordSet {
    records
        .iter()
        .filter(|r| r.raw(field) == Some(value))
        .cloned()
        .collect()
}
