use firesight_common::Record;
use firesight_stats::aggregate::{aggregate, max_total, without_empty_key};
use firesight_stats::GroupSummary;
use serde::Serialize;

/// Per-group totals for a bar chart, in first-seen group order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartData {
    pub groups: Vec<GroupSummary>,
    /// Upper end of the value axis; the lower end is always 0
    pub y_max: f64,
}

pub fn bar_chart_data(
    records: &[Record],
    key_field: &str,
    measure_field: &str,
    drop_empty_keys: bool,
) -> BarChartData {
    let mut groups = aggregate(records, key_field, measure_field);
    if drop_empty_keys {
        groups = without_empty_key(groups);
    }
    let y_max = max_total(&groups).unwrap_or(0.0);
    BarChartData { groups, y_max }
}
