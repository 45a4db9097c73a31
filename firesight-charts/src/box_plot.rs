use firesight_common::filter::positive_sample;
use firesight_common::Record;
use firesight_stats::summary::summarize;
use firesight_stats::FiveNumberSummary;
use serde::Serialize;

use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotGroup {
    pub label: String,
    /// Number of strictly positive values summarized
    pub sample_size: usize,
    /// `None` when no record has a positive value, in which case the box is skipped
    pub summary: Option<FiveNumberSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotData {
    pub groups: Vec<BoxPlotGroup>,
    /// Largest value across every group's sample, 0 when all are empty
    pub y_max: f64,
}

/// Summarizes the strictly positive values of each `(label, field)` measure.
///
/// Zero counts are left out of every sample. An incident without casualties
/// says nothing about how casualty counts spread.
pub fn box_plot_data(records: &[Record], measures: &[(&str, &str)]) -> Result<BoxPlotData, ChartError> {
    let mut groups = Vec::with_capacity(measures.len());
    let mut y_max: f64 = 0.0;

    for (label, field) in measures {
        let sample = positive_sample(records, field);
        let summary = if sample.is_empty() {
            tracing::warn!(group = label, "no positive values, skipping box");
            None
        } else {
            let summary = summarize(&sample)?;
            y_max = y_max.max(summary.max);
            Some(summary)
        };
        groups.push(BoxPlotGroup {
            label: label.to_string(),
            sample_size: sample.len(),
            summary,
        });
    }

    Ok(BoxPlotData { groups, y_max })
}
