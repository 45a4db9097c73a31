use firesight_common::filter::paired_sample;
use firesight_common::Record;
use firesight_stats::error::StatsError;
use firesight_stats::regression::fit;
use firesight_stats::RegressionResult;
use serde::Serialize;

use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionPlotData {
    /// Every record with both fields present, in record order
    pub points: Vec<(f64, f64)>,
    pub fit: Option<RegressionResult>,
    /// Fitted line at the smallest and largest observed x
    pub line: Option<[(f64, f64); 2]>,
    pub x_max: f64,
    pub y_max: f64,
}

/// Scatter of `y_field` against `x_field` with its least-squares line.
///
/// When the fit is degenerate, or there are no points, the line is omitted and
/// the points are still returned.
pub fn regression_plot_data(
    records: &[Record],
    x_field: &str,
    y_field: &str,
) -> Result<RegressionPlotData, ChartError> {
    let points = paired_sample(records, x_field, y_field);

    let fit = match fit(&points) {
        Ok(result) => Some(result),
        Err(err @ (StatsError::DegenerateRegression | StatsError::EmptySample)) => {
            tracing::warn!(points = points.len(), "skipping regression line: {err}");
            None
        }
        Err(err) => return Err(err.into()),
    };
    let line = fit.and_then(|f| f.segment(&points));

    let x_max = points.iter().map(|p| p.0).fold(0.0, f64::max);
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);

    Ok(RegressionPlotData {
        points,
        fit,
        line,
        x_max,
        y_max,
    })
}
