use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::StatsError;

/// Min, quartiles and max of a non-empty numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes the five-number summary of `values`.
///
/// Quartiles use linear interpolation between order statistics (R-7). The
/// sample is expected to be filtered by the caller already; this function does
/// not drop zeros or negatives.
pub fn summarize(values: &[f64]) -> Result<FiveNumberSummary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));

    let quantile = |p| quantile_sorted(&sorted, p).ok_or(StatsError::EmptySample);
    Ok(FiveNumberSummary {
        min: sorted[0],
        q1: quantile(0.25)?,
        median: quantile(0.5)?,
        q3: quantile(0.75)?,
        max: sorted[sorted.len() - 1],
    })
}

/// The `p`-quantile of an ascending sample.
///
/// Computes `h = (n - 1) * p` and interpolates between the elements at
/// `floor(h)` and `ceil(h)`. Returns `None` for an empty sample or `p` outside
/// `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - h.floor();
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
