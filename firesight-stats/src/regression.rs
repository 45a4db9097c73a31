use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::StatsError;

/// Best-fit line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The fitted line evaluated at the smallest and largest observed `x`.
    ///
    /// Returns `None` for an empty sample.
    pub fn segment(&self, pairs: &[(f64, f64)]) -> Option<[(f64, f64); 2]> {
        let (x_min, x_max) = match pairs.iter().map(|(x, _)| OrderedFloat(*x)).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(x) => (x.into_inner(), x.into_inner()),
            MinMaxResult::MinMax(lo, hi) => (lo.into_inner(), hi.into_inner()),
        };
        Some([(x_min, self.predict(x_min)), (x_max, self.predict(x_max))])
    }
}

/// Ordinary least squares over `(x, y)` pairs.
///
/// Pairs must already exclude records with an absent predictor or response.
/// A sample whose `x` values are all equal has no defined slope and yields
/// [`StatsError::DegenerateRegression`].
pub fn fit(pairs: &[(f64, f64)]) -> Result<RegressionResult, StatsError> {
    if pairs.is_empty() {
        return Err(StatsError::EmptySample);
    }
    // Equal x values may not average back to themselves exactly.
    let x0 = pairs[0].0;
    if pairs.iter().all(|(x, _)| *x == x0) {
        return Err(StatsError::DegenerateRegression);
    }

    let n = pairs.len() as f64;
    let x_mean = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let y_mean = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (numerator, denominator) = pairs.iter().fold((0.0, 0.0), |(num, den), (x, y)| {
        let dx = x - x_mean;
        (num + dx * (y - y_mean), den + dx * dx)
    });

    if denominator == 0.0 {
        return Err(StatsError::DegenerateRegression);
    }

    let slope = numerator / denominator;
    Ok(RegressionResult {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Parallel-array form of [`fit`]
pub fn fit_xy(xs: &[f64], ys: &[f64]) -> Result<RegressionResult, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    let pairs: Vec<_> = xs.iter().copied().zip(ys.iter().copied()).collect();
    fit(&pairs)
}
