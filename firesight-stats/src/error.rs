#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Empty sample")]
    EmptySample,

    #[error("Degenerate regression: predictor has zero variance")]
    DegenerateRegression,

    #[error("Predictor length ({x_len}) does not match response length ({y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
}
