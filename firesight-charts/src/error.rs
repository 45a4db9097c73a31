use firesight_layout::error::LayoutError;
use firesight_stats::error::StatsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Statistics error: `{0}`")]
    StatsError(#[from] StatsError),

    #[error("Layout error: `{0}`")]
    LayoutError(#[from] LayoutError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
