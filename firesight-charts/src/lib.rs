pub mod bar;
pub mod box_plot;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod regression_plot;
pub mod scatter;
pub mod word_cloud;

pub use config::{FieldMapping, PipelineConfig};
pub use error::ChartError;
pub use pipeline::{ChartPipeline, ChartSet};
