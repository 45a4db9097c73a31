pub mod aggregate;
pub mod error;
pub mod regression;
pub mod summary;

pub use aggregate::GroupSummary;
pub use error::StatsError;
pub use regression::RegressionResult;
pub use summary::FiveNumberSummary;
