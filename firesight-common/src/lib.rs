pub mod filter;
pub mod record;
pub mod value;

pub use record::{Record, RecordSet};
pub use value::CoercedValue;
