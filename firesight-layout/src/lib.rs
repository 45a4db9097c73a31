pub mod error;
pub mod measurement;
pub mod rtree;
pub mod spiral;
pub mod word_cloud;

pub use error::LayoutError;
pub use word_cloud::{layout, PlacedWord, WordLayout, WordLayoutConfig, WordLayoutEngine};
