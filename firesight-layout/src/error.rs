use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Canvas must have a finite, positive size, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}
