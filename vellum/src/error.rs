//! Layout error types.

use thiserror::Error;

/// Failure reported by the document layout engine.
///
/// The cache never recovers from these; they propagate out of whichever
/// query forced the render.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Engine(String),

    #[error("invalid texture size: {width}x{height}")]
    Texture { width: i32, height: i32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
