//! Construction-time validation errors for rendering types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreenSize { width: u32, height: u32 },

    #[error("perspective strength must be positive and finite, got {0}")]
    InvalidPerspectiveStrength(f32),

    #[error("color cycle duration must be positive and finite, got {0}s")]
    InvalidCycleDuration(f64),

    #[error("solid size must be positive and finite, got {0}")]
    InvalidSolidSize(f32),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
