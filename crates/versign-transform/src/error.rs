//! Error types for versign-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] versign_core::Error),

    /// Requested output size has a zero dimension
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    /// Requested output holds more samples than [`MAX_SCALED_PIXELS`](crate::MAX_SCALED_PIXELS)
    #[error("target size {width}x{height} exceeds {max} pixels")]
    TargetTooLarge { width: u32, height: u32, max: u64 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
