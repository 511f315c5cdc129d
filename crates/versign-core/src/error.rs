//! Error types for versign-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// versign-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw buffer length does not match the requested dimensions
    #[error("buffer length {actual} does not match {width}x{height} image")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Rectangle with reversed edges
    #[error("invalid bounds: left={left} right={right} top={top} bottom={bottom}")]
    InvalidBounds {
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
