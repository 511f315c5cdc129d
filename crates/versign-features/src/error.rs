//! Error types for versign-features

use std::path::PathBuf;
use thiserror::Error;
use versign_region::RegionError;
use versign_transform::TransformError;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Extractor options out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Options file could not be read
    #[error("cannot read options file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Options JSON is malformed
    #[error("cannot parse options: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Normalization error
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] versign_core::Error),
}

impl FeatureError {
    /// True if the image holds no signature ink.
    pub fn is_no_ink(&self) -> bool {
        matches!(self, Self::Region(RegionError::NoInkDetected { .. }))
    }
}

/// Result type for feature extraction
pub type FeatureResult<T> = Result<T, FeatureError>;
