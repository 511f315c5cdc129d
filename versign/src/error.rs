//! Error type for file and batch processing

use std::path::PathBuf;
use thiserror::Error;

/// Errors from [`process_file`](crate::process_file)
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding or encoding failed
    #[error(transparent)]
    Io(#[from] versign_io::IoError),

    /// Extraction failed
    #[error(transparent)]
    Features(#[from] versign_features::FeatureError),

    /// A batch input has no file name to reuse for its output
    #[error("input {0} has no file name")]
    NoFileName(PathBuf),

    /// The output directory could not be created
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for file and batch processing
pub type Result<T> = std::result::Result<T, Error>;
