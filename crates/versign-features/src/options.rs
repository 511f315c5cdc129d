//! Extractor configuration

use crate::error::{FeatureError, FeatureResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use versign_region::DEFAULT_INK_THRESHOLD;

/// Width every cropped signature is resampled to
pub const DEFAULT_CANONICAL_WIDTH: u32 = 2048;

/// Default recursion depth (64 leaves)
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Deepest recursion accepted by [`ExtractorOptions::validate`]
pub const MAX_SUPPORTED_DEPTH: u32 = 8;

/// Options for [`QuadrantFeatureExtractor`](crate::QuadrantFeatureExtractor)
///
/// Missing fields take their defaults when deserialized, so
/// `{"max_depth": 2}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Width of the normalized image
    pub canonical_width: u32,
    /// Recursion depth; the feature set holds `4^max_depth` leaves
    pub max_depth: u32,
    /// Samples below this level count as ink when locating the signature
    pub ink_threshold: u8,
    /// Return an annotated copy of the normalized image
    pub annotate: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            canonical_width: DEFAULT_CANONICAL_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
            ink_threshold: DEFAULT_INK_THRESHOLD,
            annotate: false,
        }
    }
}

impl ExtractorOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canonical width
    pub fn with_canonical_width(mut self, width: u32) -> Self {
        self.canonical_width = width;
        self
    }

    /// Set the recursion depth
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the ink threshold used for localisation
    pub fn with_ink_threshold(mut self, threshold: u8) -> Self {
        self.ink_threshold = threshold;
        self
    }

    /// Enable or disable the annotated output image
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Check every option is in range.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidConfiguration`] for a zero canonical
    /// width, a depth above [`MAX_SUPPORTED_DEPTH`], or an ink threshold
    /// of 0 (nothing could ever be ink).
    pub fn validate(&self) -> FeatureResult<()> {
        if self.canonical_width == 0 {
            return Err(FeatureError::InvalidConfiguration(
                "canonical_width must be positive".to_string(),
            ));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(FeatureError::InvalidConfiguration(format!(
                "max_depth {} exceeds {}",
                self.max_depth, MAX_SUPPORTED_DEPTH
            )));
        }
        if self.ink_threshold == 0 {
            return Err(FeatureError::InvalidConfiguration(
                "ink_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of leaves a feature set built with these options holds.
    pub fn leaf_count(&self) -> usize {
        4usize.pow(self.max_depth)
    }

    /// Parse and validate options from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::ConfigParse`] for malformed JSON and the
    /// [`validate`](Self::validate) errors otherwise.
    pub fn from_json_str(json: &str) -> FeatureResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a JSON file.
    ///
    /// # Errors
    ///
    /// As [`from_json_str`](Self::from_json_str), plus
    /// [`FeatureError::ConfigRead`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> FeatureResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FeatureError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::ConfigParse`] if serialization fails.
    pub fn to_json_string(&self) -> FeatureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
