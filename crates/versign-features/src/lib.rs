//! versign-features - Quadrant feature extraction for signatures
//!
//! Turns a grayscale signature into a fixed-shape set of per-region shape
//! descriptors:
//!
//! - [`QuadrantFeatureExtractor`] - binarize, crop, normalize, decompose
//! - [`FeatureSet`] / [`Segment`] - leaf descriptors keyed by quadrant label
//! - [`ExtractorOptions`] - serde-backed configuration
//! - [`ExtractionObserver`] - milestone callbacks, [`LogObserver`] by default
//!
//! # Examples
//!
//! ```
//! use versign_core::Pix;
//! use versign_features::{ExtractorOptions, QuadrantFeatureExtractor};
//!
//! let mut pm = Pix::new_filled(80, 40, 240).unwrap().to_mut();
//! for i in 0..60 {
//!     pm.set_pixel(10 + i, 10 + i / 3, 15).unwrap();
//! }
//! let pix: Pix = pm.into();
//!
//! let extractor =
//!     QuadrantFeatureExtractor::new(ExtractorOptions::new().with_canonical_width(256)).unwrap();
//! let features = extractor.extract(&pix).unwrap().features;
//! assert_eq!(features.len(), 64);
//! assert_eq!(features.to_vector().len(), 64 * 7);
//! ```

pub mod annotate;
pub mod error;
pub mod extractor;
pub mod feature_set;
pub mod observer;
pub mod options;
pub mod segment;

pub use annotate::{CENTROID_LINE_VALUE, annotate, draw_leaf_marks, draw_partition_cross};
pub use error::{FeatureError, FeatureResult};
pub use extractor::{Extraction, QuadrantFeatureExtractor};
pub use feature_set::FeatureSet;
pub use observer::{ExtractionObserver, LogObserver};
pub use options::{
    DEFAULT_CANONICAL_WIDTH, DEFAULT_MAX_DEPTH, ExtractorOptions, MAX_SUPPORTED_DEPTH,
};
pub use segment::{Quadrant, Segment, SegmentFeatures};
