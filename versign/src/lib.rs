//! versign - Handwritten signature feature extraction
//!
//! Extracts a fixed-shape feature vector from a signature image for a
//! downstream verification classifier. The image is binarized, cropped to
//! its ink, resized to a canonical width and recursively split around its
//! ink centroid; every leaf of the resulting quadrant tree is described by
//! its aspect ratio, transition count, centroid, ink count, normalized
//! size and inclination angle.
//!
//! # Example
//!
//! ```
//! use versign::{ExtractorOptions, Pix, QuadrantFeatureExtractor};
//!
//! let mut pm = Pix::new_filled(120, 60, 250).unwrap().to_mut();
//! for x in 20..100 {
//!     pm.set_pixel(x, 30 + (x % 7), 10).unwrap();
//! }
//! let pix: Pix = pm.into();
//!
//! let extractor = QuadrantFeatureExtractor::new(
//!     ExtractorOptions::new().with_canonical_width(512).with_max_depth(2),
//! )
//! .unwrap();
//! let features = extractor.extract(&pix).unwrap().features;
//! assert_eq!(features.len(), 16);
//! ```
//!
//! File glue lives in [`process_file`] and [`process_batch`].

mod error;
mod process;

pub use error::{Error, Result};
pub use process::{BatchItem, process_batch, process_file};

// Core types used everywhere
pub use versign_core::*;

pub use versign_features::{
    Extraction, ExtractionObserver, ExtractorOptions, FeatureError, FeatureSet, LogObserver,
    QuadrantFeatureExtractor, Segment, SegmentFeatures,
};

// Domain crates as modules
pub use versign_features as features;
pub use versign_io as io;
pub use versign_region as region;
pub use versign_transform as transform;
