//! versign-region - Region statistics for signature images
//!
//! The building blocks the quadrant extractor runs on every region:
//!
//! - **Thresholding** - midrange `(min + max) / 2` of a region
//! - **Binarization** - grayscale to strict ink / background
//! - **Ink localisation** - tight bounding box of the ink
//! - **Centroid** - ink center of mass with a midpoint fallback
//! - **Transitions** - scan-order ink-to-background count
//!
//! # Examples
//!
//! ```
//! use versign_core::{Bounds, Pix};
//! use versign_region::{DEFAULT_INK_THRESHOLD, binarize, ink_bounding_box, ink_centroid};
//!
//! let mut pm = Pix::new_filled(50, 30, 230).unwrap().to_mut();
//! for x in 10..20 {
//!     pm.set_pixel(x, 12, 40).unwrap();
//! }
//! let gray: Pix = pm.into();
//!
//! let bin = binarize(&gray).unwrap();
//! let bb = ink_bounding_box(&bin.pix, DEFAULT_INK_THRESHOLD).unwrap();
//! assert_eq!((bb.left, bb.right, bb.top, bb.bottom), (10, 19, 12, 12));
//!
//! let c = ink_centroid(&bin.pix, &Bounds::full(&bin.pix)).unwrap();
//! assert_eq!((c.x, c.y, c.count), (14.5, 12.0, 10));
//! ```

pub mod binarize;
pub mod centroid;
pub mod error;
pub mod locate;
pub mod threshold;
pub mod transitions;

pub use versign_core;

pub use binarize::{Binarized, binarize, binarize_with_threshold};
pub use centroid::{InkCentroid, ink_centroid};
pub use error::{RegionError, RegionResult};
pub use locate::{DEFAULT_INK_THRESHOLD, ink_bounding_box};
pub use threshold::{global_threshold, intensity_range, region_threshold};
pub use transitions::count_transitions;
