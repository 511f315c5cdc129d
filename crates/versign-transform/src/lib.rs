//! versign-transform - Geometric normalization for signature images
//!
//! Signatures arrive at arbitrary resolutions. Before decomposition every
//! cropped signature is resampled to a canonical width so that features
//! computed on different scans are comparable.
//!
//! Scaling uses nearest-neighbour sampling, which never introduces new
//! sample values: a binary image stays binary.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{MAX_SCALED_PIXELS, scale_by_sampling, scale_to_width, scaled_height};
