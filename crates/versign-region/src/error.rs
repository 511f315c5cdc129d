//! Error types for versign-region

use thiserror::Error;
use versign_core::Bounds;

/// Errors that can occur during region analysis
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] versign_core::Error),

    /// A statistic was requested over a zero-area rectangle
    #[error("empty region: {0}")]
    EmptyRegion(Bounds),

    /// The rectangle does not lie within the image
    #[error("region {bounds} outside {width}x{height} image")]
    OutOfBounds {
        bounds: Bounds,
        width: u32,
        height: u32,
    },

    /// No sample in the image is dark enough to count as ink
    #[error("no ink detected: no sample below {threshold}")]
    NoInkDetected { threshold: u8 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Reject bounds that do not fit inside `pix`.
pub(crate) fn check_bounds(pix: &versign_core::Pix, bounds: &Bounds) -> RegionResult<()> {
    if bounds.left > bounds.right
        || bounds.top > bounds.bottom
        || !bounds.fits_within(pix.width(), pix.height())
    {
        return Err(RegionError::OutOfBounds {
            bounds: *bounds,
            width: pix.width(),
            height: pix.height(),
        });
    }
    Ok(())
}
