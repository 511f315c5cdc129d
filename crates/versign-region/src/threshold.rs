//! Midrange threshold selection
//!
//! The binarization threshold of a signature scan is the midpoint of the
//! darkest and brightest sample: `(min + max) / 2`, rounded down. Paper
//! is assumed to be the brightest level and ink the darkest, so the
//! midpoint separates the two without a histogram.

use crate::error::{RegionError, RegionResult, check_bounds};
use versign_core::{Bounds, Pix};

/// Compute the midrange threshold of the samples inside `bounds`.
///
/// # Errors
///
/// - [`RegionError::OutOfBounds`] if `bounds` does not fit the image
/// - [`RegionError::EmptyRegion`] if `bounds` has zero area
///
/// # Examples
///
/// ```
/// use versign_core::{Bounds, Pix};
/// use versign_region::region_threshold;
///
/// let pix = Pix::from_raw(4, 1, vec![30, 200, 90, 120]).unwrap();
/// let t = region_threshold(&pix, &Bounds::full(&pix)).unwrap();
/// assert_eq!(t, 115);
/// ```
pub fn region_threshold(pix: &Pix, bounds: &Bounds) -> RegionResult<u8> {
    let (min, max) = intensity_range(pix, bounds)?;
    Ok(midrange(min, max))
}

/// Darkest and brightest sample inside `bounds`, as `(min, max)`.
///
/// # Errors
///
/// Same as [`region_threshold`].
pub fn intensity_range(pix: &Pix, bounds: &Bounds) -> RegionResult<(u8, u8)> {
    check_bounds(pix, bounds)?;
    if bounds.is_empty() {
        return Err(RegionError::EmptyRegion(*bounds));
    }

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let (l, r) = (bounds.left as usize, bounds.right as usize);
    for y in bounds.top..bounds.bottom {
        for &v in &pix.row_data(y)[l..r] {
            min = min.min(v);
            max = max.max(v);
        }
    }

    Ok((min, max))
}

#[inline]
pub(crate) fn midrange(min: u8, max: u8) -> u8 {
    ((min as u16 + max as u16) / 2) as u8
}

/// Compute the midrange threshold over the whole image.
///
/// # Errors
///
/// Never fails for a valid `Pix`; the `Result` mirrors
/// [`region_threshold`].
pub fn global_threshold(pix: &Pix) -> RegionResult<u8> {
    region_threshold(pix, &Bounds::full(pix))
}
