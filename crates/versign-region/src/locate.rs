//! Ink localisation
//!
//! Finds the tight, closed bounding box around every ink sample of a
//! binarized signature.

use crate::error::{RegionError, RegionResult};
use versign_core::{BoundingBox, Pix};

/// Samples strictly below this level count as ink when locating the
/// signature.
pub const DEFAULT_INK_THRESHOLD: u8 = 128;

/// Locate the closed bounding box of all samples below `ink_threshold`.
///
/// A single ink sample at `(px, py)` yields `(px, px, py, py)`.
///
/// # Errors
///
/// Returns [`RegionError::NoInkDetected`] if no sample is below
/// `ink_threshold`.
///
/// # Examples
///
/// ```
/// use versign_core::Pix;
/// use versign_region::{DEFAULT_INK_THRESHOLD, ink_bounding_box};
///
/// let mut pm = Pix::new_filled(10, 10, 255).unwrap().to_mut();
/// pm.set_pixel(4, 6, 0).unwrap();
/// let pix: Pix = pm.into();
///
/// let bb = ink_bounding_box(&pix, DEFAULT_INK_THRESHOLD).unwrap();
/// assert_eq!((bb.left, bb.right, bb.top, bb.bottom), (4, 4, 6, 6));
/// ```
pub fn ink_bounding_box(pix: &Pix, ink_threshold: u8) -> RegionResult<BoundingBox> {
    let mut found: Option<BoundingBox> = None;

    for y in 0..pix.height() {
        let row = pix.row_data(y);
        let Some(first) = row.iter().position(|&v| v < ink_threshold) else {
            continue;
        };
        // position() found a match, so rposition() will too
        let last = row.iter().rposition(|&v| v < ink_threshold).unwrap_or(first);
        let (first, last) = (first as u32, last as u32);

        found = Some(match found {
            None => BoundingBox {
                left: first,
                right: last,
                top: y,
                bottom: y,
            },
            Some(bb) => BoundingBox {
                left: bb.left.min(first),
                right: bb.right.max(last),
                top: bb.top,
                bottom: y,
            },
        });
    }

    found.ok_or(RegionError::NoInkDetected {
        threshold: ink_threshold,
    })
}
