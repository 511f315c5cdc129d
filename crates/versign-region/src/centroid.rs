//! Ink center of mass
//!
//! The centroid of a region is the mean position of its ink samples
//! (value [`INK`]). A region without ink falls back to its arithmetic
//! midpoint so that recursive subdivision stays defined on empty
//! sub-regions.

use crate::error::{RegionError, RegionResult, check_bounds};
use versign_core::{Bounds, INK, Pix};

/// Center of mass of the ink inside a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkCentroid {
    /// Mean x coordinate of the ink samples
    pub x: f64,
    /// Mean y coordinate of the ink samples
    pub y: f64,
    /// Number of ink samples found
    pub count: u64,
}

impl InkCentroid {
    /// Fallback centroid for a region with no ink: its midpoint, count 0.
    pub fn midpoint(bounds: &Bounds) -> Self {
        let (x, y) = bounds.midpoint();
        Self { x, y, count: 0 }
    }

    /// Integer split point `(floor(x), floor(y))`.
    pub fn split_point(&self) -> (u32, u32) {
        (self.x.floor() as u32, self.y.floor() as u32)
    }

    /// True if the centroid came from the midpoint fallback.
    pub fn is_fallback(&self) -> bool {
        self.count == 0
    }
}

/// Compute the ink centroid of `bounds`.
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
/// use versign_region::ink_centroid;
///
/// let pix = Pix::new_filled(8, 8, 255).unwrap();
/// let c = ink_centroid(&pix, &Bounds::full(&pix)).unwrap();
/// assert_eq!((c.x, c.y, c.count), (4.0, 4.0, 0));
/// ```
pub fn ink_centroid(pix: &Pix, bounds: &Bounds) -> RegionResult<InkCentroid> {
    check_bounds(pix, bounds)?;
    if bounds.is_empty() {
        return Err(RegionError::EmptyRegion(*bounds));
    }

    let mut sum_x: u64 = 0;
    let mut sum_y: u64 = 0;
    let mut count: u64 = 0;
    let (l, r) = (bounds.left as usize, bounds.right as usize);
    for y in bounds.top..bounds.bottom {
        for (i, &v) in pix.row_data(y)[l..r].iter().enumerate() {
            if v == INK {
                sum_x += (l + i) as u64;
                sum_y += y as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Ok(InkCentroid::midpoint(bounds));
    }

    Ok(InkCentroid {
        x: sum_x as f64 / count as f64,
        y: sum_y as f64 / count as f64,
        count,
    })
}
