//! Bounds and BoundingBox - Rectangle regions
//!
//! Two rectangle flavours occur when analysing a signature:
//!
//! - [`Bounds`] is half-open. It covers columns `left..right` and rows
//!   `top..bottom`, and is what every region scan operates on.
//! - [`BoundingBox`] is closed. Both edges are inclusive, so a single ink
//!   pixel at `(px, py)` has the box `(px, px, py, py)`.
//!
//! Both are small `Copy` types.

use crate::error::{Error, Result};
use crate::pix::Pix;

/// A half-open rectangle over image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// First column inside the region
    pub left: u32,
    /// First column past the region
    pub right: u32,
    /// First row inside the region
    pub top: u32,
    /// First row past the region
    pub bottom: u32,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `left > right` or `top > bottom`.
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Result<Self> {
        if left > right || top > bottom {
            return Err(Error::InvalidBounds {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Bounds covering the whole image.
    pub fn full(pix: &Pix) -> Self {
        Self {
            left: 0,
            right: pix.width(),
            top: 0,
            bottom: pix.height(),
        }
    }

    /// Number of columns covered
    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Number of rows covered
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Number of samples covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the region is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left == self.right || self.top == self.bottom
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check that the region lies within a `width` x `height` image.
    #[inline]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }

    /// Arithmetic midpoint `((left + right) / 2, (top + bottom) / 2)`.
    pub fn midpoint(&self) -> (f64, f64) {
        (
            (self.left as f64 + self.right as f64) / 2.0,
            (self.top as f64 + self.bottom as f64) / 2.0,
        )
    }

    /// Split into four quadrants around `(sx, sy)`.
    ///
    /// The split point is clamped into the region first. Quadrants are
    /// returned in reading order: top-left, top-right, bottom-left,
    /// bottom-right. Any of them may be empty.
    pub fn split_at(&self, sx: u32, sy: u32) -> [Bounds; 4] {
        let sx = sx.clamp(self.left, self.right);
        let sy = sy.clamp(self.top, self.bottom);
        [
            Bounds {
                left: self.left,
                right: sx,
                top: self.top,
                bottom: sy,
            },
            Bounds {
                left: sx,
                right: self.right,
                top: self.top,
                bottom: sy,
            },
            Bounds {
                left: self.left,
                right: sx,
                top: sy,
                bottom: self.bottom,
            },
            Bounds {
                left: sx,
                right: self.right,
                top: sy,
                bottom: self.bottom,
            },
        ]
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// A closed rectangle: both `right` and `bottom` are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Number of columns covered, counting both edges
    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    /// Number of rows covered, counting both edges
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Convert to the equivalent half-open [`Bounds`].
    pub fn to_bounds(&self) -> Bounds {
        Bounds {
            left: self.left,
            right: self.right + 1,
            top: self.top,
            bottom: self.bottom + 1,
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_new_rejects_reversed() {
        assert!(Bounds::new(5, 4, 0, 1).is_err());
        assert!(Bounds::new(0, 1, 3, 2).is_err());
        assert!(Bounds::new(4, 4, 2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_bounds_geometry() {
        let b = Bounds::new(10, 30, 5, 15).unwrap();
        assert_eq!(b.width(), 20);
        assert_eq!(b.height(), 10);
        assert_eq!(b.area(), 200);
        assert!(b.contains_point(10, 5));
        assert!(!b.contains_point(30, 5));
        assert!(!b.contains_point(10, 15));
        assert_eq!(b.midpoint(), (20.0, 10.0));
        assert!(b.fits_within(30, 15));
        assert!(!b.fits_within(29, 15));
    }

    #[test]
    fn test_midpoint_is_real_valued() {
        let b = Bounds::new(0, 5, 2, 3).unwrap();
        assert_eq!(b.midpoint(), (2.5, 2.5));
    }

    #[test]
    fn test_split_at_covers_region() {
        let b = Bounds::new(0, 10, 0, 8).unwrap();
        let q = b.split_at(4, 3);
        assert_eq!(q[0], Bounds::new(0, 4, 0, 3).unwrap());
        assert_eq!(q[1], Bounds::new(4, 10, 0, 3).unwrap());
        assert_eq!(q[2], Bounds::new(0, 4, 3, 8).unwrap());
        assert_eq!(q[3], Bounds::new(4, 10, 3, 8).unwrap());
        let total: u64 = q.iter().map(Bounds::area).sum();
        assert_eq!(total, b.area());
    }

    #[test]
    fn test_split_at_clamps() {
        let b = Bounds::new(5, 10, 5, 10).unwrap();
        let q = b.split_at(2, 20);
        assert!(q[0].is_empty());
        assert_eq!(q[1], Bounds::new(5, 10, 5, 10).unwrap());
        assert!(q[3].is_empty());
    }

    #[test]
    fn test_bounding_box_to_bounds() {
        let bb = BoundingBox {
            left: 3,
            right: 3,
            top: 7,
            bottom: 9,
        };
        assert_eq!(bb.width(), 1);
        assert_eq!(bb.height(), 3);
        assert_eq!(bb.to_bounds(), Bounds::new(3, 4, 7, 10).unwrap());
        assert_eq!(bb.to_string(), "(3, 3, 7, 9)");
    }
}
