//! Cropping
//!
//! Both entry points copy the selected samples into a new image; the
//! source is never modified.

use super::{Pix, PixMut};
use crate::bounds::Bounds;
use crate::error::{Error, Result};

impl Pix {
    /// Copy the `w` x `h` rectangle whose top-left corner is `(x, y)`.
    ///
    /// A rectangle hanging over the right or bottom edge is cut back to
    /// the image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for a zero-sized rectangle or an origin
    /// outside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use versign_core::Pix;
    ///
    /// let page = Pix::new(100, 80).unwrap();
    /// let crop = page.clip_rectangle(10, 20, 50, 40).unwrap();
    /// assert_eq!((crop.width(), crop.height()), (50, 40));
    ///
    /// let corner = page.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!((corner.width(), corner.height()), (20, 20));
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        let (width, height) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "cannot crop an empty {}x{} rectangle",
                w, h
            )));
        }
        if x >= width || y >= height {
            return Err(Error::InvalidParameter(format!(
                "crop origin ({}, {}) lies outside the {}x{} image",
                x, y, width, height
            )));
        }

        let cw = w.min(width - x);
        let ch = h.min(height - y);
        let cols = x as usize..(x + cw) as usize;

        let mut pixd = PixMut::new_filled(cw, ch, 0)?;
        for dy in 0..ch {
            pixd.row_data_mut(dy)
                .copy_from_slice(&self.row_data(y + dy)[cols.clone()]);
        }

        Ok(pixd.into())
    }

    /// Extract the half-open region described by `bounds`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` is empty or starts outside the image.
    pub fn clip_bounds(&self, bounds: &Bounds) -> Result<Pix> {
        self.clip_rectangle(bounds.left, bounds.top, bounds.width(), bounds.height())
    }
}
