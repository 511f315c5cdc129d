//! Pixel access functions
//!
//! Low-level functions for getting and setting individual samples.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Get a sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y * width + x` is past the end of the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }
}

impl PixMut {
    /// Get a sample at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a sample without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y * width + x` is past the end of the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Pix, PixMut};

    #[test]
    fn test_get_set_pixel() {
        let mut pm = PixMut::new_filled(10, 5, 255).unwrap();
        pm.set_pixel(9, 4, 17).unwrap();
        assert_eq!(pm.get_pixel(9, 4), Some(17));
        assert_eq!(pm.get_pixel(10, 4), None);

        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(9, 4), Some(17));
        assert_eq!(pix.get_pixel(0, 0), Some(255));
        assert_eq!(pix.get_pixel(0, 5), None);
        assert_eq!(pix.data()[4 * 10 + 9], 17);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut pm = PixMut::new_filled(3, 3, 0).unwrap();
        let err = pm.set_pixel(3, 0, 1).unwrap_err();
        assert!(matches!(err, Error::PixelOutOfBounds { x: 3, y: 0, .. }));
    }
}
