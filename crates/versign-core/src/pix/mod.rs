//! Grayscale signature image
//!
//! `Pix` holds a single-channel 8-bit image. Signature images are either
//! grayscale (any value in `0..=255`) or binary, in which case every
//! sample is exactly [`INK`] or [`BACKGROUND`].
//!
//! # Layout
//!
//! - One byte per sample, rows stored top to bottom
//! - No row padding: the sample at `(x, y)` lives at `y * width + x`
//!
//! # Sharing
//!
//! Cloning a `Pix` shares its samples. Drawing and other edits go through
//! `PixMut`, obtained with [`Pix::try_into_mut`] (no copy when unshared)
//! or [`Pix::to_mut`] (always a copy); `PixMut` converts back with `into()`.

mod access;
mod clip;
pub mod graphics;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Sample value of a stroke pixel in a binary image.
pub const INK: u8 = 0;

/// Sample value of a paper pixel in a binary image.
pub const BACKGROUND: u8 = 255;

/// Sample storage shared by `Pix` and owned by `PixMut`
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    /// Row-major samples, `width * height` bytes
    data: Vec<u8>,
}

impl PixData {
    fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(PixData {
            width,
            height,
            data: vec![value; len],
        })
    }
}

/// Read-only 8-bit image.
///
/// Every stage of the pipeline takes and returns `Pix`; clones are cheap.
///
/// # Examples
///
/// ```
/// use versign_core::{BACKGROUND, Pix};
///
/// let pix = Pix::new_filled(640, 480, BACKGROUND).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.get_pixel(10, 10), Some(BACKGROUND));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Image of the given size with every sample 0.
    ///
    /// The image data is initialized to zero, which reads as ink in a
    /// binary image. Use [`Pix::new_filled`] for a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Image of the given size with every sample set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::filled(width, height, value)?),
        })
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// All samples, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// How many `Pix` handles share these samples.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// True when both images have the same dimensions.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// True when every sample is [`INK`] or [`BACKGROUND`].
    pub fn is_binary(&self) -> bool {
        self.inner
            .data
            .iter()
            .all(|&v| v == INK || v == BACKGROUND)
    }

    /// Copy the samples into a new, unshared image.
    pub fn deep_clone(&self) -> Self {
        self.to_mut().into()
    }

    /// Take ownership of the samples without copying.
    ///
    /// Gives `self` back unchanged if another handle still shares them.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Writable copy of the samples.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData::clone(&self.inner),
        }
    }
}

/// Writable image, used for drawing and while building a result.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Writable image with every sample set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::filled(width, height, value)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Writable samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}
