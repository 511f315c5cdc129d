//! Global binarization
//!
//! Maps a grayscale signature to a strictly two-valued image: samples at
//! or below the threshold become [`INK`], brighter samples become
//! [`BACKGROUND`].

use crate::error::RegionResult;
use crate::threshold::{intensity_range, midrange};
use versign_core::{BACKGROUND, Bounds, INK, Pix, PixMut};

/// A binarized image together with the threshold that produced it
#[derive(Debug, Clone)]
pub struct Binarized {
    /// Two-valued image
    pub pix: Pix,
    /// Threshold used; samples `<= threshold` became ink
    pub threshold: u8,
    /// Darkest and brightest source sample
    pub range: (u8, u8),
}

impl Binarized {
    /// True when the source held a single gray level.
    pub fn is_uniform(&self) -> bool {
        self.range.0 == self.range.1
    }
}

/// Binarize `pix` with its midrange threshold.
///
/// # Errors
///
/// Propagates threshold errors; none occur for a valid `Pix`.
///
/// # Examples
///
/// ```
/// use versign_core::Pix;
/// use versign_region::binarize;
///
/// let pix = Pix::from_raw(3, 1, vec![20, 127, 240]).unwrap();
/// let out = binarize(&pix).unwrap();
/// assert_eq!(out.threshold, 130);
/// assert_eq!(out.pix.data(), &[0, 0, 255]);
/// ```
pub fn binarize(pix: &Pix) -> RegionResult<Binarized> {
    let range = intensity_range(pix, &Bounds::full(pix))?;
    let threshold = midrange(range.0, range.1);
    Ok(Binarized {
        pix: binarize_with_threshold(pix, threshold),
        threshold,
        range,
    })
}

/// Binarize `pix` with a caller-chosen threshold.
///
/// A sample equal to the threshold becomes ink.
pub fn binarize_with_threshold(pix: &Pix, threshold: u8) -> Pix {
    let mut out = pix.to_mut();
    apply_threshold(&mut out, threshold);
    out.into()
}

fn apply_threshold(pix: &mut PixMut, threshold: u8) {
    for v in pix.data_mut() {
        *v = if *v > threshold { BACKGROUND } else { INK };
    }
}
