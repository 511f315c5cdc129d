//! Image scaling operations
//!
//! - `scale_by_sampling`: nearest-neighbour resampling to an explicit size
//! - `scale_to_width`: aspect-preserving resampling to a target width

use crate::{TransformError, TransformResult};
use versign_core::{Pix, PixMut};

/// Largest output accepted by the scalers (2^29 samples)
pub const MAX_SCALED_PIXELS: u64 = 1 << 29;

/// Height that keeps the aspect ratio of a `width` x `height` image when
/// it is resized to `target_width` columns.
///
/// Computes `round(target_width * height / width)`, never less than 1.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let h = (target_width as f64 * height as f64 / width as f64).round();
    (h as u32).max(1)
}

/// Scale an image to `width` x `height` using nearest-neighbour sampling.
///
/// Each destination sample takes the source sample whose cell contains
/// the destination sample's center, so the output only contains values
/// that occur in the input.
///
/// # Errors
///
/// Returns [`TransformError::InvalidTargetSize`] if either target
/// dimension is 0 and [`TransformError::TargetTooLarge`] above
/// [`MAX_SCALED_PIXELS`].
pub fn scale_by_sampling(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidTargetSize { width, height });
    }
    if u64::from(width) * u64::from(height) > MAX_SCALED_PIXELS {
        return Err(TransformError::TargetTooLarge {
            width,
            height,
            max: MAX_SCALED_PIXELS,
        });
    }

    let sw = pix.width();
    let sh = pix.height();
    if sw == width && sh == height {
        return Ok(pix.clone());
    }

    let xmap: Vec<usize> = (0..width)
        .map(|dx| sample_index(dx, width, sw) as usize)
        .collect();

    let mut pixd = PixMut::new_filled(width, height, 0)?;
    for dy in 0..height {
        let src = pix.row_data(sample_index(dy, height, sh));
        let dst = pixd.row_data_mut(dy);
        for (d, &sx) in dst.iter_mut().zip(&xmap) {
            *d = src[sx];
        }
    }

    Ok(pixd.into())
}

/// Scale an image to `width` columns, preserving its aspect ratio.
///
/// The output height is [`scaled_height`].
///
/// # Errors
///
/// Returns [`TransformError::InvalidTargetSize`] if `width` is 0 and
/// [`TransformError::TargetTooLarge`] if the scaled image would exceed
/// [`MAX_SCALED_PIXELS`], as a thin tall stroke does.
pub fn scale_to_width(pix: &Pix, width: u32) -> TransformResult<Pix> {
    if width == 0 {
        return Err(TransformError::InvalidTargetSize {
            width,
            height: pix.height(),
        });
    }
    let height = scaled_height(pix.width(), pix.height(), width);
    scale_by_sampling(pix, width, height)
}

/// Source index sampled for destination index `d`.
#[inline]
fn sample_index(d: u32, dst_len: u32, src_len: u32) -> u32 {
    let s = ((d as f64 + 0.5) * src_len as f64 / dst_len as f64) as u32;
    s.min(src_len - 1)
}
