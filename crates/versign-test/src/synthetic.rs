//! Synthetic signature images
//!
//! Small deterministic grayscale pages with known geometry, so tests do
//! not depend on scanned data.

use crate::error::TestResult;
use versign_core::{BACKGROUND, Bounds, INK, Pix, PixMut};

/// Paper level used by the grayscale fixtures
pub const PAPER: u8 = 235;

/// Pen level used by the grayscale fixtures
pub const PEN: u8 = 30;

/// A page with no ink at all.
pub fn blank_page(width: u32, height: u32) -> TestResult<Pix> {
    Ok(Pix::new_filled(width, height, BACKGROUND)?)
}

/// A white page with `rect` filled with [`INK`].
///
/// The rectangle is clipped to the page.
pub fn filled_rect(width: u32, height: u32, rect: Bounds) -> TestResult<Pix> {
    let mut pm = PixMut::new_filled(width, height, BACKGROUND)?;
    for y in rect.top..rect.bottom.min(height) {
        for x in rect.left..rect.right.min(width) {
            pm.set_pixel_unchecked(x, y, INK);
        }
    }
    Ok(pm.into())
}

/// A white page with a single ink sample at `(x, y)`.
pub fn single_dot(width: u32, height: u32, x: u32, y: u32) -> TestResult<Pix> {
    let mut pm = PixMut::new_filled(width, height, BACKGROUND)?;
    pm.set_pixel(x, y, INK)?;
    Ok(pm.into())
}

/// A white page with an ink segment from `(x1, y1)` to `(x2, y2)`,
/// `thickness` samples wide.
pub fn stroke(
    width: u32,
    height: u32,
    (x1, y1): (i32, i32),
    (x2, y2): (i32, i32),
    thickness: u32,
) -> TestResult<Pix> {
    let mut pm = PixMut::new_filled(width, height, BACKGROUND)?;
    draw_thick_line(&mut pm, (x1, y1), (x2, y2), thickness, INK);
    Ok(pm.into())
}

/// Horizontal ramp from 0 on the left to 255 on the right.
pub fn gradient(width: u32, height: u32) -> TestResult<Pix> {
    let mut pm = PixMut::new_filled(width, height, 0)?;
    let span = width.saturating_sub(1).max(1) as f64;
    for y in 0..height {
        for (x, v) in pm.row_data_mut(y).iter_mut().enumerate() {
            *v = (x as f64 * 255.0 / span).round() as u8;
        }
    }
    Ok(pm.into())
}

/// A grayscale "signature": a looping pen trace in [`PEN`] on [`PAPER`].
///
/// The trace is a sum of sines sampled along the page, so it is the same
/// on every call and leaves a margin on all four sides.
pub fn scribble(width: u32, height: u32) -> TestResult<Pix> {
    let mut pm = PixMut::new_filled(width, height, PAPER)?;

    let w = width as f64;
    let h = height as f64;
    let steps = 96;
    let point = |i: u32| {
        let t = i as f64 / steps as f64;
        let x = w * (0.1 + 0.8 * t) + w * 0.04 * (t * 31.0).sin();
        let y = h * (0.5 + 0.25 * (t * 13.0).sin() * (t * 3.0).cos());
        (x.round() as i32, y.round() as i32)
    };

    let thickness = (height / 40).max(1);
    let mut prev = point(0);
    for i in 1..=steps {
        let cur = point(i);
        draw_thick_line(&mut pm, prev, cur, thickness, PEN);
        prev = cur;
    }
    Ok(pm.into())
}

fn draw_thick_line(pm: &mut PixMut, p1: (i32, i32), p2: (i32, i32), thickness: u32, val: u8) {
    let t = thickness.max(1) as i32;
    let lo = -(t - 1) / 2;
    for d in lo..lo + t {
        for e in lo..lo + t {
            pm.render_line(p1.0 + d, p1.1 + e, p2.0 + d, p2.1 + e, val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_counts() {
        let pix = filled_rect(10, 10, Bounds::new(2, 5, 3, 7).unwrap()).unwrap();
        let ink = pix.data().iter().filter(|&&v| v == INK).count();
        assert_eq!(ink, 12);
        assert!(pix.is_binary());
    }

    #[test]
    fn test_filled_rect_clips() {
        let pix = filled_rect(4, 4, Bounds::new(2, 9, 2, 9).unwrap()).unwrap();
        assert_eq!(pix.data().iter().filter(|&&v| v == INK).count(), 4);
    }

    #[test]
    fn test_single_dot_out_of_range() {
        assert!(single_dot(4, 4, 4, 0).is_err());
        let pix = single_dot(4, 4, 1, 2).unwrap();
        assert_eq!(pix.get_pixel(1, 2), Some(INK));
    }

    #[test]
    fn test_stroke_thickness() {
        let pix = stroke(20, 20, (2, 10), (17, 10), 3).unwrap();
        let ink = pix.data().iter().filter(|&&v| v == INK).count();
        assert_eq!(ink, 18 * 3);
    }

    #[test]
    fn test_gradient_ends() {
        let pix = gradient(16, 2).unwrap();
        assert_eq!(pix.get_pixel(0, 1), Some(0));
        assert_eq!(pix.get_pixel(15, 1), Some(255));
    }

    #[test]
    fn test_scribble_deterministic() {
        let a = scribble(200, 80).unwrap();
        let b = scribble(200, 80).unwrap();
        assert_eq!(a.data(), b.data());
        assert!(a.data().contains(&PEN));
        assert_eq!(a.get_pixel(0, 0), Some(PAPER));
    }
}
