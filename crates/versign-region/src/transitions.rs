//! Ink-to-background transition counting
//!
//! A stroke-complexity proxy. The scan walks columns `left+1..right`,
//! and within each column rows `top+1..bottom`. The previous sample
//! starts at `(left, top)` and carries over from one column to the next,
//! so the count depends on scan order. It is a heuristic, not a
//! geometric edge count.

use crate::error::{RegionResult, check_bounds};
use versign_core::{BACKGROUND, Bounds, INK, Pix};

/// Count background samples that immediately follow an ink sample in
/// scan order.
///
/// An empty region yields 0.
///
/// # Errors
///
/// Returns [`crate::RegionError::OutOfBounds`] if `bounds` does not fit
/// the image.
pub fn count_transitions(pix: &Pix, bounds: &Bounds) -> RegionResult<u32> {
    check_bounds(pix, bounds)?;
    if bounds.is_empty() {
        return Ok(0);
    }

    let mut prev = pix.get_pixel_unchecked(bounds.left, bounds.top);
    let mut count = 0u32;
    for x in bounds.left + 1..bounds.right {
        for y in bounds.top + 1..bounds.bottom {
            let cur = pix.get_pixel_unchecked(x, y);
            if prev == INK && cur == BACKGROUND {
                count += 1;
            }
            prev = cur;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use versign_core::PixMut;

    /// Row 0 background, row 1 alternating ink/background from x = 1.
    fn alternating(n: u32) -> Pix {
        let mut pm = PixMut::new_filled(n + 1, 2, BACKGROUND).unwrap();
        for i in 0..n {
            let v = if i % 2 == 0 { INK } else { BACKGROUND };
            pm.set_pixel(i + 1, 1, v).unwrap();
        }
        pm.into()
    }

    #[test]
    fn test_alternating_run() {
        for n in 0..12 {
            let pix = alternating(n);
            assert_eq!(count_transitions(&pix, &Bounds::full(&pix)).unwrap(), n / 2);
        }
    }

    #[test]
    fn test_first_row_and_column_skipped() {
        // ink then background along row 0 and column 0 only
        let pix = Pix::from_raw(3, 3, vec![255, 0, 255, 0, 255, 255, 255, 255, 255]).unwrap();
        assert_eq!(count_transitions(&pix, &Bounds::full(&pix)).unwrap(), 0);
    }

    #[test]
    fn test_initial_sample_counts() {
        // prev starts at (0, 0) = ink, first visited (1, 1) is background
        let pix = Pix::from_raw(2, 2, vec![0, 255, 255, 255]).unwrap();
        assert_eq!(count_transitions(&pix, &Bounds::full(&pix)).unwrap(), 1);
    }

    #[test]
    fn test_prev_carries_across_columns() {
        // column 1: rows 1..3 = ink, ink; column 2: rows 1..3 = bg, bg
        let pix = Pix::from_raw(
            3,
            3,
            vec![
                255, 255, 255, //
                255, 0, 255, //
                255, 0, 255,
            ],
        )
        .unwrap();
        assert_eq!(count_transitions(&pix, &Bounds::full(&pix)).unwrap(), 1);
    }

    #[test]
    fn test_empty_region() {
        let pix = Pix::new_filled(4, 4, 0).unwrap();
        assert_eq!(
            count_transitions(&pix, &Bounds::new(2, 2, 0, 4).unwrap()).unwrap(),
            0
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let pix = Pix::new_filled(4, 4, 0).unwrap();
        assert!(count_transitions(&pix, &Bounds::new(0, 4, 0, 5).unwrap()).is_err());
    }
}
