//! Debug markings on the normalized image
//!
//! Marks are always drawn on a copy; descriptors are computed on the
//! clean image.

use crate::feature_set::FeatureSet;
use crate::segment::Segment;
use versign_core::{Bounds, INK, Pix, PixMut};

/// Gray level of the corner-to-centroid line
pub const CENTROID_LINE_VALUE: u8 = 128;

/// Copy of `pix` with every leaf of `features` marked.
pub fn annotate(pix: &Pix, features: &FeatureSet) -> Pix {
    let mut pm = pix.to_mut();
    for segment in features {
        draw_leaf_marks(&mut pm, segment);
    }
    pm.into()
}

/// Outline the leaf in ink and draw a [`CENTROID_LINE_VALUE`] line from
/// its bottom-left corner `(left, bottom)` to its centroid.
pub fn draw_leaf_marks(pm: &mut PixMut, segment: &Segment) {
    let b = &segment.bounds;
    pm.render_box_outline(b, INK);

    let (cx, cy) = segment.features.centroid;
    pm.render_line(
        b.left as i32,
        b.bottom as i32,
        cx.floor() as i32,
        cy.floor() as i32,
        CENTROID_LINE_VALUE,
    );
}

/// Draw the partition lines through `(sx, sy)`: row `sy` across
/// `left..right` and column `sx` across `top..bottom`.
pub fn draw_partition_cross(pm: &mut PixMut, bounds: &Bounds, (sx, sy): (u32, u32), val: u8) {
    if bounds.is_empty() {
        return;
    }
    let (l, r) = (bounds.left as i32, bounds.right as i32 - 1);
    let (t, b) = (bounds.top as i32, bounds.bottom as i32 - 1);
    pm.render_line(l, sy as i32, r, sy as i32, val);
    pm.render_line(sx as i32, t, sx as i32, b, val);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentFeatures;
    use versign_core::BACKGROUND;

    fn leaf(bounds: Bounds, centroid: (f64, f64)) -> Segment {
        Segment {
            label: "1".to_string(),
            depth: 1,
            bounds,
            features: SegmentFeatures {
                aspect_ratio: 1.0,
                transitions: 0,
                centroid,
                ink_count: 1,
                normalized_size: 1.0,
                inclination_angle: 0.0,
            },
        }
    }

    #[test]
    fn test_leaf_marks() {
        let mut pm = PixMut::new_filled(10, 10, BACKGROUND).unwrap();
        draw_leaf_marks(&mut pm, &leaf(Bounds::new(0, 6, 0, 6).unwrap(), (3.7, 2.2)));
        let pix: Pix = pm.into();

        assert_eq!(pix.get_pixel(5, 0), Some(INK));
        assert_eq!(pix.get_pixel(0, 4), Some(INK));
        assert_eq!(pix.get_pixel(6, 6), Some(BACKGROUND));
        // line starts at (0, 6), just below the outline
        assert_eq!(pix.get_pixel(0, 6), Some(CENTROID_LINE_VALUE));
        assert_eq!(pix.get_pixel(3, 2), Some(CENTROID_LINE_VALUE));
    }

    #[test]
    fn test_annotate_leaves_source_clean() {
        let pix = Pix::new_filled(8, 8, BACKGROUND).unwrap();
        let mut fs = FeatureSet::new();
        fs.insert(leaf(Bounds::new(0, 8, 0, 8).unwrap(), (4.0, 4.0)));
        let marked = annotate(&pix, &fs);
        assert!(pix.data().iter().all(|&v| v == BACKGROUND));
        assert_eq!(marked.get_pixel(7, 7), Some(INK));
    }

    #[test]
    fn test_partition_cross() {
        let mut pm = PixMut::new_filled(6, 5, BACKGROUND).unwrap();
        draw_partition_cross(&mut pm, &Bounds::new(1, 5, 0, 5).unwrap(), (2, 3), INK);
        let pix: Pix = pm.into();
        let row: Vec<u8> = (0..6).map(|x| pix.get_pixel(x, 3).unwrap()).collect();
        assert_eq!(row, [BACKGROUND, INK, INK, INK, INK, BACKGROUND]);
        assert!((0..5).all(|y| pix.get_pixel(2, y) == Some(INK)));
        assert_eq!(pix.get_pixel(1, 0), Some(BACKGROUND));
    }
}
