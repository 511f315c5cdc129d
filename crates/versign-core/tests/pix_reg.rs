//! Pix regression test
//!
//! Clipping, drawing and ownership of the 8-bit image container on the
//! synthetic fixtures.
//!
//! Run with:
//! ```
//! cargo test -p versign-core --test pix_reg
//! ```

use versign_core::{BACKGROUND, Bounds, INK, Pix};
use versign_test::{RegParams, synthetic};

#[test]
fn pix_clip_reg() {
    let mut rp = RegParams::new("pix_clip");

    let page = synthetic::filled_rect(100, 100, Bounds::new(30, 70, 30, 70).unwrap()).unwrap();

    // --- clip exactly to the square: all ink ---
    let sq = page.clip_bounds(&Bounds::new(30, 70, 30, 70).unwrap()).unwrap();
    rp.compare_values(40.0, sq.width() as f64, 0.0);
    rp.compare_values(40.0, sq.height() as f64, 0.0);
    let ink = sq.data().iter().filter(|&&v| v == INK).count();
    rp.compare_values(1600.0, ink as f64, 0.0);

    // --- clip past the edge is clamped ---
    let corner = page.clip_rectangle(90, 90, 50, 50).unwrap();
    rp.compare_values(10.0, corner.width() as f64, 0.0);
    rp.compare_values(10.0, corner.height() as f64, 0.0);

    // --- the source is not shared with its clips ---
    rp.compare_values(1.0, page.ref_count() as f64, 0.0);

    assert!(rp.cleanup(), "pix_clip regression test failed");
}

#[test]
fn pix_draw_reg() {
    let mut rp = RegParams::new("pix_draw");

    let blank = synthetic::blank_page(20, 12).unwrap();
    let mut pm = blank.to_mut();
    pm.render_box_outline(&Bounds::new(2, 18, 1, 11).unwrap(), INK);
    pm.render_line(0, 0, 19, 11, 128);
    let drawn: Pix = pm.into();

    let untouched = blank.data().iter().all(|&v| v == BACKGROUND);
    rp.compare_values(1.0, untouched as u8 as f64, 0.0);

    rp.compare_values(128.0, drawn.get_pixel(19, 11).unwrap() as f64, 0.0);
    rp.compare_values(128.0, drawn.get_pixel(10, 6).unwrap() as f64, 0.0);
    rp.compare_values(INK as f64, drawn.get_pixel(17, 5).unwrap() as f64, 0.0);

    // 48 outline samples, two of them crossed by the line
    let outline = drawn.data().iter().filter(|&&v| v == INK).count();
    rp.compare_values(46.0, outline as f64, 0.0);

    assert!(rp.cleanup(), "pix_draw regression test failed");
}
