//! Scale regression test
//!
//! Canonical-width normalization of binarized signatures.
//!
//! Run with:
//! ```
//! cargo test -p versign-transform --test scale_reg
//! ```

use versign_core::{BACKGROUND, Bounds, INK, Pix};
use versign_test::{RegParams, synthetic};
use versign_transform::{scale_by_sampling, scale_to_width, scaled_height};

fn to_binary(pix: &Pix) -> Pix {
    let data = pix
        .data()
        .iter()
        .map(|&v| if v <= 128 { INK } else { BACKGROUND })
        .collect();
    Pix::from_raw(pix.width(), pix.height(), data).unwrap()
}

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    // --- Test 1: upscale a filled square to the canonical width ---
    let page = synthetic::filled_rect(40, 40, Bounds::new(0, 40, 0, 40).unwrap()).unwrap();
    let big = scale_to_width(&page, 2048).unwrap();
    rp.compare_values(2048.0, big.width() as f64, 0.0);
    rp.compare_values(2048.0, big.height() as f64, 0.0);
    rp.compare_values(
        (2048u64 * 2048) as f64,
        big.data().iter().filter(|&&v| v == INK).count() as f64,
        0.0,
    );

    // --- Test 2: wide signature keeps its aspect ratio ---
    let sig = to_binary(&synthetic::scribble(300, 100).unwrap());
    let norm = scale_to_width(&sig, 2048).unwrap();
    rp.compare_values(683.0, norm.height() as f64, 0.0);
    rp.compare_values(1.0, norm.is_binary() as u8 as f64, 0.0);

    // --- Test 3: ink fraction survives resampling ---
    let frac = |p: &Pix| {
        p.data().iter().filter(|&&v| v == INK).count() as f64 / p.data().len() as f64
    };
    rp.compare_values(frac(&sig), frac(&norm), 0.01);

    // --- Test 4: downscale stays two-valued ---
    let small = scale_by_sampling(&sig, 75, 25).unwrap();
    rp.compare_values(1.0, small.is_binary() as u8 as f64, 0.0);

    // --- Test 5: height rule ---
    rp.compare_values(1.0, scaled_height(1000, 1, 10) as f64, 0.0);
    rp.compare_values(3.0, scaled_height(4, 5, 2) as f64, 0.0);

    assert!(rp.cleanup(), "scale regression test failed");
}
