//! Quadrant feature extraction regression test
//!
//! End-to-end extraction on the synthetic fixtures: blank pages, the
//! centered square, and a scribbled signature at the default depth.
//!
//! Run with:
//! ```
//! cargo test -p versign-features --test quadrant_reg
//! ```

use versign_core::{BACKGROUND, Bounds, INK};
use versign_features::{
    CENTROID_LINE_VALUE, ExtractorOptions, Quadrant, QuadrantFeatureExtractor, annotate,
};
use versign_region::ink_centroid;
use versign_test::{RegParams, synthetic};

#[test]
fn quadrant_square_reg() {
    let mut rp = RegParams::new("quadrant_square");

    let page = synthetic::filled_rect(100, 100, Bounds::new(30, 70, 30, 70).unwrap()).unwrap();
    let c = ink_centroid(&page, &Bounds::full(&page)).unwrap();
    rp.compare_values(50.0, c.x, 0.5);
    rp.compare_values(50.0, c.y, 0.5);

    let extractor =
        QuadrantFeatureExtractor::new(ExtractorOptions::new().with_max_depth(1)).unwrap();
    let out = extractor.extract(&page).expect("extract square");

    rp.compare_values(2048.0, out.image.width() as f64, 0.0);
    rp.compare_values(2048.0, out.image.height() as f64, 0.0);
    rp.compare_values(4.0, out.features.len() as f64, 0.0);
    let labels: Vec<&str> = out.features.labels().collect();
    rp.compare_strings(b"1234", labels.concat().as_bytes());

    for segment in &out.features {
        let f = &segment.features;
        rp.compare_values(1.0, f.aspect_ratio, 0.01);
        rp.compare_values(1.0, f.normalized_size, 0.0);
        rp.compare_values(0.0, f.transitions as f64, 0.0);
    }

    // bottom-right leaf covers columns and rows 1023..2048
    let br = out.features.get("4").unwrap();
    rp.compare_values(1535.0, br.centroid.0, 1e-9);
    rp.compare_values(1535.0, br.centroid.1, 1e-9);

    assert!(rp.cleanup(), "quadrant_square regression test failed");
}

#[test]
fn quadrant_blank_reg() {
    let mut rp = RegParams::new("quadrant_blank");

    let extractor = QuadrantFeatureExtractor::default();
    let err = extractor
        .extract(&synthetic::blank_page(100, 100).unwrap())
        .expect_err("blank page");
    rp.compare_values(1.0, err.is_no_ink() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "quadrant_blank regression test failed");
}

#[test]
fn quadrant_signature_reg() {
    let mut rp = RegParams::new("quadrant_signature");

    let sig = synthetic::scribble(400, 160).unwrap();
    let extractor = QuadrantFeatureExtractor::new(
        ExtractorOptions::new()
            .with_canonical_width(512)
            .with_annotate(true),
    )
    .unwrap();

    let first = extractor.extract(&sig).expect("extract signature");
    rp.compare_values(64.0, first.features.len() as f64, 0.0);
    rp.compare_values(64.0 * 7.0, first.features.to_vector().len() as f64, 0.0);
    for label in first.features.labels() {
        rp.compare_values(3.0, label.len() as f64, 0.0);
    }

    // leaves arrive in label order; the first leaf takes quadrant 1 at every level
    let first_path: Vec<Quadrant> = first.features.iter().next().expect("a leaf").path().collect();
    rp.compare_values(
        1.0,
        (first_path == [Quadrant::TopLeft; 3]) as u8 as f64,
        0.0,
    );

    // every leaf lies inside the normalized image and they tile it
    let (w, h) = (first.image.width(), first.image.height());
    let area: u64 = first.features.iter().map(|s| s.bounds.area()).sum();
    rp.compare_values((w as u64 * h as u64) as f64, area as f64, 0.0);
    let inside = first.features.iter().all(|s| s.bounds.fits_within(w, h));
    rp.compare_values(1.0, inside as u8 as f64, 0.0);

    // the signature has ink, so some leaf must see it
    let ink: u64 = first.features.iter().map(|s| s.features.ink_count).sum();
    rp.compare_values(1.0, (ink > 0) as u8 as f64, 0.0);

    // idempotence: identical vectors bit for bit
    let second = extractor.extract(&sig).expect("extract again");
    let a: Vec<u64> = first.features.to_vector().iter().map(|v| v.to_bits()).collect();
    let b: Vec<u64> = second.features.to_vector().iter().map(|v| v.to_bits()).collect();
    rp.compare_values(1.0, (a == b) as u8 as f64, 0.0);
    rp.compare_pix(&first.image, &second.image);

    // annotation: only ink, paper and the centroid line level appear
    let image = &first.image;
    let levels_ok = image
        .data()
        .iter()
        .all(|&v| v == INK || v == BACKGROUND || v == CENTROID_LINE_VALUE);
    rp.compare_values(1.0, levels_ok as u8 as f64, 0.0);
    let has_line = image.data().contains(&CENTROID_LINE_VALUE);
    rp.compare_values(1.0, has_line as u8 as f64, 0.0);

    // every leaf outline is marked, never left as paper
    let marked = |x: u32, y: u32| image.get_pixel(x, y).is_some_and(|v| v != BACKGROUND);
    for s in first.features.iter().filter(|s| !s.bounds.is_empty()) {
        let b = &s.bounds;
        let outlined = (b.left..b.right).all(|x| marked(x, b.top) && marked(x, b.bottom - 1))
            && (b.top..b.bottom).all(|y| marked(b.left, y) && marked(b.right - 1, y));
        rp.compare_values(1.0, outlined as u8 as f64, 0.0);
    }

    // marks are drawn on a copy of the clean normalized image
    let plain = QuadrantFeatureExtractor::new(ExtractorOptions::new().with_canonical_width(512))
        .unwrap()
        .extract(&sig)
        .expect("extract without annotation");
    rp.compare_pix(&annotate(&plain.image, &plain.features), image);
    rp.compare_values(1.0, (plain.features == first.features) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "quadrant_signature regression test failed");
}
