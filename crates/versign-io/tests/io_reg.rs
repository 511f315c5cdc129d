//! Image I/O regression test
//!
//! Writes the synthetic fixtures in every supported format, reads them
//! back from disk and from memory.
//!
//! Run with:
//! ```
//! cargo test -p versign-io --test io_reg
//! ```

use versign_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image, write_image_mem,
};
use versign_test::{RegParams, regout_dir, synthetic};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");
    let sig = synthetic::scribble(180, 90).unwrap();

    // --- lossless formats round-trip exactly ---
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = format!("{}/ioformats_sig.{}", regout_dir(), format.extension());
        write_image(&sig, &path, format).expect("write");
        rp.compare_values(
            1.0,
            (detect_format(&path).expect("detect") == format) as u8 as f64,
            0.0,
        );
        let back = read_image(&path).expect("read");
        rp.compare_pix(&sig, &back);
    }

    // --- JPEG is lossy but keeps geometry and the pen/paper split ---
    let bytes = write_image_mem(&sig, ImageFormat::Jpeg).expect("jpeg encode");
    let back = read_image_mem(&bytes).expect("jpeg decode");
    rp.compare_values(180.0, back.width() as f64, 0.0);
    rp.compare_values(90.0, back.height() as f64, 0.0);
    let mean = |p: &versign_core::Pix| {
        p.data().iter().map(|&v| v as f64).sum::<f64>() / p.data().len() as f64
    };
    rp.compare_values(mean(&sig), mean(&back), 3.0);

    // --- PGM bytes: fixed header, then the raw samples ---
    let pgm = write_image_mem(&sig, ImageFormat::Pnm).expect("pgm encode");
    let header = b"P5\n180 90\n255\n";
    rp.compare_strings(header, &pgm[..header.len()]);
    rp.compare_strings(sig.data(), &pgm[header.len()..]);

    assert!(rp.cleanup(), "ioformats regression test failed");
}

#[test]
fn ioerrors_reg() {
    let mut rp = RegParams::new("ioerrors");

    rp.compare_values(1.0, read_image("/nonexistent/sig.png").is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, read_image_mem(b"BM not supported").is_err() as u8 as f64, 0.0);
    let mut png = write_image_mem(&synthetic::blank_page(8, 8).unwrap(), ImageFormat::Png)
        .expect("png encode");
    png.truncate(20);
    rp.compare_values(1.0, read_image_mem(&png).is_err() as u8 as f64, 0.0);

    // headers claiming absurd rasters fail cleanly
    for bogus in [
        &b"P5\n4294967295 4294967295\n65535\n"[..],
        &b"P5\n100000 100000\n255\n\0\0"[..],
    ] {
        let invalid = matches!(read_image_mem(bogus), Err(IoError::InvalidData(_)));
        rp.compare_values(1.0, invalid as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "ioerrors regression test failed");
}
