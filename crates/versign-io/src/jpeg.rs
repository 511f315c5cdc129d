//! JPEG image format support
//!
//! Decoding uses `jpeg-decoder`, encoding uses `jpeg-encoder`. Decoded
//! images are collapsed to 8-bit grayscale.

use crate::{IoError, IoResult, luma};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};
use versign_core::Pix;

/// Quality used when writing JPEG files
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let gray: Vec<u8> = match info.pixel_format {
        PixelFormat::L8 => data,
        // big-endian 16-bit luminance; keep the high byte
        PixelFormat::L16 => data.chunks_exact(2).map(|s| s[0]).collect(),
        PixelFormat::RGB24 => data.chunks_exact(3).map(|s| luma(s[0], s[1], s[2])).collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|s| {
                let k = s[3] as u32;
                let ch = |c: u8| (c as u32 * k / 255) as u8;
                luma(ch(s[0]), ch(s[1]), ch(s[2]))
            })
            .collect(),
    };

    Ok(Pix::from_raw(width, height, gray)?)
}

/// Write `pix` as a grayscale JPEG with [`DEFAULT_JPEG_QUALITY`].
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(pix, writer, DEFAULT_JPEG_QUALITY)
}

/// Write `pix` as a grayscale JPEG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds 65535.
pub fn write_jpeg_with_quality<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let too_big = || {
        IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG size limit",
            pix.width(),
            pix.height()
        ))
    };
    let width = u16::try_from(pix.width()).map_err(|_| too_big())?;
    let height = u16::try_from(pix.height()).map_err(|_| too_big())?;

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(pix.data(), width, height, ColorType::Luma)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_flat_gray() {
        let pix = Pix::new_filled(16, 16, 200).unwrap();
        let mut out = Vec::new();
        write_jpeg(&pix, &mut out).unwrap();
        assert_eq!(&out[..3], &[0xFF, 0xD8, 0xFF]);

        let back = read_jpeg(out.as_slice()).unwrap();
        assert_eq!((back.width(), back.height()), (16, 16));
        assert!(back.data().iter().all(|&v| (v as i32 - 200).abs() <= 2));
    }

    #[test]
    fn test_roundtrip_keeps_dark_and_light() {
        let data = (0..32u32 * 32)
            .map(|i| if (i % 32) < 16 { 10 } else { 245 })
            .collect();
        let pix = Pix::from_raw(32, 32, data).unwrap();
        let mut out = Vec::new();
        write_jpeg(&pix, &mut out).unwrap();
        let back = read_jpeg(out.as_slice()).unwrap();
        assert!(back.get_pixel(2, 16).unwrap() < 60);
        assert!(back.get_pixel(29, 16).unwrap() > 190);
    }

    #[test]
    fn test_oversized_rejected() {
        let pix = Pix::new(70_000, 1).unwrap();
        let err = write_jpeg(&pix, Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }

    #[test]
    fn test_truncated_is_decode_error() {
        let err = read_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0][..]).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
