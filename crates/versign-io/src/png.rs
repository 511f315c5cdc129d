//! PNG image format support
//!
//! Every PNG is decoded to 8-bit grayscale. Palettes and sub-byte depths
//! are expanded by the decoder, 16-bit samples keep their high byte,
//! colour is collapsed with [`luma`](crate::luma) and alpha is dropped.

use crate::{IoError, IoResult, luma};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use versign_core::{Pix, PixMut};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;
    let bytes = match info.bit_depth {
        BitDepth::Sixteen => 2,
        BitDepth::Eight => 1,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG bit depth {:?} after expansion",
                other
            )));
        }
    };
    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let stride = bytes * channels;

    let mut pix = PixMut::new_filled(width, height, 0)?;
    for y in 0..height {
        let start = y as usize * info.line_size;
        let src = buf
            .get(start..start + width as usize * stride)
            .ok_or_else(|| IoError::InvalidData("PNG row shorter than its width".to_string()))?;
        for (d, s) in pix.row_data_mut(y).iter_mut().zip(src.chunks_exact(stride)) {
            // big-endian samples: index `bytes * c` is channel c's high byte
            *d = if channels >= 3 {
                luma(s[0], s[bytes], s[2 * bytes])
            } else {
                s[0]
            };
        }
    }

    Ok(pix.into())
}

/// Write an 8-bit grayscale PNG image
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
