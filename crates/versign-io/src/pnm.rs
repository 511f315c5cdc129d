//! Binary PGM (`P5`) support
//!
//! Header tokens are whitespace separated and may be interleaved with
//! `#` comments. Samples with a maxval other than 255 are rescaled to
//! 0..=255; a maxval above 255 means two big-endian bytes per sample.

use crate::{IoError, IoResult};
use std::io::{BufRead, Read, Write};
use versign_core::Pix;

/// Largest raster accepted from a PGM header (2^29 samples)
pub const MAX_PGM_PIXELS: u64 = 1 << 29;

/// Read a binary PGM image.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    if magic != "P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM variant {} (only P5 is read)",
            magic
        )));
    }
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("PGM maxval {}", maxval)));
    }

    let npixels = u64::from(width)
        .checked_mul(u64::from(height))
        .filter(|&n| n <= MAX_PGM_PIXELS)
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "PGM too large: {}x{} exceeds {} pixels",
                width, height, MAX_PGM_PIXELS
            ))
        })?;
    let bytes_per_sample: u64 = if maxval > 255 { 2 } else { 1 };
    let nbytes = npixels * bytes_per_sample;

    // grows with the data actually present, not with the header's claim
    let mut raw = Vec::new();
    reader.take(nbytes).read_to_end(&mut raw)?;
    if (raw.len() as u64) < nbytes {
        return Err(IoError::InvalidData(format!(
            "PGM raster truncated: {} of {} bytes",
            raw.len(),
            nbytes
        )));
    }

    let data = if bytes_per_sample == 2 {
        raw.chunks_exact(2)
            .map(|s| rescale(u16::from_be_bytes([s[0], s[1]]) as u32, maxval))
            .collect()
    } else if maxval == 255 {
        raw
    } else {
        raw.into_iter().map(|v| rescale(v as u32, maxval)).collect()
    };

    Ok(Pix::from_raw(width, height, data)?)
}

/// Write `pix` as a binary PGM with maxval 255.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", pix.width(), pix.height())?;
    writer.write_all(pix.data())?;
    writer.flush()?;
    Ok(())
}

fn rescale(v: u32, maxval: u32) -> u8 {
    ((v.min(maxval) * 255 + maxval / 2) / maxval) as u8
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let tok = read_token(reader)?;
    tok.parse()
        .map_err(|_| IoError::InvalidData(format!("PGM {} '{}'", what, tok)))
}

/// Read one header token and the single whitespace byte ending it.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut tok = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if tok.is_empty() {
                return Err(IoError::InvalidData("PGM header truncated".to_string()));
            }
            return Ok(tok);
        }
        match byte[0] {
            b'#' if tok.is_empty() => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {
                if !tok.is_empty() {
                    return Ok(tok);
                }
            }
            b => tok.push(b as char),
        }
    }
}
