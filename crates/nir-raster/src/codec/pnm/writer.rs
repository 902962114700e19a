//! Binary PGM (`P5`) writer.

use std::io::Write;

use crate::buffer::PixelBuffer;
use crate::codec::error::EncodeError;
use crate::codec::ContainerFormat;

/// Maximum sample value written into every PGM header.
pub const PGM_MAXVAL: u16 = 255;

/// Length of the ASCII header `write_pgm` emits for `width` x `height`.
pub fn pgm_header_len(width: usize, height: usize) -> usize {
    pgm_header(width, height).len()
}

fn pgm_header(width: usize, height: usize) -> String {
    format!("P5\n{} {}\n{}\n", width, height, PGM_MAXVAL)
}

/// Write a single-channel buffer as a binary PGM.
///
/// Emits `P5\n{width} {height}\n255\n` followed by `height` rows of
/// `width` bytes, top row first. Stride padding in the buffer is skipped.
///
/// # Errors
///
/// - [`EncodeError::ChannelMismatch`] if the buffer is not single-channel
/// - [`EncodeError::Io`] if any write fails; the sink then holds a
///   truncated file
///
/// # Example
///
/// ```
/// use nir_raster::{write_pgm, PixelBuffer};
///
/// let gray = PixelBuffer::new(2, 1, 1, vec![0, 255]).unwrap();
/// let mut out = Vec::new();
/// write_pgm(&mut out, &gray).unwrap();
/// assert_eq!(out, b"P5\n2 1\n255\n\x00\xff");
/// ```
pub fn write_pgm<W: Write>(mut sink: W, image: &PixelBuffer) -> Result<(), EncodeError> {
    if !ContainerFormat::TextPgm.accepts_channels(image.channels()) {
        return Err(EncodeError::ChannelMismatch {
            format: ContainerFormat::TextPgm,
            found: image.channels(),
        });
    }

    sink.write_all(pgm_header(image.width(), image.height()).as_bytes())?;
    for row in image.rows() {
        sink.write_all(row)?;
    }
    sink.flush()?;
    Ok(())
}
