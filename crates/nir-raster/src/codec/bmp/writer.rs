//! Uncompressed bottom-up BMP writers.

use std::io::Write;

use super::header::{BmpLayout, GRAY_PALETTE_SIZE};
use crate::buffer::PixelBuffer;
use crate::codec::error::EncodeError;
use crate::codec::ContainerFormat;

/// Write a single-channel buffer as an 8-bit palette-indexed BMP.
///
/// The palette is the linear gray ramp `(i, i, i, 0)` for `i` in `0..=255`,
/// so each sample is its own palette index. Rows are written bottom-up and
/// zero-padded to a multiple of 4 bytes.
///
/// # Errors
///
/// - [`EncodeError::ChannelMismatch`] if the buffer is not single-channel
/// - [`EncodeError::DimensionsTooLarge`] if the file would not fit the
///   32-bit header fields (checked before anything is written)
/// - [`EncodeError::Io`] if any write fails; the sink then holds a
///   truncated file
pub fn write_bmp_gray8<W: Write>(mut sink: W, image: &PixelBuffer) -> Result<(), EncodeError> {
    if !ContainerFormat::BitmapGray8.accepts_channels(image.channels()) {
        return Err(EncodeError::ChannelMismatch {
            format: ContainerFormat::BitmapGray8,
            found: image.channels(),
        });
    }
    let layout = BmpLayout::gray8(image.width(), image.height())?;

    write_headers(&mut sink, &layout)?;
    sink.write_all(&gray_palette())?;

    let width = image.width();
    let mut row = vec![0u8; layout.row_size as usize];
    for src in image.rows().rev() {
        row[..width].copy_from_slice(src);
        sink.write_all(&row)?;
    }
    sink.flush()?;
    Ok(())
}

/// Write an RGB(+) buffer as a 24-bit BMP.
///
/// The first three samples of each pixel are stored in B, G, R order; any
/// further channels are dropped. Rows are written bottom-up and zero-padded
/// to a multiple of 4 bytes.
///
/// # Errors
///
/// - [`EncodeError::ChannelMismatch`] if the buffer has fewer than 3 channels
/// - [`EncodeError::DimensionsTooLarge`] if the file would not fit the
///   32-bit header fields
/// - [`EncodeError::Io`] if any write fails
pub fn write_bmp_rgb24<W: Write>(mut sink: W, image: &PixelBuffer) -> Result<(), EncodeError> {
    let channels = image.channels();
    if !ContainerFormat::BitmapRgb24.accepts_channels(channels) {
        return Err(EncodeError::ChannelMismatch {
            format: ContainerFormat::BitmapRgb24,
            found: channels,
        });
    }
    let layout = BmpLayout::rgb24(image.width(), image.height())?;

    write_headers(&mut sink, &layout)?;

    let mut row = vec![0u8; layout.row_size as usize];
    for src in image.rows().rev() {
        for (px, dst) in src.chunks_exact(channels).zip(row.chunks_exact_mut(3)) {
            dst[0] = px[2];
            dst[1] = px[1];
            dst[2] = px[0];
        }
        sink.write_all(&row)?;
    }
    sink.flush()?;
    Ok(())
}

fn write_headers<W: Write>(sink: &mut W, layout: &BmpLayout) -> Result<(), EncodeError> {
    sink.write_all(&layout.file_header().to_bytes())?;
    sink.write_all(&layout.info_header().to_bytes())?;
    Ok(())
}

fn gray_palette() -> [u8; GRAY_PALETTE_SIZE] {
    let mut palette = [0u8; GRAY_PALETTE_SIZE];
    for (i, entry) in palette.chunks_exact_mut(4).enumerate() {
        let v = i as u8;
        entry.copy_from_slice(&[v, v, v, 0]);
    }
    palette
}
