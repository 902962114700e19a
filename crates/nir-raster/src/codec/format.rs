//! Output container selection.

use std::fmt;
use std::io::Write;

use super::bmp::{write_bmp_gray8, write_bmp_rgb24, BmpLayout};
use super::error::EncodeError;
use super::pnm::{pgm_header_len, write_pgm};
use crate::buffer::PixelBuffer;

/// Output container format.
///
/// Each variant names one serialization strategy; [`encode`](Self::encode)
/// dispatches to the matching writer.
///
/// # Example
///
/// ```
/// use nir_raster::{ContainerFormat, PixelBuffer};
///
/// let gray = PixelBuffer::new(3, 1, 1, vec![0, 128, 255]).unwrap();
/// let mut out = Vec::new();
/// ContainerFormat::BitmapGray8.encode(&mut out, &gray).unwrap();
/// assert_eq!(out.len() as u64, ContainerFormat::BitmapGray8.encoded_len(3, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// Binary PGM (`P5`), single-channel
    TextPgm,
    /// 8-bit palette-indexed grayscale BMP, single-channel
    BitmapGray8,
    /// 24-bit BGR BMP, three or more channels
    BitmapRgb24,
}

impl ContainerFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ContainerFormat::TextPgm => "pgm",
            ContainerFormat::BitmapGray8 | ContainerFormat::BitmapRgb24 => "bmp",
        }
    }

    /// Whether a buffer with `channels` channels can be written.
    pub fn accepts_channels(&self, channels: usize) -> bool {
        match self {
            ContainerFormat::TextPgm | ContainerFormat::BitmapGray8 => channels == 1,
            ContainerFormat::BitmapRgb24 => channels >= 3,
        }
    }

    pub(crate) fn channel_requirement(&self) -> &'static str {
        match self {
            ContainerFormat::TextPgm | ContainerFormat::BitmapGray8 => "1 channel",
            ContainerFormat::BitmapRgb24 => "at least 3 channels",
        }
    }

    /// Serialize `image` into `sink`.
    pub fn encode<W: Write>(&self, sink: W, image: &PixelBuffer) -> Result<(), EncodeError> {
        match self {
            ContainerFormat::TextPgm => write_pgm(sink, image),
            ContainerFormat::BitmapGray8 => write_bmp_gray8(sink, image),
            ContainerFormat::BitmapRgb24 => write_bmp_rgb24(sink, image),
        }
    }

    /// Exact size in bytes of a `width` x `height` image in this container.
    pub fn encoded_len(&self, width: usize, height: usize) -> Result<u64, EncodeError> {
        match self {
            ContainerFormat::TextPgm => {
                let raster = (width as u64)
                    .checked_mul(height as u64)
                    .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
                Ok(pgm_header_len(width, height) as u64 + raster)
            }
            ContainerFormat::BitmapGray8 => {
                Ok(u64::from(BmpLayout::gray8(width, height)?.file_size()))
            }
            ContainerFormat::BitmapRgb24 => {
                Ok(u64::from(BmpLayout::rgb24(width, height)?.file_size()))
            }
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerFormat::TextPgm => "PGM",
            ContainerFormat::BitmapGray8 => "BMP (gray)",
            ContainerFormat::BitmapRgb24 => "RGB BMP",
        };
        f.write_str(name)
    }
}
