//! Binary PPM (`P6`) reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::tokenizer::HeaderTokenizer;
use crate::buffer::PixelBuffer;
use crate::codec::error::{DecodeError, FormatError};

/// Magic token of a binary RGB PPM.
pub const PPM_MAGIC: &[u8] = b"P6";

/// Largest maxval accepted (8 bits per sample).
pub const MAX_SAMPLE_VALUE: u16 = 255;

/// Parsed PPM header.
///
/// `maxval` is reported as found. Samples are never rescaled, so a file
/// with `maxval < 255` decodes to its raw byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Declared maximum sample value (1..=255)
    pub maxval: u16,
}

impl PpmHeader {
    /// Number of raster bytes following the header (`width * height * 3`).
    pub fn raster_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(3)
    }
}

/// Decode a binary PPM stream into a 3-channel [`PixelBuffer`].
///
/// See [`read_ppm_with_header`] for the accepted syntax.
pub fn read_ppm<R: BufRead>(reader: R) -> Result<PixelBuffer, DecodeError> {
    read_ppm_with_header(reader).map(|(_, image)| image)
}

/// Decode a binary PPM stream, returning the header alongside the pixels.
///
/// The header is `P6`, width, height and maxval, separated by whitespace
/// and `#` comments, then exactly one whitespace byte (CR LF counts as
/// one). The raster is `width * height * 3` bytes of R, G, B, top row
/// first. Bytes after the raster are ignored.
///
/// # Errors
///
/// - [`DecodeError::Format`] for a wrong magic, a missing or non-numeric
///   field, `width`/`height` not positive or `maxval` outside `1..=255`
/// - [`DecodeError::Truncated`] if the raster is short
/// - [`DecodeError::Allocation`] if the raster cannot be allocated
/// - [`DecodeError::Io`] if the stream fails
///
/// # Example
///
/// ```
/// use nir_raster::read_ppm_with_header;
///
/// let bytes = b"P6\n# tiny\n1 1\n255\n\x10\x20\x30";
/// let (header, image) = read_ppm_with_header(&bytes[..]).unwrap();
/// assert_eq!(header.maxval, 255);
/// assert_eq!(image.pixel(0, 0), &[0x10, 0x20, 0x30]);
/// ```
pub fn read_ppm_with_header<R: BufRead>(
    reader: R,
) -> Result<(PpmHeader, PixelBuffer), DecodeError> {
    let mut tokens = HeaderTokenizer::new(reader);

    let magic = tokens.next_token("magic")?;
    if magic != PPM_MAGIC {
        return Err(FormatError::BadMagic {
            found: String::from_utf8_lossy(&magic).into_owned(),
        }
        .into());
    }

    let width = parse_field(&mut tokens, "width")?;
    let height = parse_field(&mut tokens, "height")?;
    let maxval = parse_field(&mut tokens, "maxval")?;

    if width <= 0 {
        return Err(FormatError::OutOfRange { field: "width", value: width }.into());
    }
    if height <= 0 {
        return Err(FormatError::OutOfRange { field: "height", value: height }.into());
    }
    if maxval <= 0 || maxval > i64::from(MAX_SAMPLE_VALUE) {
        return Err(FormatError::OutOfRange { field: "maxval", value: maxval }.into());
    }

    tokens.consume_separator()?;

    let header = PpmHeader {
        width: to_usize(width, "width")?,
        height: to_usize(height, "height")?,
        maxval: maxval as u16,
    };
    let expected = header.raster_len().ok_or(FormatError::ImageTooLarge {
        width: header.width,
        height: header.height,
    })?;

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(expected)
        .map_err(|_| DecodeError::Allocation { bytes: expected })?;
    tokens
        .into_inner()
        .take(expected as u64)
        .read_to_end(&mut samples)?;
    if samples.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: samples.len(),
        });
    }

    let image = PixelBuffer::from_packed(header.width, header.height, 3, samples);
    Ok((header, image))
}

/// Open and decode a PPM file.
///
/// A file that cannot be opened is reported as [`DecodeError::Open`].
pub fn read_ppm_file(path: impl AsRef<Path>) -> Result<(PpmHeader, PixelBuffer), DecodeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_ppm_with_header(BufReader::new(file))
}

fn parse_field<R: BufRead>(
    tokens: &mut HeaderTokenizer<R>,
    field: &'static str,
) -> Result<i64, DecodeError> {
    let token = tokens.next_token(field)?;
    std::str::from_utf8(&token)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            FormatError::InvalidNumber {
                field,
                token: String::from_utf8_lossy(&token).into_owned(),
            }
            .into()
        })
}

fn to_usize(value: i64, field: &'static str) -> Result<usize, FormatError> {
    usize::try_from(value).map_err(|_| FormatError::OutOfRange { field, value })
}
