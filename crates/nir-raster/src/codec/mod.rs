//! Raster container codecs.
//!
//! - [`pnm`]: binary PPM reader and binary PGM writer
//! - [`bmp`]: 8-bit grayscale and 24-bit BGR bitmap writers
//!
//! All writers are synchronous and not resumable. A failure part-way
//! through leaves whatever was already written in the sink; [`save`] does
//! not remove or rename a partial file.

pub mod bmp;
mod error;
mod format;
pub mod pnm;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::buffer::PixelBuffer;

pub use error::{DecodeError, EncodeError, FormatError};
pub use format::ContainerFormat;

/// Create (or truncate) `path` and write `image` into it as `format`.
///
/// A destination that cannot be created is reported as
/// [`EncodeError::Open`]; later failures are [`EncodeError::Io`] and leave
/// a truncated file behind.
pub fn save(
    path: impl AsRef<Path>,
    format: ContainerFormat,
    image: &PixelBuffer,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    if !format.accepts_channels(image.channels()) {
        return Err(EncodeError::ChannelMismatch {
            format,
            found: image.channels(),
        });
    }
    let file = File::create(path).map_err(|source| EncodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    format.encode(BufWriter::new(file), image)
}
