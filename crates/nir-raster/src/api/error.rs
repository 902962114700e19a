//! Unified error type for the nir-raster public API.
//!
//! [`RasterError`] wraps the per-stage error types into a single enum for
//! convenient `?` propagation across decode, transform and encode.

use crate::buffer::BufferError;
use crate::codec::{DecodeError, EncodeError};
use crate::kernel::TransformError;
use std::fmt;

/// Unified error type for the nir-raster public API.
///
/// # Example
///
/// ```
/// use nir_raster::{read_ppm, transform, RasterError, WeightTriple};
///
/// fn nir_sample(ppm: &[u8]) -> Result<u8, RasterError> {
///     let rgb = read_ppm(ppm)?;
///     let nir = transform(&rgb, WeightTriple::default(), false)?;
///     Ok(nir.samples()[0])
/// }
///
/// assert_eq!(nir_sample(b"P6 1 1 255\n\xff\xff\xff").unwrap(), 255);
/// assert!(nir_sample(b"P3 1 1 255\n").is_err());
/// ```
#[derive(Debug)]
pub enum RasterError {
    /// Buffer construction error
    Buffer(BufferError),
    /// Input container could not be read
    Decode(DecodeError),
    /// Channel mix failed
    Transform(TransformError),
    /// Output container could not be written
    Encode(EncodeError),
}

impl RasterError {
    /// Whether the underlying failure was a memory allocation failure.
    pub fn is_allocation(&self) -> bool {
        match self {
            RasterError::Buffer(err) => matches!(err, BufferError::Allocation { .. }),
            RasterError::Decode(err) => matches!(err, DecodeError::Allocation { .. }),
            RasterError::Transform(err) => err.is_allocation(),
            RasterError::Encode(_) => false,
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Buffer(err) => write!(f, "buffer error: {}", err),
            RasterError::Decode(err) => write!(f, "decode error: {}", err),
            RasterError::Transform(err) => write!(f, "transform error: {}", err),
            RasterError::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Buffer(err) => Some(err),
            RasterError::Decode(err) => Some(err),
            RasterError::Transform(err) => Some(err),
            RasterError::Encode(err) => Some(err),
        }
    }
}

impl From<BufferError> for RasterError {
    fn from(err: BufferError) -> Self {
        RasterError::Buffer(err)
    }
}

impl From<DecodeError> for RasterError {
    fn from(err: DecodeError) -> Self {
        RasterError::Decode(err)
    }
}

impl From<TransformError> for RasterError {
    fn from(err: TransformError) -> Self {
        RasterError::Transform(err)
    }
}

impl From<EncodeError> for RasterError {
    fn from(err: EncodeError) -> Self {
        RasterError::Encode(err)
    }
}
