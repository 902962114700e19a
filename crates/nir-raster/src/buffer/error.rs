//! Error type for pixel buffer construction.

use std::fmt;

/// Error type for [`PixelBuffer`](super::PixelBuffer) construction.
///
/// Returned when the requested geometry violates the buffer invariants
/// or when the sample storage cannot be allocated.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Channel count is zero
    ZeroChannels,
    /// Row stride is smaller than `width * channels`
    StrideTooSmall {
        /// Requested stride
        stride: usize,
        /// Minimum stride for the geometry
        min: usize,
    },
    /// Sample storage is shorter than `stride * height`
    SamplesTooShort {
        /// Length of the provided samples
        len: usize,
        /// Required length
        required: usize,
    },
    /// Sample storage could not be allocated
    Allocation {
        /// Number of bytes requested (`usize::MAX` when the size overflowed)
        bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be positive, got {}x{}", width, height)
            }
            BufferError::ZeroChannels => write!(f, "channel count must be positive"),
            BufferError::StrideTooSmall { stride, min } => {
                write!(f, "row stride {} is smaller than row width {}", stride, min)
            }
            BufferError::SamplesTooShort { len, required } => {
                write!(
                    f,
                    "sample buffer holds {} bytes, geometry requires {}",
                    len, required
                )
            }
            BufferError::Allocation { bytes } => {
                write!(f, "failed to allocate {} bytes for pixel data", bytes)
            }
        }
    }
}

impl std::error::Error for BufferError {}
