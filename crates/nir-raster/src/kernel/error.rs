//! Error types for the transform kernel and weight parsing.

use std::fmt;
use std::num::ParseFloatError;

use crate::buffer::BufferError;

/// Error type for parsing an `"R,G,B"` weight string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWeightsError {
    /// The string did not contain exactly three comma-separated components
    WrongCount(usize),
    /// A component is not a decimal number
    InvalidNumber(ParseFloatError),
}

impl From<ParseFloatError> for ParseWeightsError {
    fn from(err: ParseFloatError) -> Self {
        ParseWeightsError::InvalidNumber(err)
    }
}

impl fmt::Display for ParseWeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWeightsError::WrongCount(n) => {
                write!(f, "expected 3 comma-separated weights (R,G,B), got {}", n)
            }
            ParseWeightsError::InvalidNumber(err) => write!(f, "invalid weight: {}", err),
        }
    }
}

impl std::error::Error for ParseWeightsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseWeightsError::InvalidNumber(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for [`transform`](super::transform).
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The input has fewer than three channels to read R, G and B from
    TooFewChannels {
        /// Channel count of the input
        channels: usize,
    },
    /// The output buffer could not be created
    Buffer(BufferError),
}

impl TransformError {
    /// Whether this failure was an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, TransformError::Buffer(BufferError::Allocation { .. }))
    }
}

impl From<BufferError> for TransformError {
    fn from(err: BufferError) -> Self {
        TransformError::Buffer(err)
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::TooFewChannels { channels } => {
                write!(f, "need at least 3 channels, input has {}", channels)
            }
            TransformError::Buffer(err) => write!(f, "output buffer: {}", err),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}
