//! Error types for container decoding and encoding.

use std::fmt;
use std::io;
use std::path::PathBuf;

use super::ContainerFormat;

/// Error type for a malformed PPM header.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The magic token is not `P6`
    BadMagic {
        /// The token that was found instead
        found: String,
    },
    /// The stream ended before the named header field
    MissingToken {
        /// Header field (`"magic"`, `"width"`, `"height"` or `"maxval"`)
        field: &'static str,
    },
    /// A header field is not a decimal integer
    InvalidNumber {
        /// Header field
        field: &'static str,
        /// The offending token
        token: String,
    },
    /// A header field is outside its allowed range
    OutOfRange {
        /// Header field
        field: &'static str,
        /// The parsed value
        value: i64,
    },
    /// A header token exceeds the tokenizer's length limit
    TokenTooLong {
        /// Header field
        field: &'static str,
    },
    /// `width * height * 3` does not fit in memory addressing
    ImageTooLarge {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BadMagic { found } => {
                write!(f, "bad magic {:?} (expected \"P6\")", found)
            }
            FormatError::MissingToken { field } => write!(f, "missing {} in header", field),
            FormatError::InvalidNumber { field, token } => {
                write!(f, "invalid {} {:?}", field, token)
            }
            FormatError::OutOfRange { field, value } => {
                write!(f, "{} {} out of range", field, value)
            }
            FormatError::TokenTooLong { field } => write!(f, "{} token too long", field),
            FormatError::ImageTooLarge { width, height } => {
                write!(f, "image {}x{} is too large", width, height)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Error type for reading a PPM container.
///
/// Every variant is terminal; the reader never retries.
#[derive(Debug)]
pub enum DecodeError {
    /// The source file could not be opened
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The header is malformed or out of range
    Format(FormatError),
    /// Fewer pixel bytes followed the header than it promised
    Truncated {
        /// Bytes required by the header
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },
    /// The pixel buffer could not be allocated
    Allocation {
        /// Number of bytes requested
        bytes: usize,
    },
    /// Reading from the stream failed
    Io(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            DecodeError::Format(err) => write!(f, "format error: {}", err),
            DecodeError::Truncated { expected, actual } => write!(
                f,
                "truncated pixel data: expected {} bytes, got {}",
                expected, actual
            ),
            DecodeError::Allocation { bytes } => {
                write!(f, "failed to allocate {} bytes for pixel data", bytes)
            }
            DecodeError::Io(err) => write!(f, "read error: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Open { source, .. } => Some(source),
            DecodeError::Format(err) => Some(err),
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for DecodeError {
    fn from(err: FormatError) -> Self {
        DecodeError::Format(err)
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Io(err)
    }
}

/// Error type for writing a container.
///
/// A failure after the first byte has been written leaves the destination
/// truncated; writers do not clean up or retry.
#[derive(Debug)]
pub enum EncodeError {
    /// The destination file could not be created
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// A write to the sink failed or was short
    Io(io::Error),
    /// The buffer's channel count does not suit the container
    ChannelMismatch {
        /// Target container
        format: ContainerFormat,
        /// Channel count of the buffer
        found: usize,
    },
    /// The dimensions do not fit the container's header fields
    DimensionsTooLarge {
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Open { path, source } => {
                write!(f, "cannot create {}: {}", path.display(), source)
            }
            EncodeError::Io(err) => write!(f, "write error: {}", err),
            EncodeError::ChannelMismatch { format, found } => write!(
                f,
                "{} needs {}, buffer has {}",
                format,
                format.channel_requirement(),
                found
            ),
            EncodeError::DimensionsTooLarge { width, height } => {
                write!(f, "{}x{} does not fit a bitmap header", width, height)
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Open { source, .. } => Some(source),
            EncodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for EncodeError {
    fn from(err: io::Error) -> Self {
        EncodeError::Io(err)
    }
}
