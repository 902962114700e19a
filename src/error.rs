use nir_raster::{ContainerFormat, DecodeError, EncodeError, TransformError};
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Bad arguments or unparseable weights.
pub const EXIT_USAGE: u8 = 1;
/// Input could not be opened or decoded.
pub const EXIT_DECODE: u8 = 2;
/// A raster buffer could not be allocated.
pub const EXIT_ALLOCATION: u8 = 3;
/// Primary output could not be written.
pub const EXIT_ENCODE: u8 = 4;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read PPM: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to convert: {}: {source}", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    #[error("Failed to write {format}: {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        format: ContainerFormat,
        #[source]
        source: EncodeError,
    },
}

impl ConvertError {
    /// Whether the failure was a memory allocation failure.
    pub fn is_allocation(&self) -> bool {
        match self {
            ConvertError::Decode { source, .. } => {
                matches!(source, DecodeError::Allocation { .. })
            }
            ConvertError::Transform { source, .. } => source.is_allocation(),
            ConvertError::Encode { .. } => false,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        if self.is_allocation() {
            return EXIT_ALLOCATION;
        }
        match self {
            ConvertError::Decode { .. } => EXIT_DECODE,
            // A transform only fails on channel count or allocation; the
            // decoder always yields 3 channels.
            ConvertError::Transform { .. } => EXIT_DECODE,
            ConvertError::Encode { .. } => EXIT_ENCODE,
        }
    }

    /// Message printed to stderr before exiting.
    pub fn report(&self) -> String {
        if self.is_allocation() {
            let inner: &dyn std::error::Error = match self {
                ConvertError::Decode { source, .. } => source,
                ConvertError::Transform { source, .. } => source,
                ConvertError::Encode { source, .. } => source,
            };
            return format!("Out of memory: {}", inner);
        }
        self.to_string()
    }
}
