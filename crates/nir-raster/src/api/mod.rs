//! Public API for the nir-raster crate.
//!
//! This module provides the high-level API: [`NirConverter`] builder and
//! [`RasterError`] unified error type.

mod builder;
mod error;

pub use builder::NirConverter;
pub use error::RasterError;
