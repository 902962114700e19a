//! Infrared - pseudo near-infrared rasters
//!
//! Converts RGB PPM photographs into single-channel pseudo-NIR images.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
