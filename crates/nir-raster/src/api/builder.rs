//! NirConverter builder -- the ergonomic entry point for the crate.
//!
//! [`NirConverter`] bundles the mix settings with the output container so a
//! caller can configure once and convert many images.

use std::io::Write;

use super::RasterError;
use crate::buffer::PixelBuffer;
use crate::codec::ContainerFormat;
use crate::kernel::{transform, WeightTriple};

/// Reusable RGB to pseudo-NIR converter.
///
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) and [`convert_to()`](Self::convert_to)
///   take `&self`, so one converter serves any number of images
/// - Defaults: weights `0.75, 0.25, 0.0`, no gamma, PGM output
///
/// # Example
///
/// ```
/// use nir_raster::{ContainerFormat, NirConverter, PixelBuffer, WeightTriple};
///
/// let converter = NirConverter::new()
///     .weights(WeightTriple::new(1.0, 1.0, 0.0))
///     .gamma(true)
///     .format(ContainerFormat::BitmapGray8);
///
/// let rgb = PixelBuffer::new(2, 2, 3, vec![128; 12]).unwrap();
/// let nir = converter.convert(&rgb).unwrap();
/// assert_eq!(nir.channels(), 1);
///
/// let mut bmp = Vec::new();
/// converter.convert_to(&mut bmp, &rgb).unwrap();
/// assert_eq!(&bmp[..2], b"BM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NirConverter {
    weights: WeightTriple,
    gamma: bool,
    format: ContainerFormat,
}

impl NirConverter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self {
            weights: WeightTriple::DEFAULT,
            gamma: false,
            format: ContainerFormat::TextPgm,
        }
    }

    /// Set the channel weights. They are normalized at conversion time.
    #[inline]
    pub fn weights(mut self, weights: WeightTriple) -> Self {
        self.weights = weights;
        self
    }

    /// Enable sRGB linearization before mixing.
    #[inline]
    pub fn gamma(mut self, enabled: bool) -> Self {
        self.gamma = enabled;
        self
    }

    /// Set the output container for [`convert_to()`](Self::convert_to).
    #[inline]
    pub fn format(mut self, format: ContainerFormat) -> Self {
        self.format = format;
        self
    }

    /// Configured weights, as given (not normalized).
    pub fn configured_weights(&self) -> WeightTriple {
        self.weights
    }

    /// Whether gamma linearization is enabled.
    pub fn uses_gamma(&self) -> bool {
        self.gamma
    }

    /// Configured output container.
    pub fn output_format(&self) -> ContainerFormat {
        self.format
    }

    /// Mix `rgb` into a fresh single-channel buffer.
    pub fn convert(&self, rgb: &PixelBuffer) -> Result<PixelBuffer, RasterError> {
        Ok(transform(rgb, self.weights, self.gamma)?)
    }

    /// Mix `rgb` and encode the result into `sink`.
    ///
    /// Returns the single-channel buffer that was written.
    pub fn convert_to<W: Write>(
        &self,
        sink: W,
        rgb: &PixelBuffer,
    ) -> Result<PixelBuffer, RasterError> {
        let nir = self.convert(rgb)?;
        self.format.encode(sink, &nir)?;
        Ok(nir)
    }
}

impl Default for NirConverter {
    fn default() -> Self {
        Self::new()
    }
}
