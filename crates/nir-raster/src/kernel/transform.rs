//! RGB to pseudo-NIR channel mix.

use super::error::TransformError;
use super::weights::WeightTriple;
use crate::buffer::PixelBuffer;
use crate::color::SampleLut;

/// Mix the R, G and B channels of `input` into a single-channel buffer.
///
/// Per pixel the first three samples are scaled to 0.0..=1.0 (and decoded
/// from sRGB to linear light when `use_gamma` is set), combined with the
/// normalized `weights`, clamped to 0.0..=1.0 and quantized with
/// `round(v * 255)`. Channels beyond the third are ignored.
///
/// `weights` are normalized here on every call, so callers may pass raw
/// values. The input is only read; the result is a fresh, tightly packed
/// buffer of the same width and height.
///
/// # Errors
///
/// - [`TransformError::TooFewChannels`] if `input` has fewer than 3 channels
/// - [`TransformError::Buffer`] if the output cannot be allocated
///
/// # Example
///
/// ```
/// use nir_raster::{transform, PixelBuffer, WeightTriple};
///
/// let rgb = PixelBuffer::new(1, 1, 3, vec![255, 0, 0]).unwrap();
/// let nir = transform(&rgb, WeightTriple::default(), false).unwrap();
/// assert_eq!(nir.samples(), &[191]);
/// ```
pub fn transform(
    input: &PixelBuffer,
    weights: WeightTriple,
    use_gamma: bool,
) -> Result<PixelBuffer, TransformError> {
    let weights = weights.normalized();
    let channels = input.channels();
    if channels < 3 {
        return Err(TransformError::TooFewChannels { channels });
    }

    let lut = SampleLut::new(use_gamma);
    let mut output = PixelBuffer::try_zeroed(input.width(), input.height(), 1)?;

    for y in 0..input.height() {
        let src = input.row(y);
        let dst = output.row_mut(y);
        for (px, out) in src.chunks_exact(channels).zip(dst.iter_mut()) {
            let value = weights.mix(lut.get(px[0]), lut.get(px[1]), lut.get(px[2]));
            *out = quantize(value);
        }
    }

    Ok(output)
}

/// Clamp to 0.0..=1.0 and round half away from zero onto 0..=255.
#[inline]
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
