//! sRGB transfer function.
//!
//! sRGB applies a gamma curve to linear light values for perceptual
//! uniformity. Channel mixing that is meant to model light intensity has to
//! undo that curve first.

/// Breakpoint between the linear toe and the power segment (sRGB-encoded side).
pub const SRGB_LINEAR_THRESHOLD: f32 = 0.04045;

/// IEC 61966-2-1 exact formula: sRGB to linear.
///
/// The input is an sRGB-encoded value in 0.0..=1.0.
///
/// # Example
/// ```
/// use nir_raster::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0.0), 0.0);
/// assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= SRGB_LINEAR_THRESHOLD {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
