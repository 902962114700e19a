//! Channel weights for the pseudo-NIR mix.

use std::fmt;
use std::str::FromStr;

use super::error::ParseWeightsError;

/// Red, green and blue weights for the channel mix.
///
/// Weights do not need to sum to 1.0; [`normalized`](Self::normalized)
/// rescales them, and the kernel always normalizes before use. A triple whose
/// sum is not positive (or not finite) falls back to pure red, `(1, 0, 0)`.
///
/// # Example
/// ```
/// use nir_raster::WeightTriple;
///
/// let w = WeightTriple::new(3.0, 1.0, 0.0).normalized();
/// assert_eq!(w, WeightTriple::new(0.75, 0.25, 0.0));
///
/// let parsed: WeightTriple = "0.75,0.25,0.0".parse().unwrap();
/// assert_eq!(parsed, WeightTriple::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTriple {
    /// Red weight
    pub r: f32,
    /// Green weight
    pub g: f32,
    /// Blue weight
    pub b: f32,
}

impl WeightTriple {
    /// Weights used when the caller does not choose any.
    pub const DEFAULT: Self = Self::new(0.75, 0.25, 0.0);

    /// Fallback for triples that cannot be normalized.
    pub const RED_ONLY: Self = Self::new(1.0, 0.0, 0.0);

    /// Create a triple without normalizing it.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three weights.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.r + self.g + self.b
    }

    /// Rescale so the weights sum to 1.0.
    ///
    /// Ratios between the weights are preserved. A sum `<= 0` (or NaN or
    /// infinite) yields [`WeightTriple::RED_ONLY`].
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if !(sum > 0.0 && sum.is_finite()) {
            return Self::RED_ONLY;
        }
        Self::new(self.r / sum, self.g / sum, self.b / sum)
    }

    /// Weighted sum of three channel intensities.
    #[inline]
    pub fn mix(&self, r: f32, g: f32, b: f32) -> f32 {
        self.r * r + self.g * g + self.b * b
    }
}

impl Default for WeightTriple {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<[f32; 3]> for WeightTriple {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for WeightTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for WeightTriple {
    type Err = ParseWeightsError;

    /// Parse `"R,G,B"`, e.g. `"0.75,0.25,0.0"`.
    ///
    /// Whitespace around each component is ignored. The result is not
    /// normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseWeightsError::WrongCount(parts.len()));
        }
        Ok(Self::new(
            parts[0].parse()?,
            parts[1].parse()?,
            parts[2].parse()?,
        ))
    }
}
