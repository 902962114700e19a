//! Pseudo-NIR transform kernel.
//!
//! [`transform`] turns an RGB(+) [`PixelBuffer`](crate::PixelBuffer) into a
//! single-channel one by mixing R, G and B with a [`WeightTriple`].

mod error;
mod transform;
mod weights;

pub use error::{ParseWeightsError, TransformError};
pub use transform::transform;
pub use weights::WeightTriple;
