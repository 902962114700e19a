//! Color transfer functions.
//!
//! Input samples are sRGB-encoded. The kernel can either mix them as-is or
//! decode them to linear light first via [`srgb_to_linear`].

mod lut;
mod transfer;

pub(crate) use lut::SampleLut;
pub use transfer::{srgb_to_linear, SRGB_LINEAR_THRESHOLD};
