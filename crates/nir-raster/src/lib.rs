//! nir-raster: pseudo near-infrared rasters from RGB photographs
//!
//! This library decodes binary PPM images, mixes their red, green and blue
//! channels into a single pseudo-NIR channel, and encodes the result as a
//! binary PGM or an 8-bit grayscale BMP. A 24-bit BMP writer is included
//! for inspecting the decoded RGB input.
//!
//! # Quick Start
//!
//! The [`NirConverter`] builder is the primary entry point:
//!
//! ```
//! use nir_raster::{read_ppm, ContainerFormat, NirConverter};
//!
//! let ppm = b"P6\n2 1\n255\n\xff\x00\x00\x00\xff\x00";
//! let rgb = read_ppm(&ppm[..]).unwrap();
//!
//! let converter = NirConverter::new().format(ContainerFormat::TextPgm);
//! let mut pgm = Vec::new();
//! let nir = converter.convert_to(&mut pgm, &rgb).unwrap();
//!
//! assert_eq!(nir.samples(), &[191, 64]);
//! assert!(pgm.starts_with(b"P5\n2 1\n255\n"));
//! ```
//!
//! # Stage API
//!
//! Each stage is also usable on its own:
//!
//! - [`read_ppm`] / [`read_ppm_with_header`] / [`read_ppm_file`]: decode `P6`
//! - [`transform`]: weighted channel mix, optionally in linear light
//! - [`write_pgm`], [`write_bmp_gray8`], [`write_bmp_rgb24`]: encode
//! - [`save`]: create a file and encode into it
//!
//! ```
//! use nir_raster::{transform, write_pgm, PixelBuffer, WeightTriple};
//!
//! let rgb = PixelBuffer::new(1, 1, 3, vec![0, 0, 255]).unwrap();
//! let nir = transform(&rgb, "0,0,1".parse::<WeightTriple>().unwrap(), false).unwrap();
//!
//! let mut out = Vec::new();
//! write_pgm(&mut out, &nir).unwrap();
//! assert_eq!(out.last(), Some(&255));
//! ```
//!
//! # Mixing
//!
//! Weights are normalized to sum to 1 before use. A triple whose sum is
//! zero, negative or not finite falls back to [`WeightTriple::RED_ONLY`].
//! With gamma enabled each sample goes through the sRGB decoding curve
//! ([`color::srgb_to_linear`]) before mixing. The mixed value is **not**
//! re-encoded, so gamma output is darker than the plain mix for mid-tones.
//!
//! # Buffers
//!
//! [`PixelBuffer`] is row-major and interleaved with an explicit stride.
//! Decoders produce tightly packed buffers; callers may hand in padded
//! ones and every stage honors the stride.

pub mod api;
pub mod buffer;
pub mod codec;
pub mod color;
pub mod kernel;

#[cfg(test)]
mod domain_tests;

pub use api::{NirConverter, RasterError};
pub use buffer::{BufferError, PixelBuffer};
pub use codec::bmp::{write_bmp_gray8, write_bmp_rgb24};
pub use codec::pnm::{read_ppm, read_ppm_file, read_ppm_with_header, write_pgm, PpmHeader};
pub use codec::{save, ContainerFormat, DecodeError, EncodeError, FormatError};
pub use kernel::{transform, ParseWeightsError, TransformError, WeightTriple};
