//! Windows bitmap output: 8-bit grayscale and 24-bit BGR.

mod header;
mod writer;

pub use header::{
    BmpFileHeader, BmpInfoHeader, BmpLayout, COMPRESSION_NONE, FILE_HEADER_SIZE,
    GRAY_PALETTE_SIZE, INFO_HEADER_SIZE,
};
pub use writer::{write_bmp_gray8, write_bmp_rgb24};
