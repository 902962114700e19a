//! Fixed-layout BMP header records.
//!
//! Both records are encoded field by field in little-endian order, so the
//! byte layout never depends on in-memory struct packing.

use crate::codec::error::EncodeError;

/// Size of the `BITMAPFILEHEADER` record.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the `BITMAPINFOHEADER` record.
pub const INFO_HEADER_SIZE: usize = 40;

/// Size of the 256-entry grayscale palette (4 bytes per entry).
pub const GRAY_PALETTE_SIZE: usize = 256 * 4;

/// `BI_RGB`, no compression.
pub const COMPRESSION_NONE: u32 = 0;

/// 14-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpFileHeader {
    /// Total file size in bytes
    pub file_size: u32,
    /// Reserved, always 0 when written
    pub reserved1: u16,
    /// Reserved, always 0 when written
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data
    pub pixel_offset: u32,
}

impl BmpFileHeader {
    /// File signature, `"BM"` (0x4D42 little-endian).
    pub const MAGIC: u16 = 0x4D42;

    /// Encode into the on-disk layout.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[0..2].copy_from_slice(&Self::MAGIC.to_le_bytes());
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        out
    }

    /// Decode from the on-disk layout. Returns `None` if the signature is
    /// not `"BM"`.
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Option<Self> {
        if le_u16(bytes, 0) != Self::MAGIC {
            return None;
        }
        Some(Self {
            file_size: le_u32(bytes, 2),
            reserved1: le_u16(bytes, 6),
            reserved2: le_u16(bytes, 8),
            pixel_offset: le_u32(bytes, 10),
        })
    }
}

/// 40-byte info header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfoHeader {
    /// Size of this record, always 40
    pub header_size: u32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels; positive means rows are stored bottom-up
    pub height: i32,
    /// Color planes, always 1
    pub planes: u16,
    /// Bits per pixel (8 or 24 here)
    pub bits_per_pixel: u16,
    /// Compression method
    pub compression: u32,
    /// Size of the pixel data in bytes
    pub image_size: u32,
    /// Horizontal resolution, pixels per meter
    pub x_pixels_per_meter: i32,
    /// Vertical resolution, pixels per meter
    pub y_pixels_per_meter: i32,
    /// Palette entries used (0 = all)
    pub colors_used: u32,
    /// Important palette entries (0 = all)
    pub colors_important: u32,
}

impl BmpInfoHeader {
    /// Encode into the on-disk layout.
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    /// Decode from the on-disk layout.
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: le_u32(bytes, 0),
            width: le_u32(bytes, 4) as i32,
            height: le_u32(bytes, 8) as i32,
            planes: le_u16(bytes, 12),
            bits_per_pixel: le_u16(bytes, 14),
            compression: le_u32(bytes, 16),
            image_size: le_u32(bytes, 20),
            x_pixels_per_meter: le_u32(bytes, 24) as i32,
            y_pixels_per_meter: le_u32(bytes, 28) as i32,
            colors_used: le_u32(bytes, 32),
            colors_important: le_u32(bytes, 36),
        }
    }
}

/// Sizes and offsets of one uncompressed bottom-up bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpLayout {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// 8 or 24
    pub bits_per_pixel: u16,
    /// Bytes per stored row, padded to a multiple of 4
    pub row_size: u32,
    /// Bytes of palette between the headers and the pixel data
    pub palette_bytes: u32,
    /// `row_size * height`
    pub image_bytes: u32,
}

impl BmpLayout {
    /// Layout of an 8-bit palette-indexed grayscale bitmap.
    pub fn gray8(width: usize, height: usize) -> Result<Self, EncodeError> {
        Self::new(width, height, 8, GRAY_PALETTE_SIZE as u64)
    }

    /// Layout of a 24-bit packed BGR bitmap.
    pub fn rgb24(width: usize, height: usize) -> Result<Self, EncodeError> {
        Self::new(width, height, 24, 0)
    }

    fn new(
        width: usize,
        height: usize,
        bits_per_pixel: u16,
        palette_bytes: u64,
    ) -> Result<Self, EncodeError> {
        let too_large = || EncodeError::DimensionsTooLarge { width, height };

        // Header fields are signed 32-bit
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(too_large());
        }
        let bytes_per_pixel = u64::from(bits_per_pixel / 8);
        let row_size = round_up4(width as u64 * bytes_per_pixel);
        let image_bytes = row_size * height as u64;
        let file_size = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u64 + palette_bytes + image_bytes;
        if file_size > u64::from(u32::MAX) {
            return Err(too_large());
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            bits_per_pixel,
            row_size: row_size as u32,
            palette_bytes: palette_bytes as u32,
            image_bytes: image_bytes as u32,
        })
    }

    /// Offset of the first pixel row from the start of the file.
    pub fn pixel_offset(&self) -> u32 {
        (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32 + self.palette_bytes
    }

    /// Total file size in bytes.
    pub fn file_size(&self) -> u32 {
        self.pixel_offset() + self.image_bytes
    }

    /// The file header for this layout.
    pub fn file_header(&self) -> BmpFileHeader {
        BmpFileHeader {
            file_size: self.file_size(),
            reserved1: 0,
            reserved2: 0,
            pixel_offset: self.pixel_offset(),
        }
    }

    /// The info header for this layout (bottom-up, uncompressed).
    pub fn info_header(&self) -> BmpInfoHeader {
        BmpInfoHeader {
            header_size: INFO_HEADER_SIZE as u32,
            width: self.width as i32,
            height: self.height as i32,
            planes: 1,
            bits_per_pixel: self.bits_per_pixel,
            compression: COMPRESSION_NONE,
            image_size: self.image_bytes,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

#[inline]
fn round_up4(n: u64) -> u64 {
    (n + 3) & !3
}

fn le_u16(bytes: &[u8], at: usize) -> u16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&bytes[at..at + 2]);
    u16::from_le_bytes(raw)
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(raw)
}
