//! Test fixtures and constants.

/// Reference 2x2 image: red, green / blue, white
pub const REFERENCE_RGB: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];

/// Default-weight mix of [`REFERENCE_RGB`]
pub const REFERENCE_NIR: [u8; 4] = [191, 64, 0, 255];

/// Exit codes returned by the binary
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const DECODE: i32 = 2;
    pub const ALLOCATION: i32 = 3;
    pub const ENCODE: i32 = 4;
}

/// Build a binary PPM with a plain `P6\n{w} {h}\n255\n` header
pub fn ppm(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    bytes.extend_from_slice(samples);
    bytes
}

/// The reference 2x2 image as PPM bytes
pub fn reference_ppm() -> Vec<u8> {
    ppm(2, 2, &REFERENCE_RGB)
}

/// A `width` x `height` image whose pixels vary with position
pub fn gradient_ppm(width: usize, height: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            samples.push((x * 255 / width.max(1)) as u8);
            samples.push((y * 255 / height.max(1)) as u8);
            samples.push(((x + y) % 256) as u8);
        }
    }
    ppm(width, height, &samples)
}

/// PPM header whose raster cannot be allocated (but whose size fits a usize)
pub const HUGE_PPM: &[u8] = b"P6\n1073741824 1073741824\n255\n";
