//! Assertion helpers for tests.

use nir_raster::codec::bmp::{BmpFileHeader, BmpInfoHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use pretty_assertions::assert_eq;

use super::app::TestOutput;

/// Assert the process exited with `expected`
pub fn assert_exit(output: &TestOutput, expected: i32) {
    assert_eq!(
        output.code,
        Some(expected),
        "Expected exit code {}, got {:?}. Stderr: {}",
        expected,
        output.code,
        output.stderr
    );
}

/// Assert the run succeeded
pub fn assert_success(output: &TestOutput) {
    assert_exit(output, super::fixtures::exit::SUCCESS);
}

/// Assert stderr contains `needle`
pub fn assert_stderr_contains(output: &TestOutput, needle: &str) {
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to contain {:?}. Stderr: {}",
        needle,
        output.stderr
    );
}

/// Assert stdout contains `needle`
pub fn assert_stdout_contains(output: &TestOutput, needle: &str) {
    assert!(
        output.stdout.contains(needle),
        "Expected stdout to contain {:?}. Stdout: {}",
        needle,
        output.stdout
    );
}

/// Assert `bytes` is a binary PGM of the given size and return its raster
pub fn assert_pgm(bytes: &[u8], width: usize, height: usize) -> Vec<u8> {
    let header = format!("P5\n{} {}\n255\n", width, height);
    assert!(
        bytes.starts_with(header.as_bytes()),
        "Expected PGM header {:?}, got {:?}",
        header,
        String::from_utf8_lossy(&bytes[..header.len().min(bytes.len())])
    );
    let raster = &bytes[header.len()..];
    assert_eq!(raster.len(), width * height, "PGM raster size");
    raster.to_vec()
}

/// Assert `bytes` is a bottom-up bitmap of the given size and bit depth
pub fn assert_bmp(bytes: &[u8], width: i32, height: i32, bits_per_pixel: u16) {
    assert!(
        bytes.len() >= FILE_HEADER_SIZE + INFO_HEADER_SIZE,
        "Bitmap too short: {} bytes",
        bytes.len()
    );
    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    file_bytes.copy_from_slice(&bytes[..FILE_HEADER_SIZE]);
    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    info_bytes.copy_from_slice(&bytes[FILE_HEADER_SIZE..FILE_HEADER_SIZE + INFO_HEADER_SIZE]);

    let file = BmpFileHeader::from_bytes(&file_bytes).expect("Missing BM signature");
    let info = BmpInfoHeader::from_bytes(&info_bytes);

    assert_eq!(file.file_size as usize, bytes.len(), "file size field");
    assert_eq!(info.width, width);
    assert_eq!(info.height, height);
    assert_eq!(info.bits_per_pixel, bits_per_pixel);
}
