//! Owned 8-bit pixel buffer with row stride.
//!
//! [`PixelBuffer`] is the only type shared between the reader, the
//! transform kernel and the writers. Rows are stored top-to-bottom in
//! memory regardless of the on-disk orientation of the container they
//! came from or are written to.

use super::BufferError;

/// Owned 8-bit interleaved pixel buffer.
///
/// Samples are stored row-major with `stride` bytes between the starts of
/// consecutive rows. Each row holds `width * channels` meaningful bytes;
/// anything between that and `stride` is padding and never read by the
/// writers.
///
/// # Invariants
///
/// - `width > 0`, `height > 0`, `channels > 0`
/// - `stride >= width * channels`
/// - `samples.len() >= stride * height`
///
/// # Example
///
/// ```
/// use nir_raster::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, 3, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(buffer.row(0), &[255, 0, 0, 0, 0, 255]);
/// assert_eq!(buffer.pixel(1, 0), &[0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap tightly packed samples (`stride = width * channels`).
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<u8>,
    ) -> Result<Self, BufferError> {
        let stride = row_bytes(width, channels)?;
        Self::with_stride(width, height, channels, stride, samples)
    }

    /// Wrap samples whose rows are `stride` bytes apart.
    pub fn with_stride(
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
        samples: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let min = row_bytes(width, channels)?;
        if stride < min {
            return Err(BufferError::StrideTooSmall { stride, min });
        }
        let required = stride
            .checked_mul(height)
            .ok_or(BufferError::Allocation { bytes: usize::MAX })?;
        if samples.len() < required {
            return Err(BufferError::SamplesTooShort {
                len: samples.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            stride,
            samples,
        })
    }

    /// Allocate a zero-filled, tightly packed buffer.
    ///
    /// Allocation goes through `try_reserve_exact`, so an oversized request
    /// surfaces as [`BufferError::Allocation`] instead of aborting.
    pub fn try_zeroed(width: usize, height: usize, channels: usize) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let stride = row_bytes(width, channels)?;
        let len = stride
            .checked_mul(height)
            .ok_or(BufferError::Allocation { bytes: usize::MAX })?;
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| BufferError::Allocation { bytes: len })?;
        samples.resize(len, 0);
        Ok(Self {
            width,
            height,
            channels,
            stride,
            samples,
        })
    }

    /// Wrap samples whose geometry the caller has already validated.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `samples.len() == width * height * channels`.
    pub(crate) fn from_packed(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<u8>,
    ) -> Self {
        debug_assert!(width > 0 && height > 0 && channels > 0);
        debug_assert_eq!(
            samples.len(),
            width * height * channels,
            "samples length ({}) must match {}x{}x{}",
            samples.len(),
            width,
            height,
            channels,
        );
        Self {
            width,
            height,
            channels,
            stride: width * channels,
            samples,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Meaningful bytes per row (`width * channels`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// The full sample storage, padding included.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Row `y` without its trailing stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.samples[start..start + self.row_len()]
    }

    /// Mutable row `y` without its trailing stride padding.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let len = self.row_len();
        &mut self.samples[start..start + len]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// The `channels` samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = y * self.stride + x * self.channels;
        &self.samples[start..start + self.channels]
    }

    /// Consume the buffer and return its sample storage.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

fn row_bytes(width: usize, channels: usize) -> Result<usize, BufferError> {
    if channels == 0 {
        return Err(BufferError::ZeroChannels);
    }
    width
        .checked_mul(channels)
        .ok_or(BufferError::Allocation { bytes: usize::MAX })
}
