//! Per-sample lookup table for 8-bit input.
//!
//! An 8-bit sample has only 256 possible values, so the kernel decodes each
//! one once per call instead of once per pixel. Entries are computed with
//! the exact transfer function, which keeps table output bit-identical to
//! evaluating the formula inline.

use super::transfer::srgb_to_linear;

/// Maps an 8-bit sample to its normalized intensity in 0.0..=1.0.
pub(crate) struct SampleLut {
    table: [f32; 256],
}

impl SampleLut {
    /// Build the table, linearizing through the sRGB curve when `linearize`
    /// is set and dividing by 255 otherwise.
    pub(crate) fn new(linearize: bool) -> Self {
        let mut table = [0.0f32; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let v = i as f32 / 255.0;
            *slot = if linearize { srgb_to_linear(v) } else { v };
        }
        Self { table }
    }

    #[inline]
    pub(crate) fn get(&self, sample: u8) -> f32 {
        self.table[sample as usize]
    }
}
