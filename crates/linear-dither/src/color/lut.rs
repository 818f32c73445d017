//! Per-image decode lookup table.
//!
//! Stored samples are integers in `[0, M]`, so every possible decode result
//! can be computed once when an image is created. Encoding takes arbitrary
//! linear values and always goes through [`Gamma::encode`] directly.

use super::gamma::Gamma;

/// Linear value for every stored sample `0..=max`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeTable {
    entries: Vec<f64>,
}

impl DecodeTable {
    /// Build the table for one transfer function and sample range.
    pub fn new(gamma: Gamma, max: u8) -> Self {
        let max_f = max as f64;
        Self {
            entries: (0..=max as u16)
                .map(|s| gamma.decode(s as f64, max_f))
                .collect(),
        }
    }

    /// Decoded linear value of a stored sample.
    ///
    /// Samples above the table's range (which a valid image never stores)
    /// saturate at the last entry.
    #[inline]
    pub fn decode(&self, sample: u8) -> f64 {
        let idx = (sample as usize).min(self.entries.len() - 1);
        self.entries[idx]
    }
}
