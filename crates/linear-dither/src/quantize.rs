//! Uniform bit-depth quantization in linear light.
//!
//! A bit depth `n` defines `2^n` evenly spaced levels `k * M / (2^n - 1)`
//! over the sample range. Quantization picks the nearest one, rounding
//! ties upward.

use crate::error::DitherError;

/// Validated target bit depth in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitDepth(u8);

impl BitDepth {
    /// Validate a requested bit depth.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::BitDepthOutOfRange`] unless `1 <= bits <= 8`.
    pub fn new(bits: u8) -> Result<Self, DitherError> {
        if (1..=8).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(DitherError::BitDepthOutOfRange(bits))
        }
    }

    /// Number of bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Number of palette levels, `2^n`.
    #[inline]
    pub fn levels(self) -> u32 {
        1u32 << self.0
    }

    /// Distance between adjacent levels on a `[0, max]` scale.
    #[inline]
    pub fn step(self, max: f64) -> f64 {
        max / (self.levels() - 1) as f64
    }

    /// Linear value of level `k` on a `[0, max]` scale.
    ///
    /// Computed as `k * max / (levels - 1)` so the top level is exactly
    /// `max`.
    #[inline]
    pub fn level(self, k: u32, max: f64) -> f64 {
        k as f64 * max / (self.levels() - 1) as f64
    }
}

/// Nearest palette level to a linear value.
///
/// Values outside `[0, max]` saturate at the first or last level, so the
/// result is always a representable sample.
///
/// # Example
///
/// ```
/// use linear_dither::{nearest_level, BitDepth};
///
/// let one_bit = BitDepth::new(1).unwrap();
/// assert_eq!(nearest_level(128.0, one_bit, 255.0), 255.0);
/// assert_eq!(nearest_level(127.0, one_bit, 255.0), 0.0);
///
/// let two_bit = BitDepth::new(2).unwrap();
/// assert_eq!(nearest_level(100.0, two_bit, 255.0), 85.0);
/// ```
#[inline]
pub fn nearest_level(linear: f64, depth: BitDepth, max: f64) -> f64 {
    let top = depth.levels() - 1;
    let scaled = linear * top as f64 / max;
    let k = (scaled + 0.5).floor().clamp(0.0, top as f64) as u32;
    depth.level(k, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_depths() -> impl Iterator<Item = BitDepth> {
        (1..=8).map(|n| BitDepth::new(n).unwrap())
    }

    #[test]
    fn test_bit_depth_range() {
        assert_eq!(BitDepth::new(0), Err(DitherError::BitDepthOutOfRange(0)));
        assert_eq!(BitDepth::new(9), Err(DitherError::BitDepthOutOfRange(9)));
        for n in 1..=8 {
            assert_eq!(BitDepth::new(n).unwrap().bits(), n);
        }
    }

    #[test]
    fn test_levels_and_step() {
        let depth = BitDepth::new(2).unwrap();
        assert_eq!(depth.levels(), 4);
        assert_eq!(depth.step(255.0), 85.0);
        assert_eq!(depth.level(3, 255.0), 255.0);
        assert_eq!(BitDepth::new(8).unwrap().levels(), 256);
    }

    #[test]
    fn test_endpoints_fixed() {
        for depth in all_depths() {
            assert_eq!(nearest_level(0.0, depth, 255.0), 0.0, "{depth:?}");
            assert_eq!(nearest_level(255.0, depth, 255.0), 255.0, "{depth:?}");
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for depth in all_depths() {
            let mut prev = nearest_level(0.0, depth, 255.0);
            for i in 1..=2550 {
                let curr = nearest_level(i as f64 * 0.1, depth, 255.0);
                assert!(curr >= prev, "{depth:?}: not monotonic at {i}");
                prev = curr;
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        let depth = BitDepth::new(1).unwrap();
        assert_eq!(nearest_level(127.5, depth, 255.0), 255.0);
        assert_eq!(nearest_level(127.4, depth, 255.0), 0.0);

        let depth = BitDepth::new(2).unwrap();
        assert_eq!(nearest_level(42.5, depth, 255.0), 85.0);
        assert_eq!(nearest_level(42.4, depth, 255.0), 0.0);
    }

    #[test]
    fn test_saturates_out_of_range() {
        let depth = BitDepth::new(3).unwrap();
        assert_eq!(nearest_level(-80.0, depth, 255.0), 0.0);
        assert_eq!(nearest_level(400.0, depth, 255.0), 255.0);
    }

    #[test]
    fn test_eight_bits_is_identity_on_integers() {
        let depth = BitDepth::new(8).unwrap();
        for s in 0..=255u32 {
            assert_eq!(nearest_level(s as f64, depth, 255.0), s as f64);
        }
    }

    #[test]
    fn test_result_is_always_a_level() {
        for depth in all_depths() {
            for i in 0..=255 {
                let q = nearest_level(i as f64, depth, 255.0);
                let k = q * (depth.levels() - 1) as f64 / 255.0;
                assert!((k - k.round()).abs() < 1e-9, "{depth:?}: {q}");
            }
        }
    }
}
