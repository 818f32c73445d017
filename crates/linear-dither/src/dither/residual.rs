//! Accumulator for propagated quantization error.

use crate::error::DitherError;

/// Per-pixel error accumulator for one channel.
///
/// Covers the whole image and starts at zero. Diffusion adds shares to
/// pixels ahead of the scan position and reads each pixel's total once when
/// it is visited. Coordinates outside the image are ignored, which is how
/// boundary taps drop their share.
#[derive(Debug)]
pub(crate) struct ResidualBuffer {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl ResidualBuffer {
    /// Create a zeroed buffer for a `width × height` image.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::Allocation`] if the buffer cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, DitherError> {
        let len = width
            .checked_mul(height)
            .ok_or(DitherError::Allocation(usize::MAX))?;
        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| DitherError::Allocation(len * std::mem::size_of::<f64>()))?;
        values.resize(len, 0.0);
        Ok(Self {
            width,
            height,
            values,
        })
    }

    #[inline]
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Accumulated error at a pixel, `0.0` outside the image.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> f64 {
        self.index(x, y).map_or(0.0, |idx| self.values[idx])
    }

    /// Add a share of error to a pixel. Ignored outside the image.
    #[inline]
    pub fn add(&mut self, x: isize, y: isize, share: f64) {
        if let Some(idx) = self.index(x, y) {
            self.values[idx] += share;
        }
    }

    /// Reset every accumulator to zero.
    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }
}
