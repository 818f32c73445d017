//! Gamma-aware sample storage.
//!
//! [`Image`] owns the encoded sample grid and is the boundary between
//! storage and linear light: reads decode through a per-image lookup table,
//! writes encode and round to an integral sample.

use crate::color::{DecodeTable, Gamma};
use crate::error::DitherError;

use super::channels::Channels;

/// A raster image of gamma-encoded samples.
///
/// Samples are stored row-major with channels interleaved, one byte per
/// sample, and always lie in `[0, max_value]`.
///
/// Coordinates are signed so that diffusion taps can address neighbors left
/// of or above the image: out-of-bounds reads return a zero sentinel and
/// out-of-bounds writes are ignored.
///
/// # Example
///
/// ```
/// use linear_dither::{Channels, Gamma, Image};
///
/// let mut image = Image::new(2, 1, 255, Channels::Gray, Gamma::Power(2.0)).unwrap();
///
/// // Quarter-intensity light is stored at half code value under gamma 2.0
/// image.put_linear(0, 0, 0, 63.75);
/// assert_eq!(image.raw(0, 0, 0), 128);
///
/// // Reads outside the image return the sentinel and writes are dropped
/// assert_eq!(image.raw(-1, 0, 0), 0);
/// image.put_linear(5, 5, 0, 255.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    max_value: u8,
    channels: Channels,
    gamma: Gamma,
    samples: Vec<u8>,
    decode: DecodeTable,
}

impl Image {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// - [`DitherError::InvalidImage`] for a zero dimension or a zero
    ///   `max_value`
    /// - [`DitherError::InvalidGamma`] for a power law that is not positive
    ///   and finite
    /// - [`DitherError::Allocation`] if the sample buffer cannot be allocated
    pub fn new(
        width: usize,
        height: usize,
        max_value: u8,
        channels: Channels,
        gamma: Gamma,
    ) -> Result<Self, DitherError> {
        let len = Self::checked_len(width, height, max_value, channels, gamma)?;
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| DitherError::Allocation(len))?;
        samples.resize(len, 0);
        Ok(Self::assemble(width, height, max_value, channels, gamma, samples))
    }

    /// Wrap an existing sample buffer.
    ///
    /// Samples above `max_value` are clamped to it.
    ///
    /// # Errors
    ///
    /// - [`DitherError::InvalidImage`] for a zero dimension, a zero
    ///   `max_value`, or a buffer whose length is not
    ///   `width * height * channels`
    /// - [`DitherError::InvalidGamma`] as for [`Image::new`]
    pub fn from_samples(
        width: usize,
        height: usize,
        max_value: u8,
        channels: Channels,
        gamma: Gamma,
        mut samples: Vec<u8>,
    ) -> Result<Self, DitherError> {
        let len = Self::checked_len(width, height, max_value, channels, gamma)?;
        if samples.len() != len {
            return Err(DitherError::InvalidImage(format!(
                "expected {len} samples for {width}x{height}x{}, got {}",
                channels.count(),
                samples.len()
            )));
        }
        for sample in samples.iter_mut() {
            *sample = (*sample).min(max_value);
        }
        Ok(Self::assemble(width, height, max_value, channels, gamma, samples))
    }

    fn checked_len(
        width: usize,
        height: usize,
        max_value: u8,
        channels: Channels,
        gamma: Gamma,
    ) -> Result<usize, DitherError> {
        if let Gamma::Power(g) = gamma {
            if !g.is_finite() || g <= 0.0 {
                return Err(DitherError::InvalidGamma(g));
            }
        }
        if width == 0 || height == 0 {
            return Err(DitherError::InvalidImage(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        if max_value == 0 {
            return Err(DitherError::InvalidImage(
                "max sample value must be at least 1".to_string(),
            ));
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels.count()))
            .ok_or(DitherError::Allocation(usize::MAX))
    }

    fn assemble(
        width: usize,
        height: usize,
        max_value: u8,
        channels: Channels,
        gamma: Gamma,
        samples: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            max_value,
            channels,
            gamma,
            samples,
            decode: DecodeTable::new(gamma, max_value),
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

    /// Largest storable sample value `M`.
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Transfer function of the stored samples.
    #[inline]
    pub fn gamma(&self) -> Gamma {
        self.gamma
    }

    /// Raw encoded samples, row-major, channels interleaved.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[inline]
    fn index(&self, x: isize, y: isize, channel: usize) -> Option<usize> {
        if x < 0 || y < 0 || channel >= self.channels.count() {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.channels.count() + channel)
    }

    /// Stored (encoded) sample, or `0` outside the image.
    #[inline]
    pub fn raw(&self, x: isize, y: isize, channel: usize) -> u8 {
        self.index(x, y, channel)
            .map_or(0, |idx| self.samples[idx])
    }

    /// Sample decoded to linear light on the `[0, M]` scale.
    ///
    /// Outside the image this decodes the zero sentinel, which is `0.0` for
    /// every transfer function.
    #[inline]
    pub fn linear(&self, x: isize, y: isize, channel: usize) -> f64 {
        self.decode.decode(self.raw(x, y, channel))
    }

    /// Store an encoded value, clamped to `[0, M]` and rounded.
    ///
    /// Does nothing outside the image.
    #[inline]
    pub fn put_encoded(&mut self, x: isize, y: isize, channel: usize, value: f64) {
        if let Some(idx) = self.index(x, y, channel) {
            self.samples[idx] = self.clamp(value);
        }
    }

    /// Encode a linear value and store it.
    ///
    /// This is the only write path the dithering algorithms use.
    #[inline]
    pub fn put_linear(&mut self, x: isize, y: isize, channel: usize, value: f64) {
        let encoded = self.gamma.encode(value, self.max_value as f64);
        self.put_encoded(x, y, channel, encoded);
    }

    /// Clamp a value to `[0, M]` and round to the nearest integral sample.
    #[inline]
    pub fn clamp(&self, value: f64) -> u8 {
        value.clamp(0.0, self.max_value as f64).round() as u8
    }

    /// Replace the contents with a horizontal linear-light ramp.
    ///
    /// Column `x` receives linear intensity `x / width * M` on every
    /// channel, so the left edge is black and the right edge approaches
    /// full intensity.
    pub fn fill_with_gradient(&mut self) {
        let max = self.max_value as f64;
        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                let value = x as f64 / self.width as f64 * max;
                for c in 0..self.channels.count() {
                    self.put_linear(x, y, c, value);
                }
            }
        }
    }
}
