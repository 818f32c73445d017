//! Transfer functions between stored (gamma-encoded) and linear samples.
//!
//! Samples are expressed on the image's own scale `[0, M]` on both sides of
//! the transform: a linear value of `M` is full intensity, exactly like an
//! encoded value of `M`.

use std::fmt;

use crate::error::DitherError;

/// sRGB decode threshold on the normalized encoded value (IEC 61966-2-1).
const SRGB_DECODE_BREAK: f64 = 0.04045;

/// sRGB encode threshold on the normalized linear value (IEC 61966-2-1).
const SRGB_ENCODE_BREAK: f64 = 0.0031308;

/// Transfer function of an image's stored samples.
///
/// `Srgb` is the piecewise IEC 61966-2-1 curve. `Power(g)` is a pure power
/// law where `linear = encoded^g` on normalized values; `Power(1.0)` stores
/// linear light directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gamma {
    /// sRGB transfer curve.
    #[default]
    Srgb,
    /// Power-law exponent, always positive and finite.
    Power(f64),
}

impl Gamma {
    /// Build a transfer function from the conventional numeric selector.
    ///
    /// `0` selects sRGB; any positive finite value is a power-law exponent
    /// (2.2 being the usual choice).
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidGamma`] for negative or non-finite
    /// values.
    ///
    /// # Example
    ///
    /// ```
    /// use linear_dither::Gamma;
    ///
    /// assert_eq!(Gamma::from_value(0.0).unwrap(), Gamma::Srgb);
    /// assert_eq!(Gamma::from_value(2.2).unwrap(), Gamma::Power(2.2));
    /// assert!(Gamma::from_value(-1.0).is_err());
    /// ```
    pub fn from_value(value: f64) -> Result<Self, DitherError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DitherError::InvalidGamma(value));
        }
        if value == 0.0 {
            Ok(Gamma::Srgb)
        } else {
            Ok(Gamma::Power(value))
        }
    }

    /// Decode a stored sample into linear light on the `[0, max]` scale.
    ///
    /// The input is clamped to `[0, max]` first, so this never produces NaN.
    #[inline]
    pub fn decode(self, encoded: f64, max: f64) -> f64 {
        let v = (encoded / max).clamp(0.0, 1.0);
        let linear = match self {
            Gamma::Power(g) => v.powf(g),
            Gamma::Srgb => {
                if v <= SRGB_DECODE_BREAK {
                    v / 12.92
                } else {
                    ((v + 0.055) / 1.055).powf(2.4)
                }
            }
        };
        linear * max
    }

    /// Encode a linear value on the `[0, max]` scale back to a stored sample.
    ///
    /// The result is fractional; rounding to an integral sample happens at
    /// the storage boundary in [`Image::put_encoded`](crate::Image::put_encoded).
    #[inline]
    pub fn encode(self, linear: f64, max: f64) -> f64 {
        let v = (linear / max).clamp(0.0, 1.0);
        let encoded = match self {
            Gamma::Power(g) => v.powf(1.0 / g),
            Gamma::Srgb => {
                if v <= SRGB_ENCODE_BREAK {
                    v * 12.92
                } else {
                    1.055 * v.powf(1.0 / 2.4) - 0.055
                }
            }
        };
        encoded * max
    }
}

impl fmt::Display for Gamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gamma::Srgb => write!(f, "sRGB"),
            Gamma::Power(g) => write!(f, "{g}"),
        }
    }
}
