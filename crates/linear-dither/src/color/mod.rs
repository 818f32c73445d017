//! Gamma transfer functions.
//!
//! Images store gamma-encoded samples; every reduction step works on linear
//! light. This module is the only place the two meet.
//!
//! # Example
//!
//! ```
//! use linear_dither::Gamma;
//!
//! // Stored sRGB mid-gray is about 21.6% linear light
//! let linear = Gamma::Srgb.decode(128.0, 255.0);
//! assert!((linear / 255.0 - 0.216).abs() < 1e-3);
//!
//! // And comes back unchanged
//! assert_eq!(Gamma::Srgb.encode(linear, 255.0).round(), 128.0);
//! ```

mod gamma;
mod lut;

pub use gamma::Gamma;
pub use lut::DecodeTable;
