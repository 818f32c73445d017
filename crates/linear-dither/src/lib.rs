//! linear-dither: gamma-correct bit-depth reduction for raster images
//!
//! Images store gamma-encoded samples, but light adds linearly. Every
//! algorithm in this crate decodes samples to linear light, quantizes and
//! diffuses error there, and re-encodes only when writing back.
//!
//! # Quick Start
//!
//! ```
//! use linear_dither::{Channels, Ditherer, Gamma, Image};
//!
//! // 16x16 sRGB gray ramp, reduced to 1 bit with Floyd-Steinberg
//! let samples: Vec<u8> = (0..16 * 16).map(|i| (i % 16 * 17) as u8).collect();
//! let mut image = Image::from_samples(16, 16, 255, Channels::Gray, Gamma::Srgb, samples).unwrap();
//!
//! Ditherer::new(&mut image).floyd_steinberg(1).unwrap();
//! assert!(image.samples().iter().all(|&s| s == 0 || s == 255));
//! ```
//!
//! # Components
//!
//! - [`Gamma`] / [`DecodeTable`]: transfer functions between stored and
//!   linear samples
//! - [`Image`]: sample grid with linear-light reads and writes
//! - [`BitDepth`] / [`nearest_level`]: uniform `2^n`-level quantizer
//! - [`ThresholdMatrix`]: Bayer and clustered-dot bias patterns
//! - [`Kernel`]: error diffusion taps
//! - [`Ditherer`]: runs one algorithm against an image
//!
//! # Why Linear Light
//!
//! sRGB code 128 is only about 21.6% of full intensity. Dithering it to
//! black and white on code values would light half the pixels and the
//! result would look far too bright; dithering in linear light lights about
//! a fifth of them, which averages back to the right intensity.
//!
//! # Channels
//!
//! RGB images are dithered one channel at a time, each with its own error
//! buffer. No algorithm couples channels.

pub mod color;
pub mod dither;
pub mod error;
pub mod image;
pub mod quantize;


pub use color::{DecodeTable, Gamma};
pub use dither::{
    DitherAlgorithm, Ditherer, Kernel, Orientation, ThresholdMatrix, ATKINSON,
    FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, SIERRA,
};
pub use error::DitherError;
pub use image::{Channels, Image};
pub use quantize::{nearest_level, BitDepth};
