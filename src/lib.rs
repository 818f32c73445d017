//! pnm-dither - gamma-correct dithering for PGM/PPM images
//!
//! The algorithms live in the `linear-dither` crate. This library adds file
//! I/O, configuration and the pipeline the binary drives, and is exposed for
//! integration testing.

pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
