//! Error type for the linear-dither crate.
//!
//! [`DitherError`] covers every way a caller can hand the core bad input.
//! Pixel coordinates are never an error: out-of-bounds reads return a zero
//! sentinel and out-of-bounds writes are ignored.

use thiserror::Error;

/// Errors returned by image construction and the dithering entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DitherError {
    /// Target bit depth outside `1..=8`.
    #[error("bit depth {0} out of range (expected 1..=8)")]
    BitDepthOutOfRange(u8),

    /// Threshold matrix side other than 2, 4 or 8.
    #[error("unsupported threshold matrix size {0} (expected 2, 4 or 8)")]
    UnsupportedMatrixSize(usize),

    /// Algorithm selector that names no known algorithm.
    #[error("unknown dithering algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Matrix orientation selector that names no known transform.
    #[error("unknown matrix orientation: {0:?}")]
    UnknownOrientation(String),

    /// Diffusion kernel that cannot be applied in raster order.
    #[error("invalid diffusion kernel: {0}")]
    InvalidKernel(String),

    /// Negative or non-finite gamma exponent.
    #[error("invalid gamma {0} (expected 0 for sRGB or a positive exponent)")]
    InvalidGamma(f64),

    /// Image geometry or sample buffer that violates the image invariants.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The sample buffer could not be allocated.
    #[error("failed to allocate {0} bytes for image samples")]
    Allocation(usize),
}
