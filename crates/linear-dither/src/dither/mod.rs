//! Dithering algorithms.
//!
//! Every algorithm reduces each channel of an [`Image`] to `2^n` uniformly
//! spaced levels in linear light, mutating the image in place:
//!
//! - **Bit correction**: nearest level, no dithering
//! - **Ordered**: Bayer threshold matrix of side 2, 4 or 8
//! - **Halftone**: ordered dithering with a 4×4 clustered-dot matrix
//! - **Random**: seeded uniform noise of one quantization step
//! - **Error diffusion**: Floyd-Steinberg, Jarvis-Judice-Ninke, Sierra,
//!   Atkinson, or any custom [`Kernel`]
//!
//! # Example
//!
//! ```
//! use linear_dither::{Channels, Ditherer, Gamma, Image};
//!
//! let mut image = Image::from_samples(
//!     4, 4, 255, Channels::Gray, Gamma::Power(1.0), vec![128; 16],
//! ).unwrap();
//!
//! Ditherer::new(&mut image).bit_correction(1).unwrap();
//! assert!(image.samples().iter().all(|&s| s == 255));
//! ```

mod diffusion;
mod kernel;
mod ordered;
mod residual;
mod threshold;

use std::fmt;
use std::str::FromStr;

pub use kernel::*;
pub use threshold::{Orientation, ThresholdMatrix};

use crate::error::DitherError;
use crate::image::Image;
use crate::quantize::BitDepth;

/// Runs dithering algorithms against one image.
///
/// Holds the image mutably for its whole lifetime. Each operation reads the
/// samples as currently stored, so running two algorithms in a row dithers
/// the output of the first.
///
/// Every operation validates its bit depth before touching the image and
/// returns [`DitherError::BitDepthOutOfRange`] unless `1 <= bits <= 8`.
#[derive(Debug)]
pub struct Ditherer<'a> {
    image: &'a mut Image,
}

impl<'a> Ditherer<'a> {
    /// Bind a ditherer to an image.
    pub fn new(image: &'a mut Image) -> Self {
        Self { image }
    }

    /// The bound image.
    pub fn image(&self) -> &Image {
        &*self.image
    }

    /// Snap every sample to the nearest of `2^bits` levels.
    pub fn bit_correction(&mut self, bits: u8) -> Result<(), DitherError> {
        let depth = BitDepth::new(bits)?;
        ordered::bit_correction(self.image, depth);
        Ok(())
    }

    /// Ordered dithering with a threshold matrix.
    ///
    /// The matrix bias is scaled to one quantization step `M / (2^bits - 1)`.
    pub fn ordered(&mut self, matrix: &ThresholdMatrix, bits: u8) -> Result<(), DitherError> {
        let depth = BitDepth::new(bits)?;
        ordered::ordered(self.image, matrix, depth);
        Ok(())
    }

    /// Ordered dithering with the 4×4 clustered-dot matrix.
    pub fn halftone(&mut self, bits: u8) -> Result<(), DitherError> {
        self.ordered(&ThresholdMatrix::halftone(), bits)
    }

    /// Random dithering with uniform noise of one quantization step.
    ///
    /// The generator is reseeded with `seed` on every call, so equal seeds
    /// give identical output.
    pub fn random(&mut self, bits: u8, seed: u64) -> Result<(), DitherError> {
        let depth = BitDepth::new(bits)?;
        ordered::random(self.image, depth, seed);
        Ok(())
    }

    /// Error diffusion with an arbitrary kernel.
    ///
    /// # Errors
    ///
    /// Besides the bit depth check, returns [`DitherError::Allocation`] if
    /// the residual buffer cannot be allocated.
    pub fn error_diffusion(&mut self, kernel: &Kernel, bits: u8) -> Result<(), DitherError> {
        let depth = BitDepth::new(bits)?;
        diffusion::dither_with_kernel(self.image, kernel, depth)
    }

    /// Floyd-Steinberg error diffusion.
    pub fn floyd_steinberg(&mut self, bits: u8) -> Result<(), DitherError> {
        self.error_diffusion(&FLOYD_STEINBERG, bits)
    }

    /// Jarvis-Judice-Ninke error diffusion.
    pub fn jjn(&mut self, bits: u8) -> Result<(), DitherError> {
        self.error_diffusion(&JARVIS_JUDICE_NINKE, bits)
    }

    /// Sierra error diffusion.
    pub fn sierra(&mut self, bits: u8) -> Result<(), DitherError> {
        self.error_diffusion(&SIERRA, bits)
    }

    /// Atkinson error diffusion (propagates 6/8 of the error).
    pub fn atkinson(&mut self, bits: u8) -> Result<(), DitherError> {
        self.error_diffusion(&ATKINSON, bits)
    }
}

/// Selectable dithering algorithm.
///
/// Parsed from a name or the classic numeric selector, see
/// [`DitherAlgorithm::TABLE`].
///
/// ```
/// use linear_dither::DitherAlgorithm;
///
/// assert_eq!("jjn".parse::<DitherAlgorithm>(), Ok(DitherAlgorithm::JarvisJudiceNinke));
/// assert_eq!("3".parse::<DitherAlgorithm>(), Ok(DitherAlgorithm::FloydSteinberg));
/// assert!("median-cut".parse::<DitherAlgorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Nearest level, no dithering.
    BitCorrection,
    /// Bayer threshold matrix.
    Ordered,
    /// Seeded uniform noise.
    Random,
    /// Floyd-Steinberg error diffusion.
    #[default]
    FloydSteinberg,
    /// Jarvis-Judice-Ninke error diffusion.
    JarvisJudiceNinke,
    /// Sierra error diffusion.
    Sierra,
    /// Atkinson error diffusion.
    Atkinson,
    /// Clustered-dot halftone.
    Halftone,
}

impl DitherAlgorithm {
    /// Every algorithm with its name and numeric selector.
    pub const TABLE: [(DitherAlgorithm, &'static str, u8); 8] = [
        (DitherAlgorithm::BitCorrection, "bit-correction", 0),
        (DitherAlgorithm::Ordered, "ordered", 1),
        (DitherAlgorithm::Random, "random", 2),
        (DitherAlgorithm::FloydSteinberg, "floyd-steinberg", 3),
        (DitherAlgorithm::JarvisJudiceNinke, "jjn", 4),
        (DitherAlgorithm::Sierra, "sierra", 5),
        (DitherAlgorithm::Atkinson, "atkinson", 6),
        (DitherAlgorithm::Halftone, "halftone", 7),
    ];

    fn entry(self) -> (DitherAlgorithm, &'static str, u8) {
        Self::TABLE[self as usize]
    }

    /// Selector name.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Numeric selector.
    pub fn index(self) -> u8 {
        self.entry().2
    }

    /// Algorithm for a numeric selector.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, _, i)| *i == index)
            .map(|(algorithm, _, _)| *algorithm)
    }
}

impl FromStr for DitherAlgorithm {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(index) = wanted.parse::<u8>() {
            return Self::from_index(index)
                .ok_or_else(|| DitherError::UnknownAlgorithm(s.to_string()));
        }
        Self::TABLE
            .iter()
            .find(|(_, name, _)| *name == wanted)
            .map(|(algorithm, _, _)| *algorithm)
            .ok_or_else(|| DitherError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
