//! Threshold matrices for ordered dithering.
//!
//! A matrix stores the visiting rank `0..N²` of every cell. At use time the
//! rank is turned into a zero-mean bias in `(-0.5, 0.5)` and scaled by one
//! quantization step before the value is snapped to the nearest level.

use std::fmt;
use std::str::FromStr;

use crate::error::DitherError;

/// 2×2 seed pattern of the recursive Bayer construction.
const BAYER_BASE: [[u16; 2]; 2] = [[0, 2], [3, 1]];

/// Classic 4×4 clustered-dot screen: the dot grows outward from the center.
///
/// ```text
///    12   5   6  13
///     4   0   1   7
///    11   3   2   8
///    15  10   9  14
/// ```
const CLUSTERED_DOT_4: [u16; 16] = [12, 5, 6, 13, 4, 0, 1, 7, 11, 3, 2, 8, 15, 10, 9, 14];

/// Square matrix of threshold ranks, tiled over the image.
///
/// Matrices are immutable; every orientation transform returns a new one.
///
/// # Example
///
/// ```
/// use linear_dither::ThresholdMatrix;
///
/// let bayer = ThresholdMatrix::bayer(2).unwrap();
/// assert_eq!(bayer.rank(0, 0), 0);
/// assert_eq!(bayer.rank(1, 0), 2);
/// assert_eq!(bayer.rank(0, 1), 3);
///
/// // Tiles over the plane
/// assert_eq!(bayer.rank(2, 2), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMatrix {
    size: usize,
    ranks: Vec<u16>,
}

impl ThresholdMatrix {
    /// Build a dispersed-dot Bayer matrix of side 2, 4 or 8.
    ///
    /// Each doubling places four scaled copies of the previous matrix into
    /// quadrants offset by the 2×2 seed pattern `{0, 2, 3, 1}`.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::UnsupportedMatrixSize`] for any other side.
    pub fn bayer(size: usize) -> Result<Self, DitherError> {
        if !matches!(size, 2 | 4 | 8) {
            return Err(DitherError::UnsupportedMatrixSize(size));
        }

        let mut side = 1;
        let mut ranks = vec![0u16];
        while side < size {
            let next = side * 2;
            let mut grown = vec![0u16; next * next];
            for y in 0..next {
                for x in 0..next {
                    let inner = ranks[(y % side) * side + x % side];
                    grown[y * next + x] = 4 * inner + BAYER_BASE[y / side][x / side];
                }
            }
            ranks = grown;
            side = next;
        }

        Ok(Self { size, ranks })
    }

    /// The fixed 4×4 clustered-dot matrix used for halftoning.
    pub fn halftone() -> Self {
        Self {
            size: 4,
            ranks: CLUSTERED_DOT_4.to_vec(),
        }
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Visiting rank at an image position, tiling the matrix.
    #[inline]
    pub fn rank(&self, x: usize, y: usize) -> u16 {
        self.ranks[(y % self.size) * self.size + x % self.size]
    }

    /// Zero-mean bias at an image position, in `(-0.5, 0.5)`.
    ///
    /// Rank `r` maps to `r / N² - (N² - 1) / (2 N²)`, so the biases over one
    /// tile sum to zero.
    #[inline]
    pub fn bias(&self, x: usize, y: usize) -> f64 {
        let cells = (self.size * self.size) as f64;
        self.rank(x, y) as f64 / cells - (cells - 1.0) / (2.0 * cells)
    }

    /// Apply an orientation transform.
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let n = self.size - 1;
        match orientation {
            Orientation::Identity => self.clone(),
            Orientation::RotateLeft => self.remap(|x, y| (n - y, x)),
            Orientation::RotateRight => self.remap(|x, y| (y, n - x)),
            Orientation::FlipHorizontal => self.remap(|x, y| (n - x, y)),
            Orientation::FlipVertical => self.remap(|x, y| (x, n - y)),
            Orientation::Transpose => self.remap(|x, y| (y, x)),
            Orientation::AntiTranspose => self.remap(|x, y| (n - y, n - x)),
        }
    }

    /// Rotate 90° counter-clockwise.
    pub fn rotate_left(&self) -> Self {
        self.oriented(Orientation::RotateLeft)
    }

    /// Rotate 90° clockwise.
    pub fn rotate_right(&self) -> Self {
        self.oriented(Orientation::RotateRight)
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&self) -> Self {
        self.oriented(Orientation::FlipHorizontal)
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&self) -> Self {
        self.oriented(Orientation::FlipVertical)
    }

    /// Reflect about the main diagonal.
    pub fn transpose(&self) -> Self {
        self.oriented(Orientation::Transpose)
    }

    /// Reflect about the anti-diagonal.
    pub fn anti_transpose(&self) -> Self {
        self.oriented(Orientation::AntiTranspose)
    }

    /// New matrix whose cell `(x, y)` is this matrix's cell `source(x, y)`.
    fn remap(&self, source: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let size = self.size;
        let mut ranks = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let (sx, sy) = source(x, y);
                ranks.push(self.ranks[sy * size + sx]);
            }
        }
        Self { size, ranks }
    }
}

/// Orientation transforms for threshold matrices.
///
/// Parsed from the names listed in [`Orientation::NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Leave the matrix as built.
    #[default]
    Identity,
    /// Rotate 90° counter-clockwise.
    RotateLeft,
    /// Rotate 90° clockwise.
    RotateRight,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Reflect about the main diagonal.
    Transpose,
    /// Reflect about the anti-diagonal.
    AntiTranspose,
}

impl Orientation {
    /// Every orientation with its selector name.
    pub const NAMES: [(Orientation, &'static str); 7] = [
        (Orientation::Identity, "identity"),
        (Orientation::RotateLeft, "rotate-left"),
        (Orientation::RotateRight, "rotate-right"),
        (Orientation::FlipHorizontal, "flip-horizontal"),
        (Orientation::FlipVertical, "flip-vertical"),
        (Orientation::Transpose, "transpose"),
        (Orientation::AntiTranspose, "anti-transpose"),
    ];

    /// Selector name.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(o, _)| *o == self)
            .map_or("identity", |(_, name)| *name)
    }
}

impl FromStr for Orientation {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::NAMES
            .iter()
            .find(|(_, name)| *name == wanted)
            .map(|(o, _)| *o)
            .ok_or_else(|| DitherError::UnknownOrientation(s.to_string()))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
