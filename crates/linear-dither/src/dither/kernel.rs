//! Error diffusion kernel definitions.
//!
//! Each kernel lists the neighbors that receive a share of a pixel's
//! quantization error. Taps only point forward in raster order, so every
//! share lands on a pixel that has not been visited yet.

use std::borrow::Cow;

use crate::error::DitherError;

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` from the current pixel and an integer
/// weight; the neighbor receives `error * weight / divisor`.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg,
/// Jarvis-Judice-Ninke and Sierra propagate 100%; Atkinson propagates only
/// 6/8. Taps that fall outside the image drop their share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    entries: Cow<'static, [(i32, i32, u16)]>,
    divisor: u16,
}

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: Cow::Borrowed(&[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ]),
    divisor: 8,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: Cow::Borrowed(&[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ]),
    divisor: 16,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (48/48).
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: Cow::Borrowed(&[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ]),
    divisor: 48,
};

/// Sierra (full/Sierra-3) dithering kernel.
///
/// Distributes error to 10 neighbors over 3 rows with 100% propagation (32/32).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: Cow::Borrowed(&[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ]),
    divisor: 32,
};

impl Kernel {
    /// Build a kernel from a rectangular weight matrix.
    ///
    /// # Arguments
    ///
    /// * `width` - Matrix width in cells
    /// * `height` - Matrix height in cells
    /// * `anchor` - `(x0, y0)` cell of the current pixel
    /// * `weights` - Row-major weights, `width * height` of them
    /// * `divisor` - Common denominator of the weights
    ///
    /// Zero cells are skipped, so the anchor cell and any cells before it
    /// in raster order must be zero.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidKernel`] if the divisor is zero, the
    /// weight count or anchor does not fit the matrix, or a nonzero weight
    /// sits at or before the anchor.
    ///
    /// # Example
    ///
    /// ```
    /// use linear_dither::{Kernel, FLOYD_STEINBERG};
    ///
    /// let fs = Kernel::from_matrix(3, 2, (1, 0), &[0, 0, 7, 3, 5, 1], 16).unwrap();
    /// assert_eq!(fs, FLOYD_STEINBERG);
    /// ```
    pub fn from_matrix(
        width: usize,
        height: usize,
        anchor: (usize, usize),
        weights: &[u16],
        divisor: u16,
    ) -> Result<Self, DitherError> {
        if divisor == 0 {
            return Err(DitherError::InvalidKernel("divisor must be nonzero".into()));
        }
        let cells = width.checked_mul(height).ok_or_else(|| {
            DitherError::InvalidKernel(format!("{width}x{height} matrix is too large"))
        })?;
        if weights.len() != cells {
            return Err(DitherError::InvalidKernel(format!(
                "expected {cells} weights for a {width}x{height} matrix, got {}",
                weights.len()
            )));
        }
        let (x0, y0) = anchor;
        if x0 >= width || y0 >= height {
            return Err(DitherError::InvalidKernel(format!(
                "anchor ({x0}, {y0}) outside {width}x{height} matrix"
            )));
        }

        let mut entries = Vec::new();
        for (i, &weight) in weights.iter().enumerate() {
            if weight == 0 {
                continue;
            }
            let dx = (i % width) as i32 - x0 as i32;
            let dy = (i / width) as i32 - y0 as i32;
            if dy < 0 || (dy == 0 && dx <= 0) {
                return Err(DitherError::InvalidKernel(format!(
                    "weight at offset ({dx}, {dy}) is not ahead of the current pixel"
                )));
            }
            entries.push((dx, dy, weight));
        }

        Ok(Self {
            entries: Cow::Owned(entries),
            divisor,
        })
    }

    /// `(dx, dy, weight)` taps.
    #[inline]
    pub fn entries(&self) -> &[(i32, i32, u16)] {
        &self.entries
    }

    /// Common denominator of the weights.
    #[inline]
    pub fn divisor(&self) -> u16 {
        self.divisor
    }
}
