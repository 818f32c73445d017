//! Point-wise quantization: bit correction, ordered, halftone and random
//! dithering.
//!
//! All four share one loop: every sample is decoded, biased by an offset,
//! snapped to the nearest level and written back. They differ only in where
//! the offset comes from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::image::Image;
use crate::quantize::{nearest_level, BitDepth};

use super::threshold::ThresholdMatrix;

/// Quantize every sample after adding `offset(x, y)` in linear light.
///
/// Channels are processed one after another, each in raster order, so an
/// offset source with state (a random generator) is consumed in a fixed
/// order.
pub(crate) fn quantize_with_offset(
    image: &mut Image,
    depth: BitDepth,
    mut offset: impl FnMut(usize, usize) -> f64,
) {
    let max = image.max_value() as f64;
    for c in 0..image.channels().count() {
        for y in 0..image.height() {
            for x in 0..image.width() {
                let (xi, yi) = (x as isize, y as isize);
                let biased = image.linear(xi, yi, c) + offset(x, y);
                image.put_linear(xi, yi, c, nearest_level(biased, depth, max));
            }
        }
    }
}

/// Nearest level with no offset.
pub(crate) fn bit_correction(image: &mut Image, depth: BitDepth) {
    quantize_with_offset(image, depth, |_, _| 0.0);
}

/// Offset by the matrix bias, scaled to one quantization step.
pub(crate) fn ordered(image: &mut Image, matrix: &ThresholdMatrix, depth: BitDepth) {
    let step = depth.step(image.max_value() as f64);
    quantize_with_offset(image, depth, |x, y| matrix.bias(x, y) * step);
}

/// Offset by uniform noise in `[-0.5, 0.5)` steps from a generator seeded
/// with `seed`.
pub(crate) fn random(image: &mut Image, depth: BitDepth, seed: u64) {
    let step = depth.step(image.max_value() as f64);
    let mut rng = StdRng::seed_from_u64(seed);
    quantize_with_offset(image, depth, |_, _| rng.gen_range(-0.5..0.5) * step);
}
