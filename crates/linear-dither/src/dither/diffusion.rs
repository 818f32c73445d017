//! Error diffusion in linear light.

use crate::error::DitherError;
use crate::image::Image;
use crate::quantize::{nearest_level, BitDepth};

use super::kernel::Kernel;
use super::residual::ResidualBuffer;

/// Diffuse every channel of `image` with `kernel`.
///
/// The residual buffer is allocated before any sample is touched and reset
/// between channels, so each channel starts from zero error and an
/// allocation failure leaves the image unchanged.
pub(crate) fn dither_with_kernel(
    image: &mut Image,
    kernel: &Kernel,
    depth: BitDepth,
) -> Result<(), DitherError> {
    let mut residuals = ResidualBuffer::new(image.width(), image.height())?;
    for channel in 0..image.channels().count() {
        residuals.clear();
        diffuse_channel(image, channel, kernel, depth, &mut residuals);
    }
    Ok(())
}

/// Quantize one channel in raster order, pushing each pixel's error onto
/// the kernel's taps.
///
/// For every pixel:
///
/// ```text
/// old = linear(x, y) + residual(x, y)
/// new = nearest_level(old)
/// put_linear(x, y, new)
/// residual(x + dx, y + dy) += (old - new) * weight / divisor
/// ```
///
/// Taps outside the image are dropped by the buffer.
pub(crate) fn diffuse_channel(
    image: &mut Image,
    channel: usize,
    kernel: &Kernel,
    depth: BitDepth,
    residuals: &mut ResidualBuffer,
) {
    let max = image.max_value() as f64;
    let divisor = kernel.divisor() as f64;

    for y in 0..image.height() as isize {
        for x in 0..image.width() as isize {
            let old = image.linear(x, y, channel) + residuals.get(x, y);
            let new = nearest_level(old, depth, max);
            image.put_linear(x, y, channel, new);

            let error = old - new;
            for &(dx, dy, weight) in kernel.entries() {
                residuals.add(
                    x + dx as isize,
                    y + dy as isize,
                    error * weight as f64 / divisor,
                );
            }
        }
    }
}
