//! Read, dither, write.

use std::path::Path;

use linear_dither::{DitherAlgorithm, DitherError, Ditherer, Image};

use crate::config::DitherJob;
use crate::error::ImageError;
use crate::format::{read_pnm, write_pnm};

/// What a run did, for the one-line report
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub algorithm: DitherAlgorithm,
    pub bits: u8,
    /// Seed actually used by random dithering
    pub seed: Option<u64>,
}

/// Run `job` against `image` in place.
///
/// Returns the seed used when the algorithm is random dithering. A job
/// without a seed gets a fresh one from the thread generator.
pub fn apply(image: &mut Image, job: &DitherJob) -> Result<Option<u64>, DitherError> {
    let bits = job.depth.bits();
    let mut ditherer = Ditherer::new(image);
    let mut seed_used = None;

    match job.algorithm {
        DitherAlgorithm::BitCorrection => ditherer.bit_correction(bits)?,
        DitherAlgorithm::Ordered | DitherAlgorithm::Halftone => {
            ditherer.ordered(&job.matrix, bits)?
        }
        DitherAlgorithm::Random => {
            let seed = job.seed.unwrap_or_else(|| {
                let seed = rand::random();
                tracing::info!(seed, "No seed given, drew one");
                seed
            });
            ditherer.random(bits, seed)?;
            seed_used = Some(seed);
        }
        DitherAlgorithm::FloydSteinberg => ditherer.floyd_steinberg(bits)?,
        DitherAlgorithm::JarvisJudiceNinke => ditherer.jjn(bits)?,
        DitherAlgorithm::Sierra => ditherer.sierra(bits)?,
        DitherAlgorithm::Atkinson => ditherer.atkinson(bits)?,
    }

    Ok(seed_used)
}

/// Read `input`, optionally replace it by the gradient test pattern, dither
/// and write `output`.
pub fn run(
    input: &Path,
    output: &Path,
    job: &DitherJob,
    gradient: bool,
) -> Result<Summary, ImageError> {
    let mut image = read_pnm(input, job.gamma)?;
    tracing::info!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels().count(),
        max_value = image.max_value(),
        gamma = %job.gamma,
        "Read image"
    );

    if gradient {
        image.fill_with_gradient();
        tracing::debug!("Replaced image with linear gradient");
    }

    tracing::info!(algorithm = %job.algorithm, bits = job.depth.bits(), "Dithering");
    let seed = apply(&mut image, job)?;

    write_pnm(output, &image)?;
    tracing::info!(output = %output.display(), "Wrote image");

    Ok(Summary {
        width: image.width(),
        height: image.height(),
        channels: image.channels().count(),
        algorithm: job.algorithm,
        bits: job.depth.bits(),
        seed,
    })
}
