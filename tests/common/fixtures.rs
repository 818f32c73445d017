//! Synthetic PNM images and scratch files.

use std::path::PathBuf;

use tempfile::TempDir;

/// Build a binary PGM (`P5`) file in memory
pub fn pgm(width: usize, height: usize, max_value: u8, samples: &[u8]) -> Vec<u8> {
    assert_eq!(samples.len(), width * height, "fixture sample count");
    let mut bytes = format!("P5\n{width} {height}\n{max_value}\n").into_bytes();
    bytes.extend_from_slice(samples);
    bytes
}

/// Build a binary PPM (`P6`) file in memory
pub fn ppm(width: usize, height: usize, max_value: u8, samples: &[u8]) -> Vec<u8> {
    assert_eq!(samples.len(), width * height * 3, "fixture sample count");
    let mut bytes = format!("P6\n{width} {height}\n{max_value}\n").into_bytes();
    bytes.extend_from_slice(samples);
    bytes
}

/// Flat gray PGM with every sample set to `value`
pub fn flat_pgm(width: usize, height: usize, value: u8) -> Vec<u8> {
    pgm(width, height, 255, &vec![value; width * height])
}

/// Horizontal encoded ramp, one RGB triple per pixel with distinct lanes
pub fn ramp_ppm(width: usize, height: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            samples.extend_from_slice(&[v, 255 - v, v / 2]);
        }
    }
    ppm(width, height, 255, &samples)
}

/// Scratch directory holding one input file
pub struct Scratch {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Scratch {
    /// Write `input_bytes` to `<tmp>/input.pnm`; output goes to `<tmp>/output.pnm`
    pub fn new(input_bytes: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("input.pnm");
        let output = dir.path().join("output.pnm");
        std::fs::write(&input, input_bytes).expect("write fixture");
        Self { dir, input, output }
    }

    /// Raw bytes of the output file
    pub fn output_bytes(&self) -> Vec<u8> {
        std::fs::read(&self.output).expect("read output")
    }
}
