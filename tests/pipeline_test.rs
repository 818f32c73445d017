//! End-to-end runs: file in, dithered file out.

mod common;

use std::process::Command;

use pnm_dither::config::DitherConfig;
use pnm_dither::error::ImageError;
use pnm_dither::pipeline;
use pretty_assertions::assert_eq;

use common::fixtures::{self, Scratch};

fn config(algorithm: &str, bits: u8) -> DitherConfig {
    DitherConfig {
        algorithm: algorithm.to_string(),
        bits,
        seed: Some(42),
        ..Default::default()
    }
}

#[test]
fn test_every_algorithm_writes_quantized_file() {
    for algorithm in [
        "bit-correction",
        "ordered",
        "random",
        "floyd-steinberg",
        "jjn",
        "sierra",
        "atkinson",
        "halftone",
    ] {
        let scratch = Scratch::new(&fixtures::ramp_ppm(16, 8));
        let job = config(algorithm, 1).resolve().unwrap();
        let summary = pipeline::run(&scratch.input, &scratch.output, &job, false).unwrap();

        assert_eq!(summary.width, 16);
        assert_eq!(summary.height, 8);
        assert_eq!(summary.channels, 3);
        assert_eq!(summary.algorithm.name(), algorithm);

        let written = scratch.output_bytes();
        common::assert_pnm_header(&written, "P6", 16, 8, 255);
        common::assert_only_levels(&written, &[0, 255]);
    }
}

#[test]
fn test_mid_gray_bit_correction_scenario() {
    let scratch = Scratch::new(&fixtures::flat_pgm(4, 4, 128));
    let job = DitherConfig {
        algorithm: "bit-correction".to_string(),
        bits: 1,
        gamma: 1.0,
        ..Default::default()
    }
    .resolve()
    .unwrap();
    pipeline::run(&scratch.input, &scratch.output, &job, false).unwrap();

    assert_eq!(scratch.output_bytes(), fixtures::flat_pgm(4, 4, 255));
}

#[test]
fn test_random_is_reproducible_across_runs() {
    let first = Scratch::new(&fixtures::ramp_ppm(32, 4));
    let second = Scratch::new(&fixtures::ramp_ppm(32, 4));
    let job = config("random", 2).resolve().unwrap();

    let summary = pipeline::run(&first.input, &first.output, &job, false).unwrap();
    pipeline::run(&second.input, &second.output, &job, false).unwrap();

    assert_eq!(summary.seed, Some(42));
    assert_eq!(first.output_bytes(), second.output_bytes());
}

#[test]
fn test_gradient_replaces_input() {
    let scratch = Scratch::new(&fixtures::flat_pgm(64, 2, 0));
    let job = DitherConfig {
        algorithm: "floyd-steinberg".to_string(),
        bits: 1,
        ..Default::default()
    }
    .resolve()
    .unwrap();
    pipeline::run(&scratch.input, &scratch.output, &job, true).unwrap();

    let written = scratch.output_bytes();
    let (_, payload) = common::split_pnm(&written);
    let white = payload.iter().filter(|&&s| s == 255).count();
    // A 0..1 linear ramp is about half white
    assert!(
        (40..=88).contains(&white),
        "Expected roughly half of 128 pixels white, got {white}"
    );
}

#[test]
fn test_bad_input_propagates() {
    let scratch = Scratch::new(b"P7\n1 1\n255\n\x00");
    let job = DitherConfig::default().resolve().unwrap();
    match pipeline::run(&scratch.input, &scratch.output, &job, false) {
        Err(ImageError::FileFormat(_)) => {}
        other => panic!("Expected FileFormat, got {other:?}"),
    }
    assert!(!scratch.output.exists(), "No output should be written");
}

#[test]
fn test_cli_end_to_end() {
    let scratch = Scratch::new(&fixtures::flat_pgm(8, 8, 100));
    let config_path = scratch.dir.path().join("dither.yaml");
    std::fs::write(&config_path, "algorithm: jjn\nbits: 3\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pnm-dither"))
        .arg(&scratch.input)
        .arg(&scratch.output)
        .args(["--config"])
        .arg(&config_path)
        .args(["--bits", "2", "--gamma", "2.2"])
        .output()
        .expect("run pnm-dither");

    assert!(
        output.status.success(),
        "pnm-dither failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jjn"), "stdout: {stdout}");
    assert!(stdout.contains("2 bits"), "stdout: {stdout}");

    let written = scratch.output_bytes();
    common::assert_pnm_header(&written, "P5", 8, 8, 255);
    // 2-bit levels under gamma 2.2
    let levels: Vec<u8> = (0..4)
        .map(|k| {
            let linear = k as f64 / 3.0;
            (linear.powf(1.0 / 2.2) * 255.0).round() as u8
        })
        .collect();
    common::assert_only_levels(&written, &levels);
}

#[test]
fn test_cli_rejects_bad_bits() {
    let scratch = Scratch::new(&fixtures::flat_pgm(2, 2, 100));
    let output = Command::new(env!("CARGO_BIN_EXE_pnm-dither"))
        .arg(&scratch.input)
        .arg(&scratch.output)
        .args(["--bits", "9"])
        .output()
        .expect("run pnm-dither");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bit depth 9"), "stderr: {stderr}");
}
