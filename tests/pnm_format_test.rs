//! File-level PNM reading and writing.

mod common;

use linear_dither::{Channels, Gamma, Image};
use pnm_dither::error::ImageError;
use pnm_dither::format::{read_pnm, write_pnm};
use pretty_assertions::assert_eq;

use common::fixtures::{self, Scratch};

#[test]
fn test_read_write_preserves_pgm() {
    let bytes = fixtures::pgm(3, 2, 255, &[0, 10, 20, 30, 40, 250]);
    let scratch = Scratch::new(&bytes);

    let image = read_pnm(&scratch.input, Gamma::Srgb).unwrap();
    assert_eq!(image.channels(), Channels::Gray);
    write_pnm(&scratch.output, &image).unwrap();

    assert_eq!(scratch.output_bytes(), bytes);
}

#[test]
fn test_read_write_preserves_ppm() {
    let bytes = fixtures::ramp_ppm(5, 3);
    let scratch = Scratch::new(&bytes);

    let image = read_pnm(&scratch.input, Gamma::Power(2.2)).unwrap();
    assert_eq!(image.channels(), Channels::Rgb);
    assert_eq!(image.gamma(), Gamma::Power(2.2));
    write_pnm(&scratch.output, &image).unwrap();

    let written = scratch.output_bytes();
    common::assert_pnm_header(&written, "P6", 5, 3, 255);
    assert_eq!(written, bytes);
}

#[test]
fn test_small_maxval_survives() {
    let bytes = fixtures::pgm(2, 2, 15, &[0, 5, 10, 15]);
    let scratch = Scratch::new(&bytes);

    let image = read_pnm(&scratch.input, Gamma::Srgb).unwrap();
    assert_eq!(image.max_value(), 15);
    write_pnm(&scratch.output, &image).unwrap();
    common::assert_pnm_header(&scratch.output_bytes(), "P5", 2, 2, 15);
}

#[test]
fn test_missing_input_is_file_open() {
    let scratch = Scratch::new(b"");
    let missing = scratch.dir.path().join("does-not-exist.pgm");
    match read_pnm(&missing, Gamma::Srgb) {
        Err(ImageError::FileOpen { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected FileOpen, got {other:?}"),
    }
}

#[test]
fn test_unwritable_output_is_file_open() {
    let scratch = Scratch::new(b"");
    let image = Image::new(1, 1, 255, Channels::Gray, Gamma::Srgb).unwrap();
    let target = scratch.dir.path().join("no-such-dir").join("out.pgm");
    match write_pnm(&target, &image) {
        Err(ImageError::FileOpen { .. }) => {}
        other => panic!("Expected FileOpen, got {other:?}"),
    }
}

#[test]
fn test_plain_text_variant_is_file_format() {
    let scratch = Scratch::new(b"P2\n2 1\n255\n0 255\n");
    match read_pnm(&scratch.input, Gamma::Srgb) {
        Err(ImageError::FileFormat(_)) => {}
        other => panic!("Expected FileFormat, got {other:?}"),
    }
}

#[test]
fn test_truncated_file_is_file_read() {
    let mut bytes = fixtures::flat_pgm(4, 4, 9);
    bytes.truncate(bytes.len() - 5);
    let scratch = Scratch::new(&bytes);
    match read_pnm(&scratch.input, Gamma::Srgb) {
        Err(ImageError::FileRead { expected, got }) => {
            assert_eq!(expected, 16);
            assert_eq!(got, 11);
        }
        other => panic!("Expected FileRead, got {other:?}"),
    }
}
