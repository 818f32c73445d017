//! Assertion helpers for tests.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

/// Split a binary PNM file into its header text and payload
pub fn split_pnm(bytes: &[u8]) -> (String, &[u8]) {
    // Fixtures and the encoder both write exactly three header lines
    let mut newlines = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            newlines += 1;
            if newlines == 3 {
                let header = String::from_utf8_lossy(&bytes[..=i]).into_owned();
                return (header, &bytes[i + 1..]);
            }
        }
    }
    panic!("Expected a three-line PNM header, got {} bytes", bytes.len());
}

/// Assert the file has the given header and a payload of the right size
pub fn assert_pnm_header(bytes: &[u8], magic: &str, width: usize, height: usize, max: u8) {
    let (header, payload) = split_pnm(bytes);
    assert_eq!(header, format!("{magic}\n{width} {height}\n{max}\n"));
    let channels = if magic == "P6" { 3 } else { 1 };
    assert_eq!(
        payload.len(),
        width * height * channels,
        "Payload size does not match header"
    );
}

/// Assert every payload sample is one of `levels`
pub fn assert_only_levels(bytes: &[u8], levels: &[u8]) {
    let (_, payload) = split_pnm(bytes);
    let found: BTreeSet<u8> = payload.iter().copied().collect();
    let allowed: BTreeSet<u8> = levels.iter().copied().collect();
    assert!(
        found.is_subset(&allowed),
        "Found samples {found:?}, expected only {allowed:?}"
    );
}
