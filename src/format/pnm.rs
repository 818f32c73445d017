use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use linear_dither::{Channels, Gamma, Image};

use crate::error::ImageError;

/// Read a binary PGM/PPM image from `reader`.
///
/// The header is `P5` or `P6`, then width, height and maxval as decimal
/// tokens separated by whitespace, with `#` comments allowed between tokens.
/// Exactly one whitespace byte separates maxval from the payload.
///
/// # Errors
///
/// - [`ImageError::FileFormat`] for a bad magic number, malformed or
///   out-of-range header values
/// - [`ImageError::FileRead`] if the payload is shorter than the header says
/// - [`ImageError::MemoryAllocation`] if the payload buffer cannot be allocated
pub fn decode_pnm<R: BufRead>(mut reader: R, gamma: Gamma) -> Result<Image, ImageError> {
    let channels = read_magic(&mut reader)?;
    match peek_byte(&mut reader)? {
        Some(b) if b.is_ascii_whitespace() || b == b'#' => {}
        _ => {
            return Err(ImageError::FileFormat(
                "magic number must be followed by whitespace".to_string(),
            ))
        }
    }
    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let max_value = read_header_value(&mut reader, "maxval")?;

    match next_byte(&mut reader)? {
        Some(b) if b.is_ascii_whitespace() => {}
        Some(b) => {
            return Err(ImageError::FileFormat(format!(
                "expected whitespace after maxval, found {:?}",
                b as char
            )))
        }
        None => {
            return Err(ImageError::FileFormat(
                "unexpected end of header".to_string(),
            ))
        }
    }

    if width == 0 || height == 0 {
        return Err(ImageError::FileFormat(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    if !(1..=255).contains(&max_value) {
        return Err(ImageError::FileFormat(format!(
            "maxval {max_value} out of range (expected 1..=255)"
        )));
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels.count()))
        .ok_or_else(|| {
            ImageError::FileFormat(format!("dimensions {width}x{height} too large"))
        })?;

    let mut samples = Vec::new();
    samples.try_reserve_exact(expected).map_err(|_| {
        ImageError::MemoryAllocation(format!("cannot allocate {expected} bytes for image data"))
    })?;
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut samples)?;
    if samples.len() < expected {
        return Err(ImageError::FileRead {
            expected,
            got: samples.len(),
        });
    }

    tracing::debug!(
        width,
        height,
        max_value,
        channels = channels.count(),
        "Decoded PNM header"
    );

    Ok(Image::from_samples(
        width,
        height,
        max_value as u8,
        channels,
        gamma,
        samples,
    )?)
}

/// Write `image` as binary PGM (gray) or PPM (RGB).
pub fn encode_pnm<W: Write>(image: &Image, mut writer: W) -> Result<(), ImageError> {
    let magic = match image.channels() {
        Channels::Gray => "P5",
        Channels::Rgb => "P6",
    };
    write!(
        writer,
        "{magic}\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.max_value()
    )?;
    writer.write_all(image.samples())?;
    writer.flush()?;
    Ok(())
}

/// Open and decode a PNM file.
pub fn read_pnm(path: &Path, gamma: Gamma) -> Result<Image, ImageError> {
    let file = File::open(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    decode_pnm(BufReader::new(file), gamma)
}

/// Create (or truncate) a file and encode `image` into it.
pub fn write_pnm(path: &Path, image: &Image) -> Result<(), ImageError> {
    let file = File::create(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    encode_pnm(image, BufWriter::new(file))
}

fn read_magic<R: BufRead>(reader: &mut R) -> Result<Channels, ImageError> {
    let mut magic = [0u8; 2];
    reader
        .read_exact(&mut magic)
        .map_err(|_| ImageError::FileFormat("missing magic number".to_string()))?;
    match &magic {
        b"P5" => Ok(Channels::Gray),
        b"P6" => Ok(Channels::Rgb),
        _ => Err(ImageError::FileFormat(format!(
            "unsupported image type {:?} (expected P5 or P6)",
            String::from_utf8_lossy(&magic)
        ))),
    }
}

fn peek_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ImageError> {
    Ok(reader.fill_buf()?.first().copied())
}

fn next_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ImageError> {
    let byte = peek_byte(reader)?;
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

/// Skip whitespace and `#` comments, then parse one decimal header token.
fn read_header_value<R: BufRead>(reader: &mut R, name: &str) -> Result<usize, ImageError> {
    loop {
        match peek_byte(reader)? {
            Some(b'#') => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            Some(b) if b.is_ascii_whitespace() => reader.consume(1),
            _ => break,
        }
    }

    let mut value: usize = 0;
    let mut digits = 0;
    while let Some(b) = peek_byte(reader)? {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as usize))
            .ok_or_else(|| ImageError::FileFormat(format!("{name} is too large")))?;
        digits += 1;
        reader.consume(1);
    }

    if digits == 0 {
        let found = match peek_byte(reader)? {
            Some(b) => format!("{:?}", b as char),
            None => "end of file".to_string(),
        };
        return Err(ImageError::FileFormat(format!(
            "expected {name}, found {found}"
        )));
    }
    Ok(value)
}
