use std::path::PathBuf;

use linear_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Cannot open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed image file: {0}")]
    FileFormat(String),

    #[error("Truncated image data: expected {expected} bytes, got {got}")]
    FileRead { expected: usize, got: usize },

    #[error("Out of memory: {0}")]
    MemoryAllocation(String),

    #[error("Invalid parameter: {0}")]
    Params(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DitherError> for ImageError {
    fn from(e: DitherError) -> Self {
        match e {
            DitherError::Allocation(_) => ImageError::MemoryAllocation(e.to_string()),
            _ => ImageError::Params(e.to_string()),
        }
    }
}
