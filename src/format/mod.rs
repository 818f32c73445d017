//! Image file formats.
//!
//! Only binary PGM (`P5`) and PPM (`P6`) with one byte per sample are
//! supported.

pub mod pnm;

pub use pnm::{decode_pnm, encode_pnm, read_pnm, write_pnm};
