//! Pixel storage.
//!
//! - [`Image`]: encoded sample grid with linear-light accessors
//! - [`Channels`]: gray or interleaved RGB layout

mod channels;
mod store;

pub use channels::Channels;
pub use store::Image;
