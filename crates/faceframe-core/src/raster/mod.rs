//! Raster buffer types and content resampling.
//!
//! [`RasterImage`] is the pixel currency of the whole crate: an RGBA8
//! buffer plus its dimensions, created once by the caller (usually from a
//! decoded frame) and threaded through a chain of pure functions. Every
//! operation returns a fresh image; inputs are never mutated.

mod scale;
mod types;

pub use scale::scale;
pub use types::{FilterType, RasterError, RasterImage};
