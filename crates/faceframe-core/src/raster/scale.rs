//! Content resampling.
//!
//! Unlike the canvas operations in [`crate::transform`], scaling changes
//! the pixel content itself: the source is resampled to the target size
//! with the caller-supplied kernel.

use super::{FilterType, RasterImage};
use crate::geometry::Dimensions;

/// Resample an image's content to exactly `size`.
///
/// A zero-area target resolves to a fully transparent image of that size
/// instead of erroring; geometric degenerate cases are common during
/// interactive editing and must never interrupt the session.
pub fn scale(image: &RasterImage, size: Dimensions, filter: FilterType) -> RasterImage {
    if size.is_empty() {
        return RasterImage::blank(size);
    }

    // Fast path: if dimensions match, just clone
    if image.dimensions() == size {
        return image.clone();
    }

    let resized = image::imageops::resize(
        image.as_rgba_image(),
        size.width,
        size.height,
        filter.to_image_filter(),
    );

    RasterImage::from_rgba_image(resized)
}
