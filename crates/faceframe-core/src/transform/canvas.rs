//! Canvas-bounds operations: resize and translate.
//!
//! Both operations move pixel content relative to a canvas without ever
//! resampling it. They are implemented as crop-then-pad so content can
//! legally end up partially or fully outside the visible canvas, with the
//! newly exposed area fully transparent.

use crate::geometry::Dimensions;
use crate::raster::RasterImage;
use image::{imageops, RgbaImage};

/// Grow or shrink an image's canvas to exactly `new_size` without scaling
/// its pixel content.
///
/// Content stays anchored at the top-left corner. Each axis is handled
/// independently: a dimension that shrinks is cropped, a dimension that
/// grows is padded on the right/bottom with transparent pixels, and an
/// image can simultaneously grow on one axis and shrink on the other.
///
/// A zero-area `new_size` returns a fully transparent image of that size;
/// extracting a zero-size region is invalid and is special-cased, not
/// attempted and caught.
pub fn resize_canvas(image: &RasterImage, new_size: Dimensions) -> RasterImage {
    if new_size.is_empty() || image.is_empty() {
        return RasterImage::blank(new_size);
    }

    let crop_width = image.width().min(new_size.width);
    let crop_height = image.height().min(new_size.height);

    let kept = imageops::crop_imm(image.as_rgba_image(), 0, 0, crop_width, crop_height).to_image();

    let mut out = RgbaImage::new(new_size.width, new_size.height);
    imageops::replace(&mut out, &kept, 0, 0);
    RasterImage::from_rgba_image(out)
}

/// Shift an image's content by `(dx, dy)` pixels within a canvas of
/// unchanged size.
///
/// Content shifted beyond a boundary is discarded and newly exposed area
/// is fully transparent. Per axis: a negative shift crops from the start
/// of that axis and pads at the end; a positive shift pads at the start
/// and crops from the end.
///
/// If the shift magnitude on either axis is at least the corresponding
/// image dimension, no content remains visible and a fully transparent
/// image of the original dimensions is returned.
pub fn translate(image: &RasterImage, dx: i64, dy: i64) -> RasterImage {
    let size = image.dimensions();
    if size.is_empty() {
        return RasterImage::blank(size);
    }

    if dx.unsigned_abs() >= u64::from(size.width) || dy.unsigned_abs() >= u64::from(size.height) {
        return RasterImage::blank(size);
    }

    // Shift magnitudes are < u32 dimensions here, so the casts are exact.
    let crop_left = (-dx).max(0) as u32;
    let crop_top = (-dy).max(0) as u32;
    let kept_width = size.width - dx.unsigned_abs() as u32;
    let kept_height = size.height - dy.unsigned_abs() as u32;

    let kept = imageops::crop_imm(
        image.as_rgba_image(),
        crop_left,
        crop_top,
        kept_width,
        kept_height,
    )
    .to_image();

    let mut out = RgbaImage::new(size.width, size.height);
    imageops::replace(&mut out, &kept, dx.max(0), dy.max(0));
    RasterImage::from_rgba_image(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image where each pixel's red channel encodes its position.
    fn test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[((y * width + x) % 256) as u8, 0, 0, 255]);
            }
        }
        RasterImage::from_raw(width, height, pixels).unwrap()
    }

    fn is_transparent(px: [u8; 4]) -> bool {
        px[3] == 0
    }

    #[test]
    fn test_resize_canvas_grow_pads_transparent() {
        let img = test_image(4, 4);
        let out = resize_canvas(&img, Dimensions::new(6, 6));

        assert_eq!(out.dimensions(), Dimensions::new(6, 6));
        // Original content is untouched at the top-left
        assert_eq!(out.pixel(3, 3), img.pixel(3, 3));
        // New area is transparent
        assert!(is_transparent(out.pixel(5, 5)));
        assert!(is_transparent(out.pixel(5, 0)));
        assert!(is_transparent(out.pixel(0, 5)));
    }

    #[test]
    fn test_resize_canvas_shrink_crops() {
        let img = test_image(8, 8);
        let out = resize_canvas(&img, Dimensions::new(3, 5));

        assert_eq!(out.dimensions(), Dimensions::new(3, 5));
        assert_eq!(out.pixel(2, 4), img.pixel(2, 4));
    }

    #[test]
    fn test_resize_canvas_mixed_axes() {
        // Grow width, shrink height
        let img = test_image(4, 8);
        let out = resize_canvas(&img, Dimensions::new(10, 3));

        assert_eq!(out.dimensions(), Dimensions::new(10, 3));
        assert_eq!(out.pixel(3, 2), img.pixel(3, 2));
        assert!(is_transparent(out.pixel(9, 0)));
    }

    #[test]
    fn test_resize_canvas_zero_area_target() {
        let img = test_image(4, 4);
        let out = resize_canvas(&img, Dimensions::new(0, 4));
        assert_eq!(out.dimensions(), Dimensions::new(0, 4));

        let out = resize_canvas(&img, Dimensions::new(4, 0));
        assert_eq!(out.dimensions(), Dimensions::new(4, 0));
    }

    #[test]
    fn test_resize_canvas_idempotent() {
        let img = test_image(7, 5);
        let target = Dimensions::new(9, 3);
        let once = resize_canvas(&img, target);
        let twice = resize_canvas(&once, target);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_translate_positive_shift() {
        let img = test_image(5, 5);
        let out = translate(&img, 2, 1);

        assert_eq!(out.dimensions(), img.dimensions());
        // Content moved down-right
        assert_eq!(out.pixel(2, 1), img.pixel(0, 0));
        assert_eq!(out.pixel(4, 4), img.pixel(2, 3));
        // Exposed area is transparent
        assert!(is_transparent(out.pixel(0, 0)));
        assert!(is_transparent(out.pixel(1, 4)));
    }

    #[test]
    fn test_translate_negative_shift() {
        let img = test_image(5, 5);
        let out = translate(&img, -2, -3);

        assert_eq!(out.pixel(0, 0), img.pixel(2, 3));
        assert!(is_transparent(out.pixel(4, 4)));
        assert!(is_transparent(out.pixel(3, 2)));
    }

    #[test]
    fn test_translate_zero_is_identity() {
        let img = test_image(6, 4);
        assert_eq!(translate(&img, 0, 0), img);
    }

    #[test]
    fn test_translate_off_canvas_is_blank() {
        let img = test_image(5, 5);
        for (dx, dy) in [(5, 0), (0, 5), (-5, 0), (0, -5), (100, 100), (-7, 2)] {
            let out = translate(&img, dx, dy);
            assert_eq!(out.dimensions(), img.dimensions());
            assert!(
                out.as_raw().iter().all(|&b| b == 0),
                "shift ({dx}, {dy}) should clear the canvas"
            );
        }
    }

    #[test]
    fn test_translate_inverse_restores_unclipped_pixels() {
        let img = test_image(8, 8);
        let round_trip = translate(&translate(&img, 3, -2), -3, 2);

        // Pixels within [max(0,-dx), width - max(0,dx)) on x survive,
        // analogous on y: here x in [0, 5), y in [2, 8).
        for y in 2..8 {
            for x in 0..5 {
                assert_eq!(round_trip.pixel(x, y), img.pixel(x, y), "at ({x}, {y})");
            }
        }
        // Clipped pixels come back transparent
        assert!(is_transparent(round_trip.pixel(7, 0)));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=48, 1u32..=48)
    }

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v.wrapping_add(17), v.wrapping_mul(3), 255]);
            }
        }
        RasterImage::from_raw(width, height, pixels).unwrap()
    }

    proptest! {
        /// Property: resize_canvas output is always exactly the target size.
        #[test]
        fn prop_resize_canvas_exact_size(
            (width, height) in dimensions_strategy(),
            (new_w, new_h) in (0u32..=64, 0u32..=64),
        ) {
            let img = create_test_image(width, height);
            let out = resize_canvas(&img, Dimensions::new(new_w, new_h));
            prop_assert_eq!(out.dimensions(), Dimensions::new(new_w, new_h));
        }

        /// Property: resizing twice to the same target equals resizing once.
        #[test]
        fn prop_resize_canvas_idempotent(
            (width, height) in dimensions_strategy(),
            (new_w, new_h) in (1u32..=64, 1u32..=64),
        ) {
            let img = create_test_image(width, height);
            let target = Dimensions::new(new_w, new_h);
            let once = resize_canvas(&img, target);
            let twice = resize_canvas(&once, target);
            prop_assert_eq!(once, twice);
        }

        /// Property: translate never changes the canvas size.
        #[test]
        fn prop_translate_preserves_dimensions(
            (width, height) in dimensions_strategy(),
            dx in -64i64..=64,
            dy in -64i64..=64,
        ) {
            let img = create_test_image(width, height);
            let out = translate(&img, dx, dy);
            prop_assert_eq!(out.dimensions(), img.dimensions());
        }

        /// Property: a round trip restores every pixel that stayed on
        /// canvas both ways.
        #[test]
        fn prop_translate_inverse_restores_unclipped(
            (width, height) in (4u32..=32, 4u32..=32),
            dx in -8i64..=8,
            dy in -8i64..=8,
        ) {
            let img = create_test_image(width, height);
            let round_trip = translate(&translate(&img, dx, dy), -dx, -dy);

            let x_start = (-dx).max(0) as u32;
            let x_end = width.saturating_sub(dx.max(0) as u32);
            let y_start = (-dy).max(0) as u32;
            let y_end = height.saturating_sub(dy.max(0) as u32);

            for y in y_start..y_end {
                for x in x_start..x_end {
                    prop_assert_eq!(round_trip.pixel(x, y), img.pixel(x, y));
                }
            }
        }

        /// Property: shifting at least a full dimension clears the canvas.
        #[test]
        fn prop_translate_overshift_is_blank(
            (width, height) in dimensions_strategy(),
            extra in 0i64..=16,
        ) {
            let img = create_test_image(width, height);
            let out = translate(&img, i64::from(width) + extra, 0);
            prop_assert!(out.as_raw().iter().all(|&b| b == 0));
        }
    }
}
