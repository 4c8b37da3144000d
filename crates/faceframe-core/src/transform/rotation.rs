//! Raster rotation about the image center.
//!
//! The rotation uses inverse mapping: for each pixel in the output image,
//! we calculate which source pixel(s) contribute to it and interpolate
//! their values. The output canvas is expanded to the bounding box of the
//! rotated content and the uncovered corners are fully transparent.
//!
//! # Sign Convention
//!
//! Angles are in degrees; positive rotates clockwise on screen (the
//! y-axis points down). [`crate::geometry::rotate`] applies the same
//! rotation matrix to vectors, which is what lets the placement pipeline
//! recover an anchor's position analytically after this raster operation.

use crate::geometry::Dimensions;
use crate::raster::{FilterType, RasterImage};
use image::RgbaImage;

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated, the corners extend beyond the original
/// bounds; this returns the minimum canvas that contains the entire
/// rotated content. Exact multiples of 90 degrees take a fast path so
/// that axis-aligned rotations never gain a row of padding from
/// floating-point noise.
pub fn rotated_bounds(size: Dimensions, angle_degrees: f64) -> Dimensions {
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    if abs_angle < 0.001 || (360.0 - abs_angle) < 0.001 {
        return size;
    }
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return Dimensions::new(size.height, size.width);
    }
    if (abs_angle - 180.0).abs() < 0.001 {
        return size;
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = f64::from(size.width);
    let h = f64::from(size.height);

    // Bounding box of a rotated rectangle:
    // new_w = |w*cos| + |h*sin|, new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    Dimensions::new(new_w.max(1), new_h.max(1))
}

/// Rotate an image about its center, expanding the canvas as needed and
/// padding the uncovered corners with transparency.
pub fn rotate_image(image: &RasterImage, angle_degrees: f64, filter: FilterType) -> RasterImage {
    // Fast path: no rotation needed
    if angle_degrees.abs() < 0.001 {
        return image.clone();
    }
    if image.is_empty() {
        return image.clone();
    }

    let src = image.as_rgba_image();
    let (src_w, src_h) = (f64::from(src.width()), f64::from(src.height()));
    let dst_size = rotated_bounds(image.dimensions(), angle_degrees);

    // Inverse of the forward clockwise-on-screen matrix
    // [cos -sin; sin cos]: src = [cos sin; -sin cos] * dst.
    let angle_rad = angle_degrees.to_radians();
    let (sin, cos) = angle_rad.sin_cos();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = f64::from(dst_size.width) / 2.0;
    let dst_cy = f64::from(dst_size.height) / 2.0;

    let mut out = RgbaImage::new(dst_size.width, dst_size.height);

    for dst_y in 0..dst_size.height {
        for dst_x in 0..dst_size.width {
            let dx = f64::from(dst_x) - dst_cx;
            let dy = f64::from(dst_y) - dst_cy;

            let src_x = dx * cos + dy * sin + src_cx;
            let src_y = -dx * sin + dy * cos + src_cy;

            let pixel = match filter {
                FilterType::Nearest => sample_nearest(src, src_x, src_y),
                FilterType::Bilinear => sample_bilinear(src, src_x, src_y),
                FilterType::Lanczos3 => sample_lanczos3(src, src_x, src_y),
            };

            out.put_pixel(dst_x, dst_y, image::Rgba(pixel));
        }
    }

    RasterImage::from_rgba_image(out)
}

/// Get a pixel as [f64; 4] at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RgbaImage, px: u32, py: u32) -> [f64; 4] {
    let p = image.get_pixel(px, py).0;
    [
        f64::from(p[0]),
        f64::from(p[1]),
        f64::from(p[2]),
        f64::from(p[3]),
    ]
}

/// Sample the nearest source pixel; transparent outside the source.
fn sample_nearest(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let px = x.round();
    let py = y.round();
    if px < 0.0 || py < 0.0 || px >= f64::from(image.width()) || py >= f64::from(image.height()) {
        return [0, 0, 0, 0];
    }
    image.get_pixel(px as u32, py as u32).0
}

/// Sample a pixel using bilinear interpolation over all four channels.
///
/// Alpha is interpolated like the color channels, so rotated edges fade
/// into the transparent padding instead of aliasing hard.
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));

    // Out of bounds contributes nothing but transparency
    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0, 0];
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = x - f64::from(x0);
    let fy = y - f64::from(y0);

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

/// Sample a pixel using Lanczos3 interpolation (6x6 neighborhood).
///
/// Falls back to bilinear near the image edges where the kernel would
/// not fit.
fn sample_lanczos3(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));

    if x < 2.0 || x >= (w - 3) as f64 || y < 2.0 || y >= (h - 3) as f64 {
        return sample_bilinear(image, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;

            if px >= 0 && px < w && py >= 0 && py < h {
                let dx = x - px as f64;
                let dy = y - py as f64;
                let weight = lanczos_weight(dx, 3.0) * lanczos_weight(dy, 3.0);

                let pixel = get_pixel_f64(image, px as u32, py as u32);
                for i in 0..4 {
                    sum[i] += pixel[i] * weight;
                }
                weight_sum += weight;
            }
        }
    }

    let mut result = [0u8; 4];
    if weight_sum > 0.0 {
        for i in 0..4 {
            result[i] = (sum[i] / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    }

    result
}

/// Lanczos kernel weight: sinc(x) * sinc(x/a) for |x| < a, else 0.
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
