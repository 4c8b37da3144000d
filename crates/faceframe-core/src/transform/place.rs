//! Anchor-preserving placement pipeline.
//!
//! [`place`] scales a source image, rotates it about a caller-chosen
//! anchor point, and translates it so the transformed anchor lands on a
//! target point of a destination-sized canvas. The raster rotation in
//! [`super::rotation`] only rotates about an image's own center and grows
//! the canvas to bound the result, so the anchor's position relative to
//! the new center is recomputed analytically rather than tracked through
//! the raster operation.

use crate::geometry::{self, Dimensions, Point};
use crate::raster::{scale, FilterType, RasterImage};
use crate::transform::canvas::{resize_canvas, translate};
use crate::transform::rotation::rotate_image;
use serde::{Deserialize, Serialize};

/// Complete description of how a source image is placed onto a
/// destination canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformSpec {
    /// Size the source content is resampled to before any other step.
    pub scale_size: Dimensions,
    /// Anchor point, in the coordinate space of the image *after*
    /// scaling to `scale_size` and before rotation.
    pub anchor: Point,
    /// Where the anchor must land, in destination-canvas coordinates.
    pub target_point: Point,
    /// Rotation about the anchor, in degrees (positive = clockwise on
    /// screen).
    pub rotation_degrees: f64,
}

/// Scale, rotate about the anchor, and land the anchor on the target
/// point. The result is exactly `dest`-sized and ready to be
/// alpha-composited with a destination image of that size.
///
/// A zero-area `scale_size` resolves to a fully transparent `dest`-sized
/// canvas: a source scaled to nothing is equivalent to no source at all.
///
/// All position math stays in floating point; the continuous offset is
/// rounded to whole pixels exactly once, where it becomes the discrete
/// shift handed to [`translate`].
pub fn place(
    source: &RasterImage,
    dest: Dimensions,
    spec: &TransformSpec,
    filter: FilterType,
) -> RasterImage {
    if spec.scale_size.is_empty() {
        return RasterImage::blank(dest);
    }

    let scaled = scale(source, spec.scale_size, filter);

    // Vector from the scaled image's geometric center to its anchor,
    // rotated analytically. The raster rotation below re-centers the
    // content in an expanded canvas, so this is the only way to know
    // where the anchor ends up.
    let center_to_anchor = geometry::subtract(spec.anchor, geometry::center(spec.scale_size));
    let rotated_center_to_anchor = geometry::rotate(center_to_anchor, spec.rotation_degrees);

    let rotated = rotate_image(&scaled, spec.rotation_degrees, filter);

    let rotated_anchor = geometry::add(
        geometry::center(rotated.dimensions()),
        rotated_center_to_anchor,
    );

    // The single float-to-pixel rounding point of the pipeline.
    let dx = (spec.target_point.x - rotated_anchor.x).round() as i64;
    let dy = (spec.target_point.y - rotated_anchor.y).round() as i64;

    // Extend (never crop) the canvas before shifting, so content keeps
    // its pixels while moving across the working area, then cut the
    // result down to the destination size. Cropping to `dest` before the
    // shift would destroy content that the shift brings back on-canvas.
    let work_size = Dimensions::new(
        rotated.width().max(dest.width),
        rotated.height().max(dest.height),
    );
    let extended = resize_canvas(&rotated, work_size);
    let shifted = translate(&extended, dx, dy);

    resize_canvas(&shifted, dest)
}
