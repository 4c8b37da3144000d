//! Faceframe Core - anchor-preserving transform-and-composite pipeline
//!
//! This crate provides the editing core for Faceframe: overlaying a
//! "face" image onto a frame of an animated sequence with per-frame
//! scale, rotation, position, and stacking order, then handing back a
//! frame ready for re-encoding.
//!
//! The whole crate is a pure, synchronous, single-invocation computation:
//! one [`edit_frame`] call processes one frame and shares no state with
//! any other call. Frames of a sequence are independent and may be
//! processed in parallel by the caller; decoding, parameter parsing, and
//! sequence assembly live outside this crate.
//!
//! Geometric degenerate cases (a scale slider dragged to zero, a shift
//! pushing content entirely off-canvas) are common during interactive
//! editing and never surface as errors: they resolve to transparent or
//! unchanged output per operation.

pub mod composite;
pub mod geometry;
pub mod raster;
pub mod transform;

pub use composite::{composite, Layer};
pub use geometry::{Dimensions, Point};
pub use raster::{scale, FilterType, RasterError, RasterImage};
pub use transform::{place, resize_canvas, rotate_image, translate, TransformSpec};

/// Overlay `source` onto `destination` for a single frame.
///
/// `anchor` is expressed in `source_native_size` coordinates (the
/// resolution the anchor was picked at); it is rescaled here by the
/// ratio `scale_size.width / source_native_size.width` into scaled-image
/// coordinates before driving the placement pipeline. `target_point` is
/// in destination coordinates.
///
/// Short-circuits:
/// - `Layer::Hidden` returns the destination unchanged without running
///   any transform; a hidden face must not affect output even if its
///   transform parameters are degenerate.
/// - A zero-area `scale_size` or `source_native_size` returns the
///   destination unchanged; a face scaled to nothing is no face.
///
/// The result always has `destination`'s dimensions.
#[allow(clippy::too_many_arguments)]
pub fn edit_frame(
    destination: &RasterImage,
    source: &RasterImage,
    source_native_size: Dimensions,
    scale_size: Dimensions,
    anchor: Point,
    target_point: Point,
    rotation_degrees: f64,
    layer: Layer,
    filter: FilterType,
) -> RasterImage {
    if layer == Layer::Hidden {
        return destination.clone();
    }
    if scale_size.is_empty() || source_native_size.is_empty() {
        return destination.clone();
    }

    let ratio = f64::from(scale_size.width) / f64::from(source_native_size.width);
    let spec = TransformSpec {
        scale_size,
        anchor: Point::new(anchor.x * ratio, anchor.y * ratio),
        target_point,
        rotation_degrees,
    };

    let placed = place(source, destination.dimensions(), &spec, filter);
    composite(destination, &placed, layer)
}
