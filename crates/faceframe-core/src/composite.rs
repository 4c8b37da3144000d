//! Alpha compositing of a transformed overlay with a destination frame.

use crate::raster::RasterImage;
use serde::{Deserialize, Serialize};

/// Stacking order of the overlay relative to the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Overlay is blended on top of the base.
    #[default]
    Front,
    /// Base is blended on top of the overlay (overlay appears behind).
    Back,
    /// Overlay is skipped entirely; the base passes through unchanged.
    Hidden,
}

impl From<&str> for Layer {
    /// Parse the wire form used by the editing UI. Unrecognized values
    /// fall back to `Front`, matching the permissive handling of the
    /// editor's layer toggle.
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "back" => Layer::Back,
            "hidden" => Layer::Hidden,
            _ => Layer::Front,
        }
    }
}

/// Alpha-blend `overlay` with `base` according to `layer`.
///
/// `Hidden` returns `base` unchanged without touching `overlay` at all;
/// callers should avoid running the placement pipeline in the first
/// place for hidden overlays, since a hidden overlay must not affect the
/// output under any circumstances.
///
/// # Panics
///
/// Panics if `base` and `overlay` differ in dimensions when blending.
/// The placement pipeline is the sole producer of composite inputs and
/// guarantees matching dimensions by construction, so hitting this is a
/// programming error, not a user-facing condition.
pub fn composite(base: &RasterImage, overlay: &RasterImage, layer: Layer) -> RasterImage {
    if layer == Layer::Hidden {
        return base.clone();
    }

    assert_eq!(
        base.dimensions(),
        overlay.dimensions(),
        "composite inputs must have identical dimensions"
    );

    let (bottom, top) = match layer {
        Layer::Front => (base, overlay),
        Layer::Back => (overlay, base),
        Layer::Hidden => unreachable!(),
    };

    let mut out = bottom.as_rgba_image().clone();
    image::imageops::overlay(&mut out, top.as_rgba_image(), 0, 0);
    RasterImage::from_rgba_image(out)
}
