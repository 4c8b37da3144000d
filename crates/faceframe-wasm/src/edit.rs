//! Frame editing bindings.
//!
//! One call edits one frame. The UI posts the placement parameters as a
//! single JSON object (sizes and points come straight from its state),
//! so the binding takes a `JsValue` and deserializes it rather than a
//! dozen positional numbers.

use crate::error::AdapterError;
use crate::types::{filter_from_u8, JsRasterImage};
use faceframe_core::{Dimensions, Layer, Point};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Placement parameters for a single frame, as posted by the editor UI.
#[derive(Debug, Deserialize)]
pub struct EditParams {
    /// Native size of the face image (the resolution `anchor` was picked
    /// at).
    pub face_size: Dimensions,
    /// Size the face is scaled to before rotation.
    pub face_scale_size: Dimensions,
    /// Anchor point in native face coordinates.
    pub face_center: Point,
    /// Where the anchor lands, in frame coordinates.
    pub face_pos: Point,
    /// Rotation in degrees, positive = clockwise on screen.
    pub face_rot: f64,
    /// Stacking order: "front", "back", or "hidden".
    pub face_layer: String,
    /// Resampling kernel code: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
    /// Defaults to Nearest, which keeps pixel-art GIF frames crisp.
    #[serde(default)]
    pub filter: u8,
}

/// Overlay the face onto one frame and return the composited frame.
///
/// The output always has the frame's dimensions. Degenerate parameters
/// (zero scale, positions far off-canvas) produce a well-defined frame
/// rather than an error; only malformed `params` JSON is rejected.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const edited = edit_frame(frame, face, {
///   face_size: { width: 512, height: 512 },
///   face_scale_size: { width: 64, height: 64 },
///   face_center: { x: 256.0, y: 310.0 },
///   face_pos: { x: 120.0, y: 80.0 },
///   face_rot: -15.0,
///   face_layer: "front",
/// });
/// ```
#[wasm_bindgen]
pub fn edit_frame(
    frame: &JsRasterImage,
    face: &JsRasterImage,
    params: JsValue,
) -> Result<JsRasterImage, JsValue> {
    let params: EditParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| AdapterError::InvalidParams(e.to_string()))?;

    let result = faceframe_core::edit_frame(
        frame.as_raster(),
        face.as_raster(),
        params.face_size,
        params.face_scale_size,
        params.face_center,
        params.face_pos,
        params.face_rot,
        Layer::from(params.face_layer.as_str()),
        filter_from_u8(params.filter),
    );

    Ok(JsRasterImage::from_raster(result))
}
