//! Image decoding bindings.
//!
//! Frames arrive from the browser as encoded PNG or JPEG bytes (the
//! upload dialog splits animated sources into stills client-side); this
//! module turns them into RGBA raster images for the editing pipeline.

use crate::error::AdapterError;
use crate::types::JsRasterImage;
use faceframe_core::RasterImage;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes into an RGBA raster image.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid PNG or JPEG image, or
/// the data is corrupted or truncated.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const frame = decode_image(bytes);
/// console.log(`Decoded ${frame.width}x${frame.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    let decoded = image::load_from_memory(bytes).map_err(AdapterError::Decode)?;
    Ok(JsRasterImage::from_raster(RasterImage::from_rgba_image(
        decoded.to_rgba8(),
    )))
}
