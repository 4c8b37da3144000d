//! Image encoding bindings.
//!
//! Edited frames go back to the browser as PNG bytes; the client is
//! responsible for assembling them into an output container.

use crate::error::AdapterError;
use crate::types::JsRasterImage;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use wasm_bindgen::prelude::*;

/// Encode an RGBA raster image to PNG bytes.
///
/// PNG keeps the alpha channel intact, which matters for frames whose
/// transform pushed content off-canvas: the exposed area must stay
/// transparent through re-encoding.
///
/// # Errors
///
/// Returns an error if PNG encoding fails internally.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    let raster = image.as_raster();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            raster.as_raw(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(AdapterError::Encode)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceframe_core::RasterImage;

    #[test]
    fn test_encode_produces_png_magic() {
        let img = JsRasterImage::from_raster(
            RasterImage::from_raw(8, 8, vec![128u8; 8 * 8 * 4]).unwrap(),
        );
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_decode_round_trip_preserves_alpha() {
        let mut pixels = vec![0u8; 4 * 4 * 4];
        // One opaque red pixel in an otherwise transparent image
        pixels[0..4].copy_from_slice(&[255, 0, 0, 255]);
        let img = JsRasterImage::from_raster(RasterImage::from_raw(4, 4, pixels).unwrap());

        let png = encode_png(&img).unwrap();
        let back = crate::decode::decode_image(&png).unwrap();
        assert_eq!(back.pixels(), img.pixels());
    }
}
