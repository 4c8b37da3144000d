//! WASM-compatible wrapper types for image data.
//!
//! [`JsRasterImage`] wraps the core [`RasterImage`] and provides a
//! JavaScript-friendly interface to image dimensions and pixel data,
//! handling the conversion between Rust and JavaScript representations.

use faceframe_core::{FilterType, RasterImage};
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. For
/// performance-critical code, keep the image in WASM memory and only
/// extract pixels when needed. `free()` can be called to release WASM
/// memory eagerly; wasm-bindgen's finalizer handles cleanup otherwise.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and RGBA pixel data
    /// (4 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        let inner = RasterImage::from_raw(width, height, pixels)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRasterImage { inner })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_raw().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_raw().to_vec()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Wrap a core RasterImage.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    /// Borrow the core RasterImage for passing to pipeline functions.
    pub(crate) fn as_raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Convert a u8 filter code to the core FilterType.
///
/// Values:
/// - 0 = Nearest (keeps pixel-art GIF frames crisp; the default)
/// - 1 = Bilinear
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Nearest.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        1 => FilterType::Bilinear,
        2 => FilterType::Lanczos3,
        _ => FilterType::Nearest,
    }
}
