//! Faceframe WASM - WebAssembly bindings for Faceframe
//!
//! This crate exposes the faceframe-core editing pipeline to
//! JavaScript/TypeScript applications. It is the request adapter of the
//! system: it decodes uploaded frames, parses the placement parameters
//! posted by the UI, runs the pipeline once per frame, and re-encodes the
//! result. Sequence-level concerns (frame timing, container assembly)
//! stay on the JavaScript side.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `error` - The binding-layer error type
//! - `decode` - Image decoding bindings (PNG/JPEG to RGBA)
//! - `encode` - Image encoding bindings (RGBA to PNG)
//! - `edit` - The per-frame editing operation
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, edit_frame, encode_png } from '@faceframe/wasm';
//!
//! await init();
//!
//! const frame = decode_image(frameBytes);
//! const face = decode_image(faceBytes);
//! const edited = edit_frame(frame, face, params);
//! const png = encode_png(edited);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod edit;
mod encode;
mod error;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use edit::{edit_frame, EditParams};
pub use encode::encode_png;
pub use error::AdapterError;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
