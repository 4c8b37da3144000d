//! Binding-layer error type.
//!
//! Everything the bindings can fail on is collected into one enum so the
//! JavaScript side sees uniform, prefixed messages regardless of which
//! binding produced them. The enum itself stays free of `JsValue` so it
//! can be constructed and inspected on native targets; conversion to
//! `JsValue` happens once, at the `?` boundary of each binding.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the WASM bindings.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The supplied bytes are not a decodable PNG or JPEG image.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// PNG encoding failed internally.
    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),

    /// The edit parameters object does not match the expected shape.
    #[error("invalid edit parameters: {0}")]
    InvalidParams(String),
}

impl From<AdapterError> for JsValue {
    fn from(err: AdapterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message_is_prefixed() {
        let source = image::load_from_memory(&[0u8; 4]).unwrap_err();
        let err = AdapterError::Decode(source);
        assert!(err.to_string().starts_with("failed to decode image: "));
    }

    #[test]
    fn test_encode_error_message_is_prefixed() {
        let source = image::load_from_memory(&[0u8; 4]).unwrap_err();
        let err = AdapterError::Encode(source);
        assert!(err.to_string().starts_with("failed to encode PNG: "));
    }

    #[test]
    fn test_invalid_params_message_carries_detail() {
        let err = AdapterError::InvalidParams("missing field `face_size`".to_string());
        assert_eq!(
            err.to_string(),
            "invalid edit parameters: missing field `face_size`"
        );
    }
}
