//! Core raster buffer types.

use crate::geometry::Dimensions;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for raster buffer construction.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The supplied pixel buffer does not match the stated dimensions.
    #[error("pixel buffer of {actual} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Resampling kernel for content scaling.
///
/// Nearest keeps pixel-art sources (the typical GIF frame) crisp;
/// Bilinear and Lanczos3 smooth photographic sources. Which kernel to use
/// is caller policy, not hardcoded in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, keeps hard edges).
    #[default]
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// An in-memory RGBA pixel buffer plus its dimensions.
///
/// Immutable by convention: each pipeline stage consumes one or more
/// RasterImages and produces a new one; no stage mutates its input in
/// place. New canvas area introduced by any operation is fully
/// transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    buf: RgbaImage,
}

impl RasterImage {
    /// Create a fully transparent image of the given size.
    pub fn blank(size: Dimensions) -> Self {
        // RgbaImage::new zero-fills, and RGBA(0,0,0,0) is transparent
        Self {
            buf: RgbaImage::new(size.width, size.height),
        }
    }

    /// Create a RasterImage from raw RGBA bytes (4 bytes per pixel,
    /// row-major order).
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::BufferSizeMismatch`] if the buffer length
    /// is not `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        // Length is validated above, so from_raw cannot fail here
        let buf = RgbaImage::from_raw(width, height, pixels)
            .unwrap_or_else(|| RgbaImage::new(width, height));
        Ok(Self { buf })
    }

    /// Wrap an existing RGBA buffer.
    pub fn from_rgba_image(buf: RgbaImage) -> Self {
        Self { buf }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    /// Image size as a Dimensions value.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.buf.width(), self.buf.height())
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.buf
    }

    /// Consume self and return the underlying RGBA buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        self.buf
    }

    /// RGBA channels of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buf.get_pixel(x, y).0
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        self.buf.as_raw()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.buf.width() == 0 || self.buf.height() == 0
    }
}
