//! 2-D vector math used by the placement pipeline.
//!
//! All positions are computed in floating point and only converted to
//! discrete pixel offsets at the single point where the pipeline hands a
//! continuous offset to a crop/extend operation. Rotation output is
//! rounded to 4 decimal places so repeated calls do not accumulate
//! floating-point drift; this is a numeric-stability contract, not
//! cosmetic formatting.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y-axis points down
//! - Rotation angles are in degrees, positive = clockwise on screen

use serde::{Deserialize, Serialize};

/// Pixel size of a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a new Dimensions value.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either axis is zero, i.e. the buffer covers no pixels.
    ///
    /// Operations against a zero-area dimension short-circuit to a fully
    /// transparent canvas of the target size rather than erroring.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A 2-D coordinate or vector.
///
/// Components may be fractional during computation; they are rounded to
/// the nearest integer only where a pixel-level crop/extend consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Componentwise vector addition.
pub fn add(a: Point, b: Point) -> Point {
    Point::new(a.x + b.x, a.y + b.y)
}

/// Componentwise vector subtraction (`a - b`).
pub fn subtract(a: Point, b: Point) -> Point {
    Point::new(a.x - b.x, a.y - b.y)
}

/// Rotate `v` as a vector by `degrees` using the standard 2-D rotation
/// matrix. In y-down raster coordinates positive angles rotate clockwise
/// on screen, matching the raster rotation in [`crate::transform`].
///
/// Output components are rounded to 4 decimal places.
pub fn rotate(v: Point, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    let cos = radians.cos();
    let sin = radians.sin();
    Point::new(
        round4(v.x * cos - v.y * sin),
        round4(v.x * sin + v.y * cos),
    )
}

/// Geometric center of a rectangle of the given size.
///
/// Kept as real numbers (not rounded) because the center participates in
/// further vector arithmetic before any pixel-level rounding.
pub fn center(d: Dimensions) -> Point {
    Point::new(d.width as f64 / 2.0, d.height as f64 / 2.0)
}

/// Round to 4 decimal places.
fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}
