//! Image transformation operations: canvas resize/translate, rotation,
//! and anchor-preserving placement.
//!
//! # Pipeline Order
//!
//! [`place`] composes the stages in this order:
//! 1. Scale (content resampling, [`crate::raster::scale`])
//! 2. Rotation about the image center ([`rotate_image`])
//! 3. Canvas extension ([`resize_canvas`])
//! 4. Translation to the target point ([`translate`])
//! 5. Final resize to the destination canvas
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y-axis points down
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Canvas coordinates are whole pixels; positions stay floating-point
//!   until the pipeline's single rounding point

mod canvas;
mod place;
mod rotation;

pub use canvas::{resize_canvas, translate};
pub use place::{place, TransformSpec};
pub use rotation::{rotate_image, rotated_bounds};
