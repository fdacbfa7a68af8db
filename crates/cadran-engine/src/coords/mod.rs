//! Coordinate and geometry types shared by canvases and the clock layout.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles that describe clock positions are measured clockwise from "up".

mod transform;
mod vec2;
mod viewport;

pub use transform::Transform2d;
pub use vec2::Vec2;
pub use viewport::Viewport;
