//! Paint model shared between the clock and canvases.
//!
//! Scope is deliberately small: a premultiplied color that can be parsed from
//! the strings a control panel hands over. Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
