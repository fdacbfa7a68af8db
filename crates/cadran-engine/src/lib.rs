//! Cadran engine crate.
//!
//! Owns the drawing primitives the clock is painted with: the `Canvas2d`
//! contract, a recording canvas for headless use and tests, a CPU raster
//! canvas, fonts, frame pacing and logging setup.

pub mod canvas;
pub mod coords;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod text;
pub mod time;

pub mod logging;
