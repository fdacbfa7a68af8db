//! 2D drawing-context contract.
//!
//! `Canvas2d` mirrors the immediate-mode canvas model: a current path built
//! with `begin_path`/`move_to`/`line_to`/`arc`, consumed by `stroke`/`fill`,
//! plus style state and a save/restore stack that also carries the
//! translate/rotate transform.
//!
//! Implementations in this crate:
//! - [`crate::scene::DrawList`] records calls for inspection and replay
//! - [`crate::raster::PixmapCanvas`] rasterizes on the CPU

mod style;
mod surface;

pub use style::{Font, LineCap, TextAlign};
pub use surface::Surface;

use crate::coords::Vec2;
use crate::paint::Color;

/// Immediate-mode 2D drawing context.
///
/// Coordinates are logical pixels in the current user space, i.e. after the
/// transform accumulated by `translate`/`rotate`. Angles are radians.
pub trait Canvas2d {
    /// Pushes a copy of the transform and style state.
    fn save(&mut self);

    /// Pops the most recently saved state. Unbalanced calls are ignored.
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    /// Rotates user space clockwise (+Y-down).
    fn rotate(&mut self, radians: f32);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Vec2);

    /// Adds a straight segment from the current point to `p`.
    fn line_to(&mut self, p: Vec2);

    /// Adds a clockwise circular arc from `start` to `end`, angles measured
    /// from +X. A segment from the current point to the arc start is added
    /// when a subpath is open.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);

    /// Closes the current subpath back to its first point.
    fn close_path(&mut self);

    /// Strokes the current path with the current stroke style.
    fn stroke(&mut self);

    /// Fills the current path with the current fill style (non-zero winding).
    fn fill(&mut self);

    /// Draws `text` with its baseline at `at.y`, anchored by the text align.
    fn fill_text(&mut self, text: &str, at: Vec2);

    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_font(&mut self, font: Font);
    fn set_text_align(&mut self, align: TextAlign);
}
