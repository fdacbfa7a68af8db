use crate::coords::Viewport;

use super::Canvas2d;

/// A drawable surface owned by a host: dimensions, a context and `clear`.
///
/// Renderers receive a surface per frame instead of owning one, so any host
/// with a canvas lifecycle (window, offscreen buffer, recorder) can drive
/// them.
pub trait Surface {
    type Canvas: Canvas2d;

    /// Current size in logical pixels.
    fn viewport(&self) -> Viewport;

    /// Drawing context for this surface.
    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Resets the surface to its background.
    fn clear(&mut self);
}
