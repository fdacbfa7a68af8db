use super::Vec2;

/// Surface size in logical pixels.
///
/// Hosts hand this to the renderer every frame; nothing downstream caches it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the largest circle centered in the viewport.
    ///
    /// Uses the shorter side so non-square surfaces do not clip the circle.
    /// Negative sizes collapse to zero.
    #[inline]
    pub fn inscribed_radius(self) -> f32 {
        (self.width.min(self.height) / 2.0).max(0.0)
    }
}
