use super::Vec2;

/// 2D affine transform, row-major:
///
/// ```text
/// | a c e |
/// | b d f |
/// ```
///
/// Only translation and rotation are produced by the canvas API, so the
/// linear part stays orthonormal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2d {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform2d {
    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    /// Post-multiplies a translation (applied before the current transform).
    #[inline]
    pub fn translated(self, tx: f32, ty: f32) -> Self {
        Self {
            e: self.a * tx + self.c * ty + self.e,
            f: self.b * tx + self.d * ty + self.f,
            ..self
        }
    }

    /// Post-multiplies a rotation of `radians`, clockwise in +Y-down space.
    #[inline]
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}
