use crate::coords::Vec2;

/// Arc payload: clockwise from `start` to `end`, angles from +X.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

impl ArcCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, start: f32, end: f32) -> Self {
        Self { center, radius, start, end }
    }
}
