//! Pure clock-face geometry.
//!
//! Angles are radians measured clockwise from 12 o'clock, in +Y-down space.

use core::f32::consts::TAU;

use cadran_engine::coords::Vec2;

use crate::time::TimeSample;

pub const TICK_COUNT: usize = 60;
/// Every fifth tick marks an hour and is drawn longer.
pub const MAJOR_TICK_EVERY: usize = 5;
pub const MAJOR_TICK_LENGTH: f32 = 20.0;
pub const MINOR_TICK_LENGTH: f32 = 10.0;

/// Hand lengths as fractions of the face radius.
pub const HOUR_HAND_RATIO: f32 = 0.5;
pub const MINUTE_HAND_RATIO: f32 = 0.8;
pub const SECOND_HAND_RATIO: f32 = 0.9;

/// A straight line between two points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Segment from `origin` running `length` towards `angle_from_up`.
///
/// Equivalent to translating to `origin`, rotating by the angle and drawing
/// from `(0, 0)` to `(0, -length)`.
#[inline]
pub fn radial_segment(origin: Vec2, length: f32, angle_from_up: f32) -> Segment {
    radial_span(origin, 0.0, length, angle_from_up)
}

/// Segment along the ray from `origin` at `angle_from_up`, covering radial
/// distances `[inner, outer]`.
#[inline]
pub fn radial_span(origin: Vec2, inner: f32, outer: f32, angle_from_up: f32) -> Segment {
    let dir = Vec2::from_angle_up(angle_from_up);
    Segment::new(origin + dir * inner, origin + dir * outer)
}

#[inline]
pub fn tick_length(index: usize) -> f32 {
    if index % MAJOR_TICK_EVERY == 0 {
        MAJOR_TICK_LENGTH
    } else {
        MINOR_TICK_LENGTH
    }
}

#[inline]
pub fn tick_angle(index: usize) -> f32 {
    TAU / TICK_COUNT as f32 * index as f32
}

/// Hour hand angle. Advances continuously with the minutes, so it moves
/// `TAU / 12 / 60` per minute instead of jumping on the hour.
#[inline]
pub fn hour_angle(t: TimeSample) -> f32 {
    TAU / 12.0 * ((t.hour % 12) as f32 + t.minute as f32 / 60.0)
}

#[inline]
pub fn minute_angle(t: TimeSample) -> f32 {
    TAU / 60.0 * t.minute as f32
}

#[inline]
pub fn second_angle(t: TimeSample) -> f32 {
    TAU / 60.0 * t.second as f32
}
