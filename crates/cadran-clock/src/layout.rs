//! Per-frame layout of every element on the face.
//!
//! `ClockFace::layout` is a pure function of viewport, params and time; the
//! renderer only walks the result. Nothing here is cached across frames.

use core::f32::consts::{PI, TAU};

use cadran_engine::canvas::Font;
use cadran_engine::coords::{Vec2, Viewport};
use cadran_engine::paint::Color;

use crate::geometry::{self, Segment};
use crate::params::RenderParams;
use crate::time::TimeSample;

/// Moon body radius; the visible discs are derived from it.
pub const MOON_RADIUS: f32 = 18.0;
pub const SUN_CORE_RADIUS: f32 = 10.0;
pub const SUN_RAY_COUNT: usize = 12;
pub const SUN_RAY_LENGTH: f32 = 15.0;
/// Label baseline distance above the face center.
pub const LABEL_RAISE: f32 = 60.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hand {
    pub kind: HandKind,
    pub angle: f32,
    pub segment: Segment,
}

/// Filled circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Day/night glyph. The moon is two overlapping discs; the second one is
/// painted over the first and leaves a crescent.
#[derive(Debug, Clone, PartialEq)]
pub enum DayNight {
    Sun { center: Vec2, core_radius: f32, rays: Vec<Segment> },
    Moon { base: Disc, shadow: Disc },
}

impl DayNight {
    pub fn for_time(center: Vec2, t: TimeSample) -> Self {
        if t.is_pm() {
            DayNight::Moon {
                base: Disc {
                    center,
                    radius: MOON_RADIUS + 6.0,
                    color: Color::from_srgb_u8(255, 255, 0, 255),
                },
                shadow: Disc {
                    center: center + Vec2::new(MOON_RADIUS / 3.0, -4.0),
                    radius: MOON_RADIUS + 5.0,
                    color: Color::from_srgb_u8(0xb8, 0xb8, 0xb8, 255),
                },
            }
        } else {
            let rays = (0..SUN_RAY_COUNT)
                .map(|i| {
                    let angle = PI / 6.0 * i as f32;
                    let outer = SUN_CORE_RADIUS + SUN_RAY_LENGTH;
                    geometry::radial_span(center, SUN_CORE_RADIUS, outer, angle)
                })
                .collect();
            DayNight::Sun { center, core_radius: SUN_CORE_RADIUS, rays }
        }
    }

    #[inline]
    pub fn is_moon(&self) -> bool {
        matches!(self, DayNight::Moon { .. })
    }
}

/// Country label, centered horizontally on `at`, baseline at `at.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub at: Vec2,
    pub font: Font,
    pub color: Color,
}

/// Everything drawn in one frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub center: Vec2,
    pub radius: f32,
    pub ticks: Vec<Segment>,
    /// Hour, minute, second.
    pub hands: [Hand; 3],
    pub indicator: DayNight,
    pub label: Label,
}

impl ClockFace {
    pub fn layout(viewport: Viewport, params: &RenderParams, t: TimeSample) -> Self {
        let center = viewport.center();
        let radius = viewport.inscribed_radius();

        let ticks = (0..geometry::TICK_COUNT)
            .map(|i| {
                let len = geometry::tick_length(i);
                geometry::radial_span(center, radius - len, radius, geometry::tick_angle(i))
            })
            .collect();

        let hand = |kind, angle: f32, ratio: f32| Hand {
            kind,
            angle,
            segment: geometry::radial_segment(center, radius * ratio, angle),
        };
        let hands = [
            hand(HandKind::Hour, geometry::hour_angle(t), geometry::HOUR_HAND_RATIO),
            hand(HandKind::Minute, geometry::minute_angle(t), geometry::MINUTE_HAND_RATIO),
            hand(HandKind::Second, geometry::second_angle(t), geometry::SECOND_HAND_RATIO),
        ];

        let indicator = DayNight::for_time(Vec2::new(center.x, params.center_y), t);

        let label = Label {
            text: params.timezone.label(),
            at: Vec2::new(center.x, center.y - LABEL_RAISE),
            font: params.font(),
            color: params.flag_color,
        };

        Self { center, radius, ticks, hands, indicator, label }
    }

    /// Outline circle as (center, radius, start, end) arc arguments.
    #[inline]
    pub fn outline(&self) -> (Vec2, f32, f32, f32) {
        (self.center, self.radius, 0.0, TAU)
    }
}
