use cadran_engine::canvas::{Canvas2d, LineCap, Surface, TextAlign};

use crate::geometry::Segment;
use crate::layout::{ClockFace, DayNight, Disc};
use crate::params::RenderParams;
use crate::time::{SystemClock, TimeSample, TimeSource};

/// Paints one complete clock frame.
///
/// The renderer owns only its time source. Surface and params are handed in
/// per call, and time is sampled afresh on every `render`.
#[derive(Debug, Clone, Default)]
pub struct ClockRenderer<T: TimeSource = SystemClock> {
    time: T,
}

impl ClockRenderer<SystemClock> {
    pub fn new() -> Self {
        Self { time: SystemClock }
    }
}

impl<T: TimeSource> ClockRenderer<T> {
    pub fn with_time_source(time: T) -> Self {
        Self { time }
    }

    /// Clears `surface` and paints the face for the current time in
    /// `params.timezone`. Returns the time that was drawn.
    pub fn render<S: Surface>(&self, surface: &mut S, params: &RenderParams) -> TimeSample {
        let t = self.time.sample(params.timezone);
        render_at(surface, params, t);
        t
    }
}

/// Clears `surface` and paints the face for a given time of day.
pub fn render_at<S: Surface>(surface: &mut S, params: &RenderParams, t: TimeSample) {
    surface.clear();
    let face = ClockFace::layout(surface.viewport(), params, t);
    log::trace!("clock frame {t} {} r={}", params.timezone, face.radius);
    paint_face(surface.canvas(), &face, params);
}

/// Issues the drawing calls for a laid-out face. Later elements layer over
/// earlier ones.
pub fn paint_face<C: Canvas2d + ?Sized>(canvas: &mut C, face: &ClockFace, params: &RenderParams) {
    canvas.set_line_cap(LineCap::Round);
    canvas.set_stroke_style(params.color);
    canvas.set_line_width(params.line_width);

    let (center, radius, start, end) = face.outline();
    canvas.begin_path();
    canvas.arc(center, radius, start, end);
    canvas.stroke();

    // Each tick is its own path so strokes never join.
    for tick in &face.ticks {
        stroke_segment(canvas, *tick);
    }

    for hand in &face.hands {
        stroke_segment(canvas, hand.segment);
    }

    paint_indicator(canvas, &face.indicator);

    let label = &face.label;
    canvas.set_font(label.font.clone());
    canvas.set_text_align(TextAlign::Center);
    canvas.set_fill_style(label.color);
    canvas.fill_text(label.text, label.at);
}

fn stroke_segment<C: Canvas2d + ?Sized>(canvas: &mut C, s: Segment) {
    canvas.begin_path();
    canvas.move_to(s.from);
    canvas.line_to(s.to);
    canvas.stroke();
}

fn fill_disc<C: Canvas2d + ?Sized>(canvas: &mut C, disc: Disc) {
    canvas.begin_path();
    canvas.set_fill_style(disc.color);
    canvas.arc(disc.center, disc.radius, 0.0, core::f32::consts::TAU);
    canvas.fill();
}

fn paint_indicator<C: Canvas2d + ?Sized>(canvas: &mut C, indicator: &DayNight) {
    match indicator {
        DayNight::Moon { base, shadow } => {
            fill_disc(canvas, *base);
            fill_disc(canvas, *shadow);
        }
        DayNight::Sun { center, core_radius, rays } => {
            // Core and rays share one path and a single stroke.
            canvas.begin_path();
            canvas.arc(*center, *core_radius, 0.0, core::f32::consts::TAU);
            for ray in rays {
                canvas.move_to(ray.from);
                canvas.line_to(ray.to);
            }
            canvas.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use cadran_engine::coords::{Vec2, Viewport};
    use cadran_engine::paint::Color;
    use cadran_engine::raster::PixmapSurface;
    use cadran_engine::scene::{ArcCmd, DrawCmd, RecordingSurface, TextCmd};
    use cadran_engine::text::FontSystem;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::time::FixedClock;
    use crate::zone::Zone;

    const VP: Viewport = Viewport::new(600.0, 600.0);

    fn record(params: &RenderParams, t: TimeSample) -> Vec<DrawCmd> {
        let mut surface = RecordingSurface::new(VP);
        render_at(&mut surface, params, t);
        surface.draw_list().items().to_vec()
    }

    fn count(cmds: &[DrawCmd], pred: impl Fn(&DrawCmd) -> bool) -> usize {
        cmds.iter().filter(|c| pred(c)).count()
    }

    // ── command stream ────────────────────────────────────────────────────

    #[test]
    fn stream_starts_with_global_stroke_state() {
        let params = RenderParams::for_viewport(VP);
        let cmds = record(&params, TimeSample::new(9, 0, 0));
        assert_eq!(
            &cmds[..4],
            &[
                DrawCmd::LineCap(LineCap::Round),
                DrawCmd::StrokeStyle(Color::white()),
                DrawCmd::LineWidth(2.0),
                DrawCmd::BeginPath,
            ]
        );
        let outline = ArcCmd::new(Vec2::new(300.0, 300.0), 300.0, 0.0, core::f32::consts::TAU);
        assert_eq!(cmds[4], DrawCmd::Arc(outline));
        assert_eq!(cmds[5], DrawCmd::Stroke);
    }

    #[test]
    fn morning_frame_strokes_outline_ticks_hands_and_sun() {
        let params = RenderParams::for_viewport(VP);
        let cmds = record(&params, TimeSample::new(9, 0, 0));
        // outline + 60 ticks + 3 hands + sun
        assert_eq!(count(&cmds, |c| *c == DrawCmd::Stroke), 1 + 60 + 3 + 1);
        assert_eq!(count(&cmds, |c| *c == DrawCmd::Fill), 0);
        // Sun rays are 12 subpaths after the core arc.
        let sun_start = cmds
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Arc(a) if a.radius == 10.0))
            .unwrap();
        assert_eq!(count(&cmds[sun_start..], |c| matches!(c, DrawCmd::MoveTo(_))), 12);
    }

    #[test]
    fn evening_frame_fills_two_moon_discs() {
        let params = RenderParams::for_viewport(VP);
        let cmds = record(&params, TimeSample::new(21, 0, 0));
        assert_eq!(count(&cmds, |c| *c == DrawCmd::Fill), 2);
        assert_eq!(count(&cmds, |c| *c == DrawCmd::Stroke), 1 + 60 + 3);

        let fills: Vec<&DrawCmd> =
            cmds.iter().filter(|c| matches!(c, DrawCmd::FillStyle(_))).collect();
        assert_eq!(fills[0], &DrawCmd::FillStyle(Color::from_srgb_u8(255, 255, 0, 255)));
        assert_eq!(fills[1], &DrawCmd::FillStyle(Color::from_srgb_u8(0xb8, 0xb8, 0xb8, 255)));
    }

    #[test]
    fn label_is_last_and_centered() {
        let mut params = RenderParams::for_viewport(VP);
        params.timezone = Zone::NewYork;
        params.flag_color = Color::parse("#ff0000").unwrap();
        let cmds = record(&params, TimeSample::new(9, 0, 0));
        let n = cmds.len();
        assert_eq!(
            &cmds[n - 4..],
            &[
                DrawCmd::Font(params.font()),
                DrawCmd::TextAlign(TextAlign::Center),
                DrawCmd::FillStyle(params.flag_color),
                DrawCmd::FillText(TextCmd { text: "USA".into(), at: Vec2::new(300.0, 240.0) }),
            ]
        );
    }

    #[test]
    fn identical_inputs_give_identical_streams() {
        let params = RenderParams::for_viewport(VP);
        let t = TimeSample::new(17, 42, 7);
        assert_eq!(record(&params, t), record(&params, t));
    }

    #[test]
    fn clear_discards_previous_frame() {
        let params = RenderParams::for_viewport(VP);
        let mut surface = RecordingSurface::new(VP);
        render_at(&mut surface, &params, TimeSample::new(1, 0, 0));
        let first = surface.draw_list().len();
        render_at(&mut surface, &params, TimeSample::new(1, 0, 1));
        assert_eq!(surface.draw_list().len(), first);
    }

    // ── raster frames ─────────────────────────────────────────────────────

    const SMALL: Viewport = Viewport::new(200.0, 200.0);

    fn raster(t: TimeSample) -> image::RgbaImage {
        let mut params = RenderParams::for_viewport(SMALL);
        params.center_y = 60.0;
        let mut surface = PixmapSurface::new(200, 200, FontSystem::new(), Color::black()).unwrap();
        render_at(&mut surface, &params, t);
        surface.to_rgba_image().unwrap()
    }

    #[test]
    fn raster_moon_frame() {
        let img = raster(TimeSample::new(21, 15, 45));
        // Outline between the 12 o'clock tick and the next one.
        assert!(img.get_pixel(105, 0).0[0] >= 200);
        assert_eq!(img.get_pixel(80, 60).0, [255, 255, 0, 255]);
        assert_eq!(img.get_pixel(106, 56).0, [0xb8, 0xb8, 0xb8, 255]);
        assert_eq!(img.get_pixel(100, 42).0, [0xb8, 0xb8, 0xb8, 255]);
        assert_eq!(img.get_pixel(150, 150).0, [0, 0, 0, 255]);
    }

    #[test]
    fn raster_sun_frame() {
        let img = raster(TimeSample::new(9, 15, 45));
        assert!(img.get_pixel(105, 0).0[0] >= 200);
        // Upward ray, then the unfilled core.
        assert_eq!(img.get_pixel(100, 42).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(100, 60).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(150, 150).0, [0, 0, 0, 255]);
    }

    // ── scenario ──────────────────────────────────────────────────────────

    #[test]
    fn paris_half_past_two_pm() {
        let params = RenderParams::for_viewport(VP);
        let local = chrono_tz::Europe::Paris
            .with_ymd_and_hms(2024, 6, 1, 14, 30, 0)
            .single()
            .unwrap();
        let renderer = ClockRenderer::with_time_source(FixedClock::new(local.with_timezone(&Utc)));

        let mut surface = RecordingSurface::new(VP);
        let t = renderer.render(&mut surface, &params);
        assert_eq!(t, TimeSample::new(14, 30, 0));

        let face = ClockFace::layout(VP, &params, t);
        assert!(face.indicator.is_moon());
        assert!((face.hands[0].angle - 5.0 * PI / 12.0).abs() < 1e-5);
        assert!((face.hands[1].angle - PI).abs() < 1e-5);
        assert_eq!(face.hands[2].angle, 0.0);
        assert_eq!(face.label.text, "FR");

        let cmds = surface.draw_list().items();
        assert!(cmds.iter().any(|c| matches!(c, DrawCmd::FillText(t) if t.text == "FR")));
        assert_eq!(count(cmds, |c| *c == DrawCmd::Fill), 2);
    }

    #[test]
    fn render_twice_with_fixed_clock_is_idempotent() {
        let params = RenderParams::for_viewport(VP);
        let at = Utc.with_ymd_and_hms(2024, 2, 2, 3, 4, 5).single().unwrap();
        let renderer = ClockRenderer::with_time_source(FixedClock::new(at));
        let mut a = RecordingSurface::new(VP);
        let mut b = RecordingSurface::new(VP);
        renderer.render(&mut a, &params);
        renderer.render(&mut b, &params);
        assert_eq!(a.draw_list(), b.draw_list());
    }

    #[test]
    fn degenerate_surface_does_not_panic() {
        let vp = Viewport::new(0.0, -5.0);
        let params = RenderParams::for_viewport(vp);
        let mut surface = RecordingSurface::new(vp);
        render_at(&mut surface, &params, TimeSample::new(12, 0, 0));
        assert!(!surface.draw_list().is_empty());
    }
}
