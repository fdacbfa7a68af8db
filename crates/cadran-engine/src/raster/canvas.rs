use resvg::tiny_skia;

use crate::canvas::{Canvas2d, Font, LineCap, TextAlign};
use crate::coords::{Transform2d, Vec2};
use crate::paint::Color;
use crate::text::FontSystem;

use super::path::PathSink;
use super::RasterError;

/// Saved drawing state: everything `save`/`restore` round-trips.
#[derive(Debug, Clone)]
struct State {
    transform: Transform2d,
    stroke: Color,
    fill: Color,
    line_width: f32,
    line_cap: LineCap,
    font: Font,
    align: TextAlign,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform2d::identity(),
            stroke: Color::black(),
            fill: Color::black(),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            font: Font::default(),
            align: TextAlign::Left,
        }
    }
}

/// CPU canvas backed by a `tiny_skia::Pixmap`.
///
/// Paths and strokes are anti-aliased. Text is rendered from `fontdue` glyph
/// bitmaps; glyphs follow the translated anchor but are not rotated.
pub struct PixmapCanvas {
    pixmap: tiny_skia::Pixmap,
    fonts: FontSystem,
    state: State,
    stack: Vec<State>,
    path: PathSink,
}

impl PixmapCanvas {
    /// Creates a transparent canvas. Zero sizes are bumped to one pixel.
    pub fn new(width: u32, height: u32, fonts: FontSystem) -> Result<Self, RasterError> {
        let pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1))
            .ok_or(RasterError::PixmapSize { width, height })?;
        Ok(Self {
            pixmap,
            fonts,
            state: State::default(),
            stack: Vec::new(),
            path: PathSink::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Fills every pixel with `color` and resets path and state.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia(color));
        self.path.clear();
        self.stack.clear();
        self.state = State::default();
    }

    /// Straight-alpha RGBA bytes of the pixel at `(x, y)`, if in bounds.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    fn paint_for(color: Color) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.anti_alias = true;
        paint
    }

    fn blit_glyph(&mut self, x: f32, y: f32, width: usize, height: usize, coverage: &[u8]) {
        let Some(mut glyph) = tiny_skia::Pixmap::new(width as u32, height as u32) else {
            return;
        };
        let fill = self.state.fill;
        for (dst, &cov) in glyph.pixels_mut().iter_mut().zip(coverage) {
            let k = cov as f32;
            let a = (fill.a * k).round() as u8;
            let channel = |v: f32| ((v * k).round() as u8).min(a);
            if let Some(px) = tiny_skia::PremultipliedColorU8::from_rgba(
                channel(fill.r),
                channel(fill.g),
                channel(fill.b),
                a,
            ) {
                *dst = px;
            }
        }
        self.pixmap.draw_pixmap(
            x.round() as i32,
            y.round() as i32,
            glyph.as_ref(),
            &tiny_skia::PixmapPaint::default(),
            tiny_skia::Transform::identity(),
            None,
        );
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_skia_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

impl Canvas2d for PixmapCanvas {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.translated(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform.rotated(radians);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.move_to(self.state.transform.apply(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.line_to(self.state.transform.apply(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.path.arc(self.state.transform, center, radius, start, end);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let Some(path) = self.path.to_path() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width.max(0.0),
            line_cap: to_skia_cap(self.state.line_cap),
            ..tiny_skia::Stroke::default()
        };
        let paint = Self::paint_for(self.state.stroke);
        self.pixmap.stroke_path(&path, &paint, &stroke, tiny_skia::Transform::identity(), None);
    }

    fn fill(&mut self) {
        let Some(path) = self.path.to_path() else {
            return;
        };
        let paint = Self::paint_for(self.state.fill);
        self.pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn fill_text(&mut self, text: &str, at: Vec2) {
        let font = self.state.font.clone();
        let Some(id) = self.fonts.resolve(&font.family) else {
            log::warn!("no font loaded for {font}; text {text:?} skipped");
            return;
        };
        let width = self.fonts.measure_text(text, id, font.size);
        let anchor = self.state.transform.apply(at);
        let origin = Vec2::new(anchor.x + self.state.align.offset(width), anchor.y);

        for g in self.fonts.shape_line(text, id, font.size) {
            self.blit_glyph(origin.x + g.x, origin.y + g.y, g.width, g.height, &g.coverage);
        }
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::TAU;

    use super::*;

    fn canvas(w: u32, h: u32) -> PixmapCanvas {
        let mut c = PixmapCanvas::new(w, h, FontSystem::new()).unwrap();
        c.clear(Color::black());
        c
    }

    // ── strokes ───────────────────────────────────────────────────────────

    #[test]
    fn stroked_line_colors_pixels_along_it() {
        let mut c = canvas(20, 20);
        c.set_stroke_style(Color::white());
        c.set_line_width(3.0);
        c.begin_path();
        c.move_to(Vec2::new(2.0, 10.0));
        c.line_to(Vec2::new(18.0, 10.0));
        c.stroke();

        assert_eq!(c.pixel(10, 10), Some([255, 255, 255, 255]));
        assert_eq!(c.pixel(10, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn rotated_segment_lands_clockwise() {
        // translate to center, rotate a quarter turn, segment "up" ends at 3 o'clock.
        let mut c = canvas(40, 40);
        c.set_stroke_style(Color::white());
        c.set_line_width(2.0);
        c.save();
        c.translate(20.0, 20.0);
        c.rotate(TAU / 4.0);
        c.begin_path();
        c.move_to(Vec2::zero());
        c.line_to(Vec2::new(0.0, -15.0));
        c.stroke();
        c.restore();

        assert_eq!(c.pixel(32, 20).map(|p| p[0]), Some(255));
        assert_eq!(c.pixel(20, 8).map(|p| p[0]), Some(0));
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_covers_center() {
        let mut c = canvas(30, 30);
        c.set_fill_style(Color::parse("yellow").unwrap());
        c.begin_path();
        c.arc(Vec2::new(15.0, 15.0), 8.0, 0.0, TAU);
        c.fill();

        assert_eq!(c.pixel(15, 15), Some([255, 255, 0, 255]));
        assert_eq!(c.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn empty_path_is_noop() {
        let mut c = canvas(4, 4);
        c.begin_path();
        c.stroke();
        c.fill();
        assert_eq!(c.pixel(2, 2), Some([0, 0, 0, 255]));
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn restore_reverts_style_and_transform() {
        let mut c = canvas(10, 10);
        c.set_line_width(4.0);
        c.save();
        c.set_line_width(9.0);
        c.translate(5.0, 5.0);
        c.restore();

        assert_eq!(c.state.line_width, 4.0);
        assert_eq!(c.state.transform, Transform2d::identity());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut c = canvas(10, 10);
        c.set_line_width(2.0);
        c.restore();
        assert_eq!(c.state.line_width, 2.0);
    }

    #[test]
    fn invalid_line_width_is_ignored() {
        let mut c = canvas(10, 10);
        c.set_line_width(0.0);
        c.set_line_width(f32::NAN);
        assert_eq!(c.state.line_width, 1.0);
    }

    #[test]
    fn zero_size_is_bumped() {
        let c = PixmapCanvas::new(0, 0, FontSystem::new()).unwrap();
        assert_eq!((c.width(), c.height()), (1, 1));
    }

    #[test]
    fn text_without_fonts_is_skipped() {
        let mut c = canvas(10, 10);
        c.set_fill_style(Color::white());
        c.fill_text("FR", Vec2::new(5.0, 5.0));
        assert_eq!(c.pixel(5, 4), Some([0, 0, 0, 255]));
    }
}
