use crate::canvas::{Canvas2d, Font, LineCap, TextAlign};
use crate::coords::Vec2;
use crate::paint::Color;

use super::shapes::ArcCmd;
use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so steady-state frames do not allocate
///
/// Commands are kept in call order; canvas semantics are order-dependent
/// (later paints layer over earlier ones), so there is no re-sorting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Re-issues every recorded call against another canvas.
    pub fn replay<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        for cmd in &self.items {
            match cmd {
                DrawCmd::Save => canvas.save(),
                DrawCmd::Restore => canvas.restore(),
                DrawCmd::Translate(v) => canvas.translate(v.x, v.y),
                DrawCmd::Rotate(a) => canvas.rotate(*a),
                DrawCmd::BeginPath => canvas.begin_path(),
                DrawCmd::MoveTo(p) => canvas.move_to(*p),
                DrawCmd::LineTo(p) => canvas.line_to(*p),
                DrawCmd::Arc(a) => canvas.arc(a.center, a.radius, a.start, a.end),
                DrawCmd::ClosePath => canvas.close_path(),
                DrawCmd::Stroke => canvas.stroke(),
                DrawCmd::Fill => canvas.fill(),
                DrawCmd::FillText(t) => canvas.fill_text(&t.text, t.at),
                DrawCmd::StrokeStyle(c) => canvas.set_stroke_style(*c),
                DrawCmd::FillStyle(c) => canvas.set_fill_style(*c),
                DrawCmd::LineWidth(w) => canvas.set_line_width(*w),
                DrawCmd::LineCap(c) => canvas.set_line_cap(*c),
                DrawCmd::Font(f) => canvas.set_font(f.clone()),
                DrawCmd::TextAlign(a) => canvas.set_text_align(*a),
            }
        }
    }
}

impl Canvas2d for DrawList {
    fn save(&mut self) {
        self.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCmd::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCmd::Translate(Vec2::new(x, y)));
    }

    fn rotate(&mut self, radians: f32) {
        self.push(DrawCmd::Rotate(radians));
    }

    fn begin_path(&mut self) {
        self.push(DrawCmd::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.push(DrawCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.push(DrawCmd::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.push(DrawCmd::Arc(ArcCmd::new(center, radius, start, end)));
    }

    fn close_path(&mut self) {
        self.push(DrawCmd::ClosePath);
    }

    fn stroke(&mut self) {
        self.push(DrawCmd::Stroke);
    }

    fn fill(&mut self) {
        self.push(DrawCmd::Fill);
    }

    fn fill_text(&mut self, text: &str, at: Vec2) {
        self.push_text(text, at);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.push(DrawCmd::StrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.push(DrawCmd::FillStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCmd::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.push(DrawCmd::LineCap(cap));
    }

    fn set_font(&mut self, font: Font) {
        self.push(DrawCmd::Font(font));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCmd::TextAlign(align));
    }
}
