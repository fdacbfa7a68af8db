use crate::canvas::{Font, LineCap, TextAlign};
use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded `Canvas2d` call.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*` when the call carries more
///   than one value
/// - add a variant here
/// - record it from the matching `Canvas2d` method in `list.rs`
/// - replay it in `DrawList::replay`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),

    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcCmd),
    ClosePath,
    Stroke,
    Fill,
    FillText(TextCmd),

    StrokeStyle(Color),
    FillStyle(Color),
    LineWidth(f32),
    LineCap(LineCap),
    Font(Font),
    TextAlign(TextAlign),
}
