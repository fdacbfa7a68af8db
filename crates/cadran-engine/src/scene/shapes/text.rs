use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Text payload. Font, color and alignment come from the recorded style state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Anchor point; `y` is the alphabetic baseline.
    pub at: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, at: Vec2) {
        self.push(DrawCmd::FillText(TextCmd { text: text.into(), at }));
    }
}
