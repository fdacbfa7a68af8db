//! Scene (recorded draw stream) types.
//!
//! Responsibilities:
//! - record every `Canvas2d` call as a renderer-agnostic `DrawCmd`
//! - preserve call order exactly, so two identical frames compare equal
//! - keep payload-specific helpers isolated under `scene::shapes`

mod cmd;
mod list;
mod surface;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{ArcCmd, TextCmd};
pub use surface::RecordingSurface;
