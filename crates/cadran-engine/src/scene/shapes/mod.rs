pub(crate) mod arc;
pub(crate) mod text;

pub use arc::ArcCmd;
pub use text::TextCmd;
