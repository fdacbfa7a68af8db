//! Analog world clock.
//!
//! Given the current time in one of a handful of timezones and a few style
//! parameters, paints a clock face (outline, 60 ticks, three hands), a
//! sun/moon indicator and a country label onto any
//! [`cadran_engine::canvas::Surface`].
//!
//! Every frame is laid out from scratch: [`ClockFace::layout`] is a pure
//! function of viewport, params and time, and [`ClockRenderer`] samples the
//! clock on each call.

mod error;
mod renderer;
mod scene;
mod zone;

pub mod geometry;
pub mod layout;
pub mod params;
pub mod time;

pub use error::ClockError;
pub use layout::{ClockFace, DayNight};
pub use params::{controls, Control, ControlKind, FontName, ParamKey, RenderParams};
pub use renderer::{paint_face, render_at, ClockRenderer};
pub use scene::ClockScene;
pub use time::{FixedClock, SystemClock, TimeSample, TimeSource};
pub use zone::{country_label, Zone};
