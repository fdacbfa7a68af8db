//! Frame pacing for host loops.
//!
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `wait()` once per frame to sleep until it is due and obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, MAX_FRAME_INTERVAL};
