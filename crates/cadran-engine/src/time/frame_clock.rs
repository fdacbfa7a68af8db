use std::time::{Duration, Instant};

/// Longest interval `with_rate` produces.
pub const MAX_FRAME_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds. Zero on the first frame.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Paces a host loop to a fixed frame interval.
///
/// `FrameClock` only tracks when the next frame is due; it never caches
/// wall-clock time for the things being drawn.
///
/// Deadlines advance by whole intervals from the first frame, so a slow frame
/// does not shift every later frame. When a frame overruns by more than one
/// interval the schedule is rebased on the late frame instead of bursting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last: Option<Instant>,
    deadline: Option<Instant>,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock targeting one frame per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None, deadline: None, frame_index: 0 }
    }

    /// Creates a clock targeting `fps` frames per second. Non-positive rates
    /// disable pacing; rates too slow to represent cap at
    /// [`MAX_FRAME_INTERVAL`].
    pub fn with_rate(fps: f32) -> Self {
        let interval = if fps.is_finite() && fps > 0.0 {
            Duration::try_from_secs_f32(1.0 / fps)
                .map_or(MAX_FRAME_INTERVAL, |d| d.min(MAX_FRAME_INTERVAL))
        } else {
            Duration::ZERO
        };
        Self::new(interval)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next frame is due, as seen from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.map_or(Duration::ZERO, |d| d.saturating_duration_since(now))
    }

    /// Blocks until the next frame is due, then ticks.
    pub fn wait(&mut self) -> FrameTime {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.tick_at(Instant::now())
    }

    /// Advances the clock at `now` without sleeping.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = self.last.map_or(Duration::ZERO, |last| now.saturating_duration_since(last));

        // An unrepresentable deadline leaves the next frame unpaced.
        self.deadline = match self.deadline {
            Some(d) if now.saturating_duration_since(d) < self.interval => {
                d.checked_add(self.interval)
            }
            _ => now.checked_add(self.interval),
        };
        self.last = Some(now);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    /// One frame per second: the finest resolution a clock face shows.
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
