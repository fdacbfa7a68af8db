//! Wall-clock sampling in a configured timezone.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};

use crate::zone::Zone;

/// Local time of day in one zone, read for a single frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimeSample {
    /// 0–23
    pub hour: u32,
    /// 0–59
    pub minute: u32,
    /// 0–59; a leap second reads as 59.
    pub second: u32,
}

impl TimeSample {
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    pub fn from_time<T: Timelike>(t: &T) -> Self {
        Self::new(t.hour(), t.minute(), t.second().min(59))
    }

    /// Afternoon and evening: the boundary is exactly 12:00.
    #[inline]
    pub fn is_pm(self) -> bool {
        self.hour >= 12
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Resolves "now" in a named zone.
///
/// Implementations must read the clock on every call; renderers rely on that
/// to never show a stale frame.
pub trait TimeSource {
    fn sample(&self, zone: Zone) -> TimeSample;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn sample(&self, zone: Zone) -> TimeSample {
        (**self).sample(zone)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn sample(&self, zone: Zone) -> TimeSample {
        (**self).sample(zone)
    }
}

/// The system clock, converted with the tz database from `chrono-tz`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn sample(&self, zone: Zone) -> TimeSample {
        TimeSample::from_time(&Utc::now().with_timezone(&zone.tz()))
    }
}

/// A clock frozen at one instant. Still timezone-aware, so the same instant
/// reads differently per zone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    #[inline]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl TimeSource for FixedClock {
    fn sample(&self, zone: Zone) -> TimeSample {
        TimeSample::from_time(&self.instant.with_timezone(&zone.tz()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap()
    }

    #[test]
    fn fixed_clock_converts_per_zone() {
        // 2024-01-15 12:30:15 UTC, no DST anywhere involved.
        let clock = FixedClock::new(utc(2024, 1, 15, 12, 30, 15));
        assert_eq!(clock.sample(Zone::Paris), TimeSample::new(13, 30, 15));
        assert_eq!(clock.sample(Zone::NewYork), TimeSample::new(7, 30, 15));
        assert_eq!(clock.sample(Zone::Shanghai), TimeSample::new(20, 30, 15));
        assert_eq!(clock.sample(Zone::Tokyo), TimeSample::new(21, 30, 15));
    }

    #[test]
    fn fixed_clock_follows_dst() {
        // Paris is UTC+2 in July.
        let clock = FixedClock::new(utc(2024, 7, 1, 12, 0, 0));
        assert_eq!(clock.sample(Zone::Paris).hour, 14);
    }

    #[test]
    fn local_wall_time_round_trip() {
        let local = chrono_tz::Asia::Tokyo
            .with_ymd_and_hms(2024, 3, 10, 23, 59, 59)
            .single()
            .unwrap();
        let clock = FixedClock::new(local.with_timezone(&Utc));
        assert_eq!(clock.sample(Zone::Tokyo), TimeSample::new(23, 59, 59));
    }

    #[test]
    fn pm_boundary_is_noon() {
        assert!(!TimeSample::new(11, 59, 59).is_pm());
        assert!(TimeSample::new(12, 0, 0).is_pm());
        assert!(!TimeSample::new(0, 0, 0).is_pm());
    }

    #[test]
    fn system_clock_is_in_range() {
        let s = SystemClock.sample(Zone::Tokyo);
        assert!(s.hour < 24 && s.minute < 60 && s.second < 60);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeSample::new(7, 5, 0).to_string(), "07:05:00");
    }

    #[test]
    fn boxed_source_delegates() {
        let boxed: Box<dyn TimeSource> = Box::new(FixedClock::new(utc(2024, 1, 15, 0, 0, 0)));
        assert_eq!(boxed.sample(Zone::Tokyo), TimeSample::new(9, 0, 0));
    }
}
