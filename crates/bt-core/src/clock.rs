//! Time-of-day source and clock time values.

use std::fmt;

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::format::format_clock_time;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current time of day.
///
/// The calculator reads it at most once per call, and only while a session is
/// still open.
pub trait Clock {
    /// Current local time in seconds since midnight.
    fn seconds_since_midnight(&self) -> i64;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds_since_midnight(&self) -> i64 {
        i64::from(Local::now().num_seconds_from_midnight())
    }
}

/// Always reports the same time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn seconds_since_midnight(&self) -> i64 {
        self.0
    }
}

/// A time of day, wrapped into a single 24 hour period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i64);

impl ClockTime {
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs.rem_euclid(SECONDS_PER_DAY))
    }

    pub const fn seconds(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_clock_time(self.0))
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_value() {
        assert_eq!(FixedClock(31_201).seconds_since_midnight(), 31_201);
    }

    #[test]
    fn system_clock_is_within_a_day() {
        let now = SystemClock.seconds_since_midnight();
        assert!((0..SECONDS_PER_DAY).contains(&now));
    }

    #[test]
    fn clock_time_wraps_past_midnight() {
        assert_eq!(ClockTime::from_seconds(SECONDS_PER_DAY + 60).seconds(), 60);
        assert_eq!(ClockTime::from_seconds(-1).seconds(), SECONDS_PER_DAY - 1);
    }

    #[test]
    fn clock_time_displays_and_serializes_as_12_hour() {
        let exit = ClockTime::from_seconds(62_701);
        assert_eq!(exit.to_string(), "05:25:01 PM");
        assert_eq!(serde_json::to_string(&exit).unwrap(), "\"05:25:01 PM\"");
    }
}
