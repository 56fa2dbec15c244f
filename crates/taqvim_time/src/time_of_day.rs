//! Civil time of day carried by the fractional part of a Julian Day.

use crate::julian::SECONDS_PER_DAY;

/// Civil time of day, rounded to the nearest second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Seconds elapsed since civil midnight.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Fraction of the civil day elapsed, in `[0, 1]`.
    pub fn day_fraction(&self) -> f64 {
        f64::from(self.seconds_since_midnight()) / SECONDS_PER_DAY
    }
}

/// Time of day of a Julian Day, measured from civil midnight.
///
/// Rounds to the nearest second, so an instant within half a second of the
/// next midnight reads as `24:00:00`.
pub fn time_of_day(jd: f64) -> TimeOfDay {
    let civil = jd + 0.5;
    let total = (civil - civil.floor()) * SECONDS_PER_DAY + 0.5;
    TimeOfDay {
        hour: (total / 3600.0).floor() as u32,
        minute: ((total / 60.0) % 60.0).floor() as u32,
        second: (total % 60.0).floor() as u32,
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
