//! Weekday enumeration and weekday search over Julian Days.
//!
//! All searches reduce to [`weekday_before`]: the requested weekday within
//! the seven civil days ending on a given JD. The named conveniences only
//! choose the direction and offset that move that window.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::weekday_of;

/// Day of the week, numbered from Sunday = 0 as returned by [`weekday_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in order (index 0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const ENGLISH_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const PERSIAN_NAMES: [&str; 7] = [
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
    "Shanbeh",
];

impl Weekday {
    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u32 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Weekday for an index, taken modulo 7.
    pub const fn from_index(index: u32) -> Self {
        ALL_WEEKDAYS[(index % 7) as usize]
    }

    /// Weekday of the civil day containing `jd`.
    pub fn of_jd(jd: f64) -> Self {
        Self::from_index(weekday_of(jd))
    }

    /// ISO 8601 weekday number (Monday=1 .. Sunday=7).
    pub const fn iso_number(self) -> u32 {
        match self {
            Self::Sunday => 7,
            other => other.index(),
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }

    /// Transliterated Persian name.
    pub fn persian_name(self) -> &'static str {
        PERSIAN_NAMES[self.index() as usize]
    }
}

impl FromStr for Weekday {
    type Err = TimeError;

    /// Accepts English names, three-letter abbreviations, Persian names
    /// (case-insensitive) or an index `0..=6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Ok(index) = needle.parse::<u32>() {
            if index < 7 {
                return Ok(Self::from_index(index));
            }
            return Err(TimeError::UnknownWeekday(s.to_string()));
        }
        ALL_WEEKDAYS
            .iter()
            .copied()
            .find(|w| {
                let english = w.name().to_lowercase();
                english == needle
                    || english[..3] == needle
                    || w.persian_name().to_lowercase() == needle
            })
            .ok_or_else(|| TimeError::UnknownWeekday(s.to_string()))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// JD of `weekday` within the seven civil days ending on `jd`.
///
/// The fractional part of `jd` is kept: the result is `jd` shifted back by
/// whole days.
pub fn weekday_before(weekday: Weekday, jd: f64) -> f64 {
    jd - f64::from(weekday_of(jd - f64::from(weekday.index())))
}

/// JD of `weekday` in the window ending at `jd + direction * offset`.
///
/// `direction` is `1.0` to search forward and `-1.0` to search backward.
pub fn search_weekday(weekday: Weekday, jd: f64, direction: f64, offset: f64) -> f64 {
    weekday_before(weekday, jd + direction * offset)
}

/// Closest `weekday` to `jd`, at most three days away.
pub fn nearest_weekday(weekday: Weekday, jd: f64) -> f64 {
    search_weekday(weekday, jd, 1.0, 3.0)
}

/// First `weekday` strictly after `jd`.
pub fn next_weekday(weekday: Weekday, jd: f64) -> f64 {
    search_weekday(weekday, jd, 1.0, 7.0)
}

/// `jd` itself if it falls on `weekday`, otherwise the next one.
pub fn next_or_current_weekday(weekday: Weekday, jd: f64) -> f64 {
    search_weekday(weekday, jd, 1.0, 6.0)
}

/// Last `weekday` strictly before `jd`.
pub fn previous_weekday(weekday: Weekday, jd: f64) -> f64 {
    search_weekday(weekday, jd, -1.0, 1.0)
}

/// `jd` itself if it falls on `weekday`, otherwise the previous one.
pub fn previous_or_current_weekday(weekday: Weekday, jd: f64) -> f64 {
    search_weekday(weekday, jd, 1.0, 0.0)
}

/// The `weekday` lying `n` weeks from `jd`.
///
/// For `n > 0` counting starts at the previous `weekday` before `jd`, so
/// `n = 1` is the first `weekday` on or after `jd`. For `n <= 0` counting
/// starts at the next `weekday` after `jd`.
pub fn nth_weekday(weekday: Weekday, jd: f64, n: i32) -> f64 {
    let weeks = 7.0 * f64::from(n);
    if n > 0 {
        weeks + previous_weekday(weekday, jd)
    } else {
        weeks + next_weekday(weekday, jd)
    }
}
