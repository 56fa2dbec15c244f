//! Calendar-agnostic date value and calendar identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A date in some calendar: `{year, month, day}`, month and day 1-based.
///
/// For the ISO week-date calendar `month` holds the week number and `day`
/// the ISO weekday (1 = Monday .. 7 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` or `YYYY-Www-D`, with an optional leading `-`
    /// on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::MalformedDate(s.to_string());
        let text = s.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let magnitude = parse_digits(y).ok_or_else(malformed)?;
        let signed = if negative { -magnitude } else { magnitude };
        let year = i32::try_from(signed).map_err(|_| CalendarError::FieldOutOfRange {
            field: "year",
            value: signed,
        })?;

        let (month_field, month_max, month_text, day_field, day_max) =
            match m.strip_prefix(['W', 'w']) {
                Some(week) => ("week", 53, week, "weekday", 7),
                None => ("month", 13, m, "day", 31),
            };
        let month = parse_digits(month_text).ok_or_else(malformed)?;
        let day = parse_digits(d).ok_or_else(malformed)?;
        let month = check_range(month_field, month, month_max)?;
        let day = check_range(day_field, day, day_max)?;

        Ok(Self { year, month, day })
    }
}

fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn check_range(field: &'static str, value: i64, max: i64) -> Result<u32, CalendarError> {
    if (1..=max).contains(&value) {
        Ok(value as u32)
    } else {
        Err(CalendarError::FieldOutOfRange { field, value })
    }
}

/// Identifier of a supported calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarId {
    Gregorian,
    Persian,
    Hebrew,
    IsoWeek,
}

/// All supported calendars.
pub const ALL_CALENDARS: [CalendarId; 4] = [
    CalendarId::Gregorian,
    CalendarId::Persian,
    CalendarId::Hebrew,
    CalendarId::IsoWeek,
];

impl CalendarId {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Persian => "persian",
            Self::Hebrew => "hebrew",
            Self::IsoWeek => "iso-week",
        }
    }

    /// Render a date the way this calendar writes it.
    pub fn format(self, date: CalendarDate) -> String {
        match self {
            Self::IsoWeek => {
                let sign = if date.year < 0 { "-" } else { "" };
                format!(
                    "{sign}{:04}-W{:02}-{}",
                    date.year.unsigned_abs(),
                    date.month,
                    date.day
                )
            }
            _ => date.to_string(),
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "persian" | "jalali" => Ok(Self::Persian),
            "hebrew" => Ok(Self::Hebrew),
            "iso" | "iso-week" => Ok(Self::IsoWeek),
            _ => Err(CalendarError::UnknownCalendar(s.to_string())),
        }
    }
}
