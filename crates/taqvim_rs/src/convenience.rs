//! Text-level helpers over the calendar, clock and astronomy crates.
//!
//! Each function takes user-facing input (date text, weekday names, a
//! search mode) and returns the facade error on bad input.

use std::fmt;
use std::str::FromStr;

use taqvim_astro::{Season, equinox_or_solstice, tt_to_ut_jd};
use taqvim_calendar::{CalendarDate, CalendarError, CalendarId, from_jd, is_valid, to_jd};
use taqvim_time::{
    Weekday, nearest_weekday, next_or_current_weekday, next_weekday, previous_or_current_weekday,
    previous_weekday,
};

use crate::error::TaqvimError;

/// Parse date text in `calendar` and check that the day exists.
///
/// ISO week-date text (`YYYY-Www-D`) is only accepted for
/// [`CalendarId::IsoWeek`].
pub fn parse_date(text: &str, calendar: CalendarId) -> Result<CalendarDate, TaqvimError> {
    let week_form = text.contains(['W', 'w']);
    if week_form != (calendar == CalendarId::IsoWeek) {
        return Err(CalendarError::MalformedDate(text.to_string()).into());
    }
    let date: CalendarDate = text.parse()?;
    if !is_valid(calendar, date) {
        return Err(TaqvimError::InvalidDate { calendar, date });
    }
    Ok(date)
}

/// Julian Day at civil midnight of a date given as text.
pub fn jd_of_text(text: &str, calendar: CalendarId) -> Result<f64, TaqvimError> {
    Ok(to_jd(calendar, parse_date(text, calendar)?))
}

/// Parse `text` in `from` and re-express it in `to`.
pub fn convert_text(
    text: &str,
    from: CalendarId,
    to: CalendarId,
) -> Result<CalendarDate, TaqvimError> {
    let jd = jd_of_text(text, from)?;
    Ok(from_jd(to, jd))
}

/// Equinox or solstice instant of `year` as a UT Julian Day.
///
/// Shorthand for `tt_to_ut_jd(equinox_or_solstice(year, season), year)`.
pub fn season_ut(year: i32, season: Season) -> f64 {
    tt_to_ut_jd(equinox_or_solstice(year, season), f64::from(year))
}

/// Direction rule for [`find_weekday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Nearest,
    Next,
    NextOrCurrent,
    Previous,
    PreviousOrCurrent,
}

impl SearchMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Next => "next",
            Self::NextOrCurrent => "next-or-current",
            Self::Previous => "previous",
            Self::PreviousOrCurrent => "previous-or-current",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "next" => Ok(Self::Next),
            "next-or-current" => Ok(Self::NextOrCurrent),
            "previous" => Ok(Self::Previous),
            "previous-or-current" => Ok(Self::PreviousOrCurrent),
            other => Err(format!("unknown search mode: {other}")),
        }
    }
}

/// JD of `weekday` relative to `jd` under `mode`.
pub fn find_weekday(weekday: Weekday, jd: f64, mode: SearchMode) -> f64 {
    match mode {
        SearchMode::Nearest => nearest_weekday(weekday, jd),
        SearchMode::Next => next_weekday(weekday, jd),
        SearchMode::NextOrCurrent => next_or_current_weekday(weekday, jd),
        SearchMode::Previous => previous_weekday(weekday, jd),
        SearchMode::PreviousOrCurrent => previous_or_current_weekday(weekday, jd),
    }
}

/// Parse a weekday name and search for it.
pub fn find_weekday_named(name: &str, jd: f64, mode: SearchMode) -> Result<f64, TaqvimError> {
    let weekday: Weekday = name.parse()?;
    Ok(find_weekday(weekday, jd, mode))
}
