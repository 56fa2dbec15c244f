//! A date held simultaneously as a civil (Gregorian) timestamp and a
//! Persian calendar date.
//!
//! The civil timestamp is authoritative. Persian fields are re-derived from
//! it after every mutation; Persian setters convert their fields to a civil
//! midnight first and then re-derive, so both sides always name the same
//! civil day.
//!
//! When a timestamp is stored its hour is moved off midnight: an hour after
//! 12 is advanced by two hours, any other hour becomes 02 (minutes and
//! seconds are kept). This happens once per store; reads never move the
//! timestamp, and storing the timestamp already held is a no-op.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use taqvim_calendar::{Calendar, CalendarDate, Gregorian, Persian};
use taqvim_time::{SECONDS_PER_DAY, Weekday};

use crate::error::TaqvimError;
use crate::input::CivilInput;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Civil timestamp plus the Persian date of its civil day.
///
/// Persian months are 0-based in this API (0 = Farvardin .. 11 = Esfand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DualCalendarDate {
    // declared first so the derived ordering is by civil timestamp
    civil: NaiveDateTime,
    persian: CalendarDate,
}

impl DualCalendarDate {
    /// Build from any civil input, substituting the current time when the
    /// input cannot be interpreted.
    pub fn new(input: impl Into<CivilInput>) -> Self {
        Self::try_new(input).unwrap_or_else(|err| {
            tracing::warn!(%err, "unparseable civil input, using current time");
            Self::now()
        })
    }

    /// Strict variant of [`new`](Self::new) that reports bad input.
    ///
    /// A [`CivilInput::Dual`] is copied as is; its timestamp was already
    /// moved off midnight when first stored.
    pub fn try_new(input: impl Into<CivilInput>) -> Result<Self, TaqvimError> {
        match input.into() {
            CivilInput::Dual(dual) => Ok(dual),
            other => Ok(Self::from_civil(other.resolve()?)),
        }
    }

    /// Parse civil timestamp text, reporting failure instead of
    /// substituting the current time.
    pub fn try_parse(text: &str) -> Result<Self, TaqvimError> {
        Self::try_new(text)
    }

    /// The current local civil time.
    pub fn now() -> Self {
        Self::from_civil(Local::now().naive_local())
    }

    /// Build from Persian fields. `month` is 0-based and may lie outside
    /// 0..=11 (carrying into the year); `day` may exceed the month length
    /// (spilling into following days).
    pub fn from_persian(year: i32, month: i32, day: i32) -> Self {
        match persian_to_civil(year, month, day) {
            Some(civil) => Self::from_civil(civil),
            None => {
                tracing::warn!(
                    year,
                    month,
                    day,
                    "persian date outside civil range, using current time"
                );
                Self::now()
            }
        }
    }

    fn from_civil(civil: NaiveDateTime) -> Self {
        let civil = move_off_midnight(civil);
        Self {
            civil,
            persian: persian_of(civil.date()),
        }
    }

    fn store(&mut self, civil: NaiveDateTime) {
        *self = Self::from_civil(civil);
    }

    fn store_persian(&mut self, year: i32, month: i32, day: i32) {
        match persian_to_civil(year, month, day) {
            Some(civil) => self.store(civil),
            None => {
                tracing::warn!(year, month, day, "persian date outside civil range, unchanged")
            }
        }
    }

    /// Persian year.
    pub fn year(&self) -> i32 {
        self.persian.year
    }

    /// Persian month, 0-based.
    pub fn month(&self) -> u32 {
        self.persian.month - 1
    }

    /// Persian day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.persian.day
    }

    /// Persian date with a 1-based month.
    pub fn persian_date(&self) -> CalendarDate {
        self.persian
    }

    /// Gregorian date of the civil timestamp, 1-based month.
    pub fn gregorian_date(&self) -> CalendarDate {
        let d = self.civil.date();
        CalendarDate::new(d.year(), d.month(), d.day())
    }

    pub fn set_year(&mut self, year: i32) {
        self.store_persian(year, self.month() as i32, self.day() as i32);
    }

    /// Set the 0-based Persian month; out-of-range values carry into the
    /// year.
    pub fn set_month(&mut self, month: i32) {
        self.store_persian(self.year(), month, self.day() as i32);
    }

    /// Set the Persian day of month; values past the month end spill
    /// forward.
    pub fn set_date(&mut self, day: i32) {
        self.store_persian(self.year(), self.month() as i32, day);
    }

    /// Set all three Persian fields at once.
    pub fn set_persian_date(&mut self, year: i32, month: i32, day: i32) {
        self.store_persian(year, month, day);
    }

    /// Replace the civil date with a Gregorian one (0-based month, carrying
    /// and spilling like the Persian setters).
    pub fn set_gregorian_date(&mut self, year: i32, month: i32, day: i32) {
        let year = year + month.div_euclid(12);
        let first = CalendarDate::new(year, month.rem_euclid(12) as u32 + 1, 1);
        let jd = Gregorian.to_jd(first) + f64::from(day) - 1.0;
        match civil_midnight(Gregorian.from_jd(jd)) {
            Some(civil) => self.store(civil),
            None => {
                tracing::warn!(year, month, day, "gregorian date outside civil range, unchanged")
            }
        }
    }

    /// Replace the civil timestamp, falling back to the current time when
    /// the input cannot be interpreted.
    ///
    /// Passing back the timestamp already held (for example the result of
    /// [`to_civil_timestamp`](Self::to_civil_timestamp)) leaves the date
    /// unchanged.
    pub fn set_civil_timestamp(&mut self, input: impl Into<CivilInput>) {
        let input = input.into();
        if input.resolve().is_ok_and(|civil| civil == self.civil) {
            return;
        }
        *self = Self::new(input);
    }

    /// Replace the civil timestamp with milliseconds since the Unix epoch.
    pub fn set_timestamp_millis(&mut self, millis: i64) {
        self.set_civil_timestamp(millis);
    }

    /// The stored civil timestamp.
    pub fn to_civil_timestamp(&self) -> NaiveDateTime {
        self.civil
    }

    /// Weekday of the civil day.
    pub fn weekday(&self) -> Weekday {
        Weekday::of_jd(self.julian_day())
    }

    /// `(hour, minute, second)` of the civil timestamp.
    pub fn time_of_day_components(&self) -> (u32, u32, u32) {
        (self.civil.hour(), self.civil.minute(), self.civil.second())
    }

    /// Civil timestamp as milliseconds since the Unix epoch, read as UTC.
    pub fn timestamp_millis(&self) -> i64 {
        self.civil.and_utc().timestamp_millis()
    }

    /// Whole days since 1970-01-01.
    pub fn days_since_unix_epoch(&self) -> i64 {
        self.timestamp_millis().div_euclid(MILLIS_PER_DAY)
    }

    /// Persian year modulo 100.
    pub fn two_digit_year(&self) -> i32 {
        self.year() % 100
    }

    /// Whether the Persian year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        Persian.is_leap_year(self.year())
    }

    /// Length of the current Persian month.
    pub fn days_in_month(&self) -> u32 {
        Persian.days_in_month(self.year(), self.persian.month)
    }

    /// Julian Day of the civil timestamp, including time of day.
    pub fn julian_day(&self) -> f64 {
        Gregorian.to_jd(self.gregorian_date())
            + f64::from(self.civil.num_seconds_from_midnight()) / SECONDS_PER_DAY
    }
}

impl Default for DualCalendarDate {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for DualCalendarDate {
    /// `YYYY/MM/DD` in the Persian calendar, 1-based month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02}",
            self.persian.year, self.persian.month, self.persian.day
        )
    }
}

fn move_off_midnight(civil: NaiveDateTime) -> NaiveDateTime {
    let hour = i64::from(civil.hour());
    let shift = if hour > 12 { 2 } else { 2 - hour };
    civil.checked_add_signed(TimeDelta::hours(shift)).unwrap_or(civil)
}

fn persian_of(date: NaiveDate) -> CalendarDate {
    let jd = Gregorian.to_jd(CalendarDate::new(date.year(), date.month(), date.day()));
    Persian.from_jd(jd)
}

fn civil_midnight(date: CalendarDate) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(date.year, date.month, date.day).map(|d| d.and_time(NaiveTime::MIN))
}

/// Civil midnight of Persian (`year`, 0-based `month`, `day`) after month
/// carry and day spill. Persian has no year 0; counting skips it, and a
/// `year` of 0 reads as 1.
fn persian_to_civil(year: i32, month: i32, day: i32) -> Option<NaiveDateTime> {
    let serial =
        i64::from(if year > 0 { year } else { year + 1 }) + i64::from(month.div_euclid(12));
    let year = i32::try_from(if serial > 0 { serial } else { serial - 1 }).ok()?;
    let first = CalendarDate::new(year, month.rem_euclid(12) as u32 + 1, 1);
    let jd = Persian.to_jd(first) + f64::from(day) - 1.0;
    civil_midnight(Gregorian.from_jd(jd))
}
