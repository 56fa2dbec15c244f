//! ISO 8601 week-date calendar.
//!
//! Week 1 is the week (Monday to Sunday) containing the year's first
//! Thursday, equivalently the week containing 4 January. Years have 52 or
//! 53 weeks. In [`CalendarDate`] the `month` slot carries the week and
//! `day` the ISO weekday.

use taqvim_time::{
    Weekday, civil_day_number, clamp_civil_day, jd_from_day_number, nth_weekday, weekday_of,
};

use crate::calendar::Calendar;
use crate::gregorian::Gregorian;
use crate::types::{CalendarDate, CalendarId};

/// JD of civil midnight starting `day` (1 = Monday) of `week` in `year`.
pub fn week_date_to_jd(year: i32, week: u32, day: u32) -> f64 {
    // Sunday before week 1 is found from 28 December, always in the last week
    let anchor = Gregorian.to_jd(CalendarDate::new(year - 1, 12, 28));
    f64::from(day) + nth_weekday(Weekday::Sunday, anchor, week as i32)
}

/// Weeks in an ISO year: 52, or 53 for a long year.
pub fn weeks_in_year(year: i32) -> u32 {
    let days = week_date_to_jd(year + 1, 1, 1) - week_date_to_jd(year, 1, 1);
    (days / 7.0) as u32
}

/// ISO week date of the civil day containing `jd`, clamped into the
/// civil-day range.
pub fn jd_to_week_date(jd: f64) -> CalendarDate {
    let jd = jd_from_day_number(clamp_civil_day(civil_day_number(jd)));
    let mut year = Gregorian.from_jd(jd - 3.0).year;
    if jd >= week_date_to_jd(year + 1, 1, 1) {
        year += 1;
    }
    let week = ((jd - week_date_to_jd(year, 1, 1)) / 7.0).floor() as u32 + 1;
    let day = match weekday_of(jd) {
        0 => 7,
        n => n,
    };
    CalendarDate::new(year, week, day)
}

/// ISO week-date calendar adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoWeek;

impl Calendar for IsoWeek {
    fn id(&self) -> CalendarId {
        CalendarId::IsoWeek
    }

    fn to_jd(&self, date: CalendarDate) -> f64 {
        week_date_to_jd(date.year, date.month, date.day)
    }

    fn from_jd(&self, jd: f64) -> CalendarDate {
        jd_to_week_date(jd)
    }

    /// Long year: 53 weeks.
    fn is_leap_year(&self, year: i32) -> bool {
        weeks_in_year(year) == 53
    }

    /// Seven for every week of `year`, 0 for a week it does not have.
    fn days_in_month(&self, year: i32, week: u32) -> u32 {
        if (1..=weeks_in_year(year)).contains(&week) {
            7
        } else {
            0
        }
    }

    fn months_in_year(&self, year: i32) -> u32 {
        weeks_in_year(year)
    }

    fn days_in_year(&self, year: i32) -> u32 {
        weeks_in_year(year) * 7
    }
}
