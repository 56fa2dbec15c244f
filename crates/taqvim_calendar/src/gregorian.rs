//! Proleptic Gregorian calendar (astronomical year numbering, year 0 exists).

use taqvim_time::{civil_day_number, clamp_civil_day, jd_from_day_number};

use crate::calendar::{Calendar, saturating_year};
use crate::types::{CalendarDate, CalendarId};

/// JD of 0001-01-01.
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// JD of 0000-12-31, the day before [`GREGORIAN_EPOCH`].
///
/// Day numbers are counted from this midnight.
pub const J0000: f64 = 1_721_424.5;

const J0000_DAY: i64 = 1_721_424;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Gregorian leap-year rule.
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && !(year % 100 == 0 && year % 400 != 0)
}

/// Civil day number of a Gregorian date.
///
/// Month and day are taken arithmetically, so day 0 is the last day of the
/// previous month.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - 1;
    let m = i64::from(month);
    let march_adjust = if m <= 2 {
        0
    } else if is_leap(year) {
        -1
    } else {
        -2
    };
    J0000_DAY
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        + (367 * m - 362) / 12
        + march_adjust
        + i64::from(day)
}

/// Gregorian date of a civil day number, clamped into the civil-day range.
pub fn from_day_number(dn: i64) -> CalendarDate {
    let dn = clamp_civil_day(dn);
    let de = dn - (J0000_DAY + 1);
    let quadricent = de.div_euclid(DAYS_PER_400_YEARS);
    let dqc = de.rem_euclid(DAYS_PER_400_YEARS);
    let cent = dqc / DAYS_PER_100_YEARS;
    let dcent = dqc % DAYS_PER_100_YEARS;
    let quad = dcent / DAYS_PER_4_YEARS;
    let dquad = dcent % DAYS_PER_4_YEARS;
    let yindex = dquad / 365;

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // the last day of a leap cycle belongs to the year already counted
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    let year = saturating_year(year);

    let yearday = dn - day_number(year, 1, 1);
    let leap_adjust = if dn < day_number(year, 3, 1) {
        0
    } else if is_leap(year) {
        1
    } else {
        2
    };
    let month = ((yearday + leap_adjust) * 12 + 373) / 367;
    let day = dn - day_number(year, month as u32, 1) + 1;

    CalendarDate::new(year, month as u32, day as u32)
}

/// Days in a Gregorian month, 0 for a month outside 1..=12.
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Proleptic Gregorian calendar adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn id(&self) -> CalendarId {
        CalendarId::Gregorian
    }

    fn to_jd(&self, date: CalendarDate) -> f64 {
        jd_from_day_number(day_number(date.year, date.month, date.day))
    }

    fn from_jd(&self, jd: f64) -> CalendarDate {
        from_day_number(civil_day_number(jd))
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        month_length(year, month)
    }

    fn months_in_year(&self, _year: i32) -> u32 {
        12
    }

    fn days_in_year(&self, year: i32) -> u32 {
        if is_leap(year) { 366 } else { 365 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_civil_day() {
        assert_eq!(Gregorian.to_jd(CalendarDate::new(2000, 1, 1)), 2_451_544.5);
        assert_eq!(Gregorian.from_jd(2_451_545.0), CalendarDate::new(2000, 1, 1));
    }

    #[test]
    fn epochs() {
        assert_eq!(Gregorian.to_jd(CalendarDate::new(1, 1, 1)), GREGORIAN_EPOCH);
        assert_eq!(Gregorian.to_jd(CalendarDate::new(0, 12, 31)), J0000);
        assert_eq!(Gregorian.from_jd(J0000), CalendarDate::new(0, 12, 31));
        // year 0 is a leap year of 366 days
        assert_eq!(Gregorian.to_jd(CalendarDate::new(0, 1, 1)), J0000 - 365.0);
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert!(is_leap(0));
        assert!(is_leap(-4));
        assert!(!is_leap(-1));
    }

    #[test]
    fn ninety_seven_leaps_per_400_years() {
        let count = (1601..=2000).filter(|&y| is_leap(y)).count();
        assert_eq!(count, 97);
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(from_day_number(day_number(2000, 12, 31)), CalendarDate::new(2000, 12, 31));
        assert_eq!(from_day_number(day_number(2000, 12, 31) + 1), CalendarDate::new(2001, 1, 1));
        assert_eq!(from_day_number(day_number(2024, 2, 29)), CalendarDate::new(2024, 2, 29));
        assert_eq!(from_day_number(day_number(2024, 2, 29) + 1), CalendarDate::new(2024, 3, 1));
    }

    #[test]
    fn negative_years() {
        let d = CalendarDate::new(-100, 7, 4);
        assert_eq!(Gregorian.from_jd(Gregorian.to_jd(d)), d);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(month_length(2023, 2), 28);
        assert_eq!(month_length(2024, 2), 29);
        assert_eq!(month_length(2024, 4), 30);
        assert_eq!(month_length(2024, 0), 0);
        assert_eq!(month_length(2024, 13), 0);
    }
}
