//! Persian (Jalali) arithmetic calendar.
//!
//! Uses the 2820-year grand cycle: 683 leap years placed by modular
//! arithmetic on the year's offset within the cycle. Years count from 1
//! with no year 0; the year before 1 is -1.

use taqvim_time::{civil_day_number, clamp_civil_day, jd_from_day_number};

use crate::calendar::{Calendar, saturating_year};
use crate::types::{CalendarDate, CalendarId};

/// JD of 1 Farvardin 1.
pub const PERSIAN_EPOCH: f64 = 1_948_320.5;

const EPOCH_DAY: i64 = 1_948_320;
const GRAND_CYCLE_YEARS: i64 = 2820;
const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Offset of `year` from the cycle origin; positive years count from 474.
fn cycle_base(year: i32) -> i64 {
    i64::from(year) - if year > 0 { 474 } else { 473 }
}

/// Persian leap-year rule.
pub fn is_leap(year: i32) -> bool {
    let in_cycle = cycle_base(year).rem_euclid(GRAND_CYCLE_YEARS);
    ((in_cycle + 474 + 38) * 682).rem_euclid(2816) < 682
}

/// Civil day number of a Persian date.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let base = cycle_base(year);
    let ep_year = 474 + base.rem_euclid(GRAND_CYCLE_YEARS);
    let m = i64::from(month);
    let month_days = if m <= 7 { (m - 1) * 31 } else { (m - 1) * 30 + 6 };

    i64::from(day)
        + month_days
        + (ep_year * 682 - 110).div_euclid(2816)
        + (ep_year - 1) * 365
        + base.div_euclid(GRAND_CYCLE_YEARS) * GRAND_CYCLE_DAYS
        + (EPOCH_DAY - 1)
}

/// Persian date of a civil day number, clamped into the civil-day range.
pub fn from_day_number(dn: i64) -> CalendarDate {
    let dn = clamp_civil_day(dn);
    let de = dn - day_number(475, 1, 1);
    let cycle = de.div_euclid(GRAND_CYCLE_DAYS);
    let cyear = de.rem_euclid(GRAND_CYCLE_DAYS);

    let ycycle = if cyear == GRAND_CYCLE_DAYS - 1 {
        GRAND_CYCLE_YEARS
    } else {
        let aux1 = cyear / 366;
        let aux2 = cyear % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };

    let mut year = ycycle + GRAND_CYCLE_YEARS * cycle + 474;
    if year <= 0 {
        year -= 1;
    }
    let year = saturating_year(year);

    let yday = dn - day_number(year, 1, 1) + 1;
    let month = if yday <= 186 {
        (yday + 30) / 31
    } else {
        (yday - 6 + 29) / 30
    };
    let day = dn - day_number(year, month as u32, 1) + 1;

    CalendarDate::new(year, month as u32, day as u32)
}

/// Days in a Persian month, 0 for a month outside 1..=12.
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Persian (Jalali) calendar adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Persian;

impl Calendar for Persian {
    fn id(&self) -> CalendarId {
        CalendarId::Persian
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

    fn is_valid(&self, date: CalendarDate) -> bool {
        date.year != 0
            && (1..=12).contains(&date.month)
            && (1..=month_length(date.year, date.month)).contains(&date.day)
    }
}
