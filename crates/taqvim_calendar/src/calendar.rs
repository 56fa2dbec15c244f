//! The `Calendar` trait and dispatch by [`CalendarId`].

use crate::gregorian::Gregorian;
use crate::hebrew::Hebrew;
use crate::iso_week::IsoWeek;
use crate::persian::Persian;
use crate::types::{CalendarDate, CalendarId};

/// A calendar that converts to and from Julian Day.
///
/// `from_jd` reports the civil day containing `jd` (days start at
/// midnight, JD `n + 0.5`); `to_jd` returns that midnight. For every valid
/// date inside the civil-day range `from_jd(to_jd(d)) == d`.
///
/// `from_jd` is total: day numbers outside
/// [`MIN_CIVIL_DAY`](taqvim_time::MIN_CIVIL_DAY)..=[`MAX_CIVIL_DAY`](taqvim_time::MAX_CIVIL_DAY)
/// clamp to the nearest bound, and NaN maps to day 0.
pub trait Calendar {
    /// Identifier of this calendar.
    fn id(&self) -> CalendarId;

    /// JD of civil midnight starting `date`.
    fn to_jd(&self, date: CalendarDate) -> f64;

    /// Date of the civil day containing `jd`.
    fn from_jd(&self, jd: f64) -> CalendarDate;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Days in `month` of `year`, or 0 when the month does not exist.
    fn days_in_month(&self, year: i32, month: u32) -> u32;

    fn months_in_year(&self, year: i32) -> u32;

    fn days_in_year(&self, year: i32) -> u32;

    /// Whether every field of `date` lies inside this calendar.
    fn is_valid(&self, date: CalendarDate) -> bool {
        (1..=self.months_in_year(date.year)).contains(&date.month)
            && (1..=self.days_in_month(date.year, date.month)).contains(&date.day)
    }
}

impl CalendarId {
    /// The adapter implementing this calendar.
    pub fn calendar(self) -> &'static dyn Calendar {
        match self {
            Self::Gregorian => &Gregorian,
            Self::Persian => &Persian,
            Self::Hebrew => &Hebrew,
            Self::IsoWeek => &IsoWeek,
        }
    }
}

/// Narrow a computed year to `i32`, saturating at the bounds.
///
/// Years derived from clamped day numbers always fit; the saturation only
/// guards callers that pass unclamped counts.
pub(crate) fn saturating_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// JD of civil midnight starting `date` in `calendar`.
pub fn to_jd(calendar: CalendarId, date: CalendarDate) -> f64 {
    calendar.calendar().to_jd(date)
}

/// Date in `calendar` of the civil day containing `jd`.
pub fn from_jd(calendar: CalendarId, jd: f64) -> CalendarDate {
    calendar.calendar().from_jd(jd)
}

pub fn is_leap_year(calendar: CalendarId, year: i32) -> bool {
    calendar.calendar().is_leap_year(year)
}

/// Days in `month` of `year`, or 0 when the month does not exist.
pub fn days_in_month(calendar: CalendarId, year: i32, month: u32) -> u32 {
    calendar.calendar().days_in_month(year, month)
}

pub fn is_valid(calendar: CalendarId, date: CalendarDate) -> bool {
    calendar.calendar().is_valid(date)
}

/// Re-express `date` from one calendar in another.
pub fn convert(from: CalendarId, to: CalendarId, date: CalendarDate) -> CalendarDate {
    from_jd(to, to_jd(from, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_CALENDARS;

    #[test]
    fn dispatch_reports_matching_id() {
        for id in ALL_CALENDARS {
            assert_eq!(id.calendar().id(), id);
        }
    }

    #[test]
    fn convert_nowruz_to_gregorian() {
        let g = convert(
            CalendarId::Persian,
            CalendarId::Gregorian,
            CalendarDate::new(1403, 1, 1),
        );
        assert_eq!(g, CalendarDate::new(2024, 3, 20));
    }

    #[test]
    fn convert_identity() {
        let d = CalendarDate::new(2024, 2, 29);
        assert_eq!(convert(CalendarId::Gregorian, CalendarId::Gregorian, d), d);
    }

    #[test]
    fn default_validity_checks_fields() {
        assert!(is_valid(CalendarId::Gregorian, CalendarDate::new(2024, 2, 29)));
        assert!(!is_valid(CalendarId::Gregorian, CalendarDate::new(2023, 2, 29)));
        assert!(!is_valid(CalendarId::Gregorian, CalendarDate::new(2023, 13, 1)));
        assert!(!is_valid(CalendarId::Hebrew, CalendarDate::new(5784, 14, 1)));
    }
}
