//! Calendar adapters converting dates to and from Julian Day.
//!
//! This crate provides:
//! - The [`Calendar`] trait and [`CalendarId`] dispatch
//! - Proleptic Gregorian calendar
//! - Persian (Jalali) arithmetic calendar, 2820-year cycle
//! - Hebrew lunisolar calendar with postponement rules
//! - ISO 8601 week-date calendar
//!
//! All conversions are total over finite inputs and round-trip for every
//! valid date.

pub mod calendar;
pub mod error;
pub mod gregorian;
pub mod hebrew;
pub mod iso_week;
pub mod persian;
pub mod types;

pub use calendar::{Calendar, convert, days_in_month, from_jd, is_leap_year, is_valid, to_jd};
pub use error::CalendarError;
pub use gregorian::{GREGORIAN_EPOCH, Gregorian, J0000};
pub use hebrew::{HEBREW_EPOCH, Hebrew, HebrewYear};
pub use iso_week::{IsoWeek, jd_to_week_date, week_date_to_jd, weeks_in_year};
pub use persian::{PERSIAN_EPOCH, Persian};
pub use types::{ALL_CALENDARS, CalendarDate, CalendarId};
