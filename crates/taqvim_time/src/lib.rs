//! Julian Day clock: the interchange format every calendar converts through.
//!
//! This crate provides:
//! - Julian Day constants and civil-day boundary handling
//! - Weekday of a Julian Day and weekday search (nearest/next/previous)
//! - Time-of-day decomposition of a fractional Julian Day
//! - Unix and Modified Julian Date conversions

pub mod error;
pub mod julian;
pub mod time_of_day;
pub mod weekday;

pub use error::TimeError;
pub use julian::{
    J2000_JD, JULIAN_CENTURY_DAYS, JULIAN_MILLENNIUM_DAYS, MAX_CIVIL_DAY, MIN_CIVIL_DAY,
    MJD_EPOCH_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, civil_day_boundary, civil_day_number,
    clamp_civil_day, jd_from_day_number, jd_to_centuries, jd_to_millennia, jd_to_mjd,
    jd_to_unix_seconds, mjd_to_jd, unix_seconds_to_jd, weekday_of,
};
pub use time_of_day::{TimeOfDay, time_of_day};
pub use weekday::{
    ALL_WEEKDAYS, Weekday, nearest_weekday, next_or_current_weekday, next_weekday,
    nth_weekday, previous_or_current_weekday, previous_weekday, search_weekday,
    weekday_before,
};
