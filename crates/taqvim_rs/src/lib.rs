//! Convenience facade for the taqvim calendar workspace.
//!
//! This crate provides:
//! - [`DualCalendarDate`], a civil timestamp kept in step with its Persian date
//! - Text-level helpers: [`parse_date`], [`convert_text`], [`find_weekday`]
//! - [`season_ut`] for equinox and solstice instants in UT
//! - Re-exports of the calendar, clock and astronomy crates, so callers only
//!   need `use taqvim_rs::*`
//!
//! # Quick start
//!
//! ```rust,ignore
//! use taqvim_rs::*;
//!
//! let g = convert_text("1403-01-01", CalendarId::Persian, CalendarId::Gregorian)?;
//! assert_eq!(g.to_string(), "2024-03-20");
//!
//! let mut d = DualCalendarDate::from_persian(1403, 11, 1);
//! d.set_month(12);
//! assert_eq!((d.year(), d.month()), (1404, 0));
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod input;

pub use convenience::{
    SearchMode, convert_text, find_weekday, find_weekday_named, jd_of_text, parse_date,
    season_ut,
};
pub use date::DualCalendarDate;
pub use error::TaqvimError;
pub use input::CivilInput;

pub use taqvim_astro::{
    ALL_SEASONS, EquatorialCoords, Season, SolarPosition, delta_t, delta_t_days,
    equation_of_time, equinox_or_solstice, nutation_deg, obliquity_of_ecliptic_deg,
    seasons_of_year, solar_position, tt_to_ut_jd,
};
pub use taqvim_calendar::{
    ALL_CALENDARS, Calendar, CalendarDate, CalendarError, CalendarId, convert, days_in_month,
    from_jd, is_leap_year, is_valid, to_jd,
};
pub use taqvim_time::{
    ALL_WEEKDAYS, TimeError, TimeOfDay, Weekday, civil_day_boundary, time_of_day, weekday_of,
};
