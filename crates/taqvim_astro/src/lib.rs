//! Low-precision solar astronomy for calendar work.
//!
//! This crate provides:
//! - Solar position: mean/true/apparent longitude, radius vector, RA/Dec
//! - Equinox and solstice instants (Meeus chapter 27, one-shot)
//! - Delta-T (TT - UT) from a 1620-2000 table with polynomial extrapolation
//! - Equation of time
//!
//! Obliquity, nutation and the ecliptic-to-equatorial rotation come from
//! `taqvim_frames` and are re-exported here.

pub mod constants;
pub mod delta_t;
pub mod equation_of_time;
pub mod equinox;
pub mod sun;
pub mod util;

pub use constants::{ASTRONOMICAL_UNIT_KM, TROPICAL_YEAR_DAYS};
pub use delta_t::{delta_t, delta_t_days, tt_to_ut_jd};
pub use equation_of_time::equation_of_time;
pub use equinox::{ALL_SEASONS, Season, equinox_or_solstice, seasons_of_year};
pub use sun::{SolarPosition, solar_position};
pub use taqvim_frames::{
    EquatorialCoords, OBLIQUITY_J2000_DEG, ecliptic_to_equatorial, nutation_deg,
    obliquity_of_ecliptic_deg,
};
pub use util::{fix_angle_rad, normalize_360};
