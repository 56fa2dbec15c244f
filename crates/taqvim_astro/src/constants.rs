//! Astronomical constants.

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_198_78;

/// Astronomical unit in kilometres.
pub const ASTRONOMICAL_UNIT_KM: f64 = 149_597_870.0;
