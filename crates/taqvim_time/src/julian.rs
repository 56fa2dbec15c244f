//! Julian Day constants and civil-day arithmetic.
//!
//! A Julian Day (JD) counts days from noon, so a civil (midnight-based)
//! calendar day `n` begins at JD `n + 0.5`. Every calendar adapter goes
//! through [`civil_day_number`] when converting from JD so that the
//! half-day offset is applied in exactly one place.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

/// Days in a Julian millennium.
pub const JULIAN_MILLENNIUM_DAYS: f64 = 365_250.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of the Unix epoch, 1970-01-01 00:00.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the Modified Julian Date origin, 1858-11-17 00:00.
pub const MJD_EPOCH_JD: f64 = 2_400_000.5;

/// Day of week for a Julian Day, 0 = Sunday .. 6 = Saturday.
///
/// `floor(jd + 1.5) mod 7`. Non-finite input yields 0 (float-to-int casts
/// saturate); callers must reject NaN themselves.
pub fn weekday_of(jd: f64) -> u32 {
    (jd + 1.5).floor().rem_euclid(7.0) as u32
}

/// JD of the civil midnight that starts the day containing `jd`.
pub fn civil_day_boundary(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Integer number of the civil day containing `jd`.
///
/// Day `n` spans JD `[n + 0.5, n + 1.5)`.
pub fn civil_day_number(jd: f64) -> i64 {
    (jd - 0.5).floor() as i64
}

/// First civil day number the calendar adapters represent.
///
/// About 274 million years either side of the epoch, which keeps every
/// calendar's year inside `i32`. Day numbers outside
/// `MIN_CIVIL_DAY..=MAX_CIVIL_DAY` are clamped to the nearest bound.
pub const MIN_CIVIL_DAY: i64 = -100_000_000_000;

/// Last civil day number the calendar adapters represent.
pub const MAX_CIVIL_DAY: i64 = 100_000_000_000;

/// Clamp a civil day number into `MIN_CIVIL_DAY..=MAX_CIVIL_DAY`.
pub fn clamp_civil_day(day: i64) -> i64 {
    day.clamp(MIN_CIVIL_DAY, MAX_CIVIL_DAY)
}

/// JD at the civil midnight starting day number `day`.
pub fn jd_from_day_number(day: i64) -> f64 {
    day as f64 + 0.5
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / JULIAN_CENTURY_DAYS
}

/// Julian millennia since J2000.0.
pub fn jd_to_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / JULIAN_MILLENNIUM_DAYS
}

/// Seconds since the Unix epoch (no leap seconds) to JD.
pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// JD to seconds since the Unix epoch (no leap seconds).
pub fn jd_to_unix_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// JD to Modified Julian Date.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_EPOCH_JD
}

/// Modified Julian Date to JD.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_EPOCH_JD
}
