//! Delta-T: the difference TT - UT in seconds.
//!
//! Observed values at two-year intervals for 1620-2000; outside that span
//! the quadratic fits of Meeus (chapter 10) for before and after 948, with
//! a linear patch that keeps 2000-2100 continuous with the table.

use taqvim_time::SECONDS_PER_DAY;

const TABLE_START_YEAR: f64 = 1620.0;
const TABLE_END_YEAR: f64 = 2000.0;

/// ΔT in seconds at even years from 1620 to 2002.
#[rustfmt::skip]
static DELTA_T_TABLE: [f64; 192] = [
    121.0, 112.0, 103.0,  95.0,  88.0,  82.0,  77.0,  72.0,  68.0,  63.0,
     60.0,  56.0,  53.0,  51.0,  48.0,  46.0,  44.0,  42.0,  40.0,  38.0,
     35.0,  33.0,  31.0,  29.0,  26.0,  24.0,  22.0,  20.0,  18.0,  16.0,
     14.0,  12.0,  11.0,  10.0,   9.0,   8.0,   7.0,   7.0,   7.0,   7.0,
      7.0,   7.0,   8.0,   8.0,   9.0,   9.0,   9.0,   9.0,   9.0,  10.0,
     10.0,  10.0,  10.0,  10.0,  10.0,  10.0,  10.0,  11.0,  11.0,  11.0,
     11.0,  11.0,  12.0,  12.0,  12.0,  12.0,  13.0,  13.0,  13.0,  14.0,
     14.0,  14.0,  14.0,  15.0,  15.0,  15.0,  15.0,  15.0,  16.0,  16.0,
     16.0,  16.0,  16.0,  16.0,  16.0,  16.0,  15.0,  15.0,  14.0,  13.0,
     13.1,  12.5,  12.2,  12.0,  12.0,  12.0,  12.0,  12.0,  12.0,  11.9,
     11.6,  11.0,  10.2,   9.2,   8.2,   7.1,   6.2,   5.6,   5.4,   5.3,
      5.4,   5.6,   5.9,   6.2,   6.5,   6.8,   7.1,   7.3,   7.5,   7.6,
      7.7,   7.3,   6.2,   5.2,   2.7,   1.4,  -1.2,  -2.8,  -3.8,  -4.8,
     -5.5,  -5.3,  -5.6,  -5.7,  -5.9,  -6.0,  -6.3,  -6.5,  -6.2,  -4.7,
     -2.8,  -0.1,   2.6,   5.3,   7.7,  10.4,  13.3,  16.0,  18.2,  20.2,
     21.1,  22.4,  23.5,  23.8,  24.3,  24.0,  23.9,  23.9,  23.7,  24.0,
     24.3,  25.3,  26.2,  27.3,  28.2,  29.1,  30.0,  30.7,  31.4,  32.2,
     33.1,  34.0,  35.0,  36.5,  38.3,  40.2,  42.2,  44.5,  46.5,  48.5,
     50.5,  52.2,  53.8,  54.9,  55.8,  56.9,  58.3,  60.0,  61.6,  63.0,
     65.0,  66.6,
];

/// ΔT = TT - UT in seconds for a (possibly fractional) `year`.
pub fn delta_t(year: f64) -> f64 {
    if (TABLE_START_YEAR..=TABLE_END_YEAR).contains(&year) {
        let pos = (year - TABLE_START_YEAR) / 2.0;
        let i = pos.floor() as usize;
        let f = pos - pos.floor();
        return DELTA_T_TABLE[i] + (DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i]) * f;
    }

    tracing::debug!(year, "delta-t extrapolated outside 1620-2000 table");
    let t = (year - 2000.0) / 100.0;
    if year < 948.0 {
        2177.0 + 497.0 * t + 44.1 * t * t
    } else {
        let mut dt = 102.0 + 102.0 * t + 25.3 * t * t;
        if year > 2000.0 && year < 2100.0 {
            dt += 0.37 * (year - 2100.0);
        }
        dt
    }
}

/// ΔT in days.
pub fn delta_t_days(year: f64) -> f64 {
    delta_t(year) / SECONDS_PER_DAY
}

/// Convert a Julian Ephemeris Day (TT) in `year` to a Julian Day in UT.
pub fn tt_to_ut_jd(jde: f64, year: f64) -> f64 {
    jde - delta_t_days(year)
}
