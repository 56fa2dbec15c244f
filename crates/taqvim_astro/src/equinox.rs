//! Equinox and solstice instants.
//!
//! Meeus, _Astronomical Algorithms_, chapter 27: a mean-event polynomial
//! in millennia, then one periodic correction. No iteration; accuracy is
//! about a minute for years 1951-2050 and degrades slowly outside.

use std::fmt;

use taqvim_time::jd_to_centuries;

/// One of the four cardinal solar events of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

/// The four events in calendar order.
pub const ALL_SEASONS: [Season; 4] = [
    Season::MarchEquinox,
    Season::JuneSolstice,
    Season::SeptemberEquinox,
    Season::DecemberSolstice,
];

impl Season {
    /// 0-based index in calendar order.
    pub const fn index(self) -> usize {
        match self {
            Self::MarchEquinox => 0,
            Self::JuneSolstice => 1,
            Self::SeptemberEquinox => 2,
            Self::DecemberSolstice => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MarchEquinox => "March equinox",
            Self::JuneSolstice => "June solstice",
            Self::SeptemberEquinox => "September equinox",
            Self::DecemberSolstice => "December solstice",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean-event coefficients for years -1000..1000, `Y = year / 1000`.
#[rustfmt::skip]
const MEAN_EVENT_BEFORE_1000: [[f64; 5]; 4] = [
    [1721139.29189, 365242.13740,  0.06134,  0.00111, -0.00071],
    [1721233.25401, 365241.72562, -0.05323,  0.00907,  0.00025],
    [1721325.70455, 365242.49558, -0.11677, -0.00297,  0.00074],
    [1721414.39987, 365242.88257, -0.00769, -0.00933, -0.00006],
];

/// Mean-event coefficients for years 1000..3000, `Y = (year - 2000) / 1000`.
#[rustfmt::skip]
const MEAN_EVENT_FROM_1000: [[f64; 5]; 4] = [
    [2451623.80984, 365242.37404,  0.05169, -0.00411, -0.00057],
    [2451716.56767, 365241.62603,  0.00325,  0.00888, -0.00030],
    [2451810.21715, 365242.01767, -0.11575,  0.00337,  0.00078],
    [2451900.05952, 365242.74049, -0.06223, -0.00823,  0.00032],
];

/// Periodic terms `[A, B, C]`: `S = Σ A·cos(B + C·T)`, degrees.
#[rustfmt::skip]
static PERIODIC_TERMS: [[f64; 3]; 24] = [
    [485.0,  324.96,    1934.136],
    [203.0,  337.23,   32964.467],
    [199.0,  342.08,      20.186],
    [182.0,   27.85,  445267.112],
    [156.0,   73.14,   45036.886],
    [136.0,  171.52,   22518.443],
    [ 77.0,  222.54,   65928.934],
    [ 74.0,  296.72,    3034.906],
    [ 70.0,  243.58,    9037.513],
    [ 58.0,  119.81,   33718.147],
    [ 52.0,  297.17,     150.678],
    [ 50.0,   21.02,    2281.226],
    [ 45.0,  247.54,   29929.562],
    [ 44.0,  325.15,   31555.956],
    [ 29.0,   60.93,    4443.417],
    [ 18.0,  155.12,   67555.328],
    [ 17.0,  288.79,    4562.452],
    [ 16.0,  198.04,   62894.029],
    [ 14.0,  199.76,   31436.921],
    [ 12.0,   95.39,   14577.848],
    [ 12.0,  287.11,   31931.756],
    [ 12.0,  320.81,   34777.259],
    [  9.0,  227.73,    1222.114],
    [  8.0,   15.45,   16859.074],
];

/// Julian Ephemeris Day (TT) of `season` in `year`.
pub fn equinox_or_solstice(year: i32, season: Season) -> f64 {
    let (table, y) = if year < 1000 {
        (&MEAN_EVENT_BEFORE_1000, f64::from(year) / 1000.0)
    } else {
        (&MEAN_EVENT_FROM_1000, f64::from(year - 2000) / 1000.0)
    };

    let k = table[season.index()];
    let jde0 = k[0] + y * (k[1] + y * (k[2] + y * (k[3] + y * k[4])));

    let t = jd_to_centuries(jde0);
    let w = (35999.373 * t - 2.47).to_radians();
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();

    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&[a, b, c]| a * (b + c * t).to_radians().cos())
        .sum();

    jde0 + 0.00001 * s / delta_lambda
}

/// All four events of `year`, in calendar order, as JDE.
pub fn seasons_of_year(year: i32) -> [f64; 4] {
    ALL_SEASONS.map(|season| equinox_or_solstice(year, season))
}
