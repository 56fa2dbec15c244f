//! Low-precision solar coordinates (Meeus, _Astronomical Algorithms_,
//! chapter 25), accurate to about 0.01°.

use taqvim_frames::obliquity_of_ecliptic_deg;
use taqvim_time::jd_to_centuries;

use crate::util::normalize_360;

/// Solar position at one instant. All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Geometric mean longitude L0, range [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, range [0, 360).
    pub mean_anomaly_deg: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
    /// Equation of the centre C.
    pub equation_of_center_deg: f64,
    /// True geometric longitude L0 + C (not range-reduced).
    pub true_longitude_deg: f64,
    /// True anomaly M + C (not range-reduced).
    pub true_anomaly_deg: f64,
    /// Sun-Earth distance in AU.
    pub radius_au: f64,
    /// Apparent longitude, referred to the true equinox of date.
    pub apparent_longitude_deg: f64,
    /// Right ascension from the true longitude and mean obliquity.
    pub right_ascension_deg: f64,
    /// Declination from the true longitude and mean obliquity.
    pub declination_deg: f64,
    /// Apparent right ascension.
    pub apparent_right_ascension_deg: f64,
    /// Apparent declination.
    pub apparent_declination_deg: f64,
}

/// Compute the Sun's position at Julian (Ephemeris) Day `jd`.
pub fn solar_position(jd: f64) -> SolarPosition {
    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t2);
    let m = normalize_360(357.52911 + 35999.05029 * t - 0.0001537 * t2);
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let true_anomaly = m + c;
    let radius = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.to_radians().cos());

    // nutation and aberration from the Moon's node only
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_lon = true_lon - 0.00569 - 0.00478 * omega.sin();

    let eps0 = obliquity_of_ecliptic_deg(jd).to_radians();
    let eps = eps0 + (0.00256 * omega.cos()).to_radians();

    let (sin_lon, cos_lon) = true_lon.to_radians().sin_cos();
    let (sin_app, cos_app) = apparent_lon.to_radians().sin_cos();

    SolarPosition {
        mean_longitude_deg: l0,
        mean_anomaly_deg: m,
        eccentricity: e,
        equation_of_center_deg: c,
        true_longitude_deg: true_lon,
        true_anomaly_deg: true_anomaly,
        radius_au: radius,
        apparent_longitude_deg: apparent_lon,
        right_ascension_deg: normalize_360((eps0.cos() * sin_lon).atan2(cos_lon).to_degrees()),
        declination_deg: (eps0.sin() * sin_lon).asin().to_degrees(),
        apparent_right_ascension_deg: normalize_360(
            (eps.cos() * sin_app).atan2(cos_app).to_degrees(),
        ),
        apparent_declination_deg: (eps.sin() * sin_app).asin().to_degrees(),
    }
}
