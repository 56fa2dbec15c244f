//! Equation of time.

use taqvim_frames::{nutation_deg, obliquity_of_ecliptic_deg};
use taqvim_time::jd_to_millennia;

use crate::sun::solar_position;
use crate::util::normalize_360;

/// Equation of time at Julian Day `jd`, as a fraction of a day.
///
/// Combines the Sun's mean longitude with its apparent right ascension,
/// corrected for nutation. The raw difference is reduced into `[0, 20)`
/// before scaling by 1/1440, so results lie in `[0, 20/1440)`.
pub fn equation_of_time(jd: f64) -> f64 {
    let tau = jd_to_millennia(jd);
    let tau2 = tau * tau;
    let tau3 = tau2 * tau;
    let tau4 = tau3 * tau;
    let tau5 = tau4 * tau;

    let l0 = normalize_360(
        280.4664567 + 360007.6982779 * tau + 0.03032028 * tau2 + tau3 / 49931.0
            - tau4 / 15300.0
            - tau5 / 2_000_000.0,
    );

    let alpha = solar_position(jd).apparent_right_ascension_deg;
    let (dpsi, deps) = nutation_deg(jd);
    let eps = obliquity_of_ecliptic_deg(jd) + deps;

    let e = l0 - 0.0057183 - alpha + dpsi * eps.to_radians().cos();
    let e = e - 20.0 * (e / 20.0).floor();
    e / 1440.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_regression_values() {
        let cases = [
            (2_451_545.0, 0.013_315_856_892_522_786),
            (2_448_908.5, 0.002_378_266_653_809_383),
            (2_460_389.5, 0.012_593_326_322_907_177),
            (2_460_000.5, 0.011_607_096_392_090_25),
        ];
        for (jd, expected) in cases {
            let got = equation_of_time(jd);
            assert!((got - expected).abs() < 1e-10, "jd {jd}: got {got}, expected {expected}");
        }
    }

    #[test]
    fn range_reduced() {
        for day in (0..730).step_by(11) {
            let e = equation_of_time(2_460_000.5 + f64::from(day));
            assert!((0.0..20.0 / 1440.0).contains(&e), "day {day}: {e}");
        }
    }
}
