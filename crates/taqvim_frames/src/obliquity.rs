//! Mean obliquity of the ecliptic.
//!
//! Laskar's 10th-degree polynomial in units of 10 000 Julian years, valid
//! for roughly ±10 000 years around J2000.0 (Meeus, _Astronomical
//! Algorithms_, eq. 22.3).

use taqvim_time::J2000_JD;

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Polynomial coefficients in arcseconds for `U^1 ..= U^10`.
const LASKAR_TERMS: [f64; 10] = [
    -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Days in 10 000 Julian years.
const DAYS_PER_TEN_MILLENNIA: f64 = 3_652_500.0;

/// Mean obliquity of the ecliptic in degrees at Julian Day `jd`.
///
/// Outside the polynomial's validity window (`|U| >= 1`) only the constant
/// term is returned.
pub fn obliquity_of_ecliptic_deg(jd: f64) -> f64 {
    let u = (jd - J2000_JD) / DAYS_PER_TEN_MILLENNIA;
    if u.abs() >= 1.0 {
        tracing::debug!(jd, u, "obliquity requested outside polynomial window");
        return OBLIQUITY_J2000_DEG;
    }

    let mut eps = OBLIQUITY_J2000_DEG;
    let mut v = u;
    for term in LASKAR_TERMS {
        eps += term / 3600.0 * v;
        v *= u;
    }
    eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_at_j2000() {
        assert!((obliquity_of_ecliptic_deg(J2000_JD) - 23.439_291_111_111_11).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-04-10 0h TD: ε0 = 23°26′27.407″
        let eps = obliquity_of_ecliptic_deg(2_446_895.5);
        assert!((eps - 23.440_946_290_957_317).abs() < 1e-10, "got {eps}");
    }

    #[test]
    fn decreasing_in_current_era() {
        assert!(obliquity_of_ecliptic_deg(2_460_389.5) < OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn falls_back_outside_window() {
        let far = J2000_JD + 1.5 * DAYS_PER_TEN_MILLENNIA;
        assert_eq!(obliquity_of_ecliptic_deg(far), OBLIQUITY_J2000_DEG);
    }
}
