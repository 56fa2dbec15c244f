//! Ecliptic to equatorial coordinate rotation.

use crate::obliquity::obliquity_of_ecliptic_deg;

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension, range [0, 360).
    pub ra_deg: f64,
    /// Declination, range [-90, 90].
    pub dec_deg: f64,
}

/// Rotate ecliptic longitude/latitude into right ascension/declination
/// about the given obliquity (all degrees).
pub fn ecliptic_to_equatorial_with_obliquity(
    lon_deg: f64,
    lat_deg: f64,
    obliquity_deg: f64,
) -> EquatorialCoords {
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let tan_lat = lat_deg.to_radians().tan();

    let ra = (cos_eps * sin_lon - tan_lat * sin_eps).atan2(cos_lon);
    let dec = (sin_eps * sin_lon * cos_lat + sin_lat * cos_eps).asin();

    EquatorialCoords {
        ra_deg: ra.to_degrees().rem_euclid(360.0),
        dec_deg: dec.to_degrees(),
    }
}

/// Rotate ecliptic coordinates at Julian Day `jd` using the mean obliquity.
pub fn ecliptic_to_equatorial(jd: f64, lon_deg: f64, lat_deg: f64) -> EquatorialCoords {
    ecliptic_to_equatorial_with_obliquity(lon_deg, lat_deg, obliquity_of_ecliptic_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obliquity::OBLIQUITY_J2000_DEG;
    use taqvim_time::J2000_JD;

    #[test]
    fn equinox_maps_to_origin() {
        let eq = ecliptic_to_equatorial(J2000_JD, 0.0, 0.0);
        assert!(eq.ra_deg.abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn solstice_declination_is_obliquity() {
        let eq = ecliptic_to_equatorial(J2000_JD, 90.0, 0.0);
        assert!((eq.ra_deg - 90.0).abs() < 1e-9);
        assert!((eq.dec_deg - OBLIQUITY_J2000_DEG).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_pole() {
        let eq = ecliptic_to_equatorial_with_obliquity(0.0, 90.0 - 1e-9, OBLIQUITY_J2000_DEG);
        assert!((eq.dec_deg - (90.0 - OBLIQUITY_J2000_DEG)).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_13a_pollux() {
        let eq = ecliptic_to_equatorial_with_obliquity(113.215_630, 6.684_170, 23.439_291_1);
        assert!((eq.ra_deg - 116.328_942).abs() < 1e-5, "ra {}", eq.ra_deg);
        assert!((eq.dec_deg - 28.026_183).abs() < 1e-5, "dec {}", eq.dec_deg);
    }

    #[test]
    fn ra_wraps_into_range() {
        let eq = ecliptic_to_equatorial(J2000_JD, 350.0, 0.0);
        assert!((0.0..360.0).contains(&eq.ra_deg));
        assert!(eq.ra_deg > 340.0);
    }
}
