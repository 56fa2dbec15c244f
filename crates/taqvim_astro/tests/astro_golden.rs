//! Golden-value tests against worked examples in Meeus, _Astronomical
//! Algorithms_ (2nd ed.) and published equinox tables.

use taqvim_astro::{
    ALL_SEASONS, Season, delta_t, ecliptic_to_equatorial, equinox_or_solstice, nutation_deg,
    obliquity_of_ecliptic_deg, seasons_of_year, solar_position, tt_to_ut_jd,
};
use taqvim_calendar::{CalendarDate, CalendarId, from_jd};
use taqvim_time::time_of_day;

/// Example 25.a: 1992 October 13.0 TD.
#[test]
fn solar_position_1992_10_13() {
    let pos = solar_position(2_448_908.5);
    let checks = [
        ("L0", pos.mean_longitude_deg, 201.807_196_506_707_44),
        ("M", pos.mean_anomaly_deg, 278.993_966_431_597_5),
        ("C", pos.equation_of_center_deg, -1.897_323_843_371_985),
        ("true longitude", pos.true_longitude_deg, 199.909_872_663_335_45),
        ("true anomaly", pos.true_anomaly_deg, 277.096_642_588_225_56),
        ("apparent longitude", pos.apparent_longitude_deg, 199.908_941_860_352_74),
        ("RA", pos.right_ascension_deg, 198.381_664_225_760_97),
        ("Dec", pos.declination_deg, -7.785_496_366_273_986),
        ("apparent RA", pos.apparent_right_ascension_deg, 198.380_825_227_122_4),
        ("apparent Dec", pos.apparent_declination_deg, -7.785_069_760_176_882),
    ];
    for (name, got, expected) in checks {
        assert!(
            (got - expected).abs() < 1e-9,
            "{name}: got {got}, expected {expected}"
        );
    }
    assert!((pos.eccentricity - 0.016_711_668).abs() < 1e-9);
    assert!((pos.radius_au - 0.997_66).abs() < 1e-5, "R = {}", pos.radius_au);
}

/// Meeus' printed values for the same example, to book precision.
#[test]
fn solar_position_matches_book() {
    let pos = solar_position(2_448_908.5);
    assert!((pos.apparent_longitude_deg - 199.908_95).abs() < 1e-4);
    assert!((pos.apparent_right_ascension_deg - 198.380_83).abs() < 1e-4);
    assert!((pos.apparent_declination_deg + 7.785_07).abs() < 1e-4);
}

/// Example 22.a: 1987 April 10.0 TD.
#[test]
fn nutation_and_obliquity_1987_04_10() {
    let (dpsi, deps) = nutation_deg(2_446_895.5);
    assert!((dpsi * 3600.0 + 3.788).abs() < 0.01, "Δψ = {}″", dpsi * 3600.0);
    assert!((deps * 3600.0 - 9.443).abs() < 0.01, "Δε = {}″", deps * 3600.0);
    let eps0 = obliquity_of_ecliptic_deg(2_446_895.5);
    assert!((eps0 - 23.440_946).abs() < 1e-6, "ε0 = {eps0}");
}

/// Example 27.a: June solstice 1962.
#[test]
fn june_solstice_1962() {
    let jde = equinox_or_solstice(1962, Season::JuneSolstice);
    assert!((jde - 2_437_837.392_45).abs() < 1e-5, "got {jde}");
}

#[test]
fn seasons_2000() {
    let expected = [
        2_451_623.816_994_392_3,
        2_451_716.575_548_049_5,
        2_451_810.228_405_633_5,
        2_451_900.068_568_985,
    ];
    for (got, want) in seasons_of_year(2000).iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "got {got}, expected {want}");
    }
}

#[test]
fn seasons_2024_fall_on_published_dates() {
    let days = [(3, 20), (6, 20), (9, 22), (12, 21)];
    for (season, (month, day)) in ALL_SEASONS.into_iter().zip(days) {
        let jd = tt_to_ut_jd(equinox_or_solstice(2024, season), 2024.0);
        assert_eq!(
            from_jd(CalendarId::Gregorian, jd),
            CalendarDate::new(2024, month, day),
            "{season}"
        );
    }
}

#[test]
fn march_equinox_2024_time_of_day() {
    // 2024-03-20 03:06 UT
    let jd = tt_to_ut_jd(equinox_or_solstice(2024, Season::MarchEquinox), 2024.0);
    let tod = time_of_day(jd);
    assert_eq!((tod.hour, tod.minute), (3, 6), "got {tod}");
}

#[test]
fn year_500_uses_early_table() {
    let jde = equinox_or_solstice(500, Season::MarchEquinox);
    assert!((jde - 1_903_760.374_394_762).abs() < 1e-6, "got {jde}");
}

#[test]
fn delta_t_modern_values() {
    assert!((delta_t(2000.0) - 65.0).abs() < 1e-12);
    assert!((delta_t(1990.0) - 56.9).abs() < 1e-12);
}

#[test]
fn sun_longitude_rotates_to_matching_ra() {
    let jd = 2_448_908.5;
    let pos = solar_position(jd);
    let eq = ecliptic_to_equatorial(jd, pos.true_longitude_deg, 0.0);
    assert!((eq.ra_deg - pos.right_ascension_deg).abs() < 1e-9);
    assert!((eq.dec_deg - pos.declination_deg).abs() < 1e-9);
}
