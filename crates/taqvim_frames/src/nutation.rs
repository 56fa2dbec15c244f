//! Nutation in longitude and obliquity.
//!
//! 63-term series from Meeus, _Astronomical Algorithms_, Table 22.A, with
//! the cubic fundamental arguments of eq. 22.1. Accuracy is about 0.5″ in
//! Δψ and 0.1″ in Δε, ample for equinox and equation-of-time work.

use std::f64::consts::TAU;

use taqvim_time::jd_to_centuries;

/// Number of periodic terms in [`NUTATION_COEFFS`].
pub const NUTATION_TERM_COUNT: usize = 63;

/// Fundamental arguments `[D, M, M′, F, Ω]` in radians, reduced to `[0, 2π)`.
///
/// `t` = Julian centuries since J2000.0.
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850363 + 445267.11148 * t - 0.0019142 * t2 + t3 / 189474.0;
    let m = 357.52772 + 35999.05034 * t - 0.0001603 * t2 - t3 / 300000.0;
    let mp = 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0;
    let f = 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0;
    let om = 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0;

    [d, m, mp, f, om].map(|deg| deg.to_radians().rem_euclid(TAU))
}

/// Periodic terms.
///
/// Each row: `[nD, nM, nM′, nF, nΩ, S, S′, C, C′]` where Δψ gets
/// `(S + S′·T/10)·sin(arg)` and Δε gets `(C + C′·T/10)·cos(arg)`, both in
/// units of 0.0001″.
#[rustfmt::skip]
static NUTATION_COEFFS: [[i32; 9]; NUTATION_TERM_COUNT] = [
    // nD  nM  nM'  nF  nΩ        S        S'        C        C'
    [  0,   0,   0,   0,   1,  -171996,    -1742,    92095,       89],
    [ -2,   0,   0,   2,   2,   -13187,      -16,     5736,      -31],
    [  0,   0,   0,   2,   2,    -2274,       -2,      977,       -5],
    [  0,   0,   0,   0,   2,     2062,        2,     -895,        5],
    [  0,   1,   0,   0,   0,     1426,      -34,       54,       -1],
    [  0,   0,   1,   0,   0,      712,        1,       -7,        0],
    [ -2,   1,   0,   2,   2,     -517,       12,      224,       -6],
    [  0,   0,   0,   2,   1,     -386,       -4,      200,        0],
    [  0,   0,   1,   2,   2,     -301,        0,      129,       -1],
    [ -2,  -1,   0,   2,   2,      217,       -5,      -95,        3],
    [ -2,   0,   1,   0,   0,     -158,        0,        0,        0],
    [ -2,   0,   0,   2,   1,      129,        1,      -70,        0],
    [  0,   0,  -1,   2,   2,      123,        0,      -53,        0],
    [  2,   0,   0,   0,   0,       63,        0,        0,        0],
    [  0,   0,   1,   0,   1,       63,        1,      -33,        0],
    [  2,   0,  -1,   2,   2,      -59,        0,       26,        0],
    [  0,   0,  -1,   0,   1,      -58,       -1,       32,        0],
    [  0,   0,   1,   2,   1,      -51,        0,       27,        0],
    [ -2,   0,   2,   0,   0,       48,        0,        0,        0],
    [  0,   0,  -2,   2,   1,       46,        0,      -24,        0],
    [  2,   0,   0,   2,   2,      -38,        0,       16,        0],
    [  0,   0,   2,   2,   2,      -31,        0,       13,        0],
    [  0,   0,   2,   0,   0,       29,        0,        0,        0],
    [ -2,   0,   1,   2,   2,       29,        0,      -12,        0],
    [  0,   0,   0,   2,   0,       26,        0,        0,        0],
    [ -2,   0,   0,   2,   0,      -22,        0,        0,        0],
    [  0,   0,  -1,   2,   1,       21,        0,      -10,        0],
    [  0,   2,   0,   0,   0,       17,       -1,        0,        0],
    [  2,   0,  -1,   0,   1,       16,        0,       -8,        0],
    [ -2,   2,   0,   2,   2,      -16,        1,        7,        0],
    [  0,   1,   0,   0,   1,      -15,        0,        9,        0],
    [ -2,   0,   1,   0,   1,      -13,        0,        7,        0],
    [  0,  -1,   0,   0,   1,      -12,        0,        6,        0],
    [  0,   0,   2,  -2,   0,       11,        0,        0,        0],
    [  2,   0,  -1,   2,   1,      -10,        0,        5,        0],
    [  2,   0,   1,   2,   2,       -8,        0,        3,        0],
    [  0,   1,   0,   2,   2,        7,        0,       -3,        0],
    [ -2,   1,   1,   0,   0,       -7,        0,        0,        0],
    [  0,  -1,   0,   2,   2,       -7,        0,        3,        0],
    [  2,   0,   0,   2,   1,       -7,        0,        3,        0],
    [  2,   0,   1,   0,   0,        6,        0,        0,        0],
    [ -2,   0,   2,   2,   2,        6,        0,       -3,        0],
    [ -2,   0,   1,   2,   1,        6,        0,       -3,        0],
    [  2,   0,  -2,   0,   1,       -6,        0,        3,        0],
    [  2,   0,   0,   0,   1,       -6,        0,        3,        0],
    [  0,  -1,   1,   0,   0,        5,        0,        0,        0],
    [ -2,  -1,   0,   2,   1,       -5,        0,        3,        0],
    [ -2,   0,   0,   0,   1,       -5,        0,        3,        0],
    [  0,   0,   2,   2,   1,       -5,        0,        3,        0],
    [ -2,   0,   2,   0,   1,        4,        0,        0,        0],
    [ -2,   1,   0,   2,   1,        4,        0,        0,        0],
    [  0,   0,   1,  -2,   0,        4,        0,        0,        0],
    [ -1,   0,   1,   0,   0,       -4,        0,        0,        0],
    [ -2,   1,   0,   0,   0,       -4,        0,        0,        0],
    [  1,   0,   0,   0,   0,       -4,        0,        0,        0],
    [  0,   0,   1,   2,   0,        3,        0,        0,        0],
    [ -1,  -1,   1,   0,   0,       -3,        0,        0,        0],
    [  0,   1,   1,   0,   0,       -3,        0,        0,        0],
    [  0,  -1,   1,   2,   2,       -3,        0,        0,        0],
    [  2,  -1,  -1,   2,   2,       -3,        0,        0,        0],
    [  0,   0,  -2,   2,   2,       -3,        0,        0,        0],
    [  0,   0,   3,   2,   2,       -3,        0,        0,        0],
    [  2,  -1,   0,   2,   2,       -3,        0,        0,        0],
];

/// Nutation `(Δψ, Δε)` in degrees at Julian Day `jd`.
pub fn nutation_deg(jd: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd);
    let args = fundamental_arguments(t);
    let t10 = t / 10.0;

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &NUTATION_COEFFS {
        let arg: f64 = row[..5]
            .iter()
            .zip(args)
            .map(|(&n, a)| f64::from(n) * a)
            .sum();
        dpsi += (f64::from(row[5]) + f64::from(row[6]) * t10) * arg.sin();
        deps += (f64::from(row[7]) + f64::from(row[8]) * t10) * arg.cos();
    }

    // 0.0001″ to degrees
    (dpsi / 36_000_000.0, deps / 36_000_000.0)
}
