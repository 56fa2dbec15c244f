//! Angle normalization helpers.

use std::f64::consts::TAU;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [0, 2π) radians.
pub fn fix_angle_rad(rad: f64) -> f64 {
    let r = rad % TAU;
    if r < 0.0 { r + TAU } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps_full_turns() {
        assert!((normalize_360(360.0)).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn radians_negative() {
        assert!((fix_angle_rad(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
    }

    #[test]
    fn radians_large() {
        assert!((fix_angle_rad(5.0 * PI) - PI).abs() < 1e-12);
        assert!(fix_angle_rad(TAU).abs() < 1e-15);
    }
}
