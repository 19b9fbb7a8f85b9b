//! Haversine helpers for spherical triangles.
//!
//! All angles are in radians.

use crate::error::{GeoError, Result};

/// Mean radius of the Earth in meters (IUGG R1).
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;

/// How far outside [0, 1] an `ahav` argument may drift from rounding before
/// it is treated as out of domain.
pub const AHAV_TOLERANCE: f64 = 1e-12;

/// Haversine: `sin²(θ/2)`.
pub fn hav(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}

/// Inverse haversine: `2·asin(√y)`, in [0, π].
///
/// Arguments within [`AHAV_TOLERANCE`] of the domain are clamped into it.
/// Anything further out, and `NaN`, yields `NaN`.
pub fn ahav(y: f64) -> f64 {
    match clamp_unit(y) {
        Some(y) => 2.0 * y.sqrt().asin(),
        None => f64::NAN,
    }
}

/// Same as [`ahav`] but reports an out of domain argument as an error.
pub fn try_ahav(y: f64) -> Result<f64> {
    clamp_unit(y)
        .map(|y| 2.0 * y.sqrt().asin())
        .ok_or(GeoError::HaversineDomain(y))
}

/// Haversine of the side opposite `angle` in the spherical triangle whose
/// sides `a` and `b` enclose `angle`.
pub fn law_of_haversines(a: f64, b: f64, angle: f64) -> f64 {
    hav(a - b) + a.sin() * b.sin() * hav(angle)
}

fn clamp_unit(y: f64) -> Option<f64> {
    if (-AHAV_TOLERANCE..=1.0 + AHAV_TOLERANCE).contains(&y) {
        Some(y.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn hav_known_values() {
        assert_eq!(hav(0.0), 0.0);
        assert!((hav(PI) - 1.0).abs() < 1e-15);
        assert!((hav(FRAC_PI_2) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn ahav_inverts_hav() {
        for theta in [0.0, 0.1, 1.0, FRAC_PI_2, 3.0, PI] {
            assert!((ahav(hav(theta)) - theta).abs() < 1e-7, "theta = {theta}");
        }
    }

    #[test]
    fn ahav_clamps_rounding_noise() {
        assert_eq!(ahav(-1e-20), 0.0);
        assert!((ahav(1.0 + 1e-14) - PI).abs() < 1e-15);
    }

    #[test]
    fn ahav_out_of_domain() {
        assert!(ahav(-0.5).is_nan());
        assert!(ahav(2.0).is_nan());
        assert!(ahav(f64::INFINITY).is_nan());
        assert!(ahav(f64::NAN).is_nan());
        assert_eq!(try_ahav(1.5), Err(GeoError::HaversineDomain(1.5)));
        assert!(matches!(try_ahav(f64::NAN), Err(GeoError::HaversineDomain(_))));
        assert_eq!(try_ahav(0.0), Ok(0.0));
    }

    #[test]
    fn law_of_haversines_right_angle() {
        // Two quarter-circle sides at a right angle meet a quarter-circle side.
        let c = ahav(law_of_haversines(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2));
        assert!((c - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn law_of_haversines_zero_angle() {
        let c = ahav(law_of_haversines(0.7, 0.2, 0.0));
        assert!((c - 0.5).abs() < 1e-12);
    }
}
