//! The direct problem on a sphere: start point, azimuth and distance in,
//! destination point out.
//!
//! Azimuths are degrees clockwise from north and distances are meters (the
//! unit of [`EARTH_MEAN_RADIUS`]).

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{GeoError, Result};
use crate::model::{ahav, hav, law_of_haversines, try_ahav, EARTH_MEAN_RADIUS};
use crate::point::Point;

/// Below this `sin(coLat0)·sin(coLat1)` is treated as zero by
/// [`try_great_circle_point`].
pub const POLE_EPSILON: f64 = 1e-12;

/// Computes the point reached from `start` along a great circle.
///
/// Solved with the law of haversines on the triangle formed by the north
/// pole, `start` and the destination. Bearings of 180° and more are mirrored
/// onto the western side and the longitude difference is subtracted.
///
/// Nothing is validated and nothing fails. Starting on the north pole gives a
/// `NaN` longitude, and the longitude is never wrapped into [-180, 180].
/// The result carries no description.
pub fn great_circle_point(start: &Point, azimuth: f64, distance: f64) -> Point {
    let co_lat_start = (90.0 - start.latitude()).to_radians();
    let bearing = fold_bearing(azimuth);
    let delta = distance / EARTH_MEAN_RADIUS;

    let co_lat_end = ahav(law_of_haversines(delta, co_lat_start, bearing));
    let lon_diff = ahav(
        (hav(delta) - hav(co_lat_start - co_lat_end)) / (co_lat_start.sin() * co_lat_end.sin()),
    )
    .to_degrees();

    let point = assemble(start, azimuth, co_lat_end, lon_diff);
    if !point.latitude().is_finite() || !point.longitude().is_finite() {
        debug!("non-finite destination from {start} at {azimuth}° over {distance} m: {point}");
    }
    point
}

/// Checked variant of [`great_circle_point`].
///
/// Rejects non-finite arguments, a start point outside the physical ranges,
/// a start or destination (numerically) on a pole, and inverse haversine
/// arguments outside [0, 1].
pub fn try_great_circle_point(start: &Point, azimuth: f64, distance: f64) -> Result<Point> {
    let start = Point::try_new(start.latitude(), start.longitude())?;
    finite("azimuth", azimuth)?;
    finite("distance", distance)?;

    let co_lat_start = (90.0 - start.latitude()).to_radians();
    let bearing = fold_bearing(azimuth);
    let delta = distance / EARTH_MEAN_RADIUS;

    let co_lat_end = try_ahav(law_of_haversines(delta, co_lat_start, bearing))?;
    let denominator = co_lat_start.sin() * co_lat_end.sin();
    if denominator.abs() < POLE_EPSILON {
        let colatitude = if co_lat_start.sin().abs() < co_lat_end.sin().abs() {
            co_lat_start
        } else {
            co_lat_end
        };
        return Err(GeoError::PolarSingularity { colatitude });
    }
    // Both haversine arguments stay in [0, 1] for any finite distance, negative
    // or beyond half the circumference. The checks only catch rounding noise
    // that outgrows AHAV_TOLERANCE.
    let lon_diff =
        try_ahav((hav(delta) - hav(co_lat_start - co_lat_end)) / denominator)?.to_degrees();

    Ok(assemble(&start, azimuth, co_lat_end, lon_diff))
}

fn fold_bearing(azimuth: f64) -> f64 {
    if azimuth < 180.0 {
        azimuth.to_radians()
    } else {
        (360.0 - azimuth).to_radians()
    }
}

fn assemble(start: &Point, azimuth: f64, co_lat_end: f64, lon_diff: f64) -> Point {
    let lon = if azimuth < 180.0 {
        start.longitude() + lon_diff
    } else {
        start.longitude() - lon_diff
    };
    let lat = 90.0 - co_lat_end.to_degrees();
    trace!("coLat = {co_lat_end} rad, Δlon = {lon_diff}°");
    Point::new(lat, lon)
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeoError::NonFinite { name, value })
    }
}

/// Computes the destination with three dimensional unit vectors.
///
/// The east and north directions at `start` are built from its longitude, so
/// the poles need no special casing: on a pole the start longitude fixes the
/// meridian that an azimuth of 180° follows. The result longitude lies in
/// (-180, 180].
fn n_vector_point(start: &Point, azimuth: f64, distance: f64) -> Point {
    let (sin_lat, cos_lat) = start.latitude().to_radians().sin_cos();
    let (sin_lon, cos_lon) = start.longitude().to_radians().sin_cos();
    let (sin_az, cos_az) = azimuth.to_radians().sin_cos();
    let (sin_delta, cos_delta) = (distance / EARTH_MEAN_RADIUS).sin_cos();

    let n = [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat];
    let east = [-sin_lon, cos_lon, 0.0];
    let north = [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat];

    let end: [f64; 3] = std::array::from_fn(|i| {
        n[i] * cos_delta + (north[i] * cos_az + east[i] * sin_az) * sin_delta
    });

    let lat = end[2].atan2(end[0].hypot(end[1])).to_degrees();
    let mut lon = end[1].atan2(end[0]).to_degrees();
    if lon <= -180.0 {
        lon += 360.0;
    }
    Point::new(lat, lon)
}

/// Selects how a destination point is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// [`great_circle_point`].
    #[default]
    Haversine,
    /// Unit vector formulation, free of the polar singularity.
    NVector,
}

impl Algorithm {
    pub fn destination(&self, start: &Point, azimuth: f64, distance: f64) -> Point {
        match self {
            Algorithm::Haversine => great_circle_point(start, azimuth, distance),
            Algorithm::NVector => n_vector_point(start, azimuth, distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}', expected 'haversine' or 'n-vector'")]
pub struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "haversine" => Ok(Algorithm::Haversine),
            "n-vector" => Ok(Algorithm::NVector),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Haversine => "haversine",
            Algorithm::NVector => "n-vector",
        };
        f.write_str(name)
    }
}
