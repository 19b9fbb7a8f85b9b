//! Distance and bearing between two known points.

use crate::model::{ahav, hav, EARTH_MEAN_RADIUS};
use crate::point::Point;

/// Great-circle distance in meters.
pub fn distance(from: &Point, to: &Point) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let h = hav(d_lat) + lat1.cos() * lat2.cos() * hav(d_lon);
    EARTH_MEAN_RADIUS * ahav(h.min(1.0))
}

/// Initial bearing from `from` toward `to`, degrees clockwise from north in
/// [0, 360).
pub fn initial_bearing(from: &Point, to: &Point) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative angles
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}
