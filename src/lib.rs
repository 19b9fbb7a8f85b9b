//! Destination points on a spherical Earth.
//!
//! Given a start [`Point`], an azimuth in degrees clockwise from north and a
//! surface distance in meters, [`great_circle_point`] returns the point
//! reached by following the great circle.

pub mod destination;
pub mod error;
pub mod inverse;
pub mod model;
pub mod point;

pub use destination::{great_circle_point, try_great_circle_point, Algorithm};
pub use error::GeoError;
pub use point::Point;
