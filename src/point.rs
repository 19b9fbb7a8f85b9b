use std::fmt;

use crate::error::{GeoError, Result};

/// A geographic position in degrees with an optional label.
///
/// Latitude and longitude are fixed at construction, the description can be
/// changed at any time. [`Point::new`] accepts any value, use
/// [`Point::try_new`] to reject coordinates outside their physical ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
    description: Option<String>,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            description: None,
        }
    }

    pub fn with_description(lat: f64, lon: f64, description: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            description: Some(description.into()),
        }
    }

    /// Checked constructor: latitude must lie in [-90, 90] and longitude in
    /// [-180, 180].
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        check_finite("latitude", lat)?;
        check_finite("longitude", lon)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self::new(lat, lon))
    }

    pub fn try_with_description(
        lat: f64,
        lon: f64,
        description: impl Into<String>,
    ) -> Result<Self> {
        let mut point = Self::try_new(lat, lon)?;
        point.description = Some(description.into());
        Ok(point)
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Stores the description as given, blank strings included.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// `[latitude, longitude]`, always in that order.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeoError::NonFinite { name, value })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{{Lon={:.6}, Lat={:.6}", self.lon, self.lat)?;
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => {
                write!(f, ", Description: {description}}}")
            }
            _ => f.write_str("}"),
        }
    }
}

// geo keeps x = longitude, y = latitude.
impl From<Point> for geo::Point {
    fn from(point: Point) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

impl From<geo::Point> for Point {
    fn from(point: geo::Point) -> Self {
        Point::new(point.y(), point.x())
    }
}
