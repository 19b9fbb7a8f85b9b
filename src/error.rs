use thiserror::Error;

/// Domain errors raised by the checked constructors and the hardened solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("inverse haversine argument {0} is outside [0, 1]")]
    HaversineDomain(f64),

    /// The longitude difference divides by the sine of a colatitude that is
    /// (numerically) zero.
    #[error("colatitude {colatitude} rad is too close to a pole")]
    PolarSingularity { colatitude: f64 },
}

pub type Result<T> = std::result::Result<T, GeoError>;
