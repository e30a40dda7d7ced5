//! Geographic coordinate type.

use std::fmt;

use super::DomainError;

/// A validated latitude/longitude pair in degrees.
///
/// Both components are finite and within range. This type guarantees
/// that any `Coordinate` value is valid by construction, so the
/// estimation engine never has to re-check its inputs.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
///
/// let jaydev_vihar = Coordinate::new(20.2961, 85.8245).unwrap();
/// assert_eq!(jaydev_vihar.lat(), 20.2961);
///
/// // Out of range is rejected
/// assert!(Coordinate::new(91.0, 85.0).is_err());
/// assert!(Coordinate::new(20.0, -181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinate(
                "latitude and longitude must be finite numbers",
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinate("longitude must be within [-180, 180]"));
        }
        Ok(Self { lat, lng })
    }

    /// Create a coordinate from a `[lat, lng]` slice.
    ///
    /// This is the wire shape used by the frontend (`fromCoords`/`toCoords`).
    pub fn from_pair(pair: &[f64]) -> Result<Self, DomainError> {
        match pair {
            [lat, lng] => Self::new(*lat, *lng),
            _ => Err(DomainError::CoordinateArity(pair.len())),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
