//! Geographic coordinate type.

use std::fmt;

/// Error returned when constructing coordinates outside the valid ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A valid latitude/longitude pair.
///
/// Latitude is restricted to `[-90, 90]` and longitude to `[-180, 180]`,
/// both finite. This type guarantees that any `Coordinates` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Coordinates;
///
/// let santiago = Coordinates::new(-33.4419, -70.6453).unwrap();
/// assert_eq!(santiago.latitude(), -33.4419);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinates::new(200.0, 10.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Construct coordinates, validating both components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinates {
                reason: "components must be finite numbers",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Coordinates { lat, lng })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lng)
    }
}

/// Formats as `lat,lng`, the shape the routing service expects for
/// its `point` query parameters.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
