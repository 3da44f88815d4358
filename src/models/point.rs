//! Coordinate and delivery point types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::distance::great_circle_km;
use crate::error::{Error, Result};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A validated latitude/longitude pair in degrees.
///
/// Construction rejects non-finite values, latitudes outside [-90, 90] and
/// longitudes outside [-180, 180], so every `Coordinate` can be fed to the
/// great-circle metric without further checks.
///
/// # Examples
///
/// ```
/// use zone_routing::models::Coordinate;
///
/// let sp = Coordinate::new(-23.55, -46.63).unwrap();
/// assert_eq!(sp.latitude(), -23.55);
/// assert!(Coordinate::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Creates a coordinate, failing with [`Error::InvalidCoordinate`] when
    /// either component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !is_valid(latitude, longitude) {
            return Err(Error::InvalidCoordinate {
                point_id: None,
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a coordinate known to be in range (e.g. the mean of valid ones).
    pub(crate) fn from_valid(latitude: f64, longitude: f64) -> Self {
        debug_assert!(is_valid(latitude, longitude));
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        // Both sides were range-checked on construction.
        great_circle_km(self.latitude, self.longitude, other.latitude, other.longitude)
            .unwrap_or(f64::NAN)
    }

    /// Feature-space vector `[latitude, longitude]` used by the partitioner.
    pub(crate) fn features(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

pub(crate) fn is_valid(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// A geolocated delivery stop.
///
/// Points are created by the caller's data source and consumed read-only by
/// the planner. Identifiers must be unique within one planning run.
///
/// # Examples
///
/// ```
/// use zone_routing::models::DeliveryPoint;
///
/// let p = DeliveryPoint::new("E_0", -23.5, -46.6).unwrap();
/// assert_eq!(p.id(), "E_0");
/// assert_eq!(p.coordinate().longitude(), -46.6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    id: String,
    #[serde(flatten)]
    coordinate: Coordinate,
}

impl DeliveryPoint {
    /// Creates a delivery point, tagging any coordinate failure with `id`.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let id = id.into();
        match Coordinate::new(latitude, longitude) {
            Ok(coordinate) => Ok(Self { id, coordinate }),
            Err(_) => Err(Error::InvalidCoordinate {
                point_id: Some(id),
                latitude,
                longitude,
            }),
        }
    }

    /// Point identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Point location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_km(&self, other: &DeliveryPoint) -> f64 {
        self.coordinate.distance_km(&other.coordinate)
    }
}

/// Fails with [`Error::DuplicatePoint`] on the first repeated identifier.
pub(crate) fn ensure_unique_ids(points: &[DeliveryPoint]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !seen.insert(p.id()) {
            return Err(Error::DuplicatePoint(p.id().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_point_error_carries_id() {
        let err = DeliveryPoint::new("E_7", 95.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCoordinate {
                point_id: Some("E_7".into()),
                latitude: 95.0,
                longitude: 10.0,
            }
        );
    }

    #[test]
    fn test_point_accessors() {
        let p = DeliveryPoint::new("a", 1.5, -2.25).expect("valid");
        assert_eq!(p.id(), "a");
        assert_eq!(p.latitude(), 1.5);
        assert_eq!(p.longitude(), -2.25);
        assert_eq!(p.coordinate().features(), [1.5, -2.25]);
    }

    #[test]
    fn test_ensure_unique_ids() {
        let a = DeliveryPoint::new("a", 0.0, 0.0).expect("valid");
        let b = DeliveryPoint::new("b", 0.0, 0.0).expect("valid");
        assert!(ensure_unique_ids(&[a.clone(), b]).is_ok());
        assert_eq!(
            ensure_unique_ids(&[a.clone(), a]).unwrap_err(),
            Error::DuplicatePoint("a".into())
        );
    }

    #[test]
    fn test_point_distance_zero_to_self() {
        let p = DeliveryPoint::new("a", -23.5, -46.6).expect("valid");
        assert_eq!(p.distance_km(&p), 0.0);
    }
}
