//! Error type shared by every stage of the planner.

use thiserror::Error as ThisError;

/// Failures raised while partitioning points or building zone routes.
///
/// All variants are validation failures: the computation is deterministic, so
/// retrying with the same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite value.
    #[error("invalid coordinate{}: latitude={latitude}, longitude={longitude}", point_label(.point_id))]
    InvalidCoordinate {
        /// Point the coordinate belongs to, when known.
        point_id: Option<String>,
        /// Offending latitude in degrees.
        latitude: f64,
        /// Offending longitude in degrees.
        longitude: f64,
    },
    /// Fewer distinct locations than requested zones.
    #[error("insufficient points: {distinct} distinct locations for {zones} zones")]
    InsufficientPoints {
        /// Number of distinct coordinates in the input.
        distinct: usize,
        /// Requested zone count.
        zones: usize,
    },
    /// A zone count of zero was requested.
    #[error("zone count must be positive")]
    InvalidZoneCount,
    /// Two input points share an identifier.
    #[error("duplicate delivery point id {0:?}")]
    DuplicatePoint(String),
    /// A zone with no members reached the routing stage.
    #[error("zone has no members")]
    EmptyZone,
    /// The requested start point is not a member of the zone.
    #[error("start point {0:?} is not a member of the zone")]
    UnknownStart(String),
    /// The zone assignment does not cover the point set one-to-one.
    #[error("zone assignment covers {found} points, expected {expected}")]
    AssignmentMismatch {
        /// Number of points handed to the router.
        expected: usize,
        /// Number of entries in the assignment.
        found: usize,
    },
    /// A point is assigned to a zone that has no centroid.
    #[error("point {point_id:?} assigned to unknown zone {zone}")]
    UnknownZone {
        /// Point carrying the bad assignment.
        point_id: String,
        /// Zone id it was assigned to.
        zone: usize,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A failure raised while routing a specific zone.
    #[error("zone {zone}: {source}")]
    Zone {
        /// Zone being routed when the failure occurred.
        zone: usize,
        /// Underlying failure.
        source: Box<Error>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub(crate) fn in_zone(self, zone: usize) -> Self {
        Self::Zone {
            zone,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, unwrapping any zone tags.
    pub fn root(&self) -> &Error {
        match self {
            Self::Zone { source, .. } => source.root(),
            other => other,
        }
    }
}

fn point_label(point_id: &Option<String>) -> String {
    match point_id {
        Some(id) => format!(" for point {id:?}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_message() {
        let err = Error::InvalidCoordinate {
            point_id: Some("E_1".into()),
            latitude: 95.0,
            longitude: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinate for point \"E_1\": latitude=95, longitude=0"
        );

        let bare = Error::InvalidCoordinate {
            point_id: None,
            latitude: 0.0,
            longitude: 200.0,
        };
        assert_eq!(
            bare.to_string(),
            "invalid coordinate: latitude=0, longitude=200"
        );
    }

    #[test]
    fn test_zone_tag_wraps_source() {
        let err = Error::EmptyZone.in_zone(2);
        assert_eq!(err.to_string(), "zone 2: zone has no members");
        assert_eq!(err.root(), &Error::EmptyZone);
        assert!(std::error::Error::source(&err).is_some());
    }
}
