//! Distance measures.
//!
//! Provides the great-circle metric used for route lengths and the planar
//! feature-space distance used for zoning.

mod great_circle;
mod planar;

pub use great_circle::{great_circle_km, EARTH_RADIUS_KM};
pub use planar::squared_planar;

use crate::models::Coordinate;

/// Total great-circle length of a path visiting `coordinates` in order.
///
/// Zero for paths with fewer than two coordinates.
pub fn path_length_km(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|w| w[0].distance_km(&w[1]))
        .sum()
}
