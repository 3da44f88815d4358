//! Zone route type.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// An ordered visiting sequence over one zone's points.
///
/// The sequence is a permutation of the zone's members; `total_distance` is
/// the sum of great-circle distances between consecutive stops (the tour is
/// open, it does not return to the start).
///
/// # Examples
///
/// ```
/// use zone_routing::constructive::nearest_neighbor_route;
/// use zone_routing::models::DeliveryPoint;
///
/// let members = vec![DeliveryPoint::new("solo", 10.0, 10.0).unwrap()];
/// let refs: Vec<&DeliveryPoint> = members.iter().collect();
/// let route = nearest_neighbor_route(3, &refs, "solo").unwrap();
/// assert_eq!(route.zone_id(), 3);
/// assert_eq!(route.start(), "solo");
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    zone_id: usize,
    point_ids: Vec<String>,
    coordinates: Vec<Coordinate>,
    total_distance: f64,
}

impl Route {
    pub(crate) fn new(
        zone_id: usize,
        point_ids: Vec<String>,
        coordinates: Vec<Coordinate>,
        total_distance: f64,
    ) -> Self {
        debug_assert_eq!(point_ids.len(), coordinates.len());
        Self {
            zone_id,
            point_ids,
            coordinates,
            total_distance,
        }
    }

    /// Zone this route serves.
    pub fn zone_id(&self) -> usize {
        self.zone_id
    }

    /// Point identifiers in visiting order.
    pub fn point_ids(&self) -> &[String] {
        &self.point_ids
    }

    /// Point coordinates in visiting order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Identifier of the first stop.
    pub fn start(&self) -> &str {
        self.point_ids.first().map(String::as_str).unwrap_or_default()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Total tour length in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let a = Coordinate::new(0.0, 0.0).expect("valid");
        let b = Coordinate::new(0.0, 1.0).expect("valid");
        let d = a.distance_km(&b);
        let r = Route::new(1, vec!["a".into(), "b".into()], vec![a, b], d);
        assert_eq!(r.zone_id(), 1);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.start(), "a");
        assert_eq!(r.point_ids(), &["a".to_string(), "b".to_string()]);
        assert_eq!(r.coordinates(), &[a, b]);
        assert_eq!(r.total_distance(), d);
    }
}
