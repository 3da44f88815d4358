//! Zone start point selection.

use crate::error::{Error, Result};
use crate::models::{Coordinate, DeliveryPoint};

/// Returns the id of the member closest (great-circle) to the zone centroid.
///
/// Ties go to the member listed first. Fails with [`Error::EmptyZone`] when
/// `members` is empty.
///
/// # Examples
///
/// ```
/// use zone_routing::constructive::select_start;
/// use zone_routing::models::{Coordinate, DeliveryPoint};
///
/// let points = vec![
///     DeliveryPoint::new("far", 0.0, 3.0).unwrap(),
///     DeliveryPoint::new("near", 0.0, 1.2).unwrap(),
/// ];
/// let members: Vec<&DeliveryPoint> = points.iter().collect();
/// let centroid = Coordinate::new(0.0, 1.0).unwrap();
/// assert_eq!(select_start(&centroid, &members).unwrap(), "near");
/// ```
pub fn select_start<'a>(centroid: &Coordinate, members: &[&'a DeliveryPoint]) -> Result<&'a str> {
    let mut best: Option<(&'a DeliveryPoint, f64)> = None;
    for &point in members {
        let d = centroid.distance_km(&point.coordinate());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((point, d)),
        }
    }
    best.map(|(p, _)| p.id()).ok_or(Error::EmptyZone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(&str, f64, f64)]) -> Vec<DeliveryPoint> {
        pairs
            .iter()
            .map(|&(id, lat, lon)| DeliveryPoint::new(id, lat, lon).expect("valid"))
            .collect()
    }

    #[test]
    fn test_picks_closest_to_centroid() {
        let points = pts(&[("a", 0.0, 0.0), ("b", 0.4, 0.4), ("c", 1.0, 1.0)]);
        let members: Vec<&DeliveryPoint> = points.iter().collect();
        let centroid = Coordinate::new(0.5, 0.5).expect("valid");
        assert_eq!(select_start(&centroid, &members).expect("non-empty"), "b");
    }

    #[test]
    fn test_tie_goes_to_first_member() {
        let points = pts(&[("x", 0.0, 1.0), ("y", 0.0, -1.0)]);
        let centroid = Coordinate::new(0.0, 0.0).expect("valid");

        let forward: Vec<&DeliveryPoint> = points.iter().collect();
        assert_eq!(select_start(&centroid, &forward).expect("non-empty"), "x");

        let reversed: Vec<&DeliveryPoint> = points.iter().rev().collect();
        assert_eq!(select_start(&centroid, &reversed).expect("non-empty"), "y");
    }

    #[test]
    fn test_single_member() {
        let points = pts(&[("only", 10.0, 20.0)]);
        let members: Vec<&DeliveryPoint> = points.iter().collect();
        let centroid = Coordinate::new(-5.0, 3.0).expect("valid");
        assert_eq!(select_start(&centroid, &members).expect("non-empty"), "only");
    }

    #[test]
    fn test_empty_zone() {
        let centroid = Coordinate::new(0.0, 0.0).expect("valid");
        assert_eq!(select_start(&centroid, &[]).unwrap_err(), Error::EmptyZone);
    }
}
