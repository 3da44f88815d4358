//! Nearest-neighbor tour construction within a zone.
//!
//! Builds an open tour greedily: starting from the designated start point,
//! always move to the closest unvisited member.
//!
//! # Complexity
//!
//! O(n²) time and O(n) memory where n = zone size (n steps, each scanning up
//! to n candidates). Distances are computed during the scan, never stored.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::error::{Error, Result};
use crate::models::{Coordinate, DeliveryPoint, Route};

/// Orders a zone's members with the nearest-neighbor heuristic.
///
/// The tour starts at the member with id `start_id` and repeatedly appends
/// the closest unvisited member by great-circle distance. Ties go to the
/// member listed first in `members`, so the result is deterministic for a
/// fixed member order. The route's distance is the sum of the chosen legs.
///
/// Fails with [`Error::UnknownStart`] if no member has id `start_id`.
///
/// # Examples
///
/// ```
/// use zone_routing::constructive::nearest_neighbor_route;
/// use zone_routing::models::DeliveryPoint;
///
/// let points = vec![
///     DeliveryPoint::new("a", 0.0, 0.0).unwrap(),
///     DeliveryPoint::new("c", 0.0, 3.0).unwrap(),
///     DeliveryPoint::new("b", 0.0, 1.0).unwrap(),
/// ];
/// let members: Vec<&DeliveryPoint> = points.iter().collect();
/// let route = nearest_neighbor_route(0, &members, "a").unwrap();
/// assert_eq!(route.point_ids(), &["a", "b", "c"]);
/// ```
pub fn nearest_neighbor_route(
    zone_id: usize,
    members: &[&DeliveryPoint],
    start_id: &str,
) -> Result<Route> {
    let start = members
        .iter()
        .position(|p| p.id() == start_id)
        .ok_or_else(|| Error::UnknownStart(start_id.to_string()))?;

    let mut order = Vec::with_capacity(members.len());
    order.push(start);
    let mut unvisited: Vec<usize> = (0..members.len()).filter(|&i| i != start).collect();
    let mut current = members[start].coordinate();
    let mut total_distance = 0.0;

    while let Some((slot, leg)) = nearest_unvisited(&current, members, &unvisited) {
        let next = unvisited.remove(slot);
        total_distance += leg;
        order.push(next);
        current = members[next].coordinate();
    }

    let point_ids = order.iter().map(|&i| members[i].id().to_string()).collect();
    let coordinates = order.iter().map(|&i| members[i].coordinate()).collect();
    Ok(Route::new(zone_id, point_ids, coordinates, total_distance))
}

/// Position in `unvisited` of the member closest to `from`, with its distance.
/// The earliest position wins a tie.
fn nearest_unvisited(
    from: &Coordinate,
    members: &[&DeliveryPoint],
    unvisited: &[usize],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, &i) in unvisited.iter().enumerate() {
        let d = from.distance_km(&members[i].coordinate());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((slot, d)),
        }
    }
    best
}
