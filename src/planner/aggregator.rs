//! Per-zone routing and plan-wide aggregation.

use rayon::prelude::*;

use super::RoutingOptions;
use crate::constructive::{nearest_neighbor_route, select_start};
use crate::error::{Error, Result};
use crate::models::{ensure_unique_ids, DeliveryPoint, Partition, Route, SolutionSummary, Zone};

/// Builds one nearest-neighbor route per zone, sequentially.
///
/// Equivalent to [`build_routes_with`] with default options.
///
/// # Examples
///
/// ```
/// use zone_routing::clustering::partition;
/// use zone_routing::models::DeliveryPoint;
/// use zone_routing::planner::build_routes;
///
/// let points = vec![
///     DeliveryPoint::new("a", 0.0, 0.0).unwrap(),
///     DeliveryPoint::new("b", 0.0, 0.1).unwrap(),
///     DeliveryPoint::new("c", 5.0, 5.0).unwrap(),
/// ];
/// let zones = partition(&points, 2, 42).unwrap();
/// let summary = build_routes(&points, &zones).unwrap();
/// assert_eq!(summary.num_zones(), 2);
/// assert_eq!(summary.num_points(), 3);
/// ```
pub fn build_routes(points: &[DeliveryPoint], partition: &Partition) -> Result<SolutionSummary> {
    build_routes_with(points, partition, &RoutingOptions::default())
}

/// Builds one nearest-neighbor route per zone and totals their distances.
///
/// Zones are handled in ascending id order (or fanned out over rayon when
/// [`RoutingOptions::parallel`] is set; the result is the same). Each zone
/// starts at the member nearest its centroid.
///
/// # Errors
///
/// * [`Error::AssignmentMismatch`] if `partition` was built for a different
///   number of points
/// * [`Error::UnknownZone`] if a point is assigned past the last centroid
/// * [`Error::DuplicatePoint`] if two points share an id
/// * [`Error::Zone`] wrapping [`Error::EmptyZone`] or
///   [`Error::UnknownStart`] for the first zone, by id, that failed
pub fn build_routes_with(
    points: &[DeliveryPoint],
    partition: &Partition,
    options: &RoutingOptions,
) -> Result<SolutionSummary> {
    validate_partition(points, partition)?;
    ensure_unique_ids(points)?;

    let zones = partition.zones();
    let results: Vec<Result<Route>> = if options.parallel() {
        zones.par_iter().map(|z| route_zone(points, z)).collect()
    } else {
        zones.iter().map(|z| route_zone(points, z)).collect()
    };
    let routes = results.into_iter().collect::<Result<Vec<_>>>()?;

    let summary = SolutionSummary::from_routes(routes);
    log::info!(
        "routing: done zones={} points={} total_km={:.3}",
        summary.num_zones(),
        summary.num_points(),
        summary.total_distance()
    );
    Ok(summary)
}

fn route_zone(points: &[DeliveryPoint], zone: &Zone) -> Result<Route> {
    let members: Vec<&DeliveryPoint> = zone.members().iter().map(|&i| &points[i]).collect();
    let route = select_start(&zone.centroid(), &members)
        .and_then(|start| nearest_neighbor_route(zone.id(), &members, start))
        .map_err(|e| e.in_zone(zone.id()))?;
    log::debug!(
        "routing.zone: id={} size={} start={} km={:.3}",
        zone.id(),
        route.len(),
        route.start(),
        route.total_distance()
    );
    Ok(route)
}

fn validate_partition(points: &[DeliveryPoint], partition: &Partition) -> Result<()> {
    if partition.assignments().len() != points.len() {
        return Err(Error::AssignmentMismatch {
            expected: points.len(),
            found: partition.assignments().len(),
        });
    }
    for (point, &zone) in points.iter().zip(partition.assignments()) {
        if zone >= partition.zone_count() {
            return Err(Error::UnknownZone {
                point_id: point.id().to_string(),
                zone,
            });
        }
    }
    Ok(())
}
