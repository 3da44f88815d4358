//! Cluster-then-route planning.
//!
//! [`build_routes`] turns a [`Partition`] into one nearest-neighbor route per
//! zone; [`plan`] runs partitioning and routing in one call.

mod aggregator;
mod options;

pub use aggregator::{build_routes, build_routes_with};
pub use options::RoutingOptions;

use serde::{Deserialize, Serialize};

use crate::clustering::{partition_with, PartitionConfig};
use crate::error::Result;
use crate::models::{DeliveryPoint, Partition, SolutionSummary};

/// A complete delivery plan: the zoning and the routes built on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Zone assignment and centroids.
    pub partition: Partition,
    /// Per-zone routes and total distance.
    pub summary: SolutionSummary,
}

/// Partitions `points` into `k` zones and routes each zone.
///
/// # Examples
///
/// ```
/// use zone_routing::clustering::PartitionConfig;
/// use zone_routing::models::DeliveryPoint;
/// use zone_routing::planner::{plan, RoutingOptions};
///
/// let points: Vec<DeliveryPoint> = (0..12)
///     .map(|i| {
///         let lat = -23.6 + (i % 4) as f64 * 0.05;
///         let lon = -46.7 + (i / 4) as f64 * 0.05;
///         DeliveryPoint::new(format!("E_{i}"), lat, lon).unwrap()
///     })
///     .collect();
/// let result = plan(&points, 3, &PartitionConfig::default(), &RoutingOptions::default()).unwrap();
/// assert_eq!(result.summary.num_zones(), 3);
/// assert_eq!(result.summary.num_points(), 12);
/// ```
pub fn plan(
    points: &[DeliveryPoint],
    k: usize,
    config: &PartitionConfig,
    options: &RoutingOptions,
) -> Result<Plan> {
    let partition = partition_with(points, k, config)?;
    let summary = build_routes_with(points, &partition, options)?;
    Ok(Plan { partition, summary })
}
