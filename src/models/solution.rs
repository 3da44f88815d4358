//! Plan-wide solution summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Route;

/// Routes for every zone plus the grand total distance.
///
/// Routes are keyed by zone id; iteration is in ascending zone order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSummary {
    routes: BTreeMap<usize, Route>,
    total_distance: f64,
}

impl SolutionSummary {
    /// Collects per-zone routes, summing their distances in zone order.
    pub(crate) fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let routes: BTreeMap<usize, Route> =
            routes.into_iter().map(|r| (r.zone_id(), r)).collect();
        let total_distance = routes.values().map(Route::total_distance).sum();
        Self {
            routes,
            total_distance,
        }
    }

    /// Route for the given zone, if any.
    pub fn route(&self, zone_id: usize) -> Option<&Route> {
        self.routes.get(&zone_id)
    }

    /// Routes in ascending zone order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Number of routed zones.
    pub fn num_zones(&self) -> usize {
        self.routes.len()
    }

    /// Total number of stops across all routes.
    pub fn num_points(&self) -> usize {
        self.routes.values().map(Route::len).sum()
    }

    /// Sum of route distances in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Serializes the summary to pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
