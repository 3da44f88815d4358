//! Routing options.

use serde::{Deserialize, Serialize};

/// Settings for [`build_routes_with`](super::build_routes_with).
///
/// # Examples
///
/// ```
/// use zone_routing::planner::RoutingOptions;
///
/// let opts = RoutingOptions::default().with_parallel(true);
/// assert!(opts.parallel());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingOptions {
    parallel: bool,
}

impl RoutingOptions {
    /// Routes zones on the rayon thread pool instead of sequentially.
    ///
    /// Output is identical either way; zones share no mutable state.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether zones are routed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
