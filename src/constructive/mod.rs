//! Per-zone route construction.
//!
//! - [`select_start`] — Member nearest to the zone centroid, O(n)
//! - [`nearest_neighbor_route`] — Greedy nearest-neighbor tour, O(n²)

mod nearest_neighbor;
mod start;

pub use nearest_neighbor::nearest_neighbor_route;
pub use start::select_start;
