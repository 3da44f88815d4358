//! Domain model types for cluster-then-route planning.
//!
//! Delivery points with validated coordinates, zones produced by the
//! partitioner, per-zone routes, and the plan-wide summary.

mod point;
mod route;
mod solution;
mod zone;

pub(crate) use point::{ensure_unique_ids, is_valid};
pub use point::{Coordinate, DeliveryPoint};
pub use route::Route;
pub use solution::SolutionSummary;
pub use zone::{Partition, Zone};
