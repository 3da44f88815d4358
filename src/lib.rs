//! # zone-routing
//!
//! Cluster-then-route planning for last-mile delivery: points are grouped
//! into K service zones with seeded k-means, then each zone gets a greedy
//! nearest-neighbor visiting order measured in great-circle kilometers.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (DeliveryPoint, Zone, Partition, Route, SolutionSummary)
//! - [`distance`] — Great-circle metric, path length, planar feature distance
//! - [`clustering`] — Zone partitioning (k-means++ seeded Lloyd iterations)
//! - [`constructive`] — Zone start selection and nearest-neighbor tours
//! - [`planner`] — Per-zone routing, aggregation, and the one-shot [`plan`]
//!
//! ## Example
//!
//! ```
//! use zone_routing::models::DeliveryPoint;
//! use zone_routing::{build_routes, partition};
//!
//! let points = vec![
//!     DeliveryPoint::new("E_0", -23.50, -46.60).unwrap(),
//!     DeliveryPoint::new("E_1", -23.51, -46.61).unwrap(),
//!     DeliveryPoint::new("E_2", -23.80, -46.30).unwrap(),
//!     DeliveryPoint::new("E_3", -23.81, -46.31).unwrap(),
//! ];
//! let zones = partition(&points, 2, 42).unwrap();
//! let summary = build_routes(&points, &zones).unwrap();
//! assert_eq!(summary.num_points(), 4);
//! assert!(summary.total_distance() > 0.0);
//! ```

pub mod clustering;
pub mod constructive;
pub mod distance;
mod error;
pub mod models;
pub mod planner;

pub use clustering::partition;
pub use error::{Error, Result};
pub use planner::{build_routes, plan};
