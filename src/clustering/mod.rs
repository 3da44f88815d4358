//! Zone partitioning.
//!
//! - [`partition`] / [`partition_with`] — Seeded k-means (Lloyd) with
//!   k-means++ initialization, empty-zone reseeding, and restarts

mod config;
mod kmeans;
mod seeding;

pub use config::PartitionConfig;
pub use kmeans::{partition, partition_with};
