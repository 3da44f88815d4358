//! Lloyd's k-means partitioning over (latitude, longitude) features.
//!
//! # Algorithm
//!
//! Starting from k-means++ seeds, alternate two steps until no point changes
//! zone or the iteration budget runs out:
//!
//! 1. Assign each point to the centroid with the smallest planar distance.
//! 2. Move each centroid to the mean of its assigned points.
//!
//! A zone left without members after step 1 is reseeded with the point lying
//! farthest from its own centroid, so the output always has exactly K
//! non-empty zones. The whole procedure runs `restarts` times from
//! differently seeded initializations and the lowest-inertia run is kept.
//!
//! # Complexity
//!
//! O(n·k) per iteration, O(restarts · max_iterations · n·k) worst case.
//!
//! # Reference
//!
//! Lloyd, S.P. (1982). "Least squares quantization in PCM", *IEEE
//! Transactions on Information Theory* 28(2), 129-137.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::seeding::kmeans_plus_plus;
use super::PartitionConfig;
use crate::distance::squared_planar;
use crate::error::{Error, Result};
use crate::models::{ensure_unique_ids, Coordinate, DeliveryPoint, Partition};

const UNASSIGNED: usize = usize::MAX;

/// Partitions `points` into `k` zones with the default configuration and the
/// given seed.
///
/// See [`partition_with`] for failure conditions.
///
/// # Examples
///
/// ```
/// use zone_routing::clustering::partition;
/// use zone_routing::models::DeliveryPoint;
///
/// let points = vec![
///     DeliveryPoint::new("a", 0.0, 0.0).unwrap(),
///     DeliveryPoint::new("b", 0.0, 0.1).unwrap(),
///     DeliveryPoint::new("c", 5.0, 5.0).unwrap(),
///     DeliveryPoint::new("d", 5.0, 5.1).unwrap(),
/// ];
/// let p = partition(&points, 2, 42).unwrap();
/// assert_eq!(p.zone_count(), 2);
/// assert_eq!(p.zone_of(0), p.zone_of(1));
/// assert_eq!(p.zone_of(2), p.zone_of(3));
/// assert_ne!(p.zone_of(0), p.zone_of(2));
/// ```
pub fn partition(points: &[DeliveryPoint], k: usize, seed: u64) -> Result<Partition> {
    partition_with(points, k, &PartitionConfig::default().with_seed(seed))
}

/// Partitions `points` into `k` zones.
///
/// Every point lands in exactly one zone and every zone id in `0..k` has at
/// least one member. The result depends only on the input order, `k` and the
/// configuration.
///
/// # Errors
///
/// * [`Error::InvalidZoneCount`] if `k == 0`
/// * [`Error::InvalidConfig`] if the configuration is out of range
/// * [`Error::DuplicatePoint`] if two points share an id
/// * [`Error::InsufficientPoints`] if there are fewer than `k` distinct
///   locations
pub fn partition_with(
    points: &[DeliveryPoint],
    k: usize,
    config: &PartitionConfig,
) -> Result<Partition> {
    config.validate()?;
    if k == 0 {
        return Err(Error::InvalidZoneCount);
    }
    ensure_unique_ids(points)?;

    let distinct = distinct_locations(points);
    if distinct < k {
        return Err(Error::InsufficientPoints { distinct, zones: k });
    }

    let features: Vec<[f64; 2]> = points.iter().map(|p| p.coordinate().features()).collect();

    let mut seeder = StdRng::seed_from_u64(config.seed());
    let mut best: Option<LloydRun> = None;
    for restart in 0..config.restarts() {
        let run_seed = seeder.random::<u64>();
        let run = lloyd(&features, k, config.max_iterations(), run_seed);
        log::debug!(
            "partition.restart: idx={restart} seed={run_seed} iterations={} converged={} inertia={:.6}",
            run.iterations,
            run.converged,
            run.inertia
        );
        let better = match &best {
            Some(b) => run.inertia < b.inertia,
            None => true,
        };
        if better {
            best = Some(run);
        }
    }
    let best = best.ok_or_else(|| Error::invalid_config("restarts must be at least 1"))?;

    if !best.converged {
        log::warn!(
            "partition: iteration budget of {} exhausted before convergence",
            config.max_iterations()
        );
    }
    if best.reseeds > 0 {
        log::warn!("partition: reseeded {} empty zone(s)", best.reseeds);
    }
    log::info!(
        "partition: done n={} k={k} iterations={} inertia={:.6}",
        points.len(),
        best.iterations,
        best.inertia
    );

    let centroids = best.centroids.iter().map(to_coordinate).collect();
    Ok(Partition::new(
        best.assignments,
        centroids,
        best.inertia,
        best.iterations,
    ))
}

/// Outcome of a single seeded Lloyd run.
struct LloydRun {
    assignments: Vec<usize>,
    centroids: Vec<[f64; 2]>,
    inertia: f64,
    iterations: usize,
    converged: bool,
    reseeds: usize,
}

fn lloyd(features: &[[f64; 2]], k: usize, max_iterations: usize, seed: u64) -> LloydRun {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = kmeans_plus_plus(features, k, &mut rng);
    let mut assignments = vec![UNASSIGNED; features.len()];
    let mut iterations = 0;
    let mut converged = false;
    let mut reseeds = 0;

    while iterations < max_iterations {
        iterations += 1;
        let changed = assign_points(features, &centroids, &mut assignments);
        let moved = reseed_empty_zones(features, &centroids, &mut assignments, k);
        reseeds += moved;
        update_centroids(features, &assignments, &mut centroids);
        if !changed && moved == 0 {
            converged = true;
            break;
        }
    }

    let inertia = features
        .iter()
        .zip(&assignments)
        .map(|(f, &z)| squared_planar(f, &centroids[z]))
        .sum();

    LloydRun {
        assignments,
        centroids,
        inertia,
        iterations,
        converged,
        reseeds,
    }
}

/// Assigns every point to its nearest centroid. A point keeps its current
/// zone unless another centroid is strictly closer; unassigned points take
/// the lowest-id nearest centroid. Returns whether any assignment changed.
fn assign_points(features: &[[f64; 2]], centroids: &[[f64; 2]], assignments: &mut [usize]) -> bool {
    let mut changed = false;
    for (f, current) in features.iter().zip(assignments.iter_mut()) {
        let (mut best, mut best_d) = if *current == UNASSIGNED {
            (UNASSIGNED, f64::INFINITY)
        } else {
            (*current, squared_planar(f, &centroids[*current]))
        };
        for (z, c) in centroids.iter().enumerate() {
            let d = squared_planar(f, c);
            if d < best_d {
                best = z;
                best_d = d;
            }
        }
        if best != *current {
            *current = best;
            changed = true;
        }
    }
    changed
}

/// Gives each empty zone the point farthest from its own centroid, taken only
/// from zones that keep at least one member. Returns the number of moves.
fn reseed_empty_zones(
    features: &[[f64; 2]],
    centroids: &[[f64; 2]],
    assignments: &mut [usize],
    k: usize,
) -> usize {
    let mut sizes = vec![0usize; k];
    for &z in assignments.iter() {
        sizes[z] += 1;
    }

    let mut moved = 0;
    for zone in 0..k {
        if sizes[zone] > 0 {
            continue;
        }
        let mut donor: Option<(usize, f64)> = None;
        for (i, f) in features.iter().enumerate() {
            let from = assignments[i];
            if sizes[from] < 2 {
                continue;
            }
            let d = squared_planar(f, &centroids[from]);
            match donor {
                Some((_, best)) if d <= best => {}
                _ => donor = Some((i, d)),
            }
        }
        if let Some((i, _)) = donor {
            sizes[assignments[i]] -= 1;
            assignments[i] = zone;
            sizes[zone] = 1;
            moved += 1;
        }
    }
    moved
}

/// Moves each non-empty zone's centroid to the mean of its members.
fn update_centroids(features: &[[f64; 2]], assignments: &[usize], centroids: &mut [[f64; 2]]) {
    let mut sums = vec![[0.0f64; 2]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for (f, &z) in features.iter().zip(assignments) {
        sums[z][0] += f[0];
        sums[z][1] += f[1];
        counts[z] += 1;
    }
    for ((c, s), &n) in centroids.iter_mut().zip(&sums).zip(&counts) {
        if n > 0 {
            *c = [s[0] / n as f64, s[1] / n as f64];
        }
    }
}

fn distinct_locations(points: &[DeliveryPoint]) -> usize {
    // Adding 0.0 folds -0.0 into 0.0 so both spell the same location.
    points
        .iter()
        .map(|p| ((p.latitude() + 0.0).to_bits(), (p.longitude() + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

fn to_coordinate(c: &[f64; 2]) -> Coordinate {
    // A mean of in-range values stays in range up to rounding.
    Coordinate::from_valid(c[0].clamp(-90.0, 90.0), c[1].clamp(-180.0, 180.0))
}
