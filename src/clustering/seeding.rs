//! k-means++ centroid seeding.
//!
//! # Algorithm
//!
//! The first centroid is a uniformly random point. Each further centroid is
//! drawn with probability proportional to its squared distance from the
//! nearest centroid chosen so far, which spreads the initial centroids out.
//!
//! # Reference
//!
//! Arthur, D. & Vassilvitskii, S. (2007). "k-means++: The Advantages of
//! Careful Seeding", *Proc. SODA*, 1027-1035.

use rand::Rng;

use crate::distance::squared_planar;

/// Picks `k` initial centroids from `features`.
///
/// `features` must be non-empty. When at least `k` distinct locations exist,
/// the returned centroids are pairwise distinct.
pub(crate) fn kmeans_plus_plus<R: Rng>(
    features: &[[f64; 2]],
    k: usize,
    rng: &mut R,
) -> Vec<[f64; 2]> {
    let n = features.len();
    let mut centroids = Vec::with_capacity(k);

    let first = features[rng.random_range(0..n)];
    centroids.push(first);
    let mut closest: Vec<f64> = features.iter().map(|f| squared_planar(f, &first)).collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().sum();
        let next = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0;
            closest
                .iter()
                .position(|&d| {
                    acc += d;
                    d > 0.0 && acc > target
                })
                .or_else(|| closest.iter().rposition(|&d| d > 0.0))
                .unwrap_or(0)
        } else {
            rng.random_range(0..n)
        };

        let chosen = features[next];
        centroids.push(chosen);
        for (c, f) in closest.iter_mut().zip(features) {
            *c = c.min(squared_planar(f, &chosen));
        }
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeds_are_distinct_points() {
        let features = vec![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]];
        let mut rng = StdRng::seed_from_u64(42);
        let centroids = kmeans_plus_plus(&features, 4, &mut rng);
        assert_eq!(centroids.len(), 4);
        for (i, a) in centroids.iter().enumerate() {
            assert!(features.contains(a));
            for b in &centroids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_duplicates_never_reselected() {
        let features = vec![[1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [2.0, 2.0]];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let centroids = kmeans_plus_plus(&features, 2, &mut rng);
            assert_ne!(centroids[0], centroids[1]);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let features: Vec<[f64; 2]> = (0..30)
            .map(|i| [i as f64 * 0.1, (i * 7 % 11) as f64 * 0.1])
            .collect();
        let a = kmeans_plus_plus(&features, 5, &mut StdRng::seed_from_u64(3));
        let b = kmeans_plus_plus(&features, 5, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
