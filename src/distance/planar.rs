//! Planar feature-space distance used by the partitioner.
//!
//! Latitude and longitude are treated as Euclidean axes in degrees. At city
//! scale the distortion against the great-circle metric is negligible for
//! grouping purposes; route lengths always use the great-circle metric.

/// Squared Euclidean distance between two feature vectors.
pub fn squared_planar(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    d0 * d0 + d1 * d1
}
