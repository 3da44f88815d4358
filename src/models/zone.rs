//! Zone and partition types.

use serde::{Deserialize, Serialize};

use super::{Coordinate, DeliveryPoint};
use crate::distance::squared_planar;
use crate::error::{Error, Result};

/// A group of delivery points served by one route.
///
/// Members are indices into the point slice the zone was derived from, kept
/// in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    id: usize,
    centroid: Coordinate,
    members: Vec<usize>,
}

impl Zone {
    /// Zone identifier (dense, `0..K`).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Final centroid in feature space; not necessarily a delivery point.
    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    /// Indices of member points in input order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the zone has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Identifiers of the member points, in input order.
    pub fn member_ids<'a>(&self, points: &'a [DeliveryPoint]) -> Vec<&'a str> {
        self.members.iter().map(|&i| points[i].id()).collect()
    }
}

/// Result of partitioning a point set into zones.
///
/// `assignments[i]` is the zone id of the i-th input point; `centroids[z]` is
/// the final centroid of zone `z`.
///
/// # Examples
///
/// ```
/// use zone_routing::models::{Coordinate, DeliveryPoint, Partition};
///
/// let points = vec![
///     DeliveryPoint::new("a", 0.0, 0.0).unwrap(),
///     DeliveryPoint::new("b", 0.0, 1.0).unwrap(),
/// ];
/// let centroids = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
/// ];
/// let partition = Partition::from_assignments(&points, vec![0, 1], centroids).unwrap();
/// assert_eq!(partition.zone_count(), 2);
/// assert_eq!(partition.zone_sizes(), vec![1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    assignments: Vec<usize>,
    centroids: Vec<Coordinate>,
    inertia: f64,
    iterations: usize,
}

impl Partition {
    pub(crate) fn new(
        assignments: Vec<usize>,
        centroids: Vec<Coordinate>,
        inertia: f64,
        iterations: usize,
    ) -> Self {
        Self {
            assignments,
            centroids,
            inertia,
            iterations,
        }
    }

    /// Builds a partition from an externally computed assignment.
    ///
    /// Fails with [`Error::AssignmentMismatch`] if `assignments` does not
    /// cover `points` one-to-one, or [`Error::UnknownZone`] if a point refers
    /// to a zone without a centroid.
    pub fn from_assignments(
        points: &[DeliveryPoint],
        assignments: Vec<usize>,
        centroids: Vec<Coordinate>,
    ) -> Result<Self> {
        if assignments.len() != points.len() {
            return Err(Error::AssignmentMismatch {
                expected: points.len(),
                found: assignments.len(),
            });
        }
        let mut inertia = 0.0;
        for (point, &zone) in points.iter().zip(&assignments) {
            let centroid = centroids.get(zone).ok_or_else(|| Error::UnknownZone {
                point_id: point.id().to_string(),
                zone,
            })?;
            inertia += squared_planar(&point.coordinate().features(), &centroid.features());
        }
        Ok(Self::new(assignments, centroids, inertia, 0))
    }

    /// Number of zones (K).
    pub fn zone_count(&self) -> usize {
        self.centroids.len()
    }

    /// Zone id per input point.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Zone id of the i-th input point.
    pub fn zone_of(&self, index: usize) -> Option<usize> {
        self.assignments.get(index).copied()
    }

    /// Final centroid per zone.
    pub fn centroids(&self) -> &[Coordinate] {
        &self.centroids
    }

    /// Sum of squared feature-space distances from each point to its centroid.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Lloyd iterations run by the winning restart (0 for external partitions).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Member count per zone, indexed by zone id.
    pub fn zone_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.zone_count()];
        for &z in &self.assignments {
            if let Some(s) = sizes.get_mut(z) {
                *s += 1;
            }
        }
        sizes
    }

    /// Materializes the zones in ascending id order.
    ///
    /// Members keep input order. Assignments to unknown zones are ignored
    /// here; [`Partition::from_assignments`] and the router reject them.
    pub fn zones(&self) -> Vec<Zone> {
        let mut zones: Vec<Zone> = self
            .centroids
            .iter()
            .enumerate()
            .map(|(id, &centroid)| Zone {
                id,
                centroid,
                members: Vec::new(),
            })
            .collect();
        for (i, &z) in self.assignments.iter().enumerate() {
            if let Some(zone) = zones.get_mut(z) {
                zone.members.push(i);
            }
        }
        zones
    }
}
