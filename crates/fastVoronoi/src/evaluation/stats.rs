//! Dispersion statistics over a single partition.
//!
//! ## Purpose
//!
//! This module provides the per-partition aggregations fed to
//! [`parallel_reduce`](crate::engine::reduce::parallel_reduce): spread of the
//! points around the partition centroid, measured with the L∞ distance.
//!
//! ## Design notes
//!
//! * **Population stddev**: Divides by `n`, not `n - 1`.
//! * **Selection median**: `select_nth_unstable_by` at `n / 2`; for even `n`
//!   this is the upper of the two middle values, not their average.
//! * **Empty partitions**: Every statistic returns zero. For `median` and
//!   `diameter` this is an explicit guard; for `stddev` it falls out of the
//!   arithmetic because no term is ever accumulated.
//!
//! ## Invariants
//!
//! * Statistics are pure functions of the partition's point multiset.

// External dependencies
use num_traits::Float;
use std::cmp::Ordering;

// Internal dependencies
use crate::engine::reduce::{parallel_reduce, sequential_reduce};
use crate::primitives::errors::VoronoiError;
use crate::primitives::partition::Partition;

// ============================================================================
// Statistic Selection
// ============================================================================

/// Statistic computed per partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Root mean squared distance to the centroid.
    StdDev,
    /// Median distance to the centroid.
    Median,
    /// Largest distance between two points of the partition.
    Diameter,
}

impl Statistic {
    pub fn apply<T: Float, const D: usize>(self, partition: &Partition<T, D>) -> T {
        match self {
            Statistic::StdDev => stddev(partition),
            Statistic::Median => median(partition),
            Statistic::Diameter => diameter(partition),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Statistic::StdDev => "stddev",
            Statistic::Median => "median",
            Statistic::Diameter => "diameter",
        }
    }
}

/// Compute `statistic` for every partition, in partition order.
pub fn evaluate<T, const D: usize>(
    partitions: &[Partition<T, D>],
    statistic: Statistic,
    workers: usize,
    parallel: bool,
) -> Result<Vec<T>, VoronoiError>
where
    T: Float + Default + Send + Sync,
{
    if parallel {
        parallel_reduce(partitions, workers, |p| statistic.apply(p))
    } else {
        Ok(sequential_reduce(partitions, |p| statistic.apply(p)))
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Population standard deviation of the distances to the centroid.
pub fn stddev<T: Float, const D: usize>(partition: &Partition<T, D>) -> T {
    let center = partition.centroid();
    let size = T::from(partition.len()).unwrap_or_else(T::nan);

    let mut variance = T::zero();
    for point in partition.points() {
        let dist = point.distance(&center);
        variance = variance + dist * dist / size;
    }
    variance.sqrt()
}

/// Median distance to the centroid (upper median for even sizes).
pub fn median<T: Float, const D: usize>(partition: &Partition<T, D>) -> T {
    if partition.is_empty() {
        return T::zero();
    }
    let center = partition.centroid();
    let mut dists: Vec<T> = partition
        .points()
        .iter()
        .map(|p| p.distance(&center))
        .collect();

    let mid = dists.len() / 2;
    let (_, value, _) =
        dists.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    *value
}

/// Largest pairwise distance. Quadratic in the partition size.
pub fn diameter<T: Float, const D: usize>(partition: &Partition<T, D>) -> T {
    let points = partition.points();
    let mut diam = T::zero();
    for (i, a) in points.iter().enumerate() {
        for b in &points[..i] {
            diam = diam.max(a.distance(b));
        }
    }
    diam
}
