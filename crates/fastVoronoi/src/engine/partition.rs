//! Parallel point-cloud generation and nearest-seed partitioning.
//!
//! ## Purpose
//!
//! This module samples the point cloud, assigns every sample to its nearest
//! seed and gathers the samples into one partition per seed.
//!
//! ## Design notes
//!
//! * **Fork-join**: One job per worker inside a dedicated `rayon` pool of
//!   exactly `workers` threads; `run` returns only after every job joined.
//! * **Ownership**: Each worker owns its generator and its output batch. The
//!   seed set is shared read-only through an `Arc`.
//! * **Merge**: Batches are folded into partitions on the calling thread after
//!   the join, consuming them one at a time.
//! * **Reproducibility**: Worker generator seeds are drawn up front, so the
//!   parallel and sequential paths produce identical partitions.
//!
//! ## Invariants
//!
//! * Exactly one partition per seed, possibly empty.
//! * Each worker handles `samples / workers` points; the remainder is dropped.
//! * Every assigned point lands in exactly one partition.
//!
//! ## Non-goals
//!
//! * Rebalancing partitions or redistributing the truncated remainder.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use rayon::ThreadPoolBuilder;

// External dependencies
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, info, info_span};

// Internal dependencies
use crate::math::sampling::random_point;
use crate::math::voronoi::SeedSet;
use crate::primitives::errors::VoronoiError;
use crate::primitives::partition::Partition;
use crate::primitives::point::Point;

/// A worker's output: each sampled point with its nearest seed index.
type WorkerBatch<T, const D: usize> = Vec<(Point<T, D>, usize)>;

// ============================================================================
// Partition Engine
// ============================================================================

/// Samples a point cloud and splits it into per-seed partitions.
#[derive(Debug, Clone)]
pub struct PartitionEngine<T: Float, const D: usize> {
    seeds: Arc<SeedSet<T, D>>,
    samples: usize,
    worker_seeds: Vec<u64>,
    parallel: bool,
}

impl<T, const D: usize> PartitionEngine<T, D>
where
    T: Float + SampleUniform + Send + Sync,
{
    /// Create an engine sampling `samples` points over `workers` workers.
    ///
    /// One generator seed per worker is drawn from `rng` here, before any
    /// worker exists.
    pub fn new<R>(
        seeds: SeedSet<T, D>,
        samples: usize,
        workers: usize,
        rng: &mut R,
    ) -> Result<Self, VoronoiError>
    where
        R: RngCore + ?Sized,
    {
        if workers == 0 {
            return Err(VoronoiError::InvalidWorkerCount(workers));
        }
        let worker_seeds = (0..workers).map(|_| rng.next_u64()).collect();
        Ok(Self {
            seeds: Arc::new(seeds),
            samples,
            worker_seeds,
            parallel: true,
        })
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn seeds(&self) -> &SeedSet<T, D> {
        &self.seeds
    }

    pub fn workers(&self) -> usize {
        self.worker_seeds.len()
    }

    /// Requested number of samples, before truncation.
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Samples each worker draws.
    pub fn samples_per_worker(&self) -> usize {
        self.samples / self.workers()
    }

    /// Sample the cloud and partition it by nearest seed.
    pub fn run(&self) -> Result<Partitioning<T, D>, VoronoiError> {
        let workers = self.workers();
        let work_amount = self.samples_per_worker();
        let span = info_span!(
            "partition",
            seeds = self.seeds.len(),
            samples = self.samples,
            workers
        );
        let _enter = span.enter();

        let dropped = self.samples - workers * work_amount;
        if dropped > 0 {
            debug!(dropped, "sample count not divisible by worker count");
        }

        let batches = if self.parallel {
            self.sample_parallel(work_amount)?
        } else {
            self.sample_sequential(work_amount)
        };

        let partitions = merge_batches(self.seeds.len(), batches);
        let result = Partitioning {
            partitions,
            seeds: Arc::clone(&self.seeds),
            workers,
            requested_samples: self.samples,
        };
        info!(assigned = result.total_points(), dropped, "partitioning complete");
        Ok(result)
    }

    #[cfg(feature = "cpu")]
    fn sample_parallel(&self, work_amount: usize) -> Result<Vec<WorkerBatch<T, D>>, VoronoiError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers())
            .build()?;
        let seeds: &SeedSet<T, D> = &self.seeds;

        // One task per worker; `collect` keeps batches in worker order.
        let batches: Vec<WorkerBatch<T, D>> = pool.install(|| {
            self.worker_seeds
                .par_iter()
                .enumerate()
                .map(|(worker, &rng_seed)| {
                    let batch = sample_batch(seeds, work_amount, rng_seed);
                    debug!(worker, points = batch.len(), "worker batch complete");
                    batch
                })
                .collect()
        });
        Ok(batches)
    }

    // Sequential fallback (when cpu feature is not enabled)
    #[cfg(not(feature = "cpu"))]
    fn sample_parallel(&self, work_amount: usize) -> Result<Vec<WorkerBatch<T, D>>, VoronoiError> {
        Ok(self.sample_sequential(work_amount))
    }

    fn sample_sequential(&self, work_amount: usize) -> Vec<WorkerBatch<T, D>> {
        self.worker_seeds
            .iter()
            .map(|&rng_seed| sample_batch(&self.seeds, work_amount, rng_seed))
            .collect()
    }
}

/// Draw `work_amount` points with a private generator and tag each with its
/// nearest seed.
fn sample_batch<T, const D: usize>(
    seeds: &SeedSet<T, D>,
    work_amount: usize,
    rng_seed: u64,
) -> WorkerBatch<T, D>
where
    T: Float + SampleUniform,
{
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut batch = Vec::with_capacity(work_amount);
    for _ in 0..work_amount {
        let point = random_point(&mut rng);
        let nearest = seeds.nearest_index(&point);
        batch.push((point, nearest));
    }
    batch
}

/// Fold worker batches into one partition per seed.
fn merge_batches<T: Float, const D: usize>(
    seed_count: usize,
    batches: Vec<WorkerBatch<T, D>>,
) -> Vec<Partition<T, D>> {
    let mut partitions: Vec<Partition<T, D>> = (0..seed_count).map(Partition::new).collect();
    for batch in batches {
        for (point, nearest) in batch {
            partitions[nearest].push(point);
        }
    }
    partitions
}

// ============================================================================
// Partitioning Result
// ============================================================================

/// Output of [`PartitionEngine::run`].
#[derive(Debug, Clone)]
pub struct Partitioning<T: Float, const D: usize> {
    partitions: Vec<Partition<T, D>>,
    seeds: Arc<SeedSet<T, D>>,
    workers: usize,
    requested_samples: usize,
}

impl<T: Float, const D: usize> Partitioning<T, D> {
    /// Partitions ordered by seed index.
    pub fn partitions(&self) -> &[Partition<T, D>] {
        &self.partitions
    }

    pub fn into_partitions(self) -> Vec<Partition<T, D>> {
        self.partitions
    }

    pub fn seeds(&self) -> &SeedSet<T, D> {
        &self.seeds
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Points assigned across all partitions.
    pub fn total_points(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }

    /// Samples lost to the even split across workers.
    pub fn dropped_samples(&self) -> usize {
        self.requested_samples - self.total_points()
    }
}
