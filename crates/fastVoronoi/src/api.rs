//! High-level API for Voronoi partitioning experiments.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. A fluent builder
//! collects the experiment parameters, validates them, generates the seed
//! set and hands back a ready [`PartitionEngine`]. [`Experiment`] then runs
//! the whole pipeline: partition, evaluate each statistic, sort.
//!
//! ## Design notes
//!
//! * **Defaults**: 128 seeds, 2^26 samples, master seed 1234, one worker per
//!   available CPU, parallel execution.
//! * **Deferred errors**: Input conversion errors from `seed_points` are kept
//!   and reported by `build`, so the chain never breaks mid-way.
//! * **Randomness**: A single master generator seeds the seed-set generator
//!   and then every worker generator, all before sampling starts.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PartitionBuilder`] via `PartitionBuilder::new()`.
//! 2. Chain configuration methods (`.seeds()`, `.samples()`, `.workers()`, ...).
//! 3. Call `.build()` to get a [`PartitionEngine`], or wrap it in an
//!    [`Experiment`] to compute the sorted statistics.

// External dependencies
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::thread;
use tracing::debug;

// Internal dependencies
use crate::engine::partition::{PartitionEngine, Partitioning};
use crate::evaluation::stats::{evaluate, Statistic};
use crate::input::PointInput;
use crate::math::voronoi::SeedSet;
use crate::primitives::errors::VoronoiError;
use crate::primitives::point::Point;
use crate::report::SortedSeries;

/// Seed count of the reference experiment.
pub const DEFAULT_SEED_COUNT: usize = 128;

/// Sample count of the reference experiment (2^26).
pub const DEFAULT_SAMPLE_COUNT: usize = 1 << 26;

/// Master generator seed of the reference experiment.
pub const DEFAULT_MASTER_SEED: u64 = 1234;

/// Available hardware parallelism, or 1 when it cannot be queried.
pub fn available_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

// ============================================================================
// Partition Builder
// ============================================================================

/// Builder for [`PartitionEngine`].
#[derive(Debug, Clone)]
pub struct PartitionBuilder<T: Float, const D: usize> {
    /// Number of random seeds; ignored when `seed_points` is set.
    pub seed_count: usize,
    /// Explicit seeds.
    pub seed_points: Option<Vec<Point<T, D>>>,
    /// Requested point-cloud size.
    pub samples: usize,
    /// Worker count; `None` uses [`available_workers`].
    pub workers: Option<usize>,
    pub master_seed: u64,
    pub parallel: Option<bool>,
    /// Error recorded by a setter, reported by `build`.
    pub deferred_error: Option<VoronoiError>,
}

impl<T: Float, const D: usize> Default for PartitionBuilder<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, const D: usize> PartitionBuilder<T, D> {
    /// Create a builder with the reference experiment's parameters.
    pub fn new() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            seed_points: None,
            samples: DEFAULT_SAMPLE_COUNT,
            workers: None,
            master_seed: DEFAULT_MASTER_SEED,
            parallel: None,
            deferred_error: None,
        }
    }

    /// Set the number of randomly generated seeds.
    pub fn seeds(mut self, count: usize) -> Self {
        self.seed_count = count;
        self
    }

    /// Use explicit seed points instead of random ones.
    pub fn seed_points<I>(mut self, input: &I) -> Self
    where
        I: PointInput<T, D> + ?Sized,
    {
        match input.to_points() {
            Ok(points) => self.seed_points = Some(points),
            Err(err) => self.deferred_error = Some(err),
        }
        self
    }

    /// Set the requested number of sampled points.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the worker count for both parallel phases.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the master random seed.
    pub fn master_seed(mut self, seed: u64) -> Self {
        self.master_seed = seed;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

impl<T, const D: usize> PartitionBuilder<T, D>
where
    T: Float + SampleUniform + Send + Sync,
{
    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<PartitionEngine<T, D>, VoronoiError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        let workers = self.workers.unwrap_or_else(available_workers);
        if workers == 0 {
            return Err(VoronoiError::InvalidWorkerCount(workers));
        }

        let mut master = ChaCha8Rng::seed_from_u64(self.master_seed);
        let seeds = match self.seed_points {
            Some(points) => SeedSet::from_points(points)?,
            None => {
                let mut seed_rng = ChaCha8Rng::seed_from_u64(master.next_u64());
                SeedSet::random(self.seed_count, &mut seed_rng)?
            }
        };
        debug!(seeds = seeds.len(), workers, samples = self.samples, "engine configured");

        let engine = PartitionEngine::new(seeds, self.samples, workers, &mut master)?;
        Ok(engine.parallel(self.parallel.unwrap_or(true)))
    }
}

// ============================================================================
// Experiment
// ============================================================================

/// Sorted dispersion statistics of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport<T> {
    pub stddevs: SortedSeries<T>,
    pub medians: SortedSeries<T>,
}

/// Partition a point cloud and summarize every partition.
#[derive(Debug, Clone)]
pub struct Experiment<T: Float, const D: usize> {
    engine: PartitionEngine<T, D>,
}

impl<T, const D: usize> Experiment<T, D>
where
    T: Float + SampleUniform + Default + Debug + Send + Sync,
{
    pub fn new(engine: PartitionEngine<T, D>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &PartitionEngine<T, D> {
        &self.engine
    }

    /// Run partitioning, then stddev and median per partition, sorted ascending.
    pub fn run(&self) -> Result<ExperimentReport<T>, VoronoiError> {
        let partitioning = self.engine.run()?;
        Ok(ExperimentReport {
            stddevs: self.summarize(&partitioning, Statistic::StdDev)?,
            medians: self.summarize(&partitioning, Statistic::Median)?,
        })
    }

    /// Evaluate one statistic over an existing partitioning, sorted ascending.
    pub fn summarize(
        &self,
        partitioning: &Partitioning<T, D>,
        statistic: Statistic,
    ) -> Result<SortedSeries<T>, VoronoiError> {
        let values = evaluate(
            partitioning.partitions(),
            statistic,
            partitioning.workers(),
            self.engine.is_parallel(),
        )?;
        debug!(statistic = statistic.name(), partitions = values.len(), "statistic evaluated");
        Ok(SortedSeries::from_unsorted(values))
    }
}
