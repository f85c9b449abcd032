//! # fastVoronoi
//!
//! Parallel Voronoi partitioning of random point clouds under the Chebyshev
//! (L∞) metric, with per-partition dispersion statistics.
//!
//! A set of random seeds splits a large uniformly sampled point cloud by
//! exact nearest-seed assignment. Each resulting partition is then reduced
//! to a scalar (standard deviation or median of the distances to its
//! centroid) in parallel.
//!
//! ## Quick start
//!
//! ```no_run
//! use fastVoronoi::prelude::*;
//!
//! let engine = PartitionBuilder::<f32, 8>::new()
//!     .seeds(128)
//!     .samples(1 << 20)
//!     .build()?;
//!
//! let report = Experiment::new(engine).run()?;
//! println!("{}", report.stddevs);
//! # Ok::<(), VoronoiError>(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): `rayon` worker pools and `ndarray` inputs. Without it
//!   every phase runs sequentially with identical results.

#![allow(non_snake_case)]

/// Layer 5: User-facing builder and experiment runner.
pub mod api;

/// Layer 4: Per-partition statistics.
pub mod evaluation;

/// Layer 3: Fork-join partitioning and reduction.
pub mod engine;

/// Seed input adapters.
pub mod input;

/// Layer 2: Sampling and nearest-seed search.
pub mod math;

/// Layer 1: Points, partitions and errors.
pub mod primitives;

/// Sorted result series.
pub mod report;

/// Standard fastVoronoi prelude.
pub mod prelude {
    pub use crate::api::{
        available_workers, Experiment, ExperimentReport, PartitionBuilder, DEFAULT_MASTER_SEED,
        DEFAULT_SAMPLE_COUNT, DEFAULT_SEED_COUNT,
    };
    pub use crate::engine::partition::{PartitionEngine, Partitioning};
    pub use crate::engine::reduce::{chunk_bounds, parallel_reduce, sequential_reduce};
    pub use crate::evaluation::stats::{diameter, evaluate, median, stddev, Statistic};
    pub use crate::input::PointInput;
    pub use crate::math::sampling::{random_point, RandomPointSource};
    pub use crate::math::voronoi::SeedSet;
    pub use crate::primitives::errors::VoronoiError;
    pub use crate::primitives::partition::Partition;
    pub use crate::primitives::point::Point;
    pub use crate::report::SortedSeries;
}
