//! Error types for Voronoi partitioning.
//!
//! Only configuration and input conversion can fail. Once an engine has been
//! built, sampling, partitioning and reduction run to completion.

use thiserror::Error;

/// Errors raised while configuring or feeding the partitioning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoronoiError {
    /// Nearest-seed lookup needs at least one seed.
    #[error("seed set must contain at least one point")]
    EmptySeedSet,

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// Input rows do not have the compile-time dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The rayon pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

#[cfg(feature = "cpu")]
impl From<rayon::ThreadPoolBuildError> for VoronoiError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        VoronoiError::ThreadPool(err.to_string())
    }
}
