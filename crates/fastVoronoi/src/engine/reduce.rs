//! Ordered parallel map over partitions.
//!
//! ## Purpose
//!
//! This module applies a pure per-item function to a slice across a fixed
//! number of workers and returns the results in input order.
//!
//! ## Design notes
//!
//! * **Chunking**: The input is split into `workers` contiguous ranges of
//!   `len / workers` items; the last range absorbs the remainder, so every
//!   item is covered exactly once.
//! * **Disjoint writes**: The result buffer is sized before any worker starts
//!   and handed out as non-overlapping `&mut` ranges, so workers never contend.
//! * **Parallelism**: Uses a `rayon` pool of exactly `workers` threads with one
//!   scoped task per range.
//!
//! ## Invariants
//!
//! * `result[i] == f(&items[i])` for every `i`.
//! * Result order does not depend on scheduling.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::ThreadPoolBuilder;

// External dependencies
use std::iter;
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::VoronoiError;

/// Half-open `[begin, end)` ranges assigned to each worker.
///
/// When `len < workers` every range but the last is empty.
pub fn chunk_bounds(len: usize, workers: usize) -> Vec<(usize, usize)> {
    if workers == 0 {
        return Vec::new();
    }
    let step = len / workers;
    (0..workers)
        .map(|i| {
            let begin = i * step;
            let end = if i + 1 == workers { len } else { (i + 1) * step };
            (begin, end)
        })
        .collect()
}

/// Apply `f` to every item on the calling thread.
pub fn sequential_reduce<I, R, F>(items: &[I], f: F) -> Vec<R>
where
    F: Fn(&I) -> R,
{
    items.iter().map(f).collect()
}

/// Apply `f` to every item across `workers` threads, preserving order.
#[cfg(feature = "cpu")]
pub fn parallel_reduce<I, R, F>(items: &[I], workers: usize, f: F) -> Result<Vec<R>, VoronoiError>
where
    I: Sync,
    R: Default + Send,
    F: Fn(&I) -> R + Sync,
{
    if workers == 0 {
        return Err(VoronoiError::InvalidWorkerCount(workers));
    }
    debug!(items = items.len(), workers, "parallel reduce");

    let mut results: Vec<R> = iter::repeat_with(R::default).take(items.len()).collect();
    let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
    let f = &f;

    // Hand each worker its own output range; `rest` keeps the untouched tail.
    let mut jobs: Vec<(&mut [R], &[I])> = Vec::with_capacity(workers);
    let mut rest: &mut [R] = &mut results;
    for (begin, end) in chunk_bounds(items.len(), workers) {
        let (out, tail) = std::mem::take(&mut rest).split_at_mut(end - begin);
        rest = tail;
        jobs.push((out, &items[begin..end]));
    }

    pool.scope(move |s| {
        for (out, chunk) in jobs {
            s.spawn(move |_| {
                for (slot, item) in out.iter_mut().zip(chunk) {
                    *slot = f(item);
                }
            });
        }
    });

    Ok(results)
}

// Sequential fallback (when cpu feature is not enabled)
#[cfg(not(feature = "cpu"))]
pub fn parallel_reduce<I, R, F>(items: &[I], workers: usize, f: F) -> Result<Vec<R>, VoronoiError>
where
    I: Sync,
    R: Default + Send,
    F: Fn(&I) -> R + Sync,
{
    if workers == 0 {
        return Err(VoronoiError::InvalidWorkerCount(workers));
    }
    debug!(items = items.len(), workers, "sequential reduce");

    let mut results: Vec<R> = iter::repeat_with(R::default).take(items.len()).collect();
    for (begin, end) in chunk_bounds(items.len(), workers) {
        for (slot, item) in results[begin..end].iter_mut().zip(&items[begin..end]) {
            *slot = f(item);
        }
    }
    Ok(results)
}
