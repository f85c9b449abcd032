//! Layer 3: Engine
//!
//! ## Purpose
//!
//! This layer provides the two fork-join phases: sampling and partitioning
//! the point cloud, and the ordered parallel reduction over partitions.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parallel sampling and nearest-seed partitioning.
pub mod partition;

/// Ordered parallel map over partitions.
pub mod reduce;
