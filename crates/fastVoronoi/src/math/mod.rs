//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides random point sampling and the Voronoi seed set with
//! its nearest-seed lookup.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unit-ball rejection sampling.
pub mod sampling;

/// Seed set and nearest-seed search.
pub mod voronoi;
