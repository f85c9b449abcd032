//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the value types shared by every other layer: the
//! fixed-dimension point, the partition container and the error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Per-seed point container.
pub mod partition;

/// Fixed-dimension Chebyshev point.
pub mod point;
