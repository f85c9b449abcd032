//! Layer 4: Evaluation
//!
//! ## Purpose
//!
//! This layer provides the per-partition statistics evaluated by the engine's
//! parallel reduction.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dispersion statistics.
pub mod stats;
