//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the averaging passes: it validates configuration,
//! fans the per-position kernel out over the output, chains repeated passes,
//! and packages the results.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
