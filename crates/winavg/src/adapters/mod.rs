//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes:
//!
//! - **Batch**: Whole signal in memory, one or more passes
//! - **Streaming**: Signal delivered in chunks, outputs emitted as windows complete
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter.
pub mod batch;

/// Streaming adapter for chunked signals.
pub mod streaming;
