//! Layer 5: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for different
//! execution modes:
//!
//! - **Batch**: Whole-signal averaging with parallel passes
//! - **Streaming**: Chunked averaging with parallel emission

// Parallel batch adapter.
pub mod batch;

// Parallel streaming adapter.
pub mod streaming;
