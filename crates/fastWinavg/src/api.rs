//! High-level API for windowed averaging with parallel execution.
//!
//! ## Purpose
//!
//! This module reuses the `winavg` fluent builder and swaps in adapter markers
//! whose builders run passes on the rayon thread pool.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `winavg` builder.
//! * **Parallel-First**: Both adapters default to parallel execution.
//! * **Feature-Gated**: Without the `cpu` feature the adapters run sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WinavgBuilder`] via `Winavg::new()`.
//! 2. Chain configuration methods (`.window()`, `.normalization()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchWinavgBuilder;
use crate::adapters::streaming::ParallelStreamingWinavgBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use winavg::internals::api::Batch as BaseBatch;
use winavg::internals::api::Streaming as BaseStreaming;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelBatchWinavg;
pub use crate::adapters::streaming::ParallelStreamingWinavg;
pub use crate::input::WinavgInput;
pub use winavg::internals::api::{WinavgAdapter, WinavgBuilder};
pub use winavg::internals::engine::output::WinavgResult;
pub use winavg::internals::math::boundary::BoundaryPolicy;
pub use winavg::internals::primitives::errors::WinavgError;
pub use winavg::internals::primitives::window::ConvWindow;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> WinavgAdapter<T> for Batch {
    type Output = ParallelBatchWinavgBuilder<T>;

    fn convert(builder: WinavgBuilder<T>) -> Self::Output {
        // User choice, otherwise parallel
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseBatch as WinavgAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelBatchWinavgBuilder { base }
    }
}

/// Marker for parallel chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> WinavgAdapter<T> for Streaming {
    type Output = ParallelStreamingWinavgBuilder<T>;

    fn convert(builder: WinavgBuilder<T>) -> Self::Output {
        // User choice, otherwise parallel
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseStreaming as WinavgAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelStreamingWinavgBuilder { base }
    }
}
