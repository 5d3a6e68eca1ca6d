//! Streaming adapter with parallel emission.
//!
//! ## Purpose
//!
//! This module wraps the `winavg` streaming adapter and injects the rayon
//! pass, so the outputs completed by each chunk are computed in parallel.
//!
//! ## Design notes
//!
//! * **Delegation**: History management stays in the `winavg` crate.
//! * **Parallelism**: Enabled by default; only chunks that complete at least
//!   `PARALLEL_MIN_LEN` outputs leave the calling thread.
//!
//! ## Invariants
//!
//! * Chunks must be supplied in stream order.
//! * Concatenated emissions are bit-identical to a batch run.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::convolve_pass_parallel;

// External dependencies
use log::debug;
use num_traits::Float;
use std::result::Result;

// Export dependencies from winavg crate
use winavg::internals::adapters::streaming::{StreamingWinavg, StreamingWinavgBuilder};
use winavg::internals::engine::output::WinavgResult;
use winavg::internals::math::boundary::BoundaryPolicy;
use winavg::internals::primitives::errors::WinavgError;

// Internal dependencies
use crate::input::WinavgInput;

// ============================================================================
// Extended Streaming Builder
// ============================================================================

/// Builder for the streaming processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelStreamingWinavgBuilder<T: Float> {
    /// Base builder from the winavg crate
    pub base: StreamingWinavgBuilder<T>,
}

impl<T: Float> Default for ParallelStreamingWinavgBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelStreamingWinavgBuilder<T> {
    /// Create a new streaming builder with parallel execution enabled.
    fn new() -> Self {
        let base = StreamingWinavgBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the window weights.
    pub fn window(mut self, weights: &[T]) -> Self {
        self.base = self.base.window(weights);
        self
    }

    /// Set the normalization divisor.
    pub fn normalization(mut self, sum: T) -> Self {
        self.base = self.base.normalization(sum);
        self
    }

    /// Set the boundary handling policy.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.base = self.base.boundary_policy(policy);
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.base = self.base.compute_residuals(enabled);
        self
    }

    // ========================================================================
    // Streaming-Specific Setters
    // ========================================================================

    /// Set the expected chunk length.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.base = self.base.chunk_size(size);
        self
    }
}

impl<T: Float + Send + Sync> ParallelStreamingWinavgBuilder<T> {
    /// Build the streaming processor.
    pub fn build(self) -> Result<ParallelStreamingWinavg<T>, WinavgError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        let mut builder = self.base;
        let parallel = builder.parallel.unwrap_or(true);

        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder.custom_pass(convolve_pass_parallel::<T>);
            } else {
                builder.custom_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            builder.custom_pass = None;
        }

        debug!("fastWinavg: streaming processor (parallel={})", parallel);

        // Delegate execution to the base implementation
        let processor = builder.build()?;

        Ok(ParallelStreamingWinavg { processor })
    }
}

// ============================================================================
// Extended Streaming Processor
// ============================================================================

/// Streaming processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelStreamingWinavg<T: Float> {
    processor: StreamingWinavg<T>,
}

impl<T: Float + Send + Sync> ParallelStreamingWinavg<T> {
    /// Feed the next chunk and return every output it completes.
    pub fn process_chunk<I>(&mut self, chunk: &I) -> Result<WinavgResult<T>, WinavgError>
    where
        I: WinavgInput<T> + ?Sized,
    {
        let slice = chunk.as_winavg_slice()?;
        self.processor.process_chunk(slice)
    }

    /// Emit the held-back tail of the signal and reset for a new stream.
    pub fn finalize(&mut self) -> Result<WinavgResult<T>, WinavgError> {
        self.processor.finalize()
    }

    /// Discard all buffered state.
    pub fn reset(&mut self) {
        self.processor.reset();
    }
}
