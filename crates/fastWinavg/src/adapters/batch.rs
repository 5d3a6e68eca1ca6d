//! Batch adapter with parallel passes.
//!
//! ## Purpose
//!
//! This module wraps the `winavg` batch adapter and injects the rayon pass,
//! so every output position of a pass is computed on the thread pool.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and the pass loop stay in the `winavg` crate.
//! * **Parallelism**: Enabled by default; `.parallel(false)` restores the
//!   sequential pass.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Results are bit-identical to the sequential adapter.
//! * The input must be non-empty, finite, and contiguous.
//!
//! ## Non-goals
//!
//! * This adapter does not handle chunked signals (use the streaming adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::convolve_pass_parallel;

// External dependencies
use log::debug;
use num_traits::Float;
use std::result::Result;

// Export dependencies from winavg crate
use winavg::internals::adapters::batch::{BatchWinavg, BatchWinavgBuilder};
use winavg::internals::engine::output::WinavgResult;
use winavg::internals::math::boundary::BoundaryPolicy;
use winavg::internals::primitives::errors::WinavgError;
use winavg::internals::primitives::window::ConvWindow;

// Internal dependencies
use crate::input::WinavgInput;

// ============================================================================
// Extended Batch Builder
// ============================================================================

/// Builder for the batch processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchWinavgBuilder<T: Float> {
    /// Base builder from the winavg crate
    pub base: BatchWinavgBuilder<T>,
}

impl<T: Float> Default for ParallelBatchWinavgBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchWinavgBuilder<T> {
    /// Create a new batch builder with parallel execution enabled.
    fn new() -> Self {
        let base = BatchWinavgBuilder::default().parallel(true);
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
    // Batch-Specific Setters
    // ========================================================================

    /// Set the number of chained passes.
    pub fn passes(mut self, passes: usize) -> Self {
        self.base = self.base.passes(passes);
        self
    }
}

impl<T: Float + Send + Sync> ParallelBatchWinavgBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchWinavg<T>, WinavgError> {
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
            // Fallback to sequential if cpu feature is disabled
            builder.custom_pass = None;
        }

        debug!("fastWinavg: batch processor (parallel={})", parallel);

        // Validation is centralized in the winavg crate
        let processor = builder.build()?;

        Ok(ParallelBatchWinavg { processor })
    }
}

// ============================================================================
// Extended Batch Processor
// ============================================================================

/// Batch processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchWinavg<T: Float> {
    processor: BatchWinavg<T>,
}

impl<T: Float + Send + Sync> ParallelBatchWinavg<T> {
    /// Average the whole signal.
    ///
    /// Accepts `&[T]`, `&Vec<T>`, or a contiguous `ndarray` 1-D array.
    pub fn smooth<I>(&self, input: &I) -> Result<WinavgResult<T>, WinavgError>
    where
        I: WinavgInput<T> + ?Sized,
    {
        let slice = input.as_winavg_slice()?;
        self.processor.smooth(slice)
    }

    /// The validated window.
    pub fn window(&self) -> &ConvWindow<T> {
        self.processor.window()
    }
}
