//! Streaming adapter for chunked signals.
//!
//! ## Purpose
//!
//! This module averages a signal that arrives in pieces. Every output whose
//! full window has been received is emitted immediately; the last `W` outputs
//! are held back until `finalize()` reveals where the signal ends.
//!
//! ## Design notes
//!
//! * **Strategy**: Keeps `W` samples of history before the next output and
//!   the received samples after it; older samples are discarded.
//! * **Exactness**: Each output is computed by the same kernel, over the same
//!   samples, in the same order as the batch adapter, so concatenated
//!   emissions are bit-identical to a batch run.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Emission**: `process_chunk` returns the outputs completed by that chunk
//!   (possibly none); `WinavgResult::start_index` locates them in the stream.
//! * **Boundary Policies**: The left-edge policy applies at stream start, the
//!   right-edge policy at `finalize()`.
//!
//! ## Invariants
//!
//! * Chunks must be supplied in stream order.
//! * Values must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not chain passes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ConvolutionExecutor, PassFn};
use crate::engine::output::WinavgResult;
use crate::engine::validator::Validator;
use crate::math::boundary::BoundaryPolicy;
use crate::primitives::buffer::StreamingBuffer;
use crate::primitives::errors::WinavgError;
use crate::primitives::window::ConvWindow;

// ============================================================================
// Streaming Builder
// ============================================================================

/// Builder for the streaming processor.
#[derive(Debug, Clone)]
pub struct StreamingWinavgBuilder<T: Float> {
    /// Window weights (`2W + 1` values)
    pub window: Option<Vec<T>>,

    /// Divisor applied after accumulation
    pub normalization: Option<T>,

    /// Policy for handling signal edges
    pub boundary_policy: BoundaryPolicy,

    /// Number of chained passes (only 1 is supported)
    pub passes: usize,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Expected chunk length, used to pre-size the history buffer
    pub chunk_size: Option<usize>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<WinavgError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom pass function.
    #[doc(hidden)]
    pub custom_pass: Option<PassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StreamingWinavgBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingWinavgBuilder<T> {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            window: None,
            normalization: None,
            boundary_policy: BoundaryPolicy::default(),
            passes: 1,
            compute_residuals: false,
            chunk_size: None,
            deferred_error: None,
            custom_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the window weights.
    pub fn window(mut self, weights: &[T]) -> Self {
        self.window = Some(weights.to_vec());
        self
    }

    /// Set the normalization divisor.
    pub fn normalization(mut self, sum: T) -> Self {
        self.normalization = Some(sum);
        self
    }

    /// Set the boundary handling policy.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.compute_residuals = enabled;
        self
    }

    // ========================================================================
    // Streaming-Specific Setters
    // ========================================================================

    /// Set the expected chunk length.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom pass function.
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: PassFn<T>) -> Self {
        self.custom_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingWinavg<T>, WinavgError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_passes(self.passes)?;
        if self.passes > 1 {
            return Err(WinavgError::UnsupportedFeature {
                adapter: "Streaming",
                feature: "multiple passes",
            });
        }

        // Required parameters
        let window = ConvWindow::new(Validator::validate_required(self.window, "window")?)?;
        let normalization = Validator::validate_required(self.normalization, "normalization")?;

        Validator::validate_normalization(normalization)?;
        Validator::validate_window(&window, self.boundary_policy)?;

        let capacity = self.chunk_size.unwrap_or(0) + 2 * window.radius();
        let executor = ConvolutionExecutor::new(window, normalization)
            .boundary_policy(self.boundary_policy)
            .custom_pass(self.custom_pass)
            .parallel(self.parallel.unwrap_or(false));

        Ok(StreamingWinavg {
            executor,
            buffer: StreamingBuffer::with_capacity(capacity),
            compute_residuals: self.compute_residuals,
        })
    }
}

// ============================================================================
// Streaming Processor
// ============================================================================

/// Streaming windowed-average processor.
#[derive(Debug, Clone)]
pub struct StreamingWinavg<T: Float> {
    executor: ConvolutionExecutor<T>,
    buffer: StreamingBuffer<T>,
    compute_residuals: bool,
}

impl<T: Float> StreamingWinavg<T> {
    /// Feed the next chunk and return every output it completes.
    pub fn process_chunk(&mut self, chunk: &[T]) -> Result<WinavgResult<T>, WinavgError> {
        Validator::validate_chunk(chunk)?;

        self.buffer.history.extend_from_slice(chunk);

        // Output p is complete once input p + W has arrived.
        let ready = self
            .buffer
            .received()
            .saturating_sub(self.executor.window.radius());
        let result = self.emit(ready);

        // Keep W samples before the next output position.
        let keep_from = self
            .buffer
            .emitted
            .saturating_sub(self.executor.window.radius());
        self.buffer.discard_before(keep_from);

        Ok(result)
    }

    /// Emit the held-back tail of the signal and reset for a new stream.
    pub fn finalize(&mut self) -> Result<WinavgResult<T>, WinavgError> {
        let result = self.emit(self.buffer.received());
        self.buffer.clear();
        Ok(result)
    }

    /// Discard all buffered state.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of samples received in the current stream.
    pub fn received(&self) -> usize {
        self.buffer.received()
    }

    /// Number of outputs emitted in the current stream.
    pub fn emitted(&self) -> usize {
        self.buffer.emitted
    }

    // Compute stream positions `emitted..end` over the buffered history.
    fn emit(&mut self, end: usize) -> WinavgResult<T> {
        let start = self.buffer.emitted;
        let count = end.saturating_sub(start);
        let mut y = vec![T::zero(); count];
        let mut residuals = None;

        if count > 0 {
            let local = start - self.buffer.base;
            trace!(
                "winavg: streaming emit {}..{} (history {} from {})",
                start,
                end,
                self.buffer.history.len(),
                self.buffer.base
            );

            let pass = self.executor.pass_fn();
            let ctx = self.executor.context(self.buffer.history.as_slice());
            pass(&ctx, local, &mut y);

            if self.compute_residuals {
                let originals = &self.buffer.history[local..local + count];
                residuals = Some(
                    originals
                        .iter()
                        .zip(y.iter())
                        .map(|(&orig, &smoothed)| orig - smoothed)
                        .collect(),
                );
            }

            self.buffer.emitted = end;
        } else if self.compute_residuals {
            residuals = Some(Vec::new());
        }

        WinavgResult {
            y,
            residuals,
            start_index: start,
            window_radius: self.executor.window.radius(),
            normalization: self.executor.normalization,
            boundary_policy: self.executor.boundary_policy,
            passes_used: 1,
        }
    }
}
