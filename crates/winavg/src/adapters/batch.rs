//! Batch adapter for windowed averaging.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: the whole signal is in
//! memory and every output position is computed in one or more passes.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, runs the executor, and packages the result.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The input must be non-empty and finite.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle chunked signals (use the streaming adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ConvolutionExecutor, PassFn};
use crate::engine::output::WinavgResult;
use crate::engine::validator::Validator;
use crate::math::boundary::BoundaryPolicy;
use crate::primitives::errors::WinavgError;
use crate::primitives::window::ConvWindow;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch processor.
#[derive(Debug, Clone)]
pub struct BatchWinavgBuilder<T: Float> {
    /// Window weights (`2W + 1` values)
    pub window: Option<Vec<T>>,

    /// Divisor applied after accumulation
    pub normalization: Option<T>,

    /// Policy for handling signal edges
    pub boundary_policy: BoundaryPolicy,

    /// Number of chained passes
    pub passes: usize,

    /// Whether to return residuals
    pub compute_residuals: bool,

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

impl<T: Float> Default for BatchWinavgBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchWinavgBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            window: None,
            normalization: None,
            boundary_policy: BoundaryPolicy::default(),
            passes: 1,
            compute_residuals: false,
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
    // Batch-Specific Setters
    // ========================================================================

    /// Set the number of chained passes.
    pub fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
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

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchWinavg<T>, WinavgError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Required parameters
        let window = ConvWindow::new(Validator::validate_required(self.window, "window")?)?;
        let normalization = Validator::validate_required(self.normalization, "normalization")?;

        Validator::validate_normalization(normalization)?;
        Validator::validate_window(&window, self.boundary_policy)?;
        Validator::validate_passes(self.passes)?;

        let executor = ConvolutionExecutor::new(window, normalization)
            .boundary_policy(self.boundary_policy)
            .passes(self.passes)
            .custom_pass(self.custom_pass)
            .parallel(self.parallel.unwrap_or(false));

        Ok(BatchWinavg {
            executor,
            compute_residuals: self.compute_residuals,
        })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch windowed-average processor.
#[derive(Debug, Clone)]
pub struct BatchWinavg<T: Float> {
    executor: ConvolutionExecutor<T>,
    compute_residuals: bool,
}

impl<T: Float> BatchWinavg<T> {
    /// Average the whole signal.
    pub fn smooth(&self, input: &[T]) -> Result<WinavgResult<T>, WinavgError> {
        Validator::validate_input(input)?;

        let output = self.executor.run(input);

        let residuals = if self.compute_residuals {
            Some(
                input
                    .iter()
                    .zip(output.smoothed.iter())
                    .map(|(&orig, &smoothed)| orig - smoothed)
                    .collect(),
            )
        } else {
            None
        };

        Ok(WinavgResult {
            y: output.smoothed,
            residuals,
            start_index: 0,
            window_radius: self.executor.window.radius(),
            normalization: self.executor.normalization,
            boundary_policy: self.executor.boundary_policy,
            passes_used: output.passes,
        })
    }

    /// The validated window.
    pub fn window(&self) -> &ConvWindow<T> {
        &self.executor.window
    }
}
