//! High-level API for windowed averaging.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the window, the normalization divisor, and the edge
//! handling, and hands off to an execution adapter (Batch or Streaming).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only the window and normalization are required.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WinavgBuilder`] via `Winavg::new()`.
//! 2. Chain configuration methods (`.window()`, `.normalization()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchWinavgBuilder;
use crate::adapters::streaming::StreamingWinavgBuilder;
use crate::engine::executor::PassFn;

// Publicly re-exported types
pub use crate::adapters::batch::BatchWinavg;
pub use crate::adapters::streaming::StreamingWinavg;
pub use crate::engine::output::WinavgResult;
pub use crate::math::boundary::BoundaryPolicy;
pub use crate::primitives::errors::WinavgError;
pub use crate::primitives::window::ConvWindow;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

/// Fluent builder for configuring windowed averaging and execution modes.
#[derive(Debug, Clone)]
pub struct WinavgBuilder<T> {
    /// Window weights (`2W + 1` values).
    pub window: Option<Vec<T>>,

    /// Divisor applied after accumulation.
    pub normalization: Option<T>,

    /// Policy for handling signal edges (default: Zero).
    pub boundary_policy: Option<BoundaryPolicy>,

    /// Number of chained passes (Batch only, default: 1).
    pub passes: Option<usize>,

    /// Return residuals `input - output`.
    pub compute_residuals: Option<bool>,

    /// Expected chunk length (Streaming only).
    pub chunk_size: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom pass function.
    #[doc(hidden)]
    pub custom_pass: Option<PassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WinavgBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WinavgBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: WinavgAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            normalization: None,
            boundary_policy: None,
            passes: None,
            compute_residuals: None,
            chunk_size: None,
            custom_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the window weights. The length must be odd.
    pub fn window(mut self, weights: &[T]) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(weights.to_vec());
        self
    }

    /// Set the divisor applied after accumulation.
    pub fn normalization(mut self, sum: T) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(sum);
        self
    }

    /// Set the boundary handling policy.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        if self.boundary_policy.is_some() {
            self.duplicate_param = Some("boundary_policy");
        }
        self.boundary_policy = Some(policy);
        self
    }

    /// Set the number of chained passes (Batch only).
    pub fn passes(mut self, passes: usize) -> Self {
        if self.passes.is_some() {
            self.duplicate_param = Some("passes");
        }
        self.passes = Some(passes);
        self
    }

    /// Set the expected chunk length (Streaming only).
    pub fn chunk_size(mut self, size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(size);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: PassFn<T>) -> Self {
        self.custom_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait WinavgAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`WinavgBuilder`] into a specialized execution builder.
    fn convert(builder: WinavgBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> WinavgAdapter<T> for Batch {
    type Output = BatchWinavgBuilder<T>;

    fn convert(builder: WinavgBuilder<T>) -> Self::Output {
        let mut result = BatchWinavgBuilder::default();

        result.window = builder.window;
        result.normalization = builder.normalization;
        if let Some(bp) = builder.boundary_policy {
            result.boundary_policy = bp;
        }
        if let Some(passes) = builder.passes {
            result.passes = passes;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        if builder.chunk_size.is_some() {
            result.deferred_error = Some(WinavgError::UnsupportedFeature {
                adapter: "Batch",
                feature: "chunk_size",
            });
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(cp) = builder.custom_pass {
            result.custom_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> WinavgAdapter<T> for Streaming {
    type Output = StreamingWinavgBuilder<T>;

    fn convert(builder: WinavgBuilder<T>) -> Self::Output {
        let mut result = StreamingWinavgBuilder::default();

        result.window = builder.window;
        result.normalization = builder.normalization;
        if let Some(bp) = builder.boundary_policy {
            result.boundary_policy = bp;
        }
        // Rejected at build time when greater than one.
        if let Some(passes) = builder.passes {
            result.passes = passes;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        result.chunk_size = builder.chunk_size;

        // ======================================
        // DEV
        // ======================================
        if let Some(cp) = builder.custom_pass {
            result.custom_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
