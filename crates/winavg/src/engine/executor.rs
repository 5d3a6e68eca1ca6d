//! Execution engine for windowed averaging.
//!
//! ## Purpose
//!
//! This module runs the averaging kernel over every output position, once or
//! several times in a row. Each pass reads the previous pass's output, so
//! `passes = 2` averages the already-averaged signal again.
//!
//! ## Design notes
//!
//! * **Pluggable pass**: The per-pass fan-out is a function pointer. The
//!   default is the sequential `convolve_pass`; extension crates inject a
//!   parallel one through `custom_pass`.
//! * **Ping-pong buffers**: Multi-pass runs alternate between two buffers
//!   instead of allocating per pass.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Every output slot is written exactly once per pass, by exactly one call
//!   to the kernel.
//! * Pass `p + 1` starts only after pass `p` has written every slot.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not spawn threads itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convolution::ConvolutionContext;
use crate::math::boundary::BoundaryPolicy;
use crate::primitives::buffer::PassBuffer;
use crate::primitives::window::ConvWindow;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a pass over output positions `start..start + output.len()`.
#[doc(hidden)]
pub type PassFn<T> = fn(
    &ConvolutionContext<'_, T>, // shared read-only inputs
    usize,                      // first output position
    &mut [T],                   // output slots
);

/// Sequential reference pass: positions are computed in index order.
pub fn convolve_pass<T: Float>(ctx: &ConvolutionContext<'_, T>, start: usize, output: &mut [T]) {
    ctx.convolve_range(start, output);
}

/// Output from an executor run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Averaged values.
    pub smoothed: Vec<T>,

    /// Number of passes performed.
    pub passes: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for windowed averaging.
#[derive(Debug, Clone)]
pub struct ConvolutionExecutor<T: Float> {
    /// Window weights.
    pub window: ConvWindow<T>,

    /// Divisor applied after accumulation.
    pub normalization: T,

    /// Edge handling.
    pub boundary_policy: BoundaryPolicy,

    /// Number of chained passes.
    pub passes: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_pass: Option<PassFn<T>>,

    /// Whether to use the custom pass.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> ConvolutionExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create an executor for one sequential pass with zero padding.
    pub fn new(window: ConvWindow<T>, normalization: T) -> Self {
        Self {
            window,
            normalization,
            boundary_policy: BoundaryPolicy::default(),
            passes: 1,
            custom_pass: None,
            parallel: false,
        }
    }

    /// Set the boundary handling policy.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Set the number of chained passes.
    pub fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Set the custom pass function.
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: Option<PassFn<T>>) -> Self {
        self.custom_pass = pass;
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// The pass function this executor dispatches to.
    pub fn pass_fn(&self) -> PassFn<T> {
        match (self.parallel, self.custom_pass) {
            (true, Some(pass)) => pass,
            _ => convolve_pass::<T>,
        }
    }

    /// Build the context for one pass over `input`.
    #[inline]
    pub fn context<'a>(&'a self, input: &'a [T]) -> ConvolutionContext<'a, T> {
        ConvolutionContext::new(input, &self.window, self.normalization, self.boundary_policy)
    }

    /// Run every pass over `input`.
    pub fn run(&self, input: &[T]) -> ExecutorOutput<T> {
        let n = input.len();
        let pass = self.pass_fn();

        debug!(
            "winavg: n={} radius={} passes={} boundary={} parallel={}",
            n,
            self.window.radius(),
            self.passes,
            self.boundary_policy.name(),
            self.parallel && self.custom_pass.is_some()
        );

        if self.passes <= 1 {
            let mut smoothed = vec![T::zero(); n];
            pass(&self.context(input), 0, &mut smoothed);
            return ExecutorOutput {
                smoothed,
                passes: 1,
            };
        }

        let mut buffer = PassBuffer::with_capacity(n);
        buffer.prepare(input, T::zero());

        for p in 0..self.passes {
            trace!("winavg: pass {}/{}", p + 1, self.passes);
            let (source, target) = buffer.split();
            pass(&self.context(source), 0, target);
            buffer.flip();
        }

        ExecutorOutput {
            smoothed: buffer.source.into_vec(),
            passes: self.passes,
        }
    }
}
