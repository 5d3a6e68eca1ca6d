//! Windowed weighted averaging kernel.
//!
//! ## Purpose
//!
//! This module computes a single output position of the weighted moving
//! average. It is the unit of work that the engine fans out, sequentially or
//! in parallel, over all output positions.
//!
//! ## Design notes
//!
//! * **Pure**: `value_at` reads shared, immutable inputs and returns a value;
//!   it never writes shared state, so any number of positions can be computed
//!   concurrently.
//! * **Interior fast path**: Positions whose window lies entirely inside the
//!   signal skip index resolution and run a plain dot product.
//! * **Deterministic**: Both paths accumulate in window order `k = 0..=2W`, so
//!   a position's value does not depend on which path computed it.
//!
//! ## Key concepts
//!
//! * **Adjusted index**: `j = i + k - W`, the input read by window weight `k`
//!   for output position `i`.
//! * **Boundary resolution**: Out-of-range `j` are mapped by `BoundaryPolicy`.
//!
//! ## Invariants
//!
//! * The input is never indexed outside `[0, N)`.
//! * The result is `accumulated / normalization`, except under `Renormalize`
//!   where the divisor is scaled by the applied share of the window weight.
//!
//! ## Non-goals
//!
//! * This module does not validate the window or the normalization sum.
//! * This module does not allocate output storage.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::{BoundaryPolicy, resolve_index};
use crate::primitives::window::ConvWindow;

// ============================================================================
// Convolution Context
// ============================================================================

/// Read-only inputs shared by every output position of one pass.
#[derive(Debug, Clone, Copy)]
pub struct ConvolutionContext<'a, T> {
    /// Signal being averaged.
    pub input: &'a [T],

    /// Window weights.
    pub window: &'a ConvWindow<T>,

    /// Divisor applied after accumulation.
    pub normalization: T,

    /// Edge handling.
    pub boundary_policy: BoundaryPolicy,

    /// Sum of all window weights (only consulted by `Renormalize`).
    total_weight: T,
}

impl<'a, T: Float> ConvolutionContext<'a, T> {
    /// Bundle the inputs of one convolution pass.
    pub fn new(
        input: &'a [T],
        window: &'a ConvWindow<T>,
        normalization: T,
        boundary_policy: BoundaryPolicy,
    ) -> Self {
        let total_weight = if boundary_policy.rescales_divisor() {
            window.total_weight()
        } else {
            T::one()
        };

        Self {
            input,
            window,
            normalization,
            boundary_policy,
            total_weight,
        }
    }

    /// Signal length `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Whether the signal is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Whether the full window of position `i` lies inside the signal.
    #[inline]
    pub fn is_interior(&self, i: usize) -> bool {
        let w = self.window.radius();
        i >= w && i + w < self.input.len()
    }

    /// Compute output position `i`.
    ///
    /// `i` must lie in `[0, N)`.
    #[inline]
    pub fn value_at(&self, i: usize) -> T {
        debug_assert!(i < self.input.len(), "value_at: index out of bounds");

        if self.is_interior(i) {
            self.interior_value(i)
        } else {
            self.edge_value(i)
        }
    }

    /// Write positions `start..start + output.len()`, in index order, into `output`.
    pub fn convolve_range(&self, start: usize, output: &mut [T]) {
        debug_assert!(start + output.len() <= self.input.len());

        for (offset, out) in output.iter_mut().enumerate() {
            *out = self.value_at(start + offset);
        }
    }

    // Dot product of the window with `input[i - W..=i + W]`.
    #[inline]
    fn interior_value(&self, i: usize) -> T {
        let w = self.window.radius();
        let neighborhood = &self.input[i - w..=i + w];

        let acc = self
            .window
            .weights()
            .iter()
            .zip(neighborhood)
            .fold(T::zero(), |acc, (&weight, &x)| acc + weight * x);

        acc / self.normalization
    }

    // Accumulation with boundary resolution for every read.
    fn edge_value(&self, i: usize) -> T {
        let n = self.input.len();
        let w = self.window.radius() as isize;

        let mut acc = T::zero();
        let mut used = T::zero();
        let mut skipped = false;

        for (k, &weight) in self.window.weights().iter().enumerate() {
            let j = i as isize + k as isize - w;
            match resolve_index(self.boundary_policy, j, n) {
                Some(idx) => {
                    acc = acc + weight * self.input[idx];
                    used = used + weight;
                }
                None => skipped = true,
            }
        }

        // A vanishing applied weight falls back to the full normalization.
        let usable = used.abs() > T::epsilon() * self.total_weight.abs();
        if skipped && self.boundary_policy.rescales_divisor() && usable {
            acc / (self.normalization * (used / self.total_weight))
        } else {
            acc / self.normalization
        }
    }
}
