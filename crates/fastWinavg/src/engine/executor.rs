//! Parallel execution engine for windowed averaging.
//!
//! ## Purpose
//!
//! This module provides the parallel pass that is injected into the `winavg`
//! crate's execution engine. Output positions are independent, so a pass is
//! split across all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential `convolve_pass`.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Ownership**: Each task owns a disjoint run of output slots; the input,
//!   window, and normalization are shared read-only.
//! * **Small passes**: Below `PARALLEL_MIN_LEN` positions the pass runs sequentially.
//!
//! ## Invariants
//!
//! * Every output slot is written exactly once, by the same kernel the
//!   sequential pass uses, so results are bit-identical to sequential runs.
//!
//! ## Non-goals
//!
//! * This module does not handle the pass loop (handled by `winavg::executor`).
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::trace;
use num_traits::Float;

// Export dependencies from winavg crate
use winavg::internals::algorithms::convolution::ConvolutionContext;

/// Minimum number of output positions handed to a single rayon task.
pub const PARALLEL_MIN_LEN: usize = 1024;

// ============================================================================
// Parallel Pass Function
// ============================================================================

/// Compute output positions `start..start + output.len()` in parallel.
#[cfg(feature = "cpu")]
pub fn convolve_pass_parallel<T>(ctx: &ConvolutionContext<'_, T>, start: usize, output: &mut [T])
where
    T: Float + Send + Sync,
{
    if output.len() < PARALLEL_MIN_LEN {
        ctx.convolve_range(start, output);
        return;
    }

    trace!(
        "fastWinavg: parallel pass over {} positions from {} ({} threads)",
        output.len(),
        start,
        rayon::current_num_threads()
    );

    output
        .par_iter_mut()
        .with_min_len(PARALLEL_MIN_LEN)
        .enumerate()
        .for_each(|(offset, out)| {
            *out = ctx.value_at(start + offset);
        });
}
