//! # winavg — Windowed Weighted Moving Average for Rust
//!
//! A small, exact implementation of the one-dimensional weighted moving
//! average: a discrete convolution of a numeric signal with a precomputed
//! window of `2W + 1` weights, divided by a caller-supplied normalization sum.
//!
//! ## What does it compute?
//!
//! For every output position `i` of an input of length `N`:
//!
//! ```text
//! output[i] = ( sum_{k=0}^{2W} window[k] * input[i + k - W] ) / normalization
//! ```
//!
//! Every output position is an independent, pure computation. Reads that fall
//! outside `[0, N)` are resolved by an explicit [`BoundaryPolicy`](prelude::BoundaryPolicy)
//! that is applied identically at both ends of the signal.
//!
//! ## Quick Start
//!
//! ```rust
//! use winavg::prelude::*;
//!
//! let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let window = [1.0, 2.0, 1.0];
//!
//! let model = Winavg::new()
//!     .window(&window)        // 2W + 1 weights (W = 1)
//!     .normalization(4.0)     // divisor, usually the sum of the weights
//!     .boundary_policy(Extend)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.smooth(&input)?;
//!
//! assert_eq!(result.y.len(), input.len());
//! assert_eq!(result.y[3], 4.0);
//! println!("{}", result);
//! # Result::<(), WinavgError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 7
//!   Radius:      1
//!   Boundary:    Extend
//!   Passes:      1
//!
//! Smoothed Data:
//!    Index     Y_smooth
//!   --------------------
//!        0      1.25000
//!        1      2.00000
//!      ...
//! ```
//!
//! ## Boundary policies
//!
//! | Policy        | Reads before index 0 / past index N-1       | Divisor                  |
//! |---------------|---------------------------------------------|--------------------------|
//! | `Zero`        | contribute zero                             | normalization            |
//! | `Extend`      | replicate the nearest edge sample           | normalization            |
//! | `Reflect`     | mirror about the edge sample                | normalization            |
//! | `Renormalize` | skipped                                     | scaled to weight in use  |
//!
//! ## Streaming
//!
//! The `Streaming` adapter accepts the signal in arbitrary chunks and emits
//! every output whose window is complete. Concatenating the emitted chunks and
//! the output of `finalize()` reproduces the batch result exactly.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! winavg = { version = "0.3", default-features = false }
//! ```
//!
//! ## Parallel execution
//!
//! The companion crate `fastWinavg` plugs a `rayon` parallel pass into the same
//! engine. Each output slot is written by exactly one task, so parallel and
//! sequential runs are bit-identical.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - index resolution at the signal edges.
mod math;

// Layer 3: Algorithms - the per-position convolution kernel.
mod algorithms;

// Layer 4: Engine - orchestration, validation, and results.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard winavg prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Streaming},
        BoundaryPolicy,
        BoundaryPolicy::{Extend, Reflect, Renormalize, Zero},
        BatchWinavg, ConvWindow, StreamingWinavg, WinavgBuilder as Winavg, WinavgError,
        WinavgResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
