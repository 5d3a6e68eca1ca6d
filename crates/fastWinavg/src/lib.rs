//! # fastWinavg: Parallel Windowed Weighted Moving Average
//!
//! Multi-threaded companion to the [`winavg`] crate. The averaging kernel, the
//! boundary policies, and all validation come from `winavg`; this crate plugs
//! a [rayon](https://docs.rs/rayon) pass into its engine and accepts
//! [ndarray](https://docs.rs/ndarray) inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastWinavg::prelude::*;
//!
//! let input: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).sin()).collect();
//!
//! let model = Winavg::new()
//!     .window(&[1.0, 4.0, 6.0, 4.0, 1.0])
//!     .normalization(16.0)
//!     .boundary_policy(Reflect)
//!     .adapter(Batch)         // Parallel by default
//!     .build()?;
//!
//! let result = model.smooth(&input)?;
//! assert_eq!(result.y.len(), input.len());
//! # Result::<(), WinavgError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `smooth` returns a `Result<WinavgResult<T>, WinavgError>`:
//!
//! ```rust
//! use fastWinavg::prelude::*;
//!
//! // Even-length windows have no centre tap.
//! let err = Winavg::new()
//!     .window(&[1.0, 1.0])
//!     .normalization(2.0)
//!     .adapter(Batch)
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err, WinavgError::InvalidWindowLength(2));
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastWinavg::prelude::*;
//! use ndarray::Array1;
//!
//! let input = Array1::from_elem(100, 1.0_f64);
//!
//! let model = Winavg::new()
//!     .window(&[1.0, 1.0, 1.0])
//!     .normalization(3.0)
//!     .boundary_policy(Renormalize)
//!     .adapter(Batch)
//!     .build()?;
//!
//! // smooth() accepts &Array1<f64>, &[f64], or &Vec<f64>
//! let result = model.smooth(&input)?;
//! assert!(result.y.iter().all(|&v| (v - 1.0).abs() < 1e-12));
//! # Result::<(), WinavgError>::Ok(())
//! ```
//!
//! ## Determinism
//!
//! Each output slot is written by exactly one task using the same kernel as
//! the sequential pass, so results do not depend on the number of threads or
//! on scheduling.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel pass.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastWinavg prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Streaming},
        BoundaryPolicy,
        BoundaryPolicy::{Extend, Reflect, Renormalize, Zero},
        ConvWindow, ParallelBatchWinavg, ParallelStreamingWinavg, WinavgBuilder as Winavg,
        WinavgError, WinavgInput, WinavgResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
