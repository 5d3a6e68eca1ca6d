//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure index arithmetic used by the convolution
//! kernel: mapping window reads that fall outside the signal back onto it
//! according to the configured boundary policy.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Boundary policies and edge index resolution.
pub mod boundary;
