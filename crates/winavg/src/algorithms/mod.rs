//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the windowed averaging kernel itself: the weighted
//! accumulation that produces one output position from its neighborhood.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-position weighted convolution.
pub mod convolution;
