//! Layer 4: Engine
//!
//! This layer provides the parallel pass for windowed averaging. It handles
//! the distribution of output positions across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
