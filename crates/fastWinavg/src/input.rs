//! Input abstractions for windowed averaging.
//!
//! ## Purpose
//!
//! This module lets `smooth` and `process_chunk` accept several data formats
//! (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Strided ndarray views are rejected rather than copied.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from winavg crate
use winavg::internals::primitives::errors::WinavgError;

/// Trait for types that can be averaged.
pub trait WinavgInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_winavg_slice(&self) -> Result<&[T], WinavgError>;
}

impl<T: Float> WinavgInput<T> for [T] {
    fn as_winavg_slice(&self) -> Result<&[T], WinavgError> {
        Ok(self)
    }
}

impl<T: Float> WinavgInput<T> for Vec<T> {
    fn as_winavg_slice(&self) -> Result<&[T], WinavgError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> WinavgInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_winavg_slice(&self) -> Result<&[T], WinavgError> {
        self.as_slice().ok_or_else(|| {
            WinavgError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
