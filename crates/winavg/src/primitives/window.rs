//! Convolution window primitive.
//!
//! A window is an ordered, read-only sequence of `2W + 1` weights, where `W`
//! is the radius. Weight `k` multiplies the input sample at offset `k - W`
//! from the output position.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::convert::TryFrom;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WinavgError;

/// Validated window of `2W + 1` weights.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvWindow<T> {
    weights: Vec<T>,
    radius: usize,
}

impl<T: Float> ConvWindow<T> {
    /// Build a window from its weights.
    ///
    /// Fails if the window is empty, has an even length, or holds a
    /// non-finite weight.
    pub fn new(weights: Vec<T>) -> Result<Self, WinavgError> {
        let len = weights.len();
        if len == 0 || len % 2 == 0 {
            return Err(WinavgError::InvalidWindowLength(len));
        }

        if let Some((k, w)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
            return Err(WinavgError::InvalidNumericValue(format!(
                "window[{}]={}",
                k,
                w.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(Self {
            weights,
            radius: len / 2,
        })
    }

    /// Build a window by copying a slice of weights.
    pub fn from_slice(weights: &[T]) -> Result<Self, WinavgError> {
        Self::new(weights.to_vec())
    }

    /// Radius `W` (half-width, excluding the center).
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of weights, always `2W + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Never true for a constructed window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights in offset order `-W..=W`.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> T {
        self.weights.iter().fold(T::zero(), |acc, &w| acc + w)
    }
}

impl<T: Float> TryFrom<Vec<T>> for ConvWindow<T> {
    type Error = WinavgError;

    fn try_from(weights: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl<T: Float> TryFrom<&[T]> for ConvWindow<T> {
    type Error = WinavgError;

    fn try_from(weights: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(weights)
    }
}
