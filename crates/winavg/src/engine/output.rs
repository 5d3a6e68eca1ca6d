//! Output types and result structures for windowed averaging.
//!
//! ## Purpose
//!
//! This module defines `WinavgResult`, which carries the averaged values of a
//! batch run or of one streaming emission, together with the parameters that
//! produced them.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `residuals`, when present, has the same length as `y`.
//! * `y[k]` is the output for signal index `start_index + k`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::Range;
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::BoundaryPolicy;

// ============================================================================
// Result Structure
// ============================================================================

/// Averaged values plus the metadata of the run that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct WinavgResult<T> {
    /// Averaged values.
    pub y: Vec<T>,

    /// Residuals `input[i] - y[i]` (when requested).
    pub residuals: Option<Vec<T>>,

    /// Signal index of `y[0]` (always 0 for batch runs).
    pub start_index: usize,

    /// Window radius `W`.
    pub window_radius: usize,

    /// Divisor applied after accumulation.
    pub normalization: T,

    /// Edge handling that was applied.
    pub boundary_policy: BoundaryPolicy,

    /// Number of chained passes.
    pub passes_used: usize,
}

impl<T: Float> WinavgResult<T> {
    /// Number of averaged values.
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the result holds no values (e.g. a streaming chunk that
    /// completed no window).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Signal indices covered by `y`.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.start_index + self.y.len()
    }

    /// Check if residuals were computed.
    pub fn has_residuals(&self) -> bool {
        self.residuals.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for WinavgResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.y.len())?;
        writeln!(f, "  Radius:      {}", self.window_radius)?;
        writeln!(f, "  Boundary:    {}", self.boundary_policy.name())?;
        writeln!(f, "  Passes:      {}", self.passes_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        match &self.residuals {
            Some(residuals) => {
                writeln!(f, "{:>8} {:>12} {:>12}", "Index", "Y_smooth", "Residual")?;
                writeln!(f, "  {}", "-".repeat(31))?;
                for (k, (y, r)) in self.y.iter().zip(residuals).enumerate() {
                    writeln!(f, "{:>8} {:>12.5} {:>12.6}", self.start_index + k, y, r)?;
                }
            }
            None => {
                writeln!(f, "{:>8} {:>12}", "Index", "Y_smooth")?;
                writeln!(f, "  {}", "-".repeat(18))?;
                for (k, y) in self.y.iter().enumerate() {
                    writeln!(f, "{:>8} {:>12.5}", self.start_index + k, y)?;
                }
            }
        }

        Ok(())
    }
}
