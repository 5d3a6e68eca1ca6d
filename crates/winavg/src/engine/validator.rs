//! Input validation for windowed averaging configuration and data.
//!
//! ## Purpose
//!
//! This module checks signals, windows, normalization sums, and builder
//! parameters before any averaging runs, so that the kernel itself never has
//! to guard against division by zero or non-finite arithmetic.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * Window shape checks live in `ConvWindow::new`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::BoundaryPolicy;
use crate::primitives::errors::WinavgError;
use crate::primitives::window::ConvWindow;

/// Maximum number of chained passes.
pub const MAX_PASSES: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for windowed averaging configuration and input data.
///
/// All methods return `Result<(), WinavgError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input signal.
    pub fn validate_input<T: Float>(input: &[T]) -> Result<(), WinavgError> {
        if input.is_empty() {
            return Err(WinavgError::EmptyInput);
        }

        if let Some((i, v)) = input.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(WinavgError::InvalidNumericValue(format!(
                "input[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    /// Validate a streaming chunk. Empty chunks are allowed.
    pub fn validate_chunk<T: Float>(chunk: &[T]) -> Result<(), WinavgError> {
        if chunk.is_empty() {
            return Ok(());
        }
        Self::validate_input(chunk)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the normalization divisor.
    ///
    /// Rejects non-finite values and anything within `T::epsilon()` of zero.
    pub fn validate_normalization<T: Float>(sum: T) -> Result<(), WinavgError> {
        if !sum.is_finite() {
            return Err(WinavgError::InvalidNumericValue(format!(
                "normalization={}",
                sum.to_f64().unwrap_or(f64::NAN)
            )));
        }

        if sum.abs() <= T::epsilon() {
            return Err(WinavgError::InvalidNormalization(
                sum.to_f64().unwrap_or(f64::NAN),
            ));
        }

        Ok(())
    }

    /// Validate that the window can be used with the boundary policy.
    pub fn validate_window<T: Float>(
        window: &ConvWindow<T>,
        policy: BoundaryPolicy,
    ) -> Result<(), WinavgError> {
        if policy.rescales_divisor() && window.total_weight().abs() <= T::epsilon() {
            return Err(WinavgError::ZeroTotalWeight);
        }
        Ok(())
    }

    /// Validate the number of chained passes.
    pub fn validate_passes(passes: usize) -> Result<(), WinavgError> {
        if passes == 0 || passes > MAX_PASSES {
            return Err(WinavgError::InvalidPasses(passes));
        }
        Ok(())
    }

    /// Validate that a required builder parameter was supplied.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, WinavgError> {
        value.ok_or(WinavgError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), WinavgError> {
        if let Some(param) = duplicate_param {
            return Err(WinavgError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
