//! Error types for windowed averaging.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running a windowed average: malformed inputs and windows, unusable
//! normalization sums, and adapter limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (length, divisor, pass count).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty signals and non-finite samples.
//! 2. **Window validation**: Even or empty windows, non-finite weights.
//! 3. **Normalization**: Zero or near-zero divisors are rejected up front.
//! 4. **Feature support**: Features not supported by the selected adapter.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for windowed averaging operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WinavgError {
    /// Input signal is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input samples, window weights, or scalars contain NaN or infinite values.
    InvalidNumericValue(String),

    /// Window must hold an odd, non-zero number of weights (`2W + 1`).
    InvalidWindowLength(usize),

    /// Normalization sum is zero or too close to zero to divide by.
    InvalidNormalization(f64),

    /// `Renormalize` needs window weights whose total is non-zero.
    ZeroTotalWeight,

    /// Number of passes must be in `[1, 1000]`.
    InvalidPasses(usize),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Streaming").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WinavgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input signal is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidWindowLength(len) => {
                write!(f, "Invalid window length: {len} (must be odd and at least 1)")
            }
            Self::InvalidNormalization(sum) => {
                write!(f, "Invalid normalization sum: {sum} (must be finite and non-zero)")
            }
            Self::ZeroTotalWeight => {
                write!(f, "Window weights sum to zero; Renormalize cannot rescale the divisor")
            }
            Self::InvalidPasses(passes) => {
                write!(f, "Invalid passes: {passes} (must be in [1, 1000])")
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Missing required parameter '{parameter}'")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WinavgError {}
