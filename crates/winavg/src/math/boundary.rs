//! Boundary policies for windows that extend past the signal edges.
//!
//! ## Purpose
//!
//! Near the start and end of the signal the window of an output position
//! reaches indices outside `[0, N)`. This module decides, for every such read,
//! which input sample (if any) stands in for it.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: `BoundaryPolicy` selects the mapping.
//! * **Symmetric**: Every policy treats index `-d` and index `N - 1 + d` as
//!   mirror images, so both ends of the signal are handled alike.
//! * **No allocation**: Indices are resolved on the fly; no padded copy of the
//!   input is built.
//!
//! ## Key concepts
//!
//! * **Zero**: Out-of-range reads contribute nothing.
//! * **Extend**: Out-of-range reads replicate the nearest edge sample.
//! * **Reflect**: Out-of-range reads mirror about the edge sample (edge not repeated).
//! * **Renormalize**: Out-of-range reads are skipped and the divisor shrinks
//!   with the share of window weight that was actually applied.
//!
//! ## Invariants
//!
//! * In-range indices always resolve to themselves.
//! * A resolved index is always `< n`.
//!
//! ## Non-goals
//!
//! * This module does not perform the weighted accumulation.

/// Policy for handling window reads past the start and end of the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BoundaryPolicy {
    /// Treat samples outside the signal as zero (zero padding).
    #[default]
    Zero,

    /// Replicate the first/last sample beyond the edges (clamping).
    Extend,

    /// Mirror samples across the edge sample: `-1 → 1`, `N → N - 2`.
    Reflect,

    /// Skip samples outside the signal and divide by the normalization sum
    /// scaled to the fraction of window weight that was applied.
    Renormalize,
}

impl BoundaryPolicy {
    /// Get the name of the boundary policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::Zero => "Zero",
            BoundaryPolicy::Extend => "Extend",
            BoundaryPolicy::Reflect => "Reflect",
            BoundaryPolicy::Renormalize => "Renormalize",
        }
    }

    /// Whether the divisor depends on how many window reads were in range.
    #[inline]
    pub const fn rescales_divisor(&self) -> bool {
        matches!(self, BoundaryPolicy::Renormalize)
    }
}

/// Resolve a (possibly out-of-range) input index `j` for a signal of length `n`.
///
/// Returns `None` when the read contributes nothing.
#[inline]
pub fn resolve_index(policy: BoundaryPolicy, j: isize, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }

    let last = n as isize - 1;
    if (0..=last).contains(&j) {
        return Some(j as usize);
    }

    match policy {
        BoundaryPolicy::Zero | BoundaryPolicy::Renormalize => None,
        BoundaryPolicy::Extend => Some(j.clamp(0, last) as usize),
        BoundaryPolicy::Reflect => Some(reflect_index(j, n)),
    }
}

// Fold `j` into `[0, n)` by repeated reflection about the edge samples.
#[inline]
fn reflect_index(j: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }

    let period = 2 * (n as isize - 1);
    let m = j.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - m) as usize
    }
}
