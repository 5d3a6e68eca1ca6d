//! Memory management and buffer recycling for windowed averaging.
//!
//! ## Purpose
//!
//! This module provides reusable workspaces so that multi-pass runs and
//! streaming chunks do not allocate per pass or per chunk.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: Buffer structs hold all scratch space for their
//!   execution context (executor passes, streaming history).
//! * **Lazy Expansion**: Buffers grow on demand and are never shrunk.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **PassBuffer**: Two slots swapped between passes; the previous pass's
//!   output becomes the next pass's input.
//! * **StreamingBuffer**: Input history kept between streaming chunks.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared (e.g., `vec.clear()`), not deallocated.
//! * Within a pass the read slot and the write slot are distinct allocations.
//!
//! ## Non-goals
//!
//! * Thread-local caching (parallel passes write into a single shared output slice).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::swap;
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }

    /// Consume the slot and return the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
    /// Replaces the vector contents with `slice`, reusing capacity.
    fn assign_slice(&mut self, slice: &[T]);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }

    fn assign_slice(&mut self, slice: &[T]) {
        self.clear();
        self.extend_from_slice(slice);
    }
}

// ============================================================================
// PassBuffer - Ping-Pong Memory for the Executor
// ============================================================================

/// Ping-pong working memory for multi-pass execution.
#[derive(Debug, Clone)]
pub struct PassBuffer<T> {
    /// Values read by the current pass.
    pub source: Slot<T>,

    /// Values written by the current pass.
    pub target: Slot<T>,
}

impl<T> Default for PassBuffer<T> {
    fn default() -> Self {
        Self {
            source: Slot::default(),
            target: Slot::default(),
        }
    }
}

impl<T: Clone> PassBuffer<T> {
    /// Create a buffer pre-allocated for `n` samples.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            source: Slot::new(n),
            target: Slot::new(n),
        }
    }

    /// Load `input` as the first pass's source and size the target to match.
    pub fn prepare(&mut self, input: &[T], fill: T) {
        self.source.as_vec_mut().assign_slice(input);
        self.target.as_vec_mut().assign(input.len(), fill);
    }

    /// Make the last written values the source of the next pass.
    #[inline]
    pub fn flip(&mut self) {
        swap(&mut self.source, &mut self.target);
    }

    /// Split into the read-only source and the writable target.
    #[inline]
    pub fn split(&mut self) -> (&[T], &mut [T]) {
        (self.source.as_slice(), self.target.as_mut_slice())
    }
}

// ============================================================================
// StreamingBuffer - History for the Streaming Adapter
// ============================================================================

/// Input history retained by the streaming adapter between chunks.
#[derive(Debug, Clone)]
pub struct StreamingBuffer<T> {
    /// Buffered input samples; `history[0]` is the sample at stream index `base`.
    pub history: Slot<T>,

    /// Stream index of `history[0]`.
    pub base: usize,

    /// Number of outputs emitted so far.
    pub emitted: usize,
}

impl<T> Default for StreamingBuffer<T> {
    fn default() -> Self {
        Self {
            history: Slot::default(),
            base: 0,
            emitted: 0,
        }
    }
}

impl<T: Clone> StreamingBuffer<T> {
    /// Create a buffer able to hold `capacity` samples without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Slot::new(capacity),
            base: 0,
            emitted: 0,
        }
    }

    /// Total number of samples received so far.
    #[inline]
    pub fn received(&self) -> usize {
        self.base + self.history.len()
    }

    /// Drop history older than `keep_from` (a stream index).
    pub fn discard_before(&mut self, keep_from: usize) {
        if keep_from <= self.base {
            return;
        }
        let drop = (keep_from - self.base).min(self.history.len());
        self.history.as_vec_mut().drain(..drop);
        self.base += drop;
    }

    /// Clear all state (preserves capacity).
    pub fn clear(&mut self) {
        self.history.clear();
        self.base = 0;
        self.emitted = 0;
    }
}
