//! Error types for the keel primitives.
//!
//! Every failure is local, synchronous and deterministic. The operation
//! that returns an error leaves its receiver exactly as it found it.

use std::error::Error;
use std::fmt;

use crate::id::{PoolId, SlotIndex};

/// Errors from `SlotPool` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// `acquire()` was called with every slot already on loan.
    ///
    /// Callers treat this as backpressure.
    ResourceExhausted {
        /// Total number of slots in the pool.
        capacity: usize,
    },
    /// A handle or reference did not identify a slot currently on loan.
    ///
    /// This is a programming error on the caller's side.
    InvalidHandle {
        /// The slot index the handle resolved to, if it resolved at all.
        index: Option<SlotIndex>,
        /// Why the handle was rejected.
        reason: InvalidHandleReason,
    },
}

impl PoolError {
    pub(crate) fn display_index(index: Option<SlotIndex>) -> String {
        match index {
            Some(i) => i.to_string(),
            None => "?".to_string(),
        }
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted { capacity } => {
                write!(f, "pool exhausted: all {capacity} slots are in use")
            }
            Self::InvalidHandle { index, reason } => {
                write!(
                    f,
                    "invalid handle for slot {}: {reason}",
                    Self::display_index(*index)
                )
            }
        }
    }
}

impl Error for PoolError {}

/// The specific check a handle failed in `release()` or `get()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidHandleReason {
    /// The slot index lies outside `[0, N)`, or the reference does not
    /// point into the pool's backing array.
    OutOfRange,
    /// The reference points into the backing array but not at the start
    /// of an element (or the element type is zero-sized).
    Misaligned,
    /// The handle was minted by a different pool.
    ForeignPool {
        /// The pool that minted the handle.
        minted_by: PoolId,
        /// The pool the handle was presented to.
        presented_to: PoolId,
    },
    /// The slot is free: never acquired, or already released.
    NotOnLoan,
    /// The slot was released and re-acquired since the handle was minted.
    Stale {
        /// Generation encoded in the handle.
        handle_generation: u32,
        /// Current generation of the slot.
        slot_generation: u32,
    },
}

impl fmt::Display for InvalidHandleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "out of range"),
            Self::Misaligned => write!(f, "not aligned to an element boundary"),
            Self::ForeignPool {
                minted_by,
                presented_to,
            } => {
                write!(f, "minted by pool {minted_by}, presented to pool {presented_to}")
            }
            Self::NotOnLoan => write!(f, "slot is not on loan"),
            Self::Stale {
                handle_generation,
                slot_generation,
            } => write!(
                f,
                "stale handle: generation {handle_generation}, slot at {slot_generation}"
            ),
        }
    }
}

/// Errors from `RingBuffer` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingError {
    /// `pull()` was called with no queued records.
    ///
    /// Callers treat this as an underrun.
    EmptyBuffer {
        /// Total number of slots in the ring.
        capacity: usize,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer { capacity } => {
                write!(f, "ring buffer empty (capacity {capacity})")
            }
        }
    }
}

impl Error for RingError {}
