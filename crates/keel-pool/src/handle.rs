//! Slot handles.
//!
//! A [`SlotHandle`] names one loan of one slot. It carries the minting
//! pool's ID and the slot's generation at acquire time, which lets the pool
//! reject foreign, double-released and stale handles in O(1).

use std::fmt;

use keel_core::{PoolId, SlotIndex};

/// A loan of a single pool slot.
///
/// Handles can only be minted by a [`SlotPool`](crate::SlotPool). They are
/// `Copy`, so holding one does not keep the slot alive: the pool decides
/// validity, and every handle dies at the matching `release()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// The pool that minted this handle.
    pub(crate) pool: PoolId,
    /// Index into the pool's backing array.
    pub(crate) index: SlotIndex,
    /// Slot generation when the loan was made.
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(pool: PoolId, index: SlotIndex, generation: u32) -> Self {
        Self {
            pool,
            index,
            generation,
        }
    }

    /// The pool this handle belongs to.
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    /// The slot index within the pool's backing array.
    pub fn index(&self) -> SlotIndex {
        self.index
    }

    /// The slot generation this handle was minted at.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SlotHandle(pool={}, idx={}, gen={})",
            self.pool, self.index, self.generation
        )
    }
}
