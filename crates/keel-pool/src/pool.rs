//! The slot pool.
//!
//! [`SlotPool`] keeps its free list as a permutation of `0..N` with a
//! moving boundary `top`. Acquire hands out `available[top]` and bumps
//! `top`; release swaps the freed index to `available[top - 1]` and drops
//! `top`, so the most recently freed slot is the next one out.
//!
//! The inverse permutation `position` makes the release swap O(1) and
//! doubles as the loan marker: slot `i` is on loan iff `position[i] < top`.

use std::fmt;
use std::mem;

use keel_core::{InvalidHandleReason, PoolError, PoolId, SlotIndex};

use crate::handle::SlotHandle;

/// A fixed set of `N` pre-allocated `T` instances lent out by handle.
///
/// Single-threaded: every mutation takes `&mut self`. Sharing a pool
/// between threads needs external synchronisation.
pub struct SlotPool<T, const N: usize> {
    id: PoolId,
    slots: [T; N],
    /// Stack of slot indices. `available[..top]` are on loan.
    available: [usize; N],
    /// `available[position[i]] == i` for every slot `i`.
    position: [usize; N],
    /// Per-slot generation, bumped on release. Wraps at `u32::MAX`.
    generations: [u32; N],
    top: usize,
}

impl<T, const N: usize> SlotPool<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "SlotPool capacity must be > 0");

    /// Create a pool of `N` default-initialised instances.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// Create a pool whose slot `i` is initialised with `init(i)`.
    ///
    /// Useful for element types that have no `Default`.
    pub fn from_fn(init: impl FnMut(usize) -> T) -> Self {
        let () = Self::NON_EMPTY;
        let pool = Self {
            id: PoolId::next(),
            slots: std::array::from_fn(init),
            available: std::array::from_fn(|i| i),
            position: std::array::from_fn(|i| i),
            generations: [0; N],
            top: 0,
        };
        tracing::debug!(
            pool = %pool.id,
            capacity = N,
            slot_bytes = mem::size_of::<T>(),
            "slot pool created"
        );
        pool
    }

    /// This pool's process-unique identity.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Lend out a free slot.
    ///
    /// The slot keeps whatever contents its previous holder left. Fails
    /// with [`PoolError::ResourceExhausted`] when all `N` slots are on
    /// loan; the pool is unchanged in that case.
    pub fn acquire(&mut self) -> Result<SlotHandle, PoolError> {
        if self.top == N {
            return Err(PoolError::ResourceExhausted { capacity: N });
        }
        let index = self.available[self.top];
        self.top += 1;
        Ok(SlotHandle::new(
            self.id,
            SlotIndex(index),
            self.generations[index],
        ))
    }

    /// Lend out a free slot and borrow it for in-place initialisation.
    pub fn acquire_mut(&mut self) -> Result<(SlotHandle, &mut T), PoolError> {
        let handle = self.acquire()?;
        Ok((handle, &mut self.slots[handle.index.0]))
    }

    /// Borrow the slot behind a live handle.
    pub fn get(&self, handle: SlotHandle) -> Result<&T, PoolError> {
        let index = self.check(handle)?;
        Ok(&self.slots[index])
    }

    /// Mutably borrow the slot behind a live handle.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Result<&mut T, PoolError> {
        let index = self.check(handle)?;
        Ok(&mut self.slots[index])
    }

    /// Return a slot to the pool.
    ///
    /// The slot becomes the next one handed out by [`acquire`](Self::acquire).
    /// Every copy of `handle` is dead afterwards: releasing it again fails
    /// with [`InvalidHandleReason::NotOnLoan`], or with
    /// [`InvalidHandleReason::Stale`] once the slot has been re-acquired.
    pub fn release(&mut self, handle: SlotHandle) -> Result<(), PoolError> {
        let index = self.check(handle)?;

        let last = self.top - 1;
        let pos = self.position[index];
        let displaced = self.available[last];
        self.available.swap(pos, last);
        self.position[displaced] = pos;
        self.position[index] = last;
        self.top = last;

        self.generations[index] = self.generations[index].wrapping_add(1);
        Ok(())
    }

    /// Recover the handle of an on-loan slot from a reference into it.
    ///
    /// The slot index is the byte offset from the start of the backing
    /// array divided by `size_of::<T>()`. References that do not point at
    /// the start of an element of this pool, or at a free slot, are
    /// rejected with [`PoolError::InvalidHandle`].
    pub fn handle_of(&self, item: &T) -> Result<SlotHandle, PoolError> {
        let stride = mem::size_of::<T>();
        if stride == 0 {
            return Err(invalid(None, InvalidHandleReason::Misaligned));
        }

        let base = self.slots.as_ptr() as usize;
        let addr = item as *const T as usize;
        let offset = addr
            .checked_sub(base)
            .ok_or_else(|| invalid(None, InvalidHandleReason::OutOfRange))?;
        if offset % stride != 0 {
            return Err(invalid(None, InvalidHandleReason::Misaligned));
        }

        let index = offset / stride;
        if index >= N {
            return Err(invalid(None, InvalidHandleReason::OutOfRange));
        }
        if !self.on_loan(index) {
            return Err(invalid(Some(index), InvalidHandleReason::NotOnLoan));
        }
        Ok(SlotHandle::new(
            self.id,
            SlotIndex(index),
            self.generations[index],
        ))
    }

    /// Whether `handle` names a slot currently on loan under this handle.
    pub fn is_loaned(&self, handle: SlotHandle) -> bool {
        self.check(handle).is_ok()
    }

    /// Number of slots currently on loan.
    pub fn occupancy(&self) -> usize {
        self.top
    }

    /// Number of free slots.
    pub fn available(&self) -> usize {
        N - self.top
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Whether every slot is on loan.
    pub fn is_exhausted(&self) -> bool {
        self.top == N
    }

    /// Handles for every slot currently on loan.
    pub fn loaned(&self) -> impl Iterator<Item = SlotHandle> + '_ {
        self.available[..self.top]
            .iter()
            .map(|&i| SlotHandle::new(self.id, SlotIndex(i), self.generations[i]))
    }

    /// Reclaim every slot at once.
    ///
    /// All outstanding handles become stale. The free stack returns to
    /// index order, so the next acquire yields slot 0. Contents are kept.
    pub fn reset(&mut self) {
        for &i in &self.available[..self.top] {
            self.generations[i] = self.generations[i].wrapping_add(1);
        }
        self.available = std::array::from_fn(|i| i);
        self.position = std::array::from_fn(|i| i);
        self.top = 0;
    }

    fn on_loan(&self, index: usize) -> bool {
        self.position[index] < self.top
    }

    /// Validate a handle and resolve it to a backing index.
    fn check(&self, handle: SlotHandle) -> Result<usize, PoolError> {
        let index = handle.index.0;
        if handle.pool != self.id {
            return Err(invalid(
                Some(index),
                InvalidHandleReason::ForeignPool {
                    minted_by: handle.pool,
                    presented_to: self.id,
                },
            ));
        }
        if index >= N {
            return Err(invalid(None, InvalidHandleReason::OutOfRange));
        }
        if !self.on_loan(index) {
            return Err(invalid(Some(index), InvalidHandleReason::NotOnLoan));
        }
        let slot_generation = self.generations[index];
        if handle.generation != slot_generation {
            return Err(invalid(
                Some(index),
                InvalidHandleReason::Stale {
                    handle_generation: handle.generation,
                    slot_generation,
                },
            ));
        }
        Ok(index)
    }
}

fn invalid(index: Option<usize>, reason: InvalidHandleReason) -> PoolError {
    PoolError::InvalidHandle {
        index: index.map(SlotIndex),
        reason,
    }
}

impl<T: Default, const N: usize> Default for SlotPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for SlotPool<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotPool")
            .field("id", &self.id)
            .field("capacity", &N)
            .field("occupancy", &self.top)
            .finish_non_exhaustive()
    }
}
