//! The ring buffer.
//!
//! Cursors `read` and `write` stay in `[0, N)` and `queued` counts the
//! valid records between them, so `write == (read + queued) % N` always
//! holds. A full ring has `read == write`; pushing there advances both.

use std::fmt;
use std::mem;

use keel_core::RingError;

/// A FIFO of `N` pre-allocated `T` records.
///
/// Single-producer, single-consumer, single-thread: every mutation takes
/// `&mut self`. Handing the ring between threads needs external
/// synchronisation.
pub struct RingBuffer<T, const N: usize> {
    slots: [T; N],
    read: usize,
    write: usize,
    queued: usize,
    /// Records lost to overwrite-on-full since construction.
    dropped: u64,
}

impl<T, const N: usize> RingBuffer<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "RingBuffer capacity must be > 0");

    /// Create a ring of `N` default-initialised records.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// Create a ring whose slot `i` is initialised with `init(i)`.
    pub fn from_fn(init: impl FnMut(usize) -> T) -> Self {
        let () = Self::NON_EMPTY;
        tracing::debug!(
            capacity = N,
            record_bytes = mem::size_of::<T>(),
            "ring buffer created"
        );
        Self {
            slots: std::array::from_fn(init),
            read: 0,
            write: 0,
            queued: 0,
            dropped: 0,
        }
    }

    /// Reserve the next record and borrow it for filling.
    ///
    /// Never fails. The slot still holds whatever was last stored there;
    /// the caller overwrites it through the returned reference. If the
    /// ring was full, the oldest unread record is discarded first.
    pub fn push(&mut self) -> &mut T {
        let slot = self.write;
        self.write = (self.write + 1) % N;
        if self.queued < N {
            self.queued += 1;
        } else {
            self.read = (self.read + 1) % N;
            self.dropped += 1;
            tracing::trace!(
                slot,
                dropped = self.dropped,
                capacity = N,
                "ring full, oldest record overwritten"
            );
        }
        &mut self.slots[slot]
    }

    /// Push `value` by move.
    ///
    /// Returns the record it displaced if that record was still unread
    /// (the ring was full), `None` otherwise.
    pub fn push_value(&mut self, value: T) -> Option<T> {
        let was_full = self.is_full();
        let old = mem::replace(self.push(), value);
        was_full.then_some(old)
    }

    /// Consume the oldest unread record.
    ///
    /// The reference is valid until the next `&mut` use of the ring.
    /// Fails with [`RingError::EmptyBuffer`] when nothing is queued; the
    /// cursors are untouched in that case.
    pub fn pull(&mut self) -> Result<&T, RingError> {
        if self.queued == 0 {
            return Err(RingError::EmptyBuffer { capacity: N });
        }
        let slot = self.read;
        self.read = (self.read + 1) % N;
        self.queued -= 1;
        Ok(&self.slots[slot])
    }

    /// The oldest unread record, without consuming it.
    pub fn peek(&self) -> Option<&T> {
        (self.queued > 0).then(|| &self.slots[self.read])
    }

    /// Iterate over unread records, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        (0..self.queued).map(move |k| &self.slots[(self.read + k) % N])
    }

    /// Discard every unread record.
    ///
    /// Contents stay in place and [`dropped`](Self::dropped) is unchanged:
    /// clearing is a consumer decision, not a loss.
    pub fn clear(&mut self) {
        self.read = self.write;
        self.queued = 0;
    }

    /// Whether any unread record is queued.
    pub fn has_data(&self) -> bool {
        self.queued > 0
    }

    /// Number of unread records.
    pub fn len(&self) -> usize {
        self.queued
    }

    /// Whether the ring holds no unread records.
    pub fn is_empty(&self) -> bool {
        self.queued == 0
    }

    /// Whether the next push will overwrite an unread record.
    pub fn is_full(&self) -> bool {
        self.queued == N
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Records overwritten before they were pulled, since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl<T: Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &N)
            .field("read", &self.read)
            .field("write", &self.write)
            .field("queued", &self.queued)
            .field("dropped", &self.dropped)
            .finish_non_exhaustive()
    }
}
