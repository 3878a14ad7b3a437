//! Fixed-capacity FIFO ring buffer with overwrite-on-full.
//!
//! [`RingBuffer`] stores `N` records of `T` inline. Producers reserve the
//! next slot with [`push`](RingBuffer::push) and fill it in place;
//! consumers borrow the oldest record with [`pull`](RingBuffer::pull).
//! When the ring is full a push silently claims the oldest unread record.
//! Losses are visible only through [`dropped`](RingBuffer::dropped).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ring;

pub use keel_core::RingError;
pub use ring::RingBuffer;
