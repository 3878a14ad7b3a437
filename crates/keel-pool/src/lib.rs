//! Fixed-capacity slot pool for in-place instance reuse.
//!
//! A [`SlotPool`] owns `N` pre-allocated instances of `T` inline and lends
//! them out through [`SlotHandle`]s. The pool never allocates after
//! construction and every operation is O(1).
//!
//! # Layout
//!
//! ```text
//! SlotPool<T, N>
//! ├── slots:       [T; N]      backing store, default-initialised once
//! ├── available:   [usize; N]  permutation of 0..N used as a stack
//! │                            available[..top] on loan, available[top] next out
//! ├── position:    [usize; N]  inverse of `available`
//! └── generations: [u32; N]    bumped on every release
//! ```
//!
//! Slot contents are not reset between loans: a new holder sees whatever
//! the previous holder left behind.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod pool;

pub use handle::SlotHandle;
pub use keel_core::{InvalidHandleReason, PoolError, PoolId, SlotIndex};
pub use pool::SlotPool;
