//! keel: fixed-capacity, allocation-free in-place reuse primitives.
//!
//! This is the facade crate that re-exports the public API of the keel
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! #[derive(Default)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut points: SlotPool<Point, 10> = SlotPool::new();
//! let (a, p) = points.acquire_mut().unwrap();
//! p.x = 10;
//! p.y = 20;
//! assert_eq!(points.occupancy(), 1);
//! points.release(a).unwrap();
//! assert!(points.release(a).is_err());
//!
//! let mut frames: RingBuffer<u32, 4> = RingBuffer::new();
//! for i in 0..6 {
//!     *frames.push() = i;
//! }
//! assert_eq!(frames.dropped(), 2);
//! assert_eq!(*frames.pull().unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keel-core` | Errors and identifiers |
//! | [`pool`] | `keel-pool` | `SlotPool`, `SlotHandle` |
//! | [`ring`] | `keel-ring` | `RingBuffer` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and identifiers (`keel-core`).
pub use keel_core as types;

/// Slot pool with LIFO reuse and generation-checked handles (`keel-pool`).
pub use keel_pool as pool;

/// In-place FIFO ring buffer with overwrite-on-full (`keel-ring`).
pub use keel_ring as ring;

/// Common imports.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    pub use keel_core::{InvalidHandleReason, PoolError, PoolId, RingError, SlotIndex};
    pub use keel_pool::{SlotHandle, SlotPool};
    pub use keel_ring::RingBuffer;
}
