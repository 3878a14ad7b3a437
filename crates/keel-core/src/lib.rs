//! Core types for the keel reuse primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy and the identifiers shared by `keel-pool` and
//! `keel-ring`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{InvalidHandleReason, PoolError, RingError};
pub use id::{PoolId, SlotIndex};
