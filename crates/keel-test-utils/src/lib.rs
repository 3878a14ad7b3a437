//! Test utilities for keel development.
//!
//! Provides the record types used throughout the test suites and benches
//! ([`Point`], [`Frame`]) and a [`SerialDevice`] stand-in for the
//! byte-oriented device collaborator that fills ring buffers and lives in
//! slot pools.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod device;
pub mod fixtures;

pub use device::{DeviceError, SerialDevice, SERIAL_BUFFER_SIZE};
pub use fixtures::{Frame, Point, FRAME_PAYLOAD};
