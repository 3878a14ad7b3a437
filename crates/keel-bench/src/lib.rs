//! Benchmark helpers and demo plumbing for keel.
//!
//! - [`init_tracing`]: install a `fmt` subscriber filtered by `RUST_LOG`
//! - [`fill_frames`]: push a run of stamped frames into a ring
//! - [`drain_frames`]: pull every queued frame index
//! - [`capture_frame`]: copy a device's pending input into a frame

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel::ring::RingBuffer;
use keel_test_utils::{DeviceError, Frame, SerialDevice};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Calling it twice is harmless:
/// the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Push frames stamped `range.start..range.end` into `ring`.
pub fn fill_frames<const N: usize>(ring: &mut RingBuffer<Frame, N>, range: std::ops::Range<u32>) {
    for i in range {
        ring.push().stamp(i);
    }
}

/// Pull every queued frame and return their indices in pull order.
pub fn drain_frames<const N: usize>(ring: &mut RingBuffer<Frame, N>) -> Vec<u32> {
    let mut out = Vec::with_capacity(ring.len());
    while let Ok(frame) = ring.pull() {
        out.push(frame.index);
    }
    out
}

/// Read `dev`'s pending input into `frame` and tag it with `index`.
///
/// The payload is NUL-terminated when it is shorter than the frame; a
/// payload that fills the frame exactly is left unterminated.
pub fn capture_frame(
    dev: &SerialDevice,
    frame: &mut Frame,
    index: u32,
) -> Result<usize, DeviceError> {
    let len = dev.read(&mut frame.data)?;
    frame.index = index;
    if let Some(end) = frame.data.get_mut(len) {
        *end = 0;
    }
    Ok(len)
}
