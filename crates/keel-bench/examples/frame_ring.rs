//! Ring buffer walkthrough: five frames in and out, then fifteen frames
//! into ten slots to show overwrite-on-full.
//!
//! Run with:
//!   RUST_LOG=trace cargo run -p keel-bench --example frame_ring

use keel::prelude::*;
use keel_test_utils::Frame;
use tracing::info;

fn print_all(frames: &mut RingBuffer<Frame, 10>) {
    while let Ok(frame) = frames.pull() {
        info!(
            index = frame.index,
            tag = %String::from_utf8_lossy(frame.tag()),
            "frame"
        );
    }
}

fn main() {
    keel_bench::init_tracing();

    let mut frames: RingBuffer<Frame, 10> = RingBuffer::new();

    keel_bench::fill_frames(&mut frames, 0..5);
    print_all(&mut frames);

    keel_bench::fill_frames(&mut frames, 0..15);
    info!(
        queued = frames.len(),
        dropped = frames.dropped(),
        "after overwrite"
    );
    print_all(&mut frames);
}
