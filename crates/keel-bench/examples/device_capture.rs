//! A bank of serial devices held in a slot pool, each device's inbound
//! bytes captured into a shared frame ring.
//!
//! Run with:
//!   cargo run -p keel-bench --example device_capture

use std::error::Error;

use keel::prelude::*;
use keel_test_utils::{Frame, SerialDevice};
use tracing::{info, warn};

const MAX_DEVICES: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    keel_bench::init_tracing();

    let mut devices: SlotPool<SerialDevice, MAX_DEVICES> = SlotPool::new();
    let mut capture: RingBuffer<Frame, 8> = RingBuffer::new();

    let mut open = Vec::new();
    for n in 0..4 {
        let (h, dev) = devices.acquire_mut()?;
        dev.init(&format!("/dev/ttyS{n}"));
        dev.write(b"Hello\0")?;
        dev.inject(format!("reading {n}").as_bytes())?;
        open.push(h);
    }
    info!(open = devices.occupancy(), "devices initialised");

    for round in 0..3u32 {
        for &h in &open {
            keel_bench::capture_frame(devices.get(h)?, capture.push(), round)?;
        }
    }
    if capture.dropped() > 0 {
        warn!(dropped = capture.dropped(), "capture ring overran");
    }

    while let Ok(frame) = capture.pull() {
        info!(
            round = frame.index,
            bytes = %String::from_utf8_lossy(frame.tag()),
            "captured"
        );
    }

    for h in open {
        devices.release(h)?;
    }
    Ok(())
}
