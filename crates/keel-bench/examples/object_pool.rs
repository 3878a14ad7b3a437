//! Slot pool walkthrough: acquire, fill in place, release, and the two
//! ways a release can be refused.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p keel-bench --example object_pool

use keel::prelude::*;
use keel_test_utils::Point;
use tracing::{info, warn};

fn main() -> Result<(), PoolError> {
    keel_bench::init_tracing();

    let mut points: SlotPool<Point, 10> = SlotPool::new();

    let (a, p) = points.acquire_mut()?;
    p.x = 10;
    p.y = 20;
    let p = points.get(a)?;
    info!(x = p.x, y = p.y, handle = %a, "point a");

    points.release(a)?;
    info!(occupancy = points.occupancy(), "released a");

    if let Err(e) = points.release(a) {
        warn!(error = %e, "second release refused");
    }

    let local = Point::default();
    if let Err(e) = points.handle_of(&local) {
        warn!(error = %e, "stack point is not a pool slot");
    }

    // Freed slots come back last-in, first-out.
    let b = points.acquire()?;
    let c = points.acquire()?;
    points.release(b)?;
    points.release(c)?;
    let next = points.acquire()?;
    info!(released_last = %c.index(), acquired = %next.index(), "LIFO reuse");

    Ok(())
}
