//! Integration test: end-to-end pool and ring scenarios through the facade.
//!
//! A: five frames pushed into a ten-slot ring come back in order.
//! B: fifteen frames pushed into the same ring leave only the last ten.
//! C: a point pool acquires, releases, and rejects a second release.
//!
//! The model checks drive a pool and a ring together against a LIFO `Vec`
//! and a bounded `VecDeque`.

use keel::prelude::*;
use keel_test_utils::{Frame, Point, SerialDevice};

fn drain(frames: &mut RingBuffer<Frame, 10>) -> Vec<u32> {
    let mut out = Vec::new();
    while frames.has_data() {
        out.push(frames.pull().unwrap().index);
    }
    out
}

#[test]
fn scenario_a_in_order_without_overwrite() {
    let mut frames: RingBuffer<Frame, 10> = RingBuffer::new();
    for i in 0..5 {
        frames.push().stamp(i);
    }
    assert_eq!(drain(&mut frames), vec![0, 1, 2, 3, 4]);
    assert!(!frames.has_data());
    assert_eq!(frames.dropped(), 0);
}

#[test]
fn scenario_b_overwrite_keeps_last_ten() {
    let mut frames: RingBuffer<Frame, 10> = RingBuffer::new();
    for i in 0..15 {
        frames.push().stamp(i);
    }
    assert_eq!(frames.len(), 10);
    assert_eq!(frames.dropped(), 5);
    assert_eq!(drain(&mut frames), (5..15).collect::<Vec<_>>());
}

#[test]
fn scenario_a_then_b_on_one_buffer() {
    // The same ring reused across both phases, cursors mid-array.
    let mut frames: RingBuffer<Frame, 10> = RingBuffer::new();
    for i in 0..5 {
        frames.push().stamp(i);
    }
    assert_eq!(drain(&mut frames), vec![0, 1, 2, 3, 4]);

    for i in 0..15 {
        frames.push().stamp(i);
    }
    assert_eq!(frames.len(), 10);
    let tags: Vec<Vec<u8>> = frames.iter().map(|f| f.tag().to_vec()).collect();
    assert_eq!(tags.first().map(Vec::as_slice), Some(&b"F"[..]));
    assert_eq!(drain(&mut frames), (5..15).collect::<Vec<_>>());
    assert!(matches!(
        frames.pull(),
        Err(RingError::EmptyBuffer { capacity: 10 })
    ));
}

#[test]
fn scenario_c_double_release_rejected() {
    let mut points: SlotPool<Point, 10> = SlotPool::new();
    let (a, p) = points.acquire_mut().unwrap();
    *p = Point::new(10, 20);
    assert_eq!(points.occupancy(), 1);

    points.release(a).unwrap();
    assert_eq!(points.occupancy(), 0);

    let err = points.release(a).unwrap_err();
    assert!(matches!(
        err,
        PoolError::InvalidHandle {
            reason: InvalidHandleReason::NotOnLoan,
            ..
        }
    ));
    assert_eq!(points.occupancy(), 0);
}

#[test]
fn scenario_c_local_point_is_not_a_pool_slot() {
    let mut points: SlotPool<Point, 10> = SlotPool::new();
    let a = points.acquire().unwrap();

    let local = Point::default();
    assert!(points.handle_of(&local).is_err());
    assert_eq!(points.occupancy(), 1);

    let recovered = points.handle_of(points.get(a).unwrap()).unwrap();
    points.release(recovered).unwrap();
    assert_eq!(points.occupancy(), 0);
}

#[test]
fn pool_exhaustion_is_backpressure() {
    let mut points: SlotPool<Point, 10> = SlotPool::new();
    let handles: Vec<SlotHandle> = (0..10).map(|_| points.acquire().unwrap()).collect();
    assert_eq!(
        points.acquire().unwrap_err(),
        PoolError::ResourceExhausted { capacity: 10 }
    );

    points.release(handles[3]).unwrap();
    assert_eq!(points.acquire().unwrap().index(), handles[3].index());
}

#[test]
fn device_bank_feeds_frame_ring() {
    // Devices live in a pool; their inbound bytes are framed into a ring.
    let mut devices: SlotPool<SerialDevice, 16> = SlotPool::new();
    let mut frames: RingBuffer<Frame, 4> = RingBuffer::new();

    let mut open = Vec::new();
    for n in 0..3 {
        let (h, dev) = devices.acquire_mut().unwrap();
        dev.init(&format!("tty{n}"));
        dev.inject(format!("payload-{n}").as_bytes()).unwrap();
        open.push(h);
    }

    for (seq, &h) in open.iter().enumerate() {
        let dev = devices.get(h).unwrap();
        let frame = frames.push();
        frame.index = seq as u32;
        let n = dev.read(&mut frame.data).unwrap();
        assert_eq!(n, 9);
    }

    let first = frames.pull().unwrap();
    assert_eq!(&first.data[..9], b"payload-0");

    for h in open {
        devices.release(h).unwrap();
    }
    assert_eq!(devices.occupancy(), 0);
}

// ── Model checks ────────────────────────────────────────────────────

#[cfg(not(miri))]
mod model {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    const POOL_SLOTS: usize = 6;
    const LOG_SLOTS: usize = 4;

    /// One step of a workload where every acquisition is logged into a ring.
    #[derive(Clone, Debug)]
    enum Step {
        Acquire,
        Release(usize),
        Pull,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            3 => Just(Step::Acquire),
            2 => (0usize..32).prop_map(Step::Release),
            2 => Just(Step::Pull),
        ]
    }

    proptest! {
        #[test]
        fn pool_and_acquisition_log_match_models(
            steps in proptest::collection::vec(step(), 1..120),
        ) {
            let mut points: SlotPool<Point, POOL_SLOTS> = SlotPool::new();
            let mut log: RingBuffer<SlotIndex, LOG_SLOTS> = RingBuffer::from_fn(SlotIndex);

            // Pool model: freed indices as a LIFO stack, then never-used ones.
            let mut freed: Vec<SlotIndex> = Vec::new();
            let mut fresh = 0usize;
            let mut live: Vec<(SlotHandle, i32)> = Vec::new();
            // Log model: a deque bounded to the ring's capacity.
            let mut log_model: VecDeque<SlotIndex> = VecDeque::new();
            let mut lost = 0u64;
            let mut seq = 0i32;

            for step in steps {
                match step {
                    Step::Acquire => {
                        let expected = match freed.pop() {
                            Some(idx) => Some(idx),
                            None if fresh < POOL_SLOTS => {
                                fresh += 1;
                                Some(SlotIndex(fresh - 1))
                            }
                            None => None,
                        };
                        match (points.acquire_mut(), expected) {
                            (Ok((h, p)), Some(idx)) => {
                                prop_assert_eq!(h.index(), idx);
                                seq += 1;
                                *p = Point::new(seq, -seq);
                                live.push((h, seq));

                                if log_model.len() == LOG_SLOTS {
                                    log_model.pop_front();
                                    lost += 1;
                                }
                                log_model.push_back(idx);
                                *log.push() = idx;
                            }
                            (Err(e), None) => {
                                prop_assert_eq!(
                                    e,
                                    PoolError::ResourceExhausted { capacity: POOL_SLOTS }
                                );
                            }
                            (got, want) => {
                                prop_assert!(false, "acquire gave {:?}, model wanted {:?}", got, want);
                            }
                        }
                    }
                    Step::Release(k) if !live.is_empty() => {
                        let (h, stamp) = live.remove(k % live.len());
                        prop_assert_eq!(*points.get(h).unwrap(), Point::new(stamp, -stamp));
                        prop_assert!(points.release(h).is_ok());
                        freed.push(h.index());
                        prop_assert!(points.release(h).is_err());
                    }
                    Step::Release(_) => {
                        prop_assert_eq!(points.occupancy(), 0);
                    }
                    Step::Pull => match (log.pull(), log_model.pop_front()) {
                        (Ok(got), Some(want)) => {
                            prop_assert_eq!(*got, want);
                        }
                        (Err(e), None) => {
                            prop_assert_eq!(e, RingError::EmptyBuffer { capacity: LOG_SLOTS });
                        }
                        (got, want) => {
                            prop_assert!(false, "log gave {:?}, model wanted {:?}", got, want);
                        }
                    },
                }

                prop_assert_eq!(points.occupancy(), live.len());
                prop_assert_eq!(log.len(), log_model.len());
                prop_assert_eq!(log.dropped(), lost);
                for &(h, stamp) in &live {
                    prop_assert_eq!(points.get(h).unwrap().x, stamp);
                }
            }
        }
    }
}
