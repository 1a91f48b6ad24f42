//! FIFO ordering and overflow behaviour of `FrameQueue`.
use super::*;

fn frame(tag: u8) -> BusFrame {
    BusFrame::outbound(2, 1024, [tag, 0, 0, 0, 0, 0, 0, 0])
}

#[test]
fn test_fifo_order() {
    let mut queue = FrameQueue::<4>::new();
    queue.push(frame(1));
    queue.push(frame(2));
    queue.push(frame(3));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek().map(|f| f.data[0]), Some(1));
    assert_eq!(queue.pop().unwrap().data[0], 1);
    assert_eq!(queue.pop().unwrap().data[0], 2);
    assert_eq!(queue.pop().unwrap().data[0], 3);
    assert!(queue.pop().is_none());
}

#[test]
/// A full queue keeps the newest frames and counts the loss.
fn test_overflow_drops_oldest() {
    let mut queue = FrameQueue::<2>::new();
    for tag in 1..=5 {
        queue.push(frame(tag));
    }
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 3);
    assert_eq!(queue.pop().unwrap().data[0], 4);
    assert_eq!(queue.pop().unwrap().data[0], 5);
    assert!(queue.is_empty());
}

#[test]
fn test_wraps_around_buffer() {
    let mut queue = FrameQueue::<3>::new();
    for round in 0..10u8 {
        queue.push(frame(round));
        queue.push(frame(round.wrapping_add(100)));
        assert_eq!(queue.pop().unwrap().data[0], round);
        assert_eq!(queue.pop().unwrap().data[0], round.wrapping_add(100));
    }
    assert_eq!(queue.dropped(), 0);
}

#[test]
fn test_zero_capacity_counts_everything_as_dropped() {
    let mut queue = FrameQueue::<0>::new();
    queue.push(frame(1));
    assert!(queue.is_empty());
    assert_eq!(queue.dropped(), 1);
}

#[test]
fn test_clear() {
    let mut queue = FrameQueue::<2>::default();
    queue.push(frame(1));
    queue.clear();
    assert!(queue.is_empty());
    assert!(queue.peek().is_none());
}
