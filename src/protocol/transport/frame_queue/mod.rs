//! Fixed-capacity FIFO between the encoder and the transport layer.
//!
//! The routing pipeline assumes `push` always succeeds. With a bounded buffer
//! that means something has to give when the transport stalls: the oldest
//! frame is overwritten, since a newer dashboard frame supersedes it anyway.
use crate::protocol::transport::bus_frame::BusFrame;
use crate::protocol::transport::traits::outbound_queue::OutboundQueue;

/// Ring buffer holding up to `N` frames, no heap involved.
#[derive(Debug, Clone, Copy)]
pub struct FrameQueue<const N: usize> {
    slots: [BusFrame; N],
    head: usize,
    len: usize,
    dropped: u32,
}

impl<const N: usize> Default for FrameQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameQueue<N> {
    /// Instantiate an empty queue.
    pub const fn new() -> Self {
        Self {
            slots: [BusFrame {
                bus_id: 0,
                frame_id: 0,
                data: [0; 8],
                len: 0,
                dispatch: false,
            }; N],
            head: 0,
            len: 0,
            dropped: 0,
        }
    }

    /// Number of queued frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Frames overwritten because the queue was full.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Remove and return the oldest frame.
    pub fn pop(&mut self) -> Option<BusFrame> {
        if self.len == 0 {
            return None;
        }
        let frame = self.slots[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(frame)
    }

    /// Oldest frame without removing it.
    pub fn peek(&self) -> Option<&BusFrame> {
        if self.len == 0 {
            None
        } else {
            Some(&self.slots[self.head])
        }
    }

    /// Drop every queued frame.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl<const N: usize> OutboundQueue for FrameQueue<N> {
    fn push(&mut self, frame: BusFrame) {
        if N == 0 {
            self.dropped = self.dropped.wrapping_add(1);
            return;
        }
        if self.len == N {
            // Overwrite the oldest slot and move the head past it.
            self.slots[self.head] = frame;
            self.head = (self.head + 1) % N;
            self.dropped = self.dropped.wrapping_add(1);

            #[cfg(feature = "defmt")]
            defmt::warn!("Outbound queue full, dropped oldest frame");
            return;
        }
        let tail = (self.head + self.len) % N;
        self.slots[tail] = frame;
        self.len += 1;
    }
}

//==================================================================================TEST_FRAME_QUEUE
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
