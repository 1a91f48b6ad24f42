//! Outbound side of the routing pipeline: a FIFO the encoder writes completed
//! dashboard frames into and the transport layer drains.
//!
//! The contract carries no backpressure signal. Bounded implementations decide
//! locally what to drop when the transport falls behind.
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;

use crate::protocol::transport::bus_frame::BusFrame;

/// Sink accepting frames for dispatch. `push` always succeeds from the
/// caller's point of view.
pub trait OutboundQueue {
    fn push(&mut self, frame: BusFrame);
}

impl<Q: OutboundQueue + ?Sized> OutboundQueue for &mut Q {
    #[inline]
    fn push(&mut self, frame: BusFrame) {
        (**self).push(frame);
    }
}

/// Feed an [`embassy_sync::channel::Channel`] shared with a transport task.
/// A full channel drops the new frame; the next tick brings a fresher one.
impl<'ch, M: RawMutex, const N: usize> OutboundQueue for Sender<'ch, M, BusFrame, N> {
    fn push(&mut self, frame: BusFrame) {
        if self.try_send(frame).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Outbound channel full, frame {} dropped", frame.frame_id);
        }
    }
}
