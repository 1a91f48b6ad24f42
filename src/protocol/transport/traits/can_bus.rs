//! Minimal abstraction for an asynchronous CAN bus. Allows the bridge runner to
//! plug into various implementations (embedded HAL, SocketCAN, test doubles).
use crate::protocol::transport::bus_frame::BusFrame;
use futures_util::Future;

/// Contract to send and receive frames asynchronously on one physical bus.
///
/// Implementations stamp received frames with their own bus id; the id of an
/// outgoing frame is informational.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Emit a frame on the bus. Asynchronous to accommodate non-blocking drivers.
    fn send<'a>(
        &'a mut self,
        frame: &'a BusFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Retrieve the next available frame. Asynchronously waits until data arrives.
    fn recv<'a>(
        &'a mut self,
    ) -> impl core::future::Future<Output = Result<BusFrame, Self::Error>> + 'a;
}
