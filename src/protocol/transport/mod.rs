//! Transport seams of the bridge: the in-memory frame representation, the
//! outbound FIFO, and the traits abstracting the CAN driver, the clock and the
//! tick timer.
//!
//! ## Timing Constants
//!
//! These constants define the cadence the Lotus cluster expects and the
//! scheduler period recommended to honour it.

pub mod bus_frame;
pub mod frame_queue;
pub mod traits;

/// Minimal interval between two dashboard frames (ms).
///
/// The cluster keeps its needles in place between updates; refreshing faster
/// than every 100 ms only adds bus load. The gate guarantees "at least 100 ms
/// since the previous emission", never emission exactly on the boundary.
pub const DASH_UPDATE_INTERVAL_MS: u32 = 100;

/// Recommended scheduler period for [`BridgeRunner`](crate::protocol::bridge::runner::BridgeRunner) (ms).
///
/// Must stay well below [`DASH_UPDATE_INTERVAL_MS`] so the gate, not the
/// scheduler, sets the dashboard refresh rate.
///
/// # Recommended Values
///
/// - **10 ms**: default, worst-case refresh jitter of one period.
/// - **1 ms**: tight loops driven by a hardware timer.
pub const SCHEDULER_TICK_MS: u32 = 10;

/// Default depth of the outbound queue between the encoder and the transport.
pub const OUTBOUND_QUEUE_DEPTH: usize = 8;
