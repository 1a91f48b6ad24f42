//! Async driver for a [`Bridge`].
//!
//! One task, one loop: wait for either an inbound frame on the ECU bus or the
//! end of the scheduler period, feed the bridge, then flush whatever the
//! encoder queued to the cluster bus. The bridge is never touched by two
//! operations at once.
//!
//! No allocation happens in the loop and the runner does not depend on a
//! particular BSP: buses and timer are supplied by the firmware.

use futures_util::{future::select, future::Either, pin_mut};

use crate::error::BridgeRunError;
use crate::protocol::bridge::Bridge;
use crate::protocol::transport::frame_queue::FrameQueue;
use crate::protocol::transport::traits::bridge_timer::BridgeTimer;
use crate::protocol::transport::traits::can_bus::CanBus;
use crate::protocol::transport::traits::clock::MonotonicClock;
use crate::protocol::transport::{OUTBOUND_QUEUE_DEPTH, SCHEDULER_TICK_MS};

/// Runner owning the bridge, both buses and the scheduler timer.
pub struct BridgeRunner<S, D, T, C>
where
    S: CanBus,
    D: CanBus<Error = S::Error>,
    T: BridgeTimer,
    C: MonotonicClock,
{
    bridge: Bridge<C>,
    source: S,
    dash: D,
    timer: T,
    tick_period_ms: u32,
}

impl<S, D, T, C> BridgeRunner<S, D, T, C>
where
    S: CanBus,
    D: CanBus<Error = S::Error>,
    T: BridgeTimer,
    C: MonotonicClock,
{
    /// `source` carries the Haltech broadcasts, `dash` reaches the cluster.
    pub fn new(bridge: Bridge<C>, source: S, dash: D, timer: T) -> Self {
        Self {
            bridge,
            source,
            dash,
            timer,
            tick_period_ms: SCHEDULER_TICK_MS,
        }
    }

    /// Override the scheduler period (ms).
    pub fn with_tick_period(mut self, tick_period_ms: u32) -> Self {
        self.tick_period_ms = tick_period_ms;
        self
    }

    pub fn bridge(&self) -> &Bridge<C> {
        &self.bridge
    }

    /// Run forever; returns only when a bus fails.
    pub async fn drive(mut self) -> Result<(), BridgeRunError<S::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("Bridge runner started, tick period {} ms", self.tick_period_ms);

        loop {
            let mut received = None;
            let mut recv_error = None;

            {
                let recv_future = self.source.recv();
                let delay_future = self.timer.delay_ms(self.tick_period_ms);
                pin_mut!(recv_future);
                pin_mut!(delay_future);

                match select(recv_future, delay_future).await {
                    Either::Left((Ok(frame), _)) => received = Some(frame),
                    Either::Left((Err(err), _)) => recv_error = Some(err),
                    // Scheduler period elapsed with a quiet bus.
                    Either::Right(((), _)) => {}
                }
            }

            if let Some(err) = recv_error {
                return Err(BridgeRunError::Receive(err));
            }

            if let Some(frame) = received {
                self.bridge.process(frame);
            }

            let mut outbound = FrameQueue::<OUTBOUND_QUEUE_DEPTH>::new();
            self.bridge.tick(&mut outbound);

            while let Some(frame) = outbound.pop() {
                if !frame.dispatch {
                    continue;
                }
                self.dash.send(&frame).await.map_err(BridgeRunError::Send)?;
            }
        }
    }
}
