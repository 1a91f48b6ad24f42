/// Test doubles to simulate the CAN buses, timer and clock during integration tests.
use lotus_bridge::protocol::transport::{
    bus_frame::BusFrame,
    traits::{bridge_timer::BridgeTimer, can_bus::CanBus, clock::MonotonicClock},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    bus_id: u8,
    tx: mpsc::UnboundedSender<BusFrame>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<BusFrame>>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct a pair of interconnected endpoints (DUT ↔ host) on one bus.
    pub fn create_pair(bus_id: u8) -> (Self, Self) {
        let (dut_tx, host_rx) = mpsc::unbounded_channel();
        let (host_tx, dut_rx) = mpsc::unbounded_channel();

        let dut_bus = Self {
            bus_id,
            tx: dut_tx,
            rx: Arc::new(Mutex::new(dut_rx)),
        };

        let host_bus = Self {
            bus_id,
            tx: host_tx,
            rx: Arc::new(Mutex::new(host_rx)),
        };

        (dut_bus, host_bus)
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a BusFrame) -> Result<(), Self::Error> {
        self.tx.send(*frame).map_err(|_| ())?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<BusFrame, Self::Error> {
        let mut rx = self.rx.lock().await;
        let mut frame = rx.recv().await.ok_or(())?;
        frame.bus_id = self.bus_id;
        Ok(frame)
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl BridgeTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[allow(dead_code)]
/// Wall clock counting milliseconds since construction.
pub struct TokioClock {
    start: Instant,
}

#[allow(dead_code)]
impl TokioClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl MonotonicClock for TokioClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
