//! Async runner scenarios: two mock buses, a tokio timer and a wall clock.

mod helpers;

use helpers::{MockCanBus, MockTimer, TokioClock};
use lotus_bridge::error::BridgeRunError;
use lotus_bridge::protocol::bridge::dash_encoder::DashEncoderConfig;
use lotus_bridge::protocol::bridge::engine_state::DecoderConfig;
use lotus_bridge::protocol::bridge::runner::BridgeRunner;
use lotus_bridge::protocol::bridge::Bridge;
use lotus_bridge::protocol::messages::dash::{DashReading, DASH_FRAME_ID, LOTUS_BUS_ID};
use lotus_bridge::protocol::messages::haltech::{HaltechFrame, HALTECH_BUS_ID};
use lotus_bridge::protocol::transport::bus_frame::BusFrame;
use lotus_bridge::protocol::transport::traits::can_bus::CanBus;
use tokio::time::{sleep, timeout, Duration};

fn quick_bridge() -> Bridge<TokioClock> {
    let config = DashEncoderConfig::builder().half_sweep_ms(50).build();
    Bridge::with_config(TokioClock::new(), DecoderConfig::default(), config)
}

#[tokio::test]
async fn runner_sweeps_then_forwards_live_data() {
    let (ecu_dut, mut ecu_host) = MockCanBus::create_pair(HALTECH_BUS_ID);
    let (dash_dut, mut dash_host) = MockCanBus::create_pair(LOTUS_BUS_ID);

    let runner = BridgeRunner::new(quick_bridge(), ecu_dut, dash_dut, MockTimer);
    assert!(runner.bridge().encoder().is_startup());
    let runner_future = runner.drive();
    tokio::pin!(runner_future);

    // The mock stamps the bus id on reception, whatever the sender wrote.
    let rpm = BusFrame::new(0, HaltechFrame::Rpm.id(), &[0x06, 0xD2, 0, 0, 0, 0, 0, 0])
        .expect("valid frame");
    ecu_host.send(&rpm).await.expect("ECU bus open");

    let mut frames = Vec::new();
    while frames.len() < 3 {
        tokio::select! {
            result = &mut runner_future => {
                panic!("runner ended unexpectedly: {:?}", result);
            }
            frame = dash_host.recv() => {
                frames.push(frame.expect("dash bus open"));
            }
            _ = sleep(Duration::from_secs(2)) => {
                panic!("no dashboard frame within 2 s");
            }
        }
    }

    for frame in &frames {
        assert_eq!(frame.frame_id, DASH_FRAME_ID);
        assert_eq!(frame.len, 8);
    }
    assert_eq!(frames[0].data, DashReading::SWEEP_RISING.to_payload());
    assert_eq!(frames[1].data, DashReading::SWEEP_RESTING.to_payload());
    assert_eq!(frames[2].data, [0x00, 0x00, 0x06, 0xD2, 0x00, 0x00, 0x00, 0x00]);
}

#[tokio::test]
async fn runner_stops_when_source_bus_closes() {
    let (ecu_dut, ecu_host) = MockCanBus::create_pair(HALTECH_BUS_ID);
    let (dash_dut, _dash_host) = MockCanBus::create_pair(LOTUS_BUS_ID);

    let runner =
        BridgeRunner::new(quick_bridge(), ecu_dut, dash_dut, MockTimer).with_tick_period(5);
    drop(ecu_host);

    let result = timeout(Duration::from_secs(1), runner.drive())
        .await
        .expect("runner must stop on a closed bus");
    assert!(matches!(result, Err(BridgeRunError::Receive(()))));
}

#[tokio::test]
async fn runner_stops_when_dash_bus_refuses_frames() {
    let (ecu_dut, _ecu_host) = MockCanBus::create_pair(HALTECH_BUS_ID);
    let (dash_dut, dash_host) = MockCanBus::create_pair(LOTUS_BUS_ID);

    let runner = BridgeRunner::new(quick_bridge(), ecu_dut, dash_dut, MockTimer);
    drop(dash_host);

    let result = timeout(Duration::from_secs(1), runner.drive())
        .await
        .expect("runner must stop on the first refused frame");
    assert!(matches!(result, Err(BridgeRunError::Send(()))));
}
