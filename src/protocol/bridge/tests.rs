//! Pipeline order, tick wiring and command routing.
use super::*;
use crate::protocol::bridge::dash_encoder::DashMode;
use crate::protocol::bridge::engine_state::EngineStateReader;
use crate::protocol::messages::haltech::{HaltechFrame, MilCode, HALTECH_BUS_ID};
use crate::protocol::transport::frame_queue::FrameQueue;
use crate::protocol::transport::traits::clock::ManualClock;
use std::string::String;

fn haltech(frame: HaltechFrame, payload: &[u8]) -> BusFrame {
    BusFrame::new(HALTECH_BUS_ID, frame.id(), payload).unwrap()
}

fn quick_sweep() -> DashEncoderConfig {
    DashEncoderConfig::builder().half_sweep_ms(100).build()
}

#[test]
fn test_process_updates_decoder_and_returns_frame() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::new(&clock);

    let frame = haltech(HaltechFrame::Rpm, &[0x06, 0xD2, 0, 0, 0, 0, 0, 0]);
    assert_eq!(bridge.process(frame), frame);
    assert_eq!(bridge.decoder().state().rpm, 1746);
    assert!(bridge.encoder().is_startup());
}

#[test]
/// Decoded values reach the cluster once the sweep is over.
fn test_tick_reads_decoder() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::with_config(&clock, DecoderConfig::default(), quick_sweep());
    let mut queue = FrameQueue::<8>::new();

    bridge.process(haltech(HaltechFrame::Rpm, &[0x06, 0xD2]));
    bridge.process(haltech(HaltechFrame::WheelSpeed, &[0x03, 0xE8]));
    bridge.process(haltech(HaltechFrame::CoolantTemp, &[0x0C, 0x1C]));
    bridge.process(haltech(HaltechFrame::Status, &[0, 0, 0, 0, 0, 0, 0, 0x04]));

    for now in [100, 200, 300, 400] {
        clock.set(now);
        bridge.tick(&mut queue);
    }
    assert_eq!(bridge.encoder().mode(), DashMode::Live);
    assert_eq!(queue.len(), 4);

    let live = (0..4).filter_map(|_| queue.pop()).last().unwrap();
    assert_eq!(live.data, [100, 0x00, 0x06, 0xD2, 0x00, 37, 0x04, 0x00]);
    assert_eq!(live.bus_id, 2);
    assert_eq!(live.frame_id, 1024);
}

#[test]
fn test_tick_at_ignores_clock() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::new(&clock);
    let mut queue = FrameQueue::<2>::new();

    bridge.tick_at(500, &mut queue);
    assert_eq!(queue.len(), 1);
    assert_eq!(bridge.encoder().last_emit_ms(), 500);
}

#[test]
/// Dashboard frames looping back on the cluster bus are not decoded.
fn test_own_frames_are_not_decoded() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::new(&clock);
    let mut queue = FrameQueue::<1>::new();

    bridge.tick_at(100, &mut queue);
    let echoed = queue.pop().unwrap();
    bridge.process(echoed);
    assert_eq!(bridge.decoder().state().rpm, 0);
}

#[test]
fn test_command_routing() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::with_config(&clock, DecoderConfig::default(), quick_sweep());
    let mut queue = FrameQueue::<4>::new();
    bridge.process(haltech(HaltechFrame::Status, &[0, 0, 0, 0, 0, 0, 0, 0x01]));

    let mut console = String::new();
    bridge.command(Component::EngineState, &[0x01], &mut console);
    assert!(console.starts_with("EngineStateDecoder status\n"));
    assert!(console.contains("MIL          6\n"));

    console.clear();
    bridge.command(Component::Dash, &[0x02], &mut console);
    assert!(console.starts_with("DashEncoder status\n"));
    assert!(console.contains("Lamps        mil|oil\n"));

    // Finish the sweep, then rewind it from the command channel.
    bridge.tick_at(100, &mut queue);
    bridge.tick_at(300, &mut queue);
    assert_eq!(bridge.encoder().mode(), DashMode::Live);

    console.clear();
    bridge.command(Component::Dash, &[0x01], &mut console);
    assert!(bridge.encoder().is_startup());
    assert!(console.is_empty());

    // Engine-state commands never touch the encoder.
    bridge.command(Component::EngineState, &[0x02], &mut console);
    assert!(console.is_empty());
    assert_eq!(bridge.decoder().mil(), MilCode::Fault);
}
