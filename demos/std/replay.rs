//! Host replay of a power-on and a short drive.
//!
//! Feeds a recorded Haltech capture through the bridge on a hand-driven 10 ms
//! scheduler and prints every frame sent to the cluster, followed by both
//! status dumps.
//!
//! ```text
//! cargo run --example replay
//! ```

use lotus_bridge::protocol::bridge::{Bridge, Component};
use lotus_bridge::protocol::messages::haltech::{HaltechFrame, HALTECH_BUS_ID};
use lotus_bridge::protocol::transport::bus_frame::BusFrame;
use lotus_bridge::protocol::transport::frame_queue::FrameQueue;
use lotus_bridge::protocol::transport::traits::clock::ManualClock;
use lotus_bridge::protocol::transport::{OUTBOUND_QUEUE_DEPTH, SCHEDULER_TICK_MS};

/// (timestamp ms, frame, first payload bytes). Remaining bytes are zero.
const CAPTURE: &[(u32, HaltechFrame, [u8; 8])] = &[
    // Cranking, cold engine, MIL lit during the self-test.
    (400, HaltechFrame::Status, [0, 0, 0, 0, 0, 0, 0, 0x01]),
    (400, HaltechFrame::CoolantTemp, [0x0B, 0x72, 0, 0, 0, 0, 0, 0]),
    (450, HaltechFrame::Rpm, [0x00, 0xC8, 0, 0, 0, 0, 0, 0]),
    // Running, self-test over.
    (900, HaltechFrame::Rpm, [0x03, 0x52, 0, 0, 0, 0, 0, 0]),
    (900, HaltechFrame::Status, [0, 0, 0, 0, 0, 0, 0, 0x00]),
    (2500, HaltechFrame::FuelLevel, [0x4B, 0, 0, 0, 0, 0, 0, 0]),
    // Pulling away.
    (3500, HaltechFrame::Rpm, [0x09, 0xC4, 0, 0, 0, 0, 0, 0]),
    (3500, HaltechFrame::WheelSpeed, [0x00, 0xC8, 0, 0, 0, 0, 0, 0]),
    (3800, HaltechFrame::Rpm, [0x0F, 0xA0, 0, 0, 0, 0, 0, 0]),
    (3800, HaltechFrame::WheelSpeed, [0x01, 0xF4, 0, 0, 0, 0, 0, 0]),
    (4000, HaltechFrame::CoolantTemp, [0x0C, 0x1C, 0, 0, 0, 0, 0, 0]),
    // Overheating: limp mode.
    (4300, HaltechFrame::CoolantTemp, [0x0E, 0xA6, 0, 0, 0, 0, 0, 0]),
    (4300, HaltechFrame::Status, [0, 0, 0, 0, 0, 0, 0, 0x04]),
    (4300, HaltechFrame::Rpm, [0x0B, 0xB8, 0, 0, 0, 0, 0, 0]),
];

const DURATION_MS: u32 = 4600;

fn main() {
    let clock = ManualClock::new(0);
    let mut bridge = Bridge::new(&clock);
    let mut outbound = FrameQueue::<OUTBOUND_QUEUE_DEPTH>::new();
    let mut capture = CAPTURE.iter().peekable();

    println!("  time  bus    id  payload");
    let mut now = 0;
    while now <= DURATION_MS {
        clock.set(now);

        while let Some((_, kind, payload)) = capture.next_if(|(at, _, _)| *at <= now) {
            match BusFrame::new(HALTECH_BUS_ID, kind.id(), payload) {
                Ok(frame) => {
                    bridge.process(frame);
                }
                Err(err) => eprintln!("skipping capture entry: {err}"),
            }
        }

        bridge.tick(&mut outbound);
        while let Some(frame) = outbound.pop() {
            println!(
                "{:>6}  {:>3}  {:#05x}  {:02X?}",
                now,
                frame.bus_id,
                frame.frame_id,
                frame.as_slice()
            );
        }

        now += SCHEDULER_TICK_MS;
    }

    let mut console = String::new();
    bridge.command(Component::EngineState, &[0x01], &mut console);
    bridge.command(Component::Dash, &[0x02], &mut console);
    println!();
    print!("{console}");
}
