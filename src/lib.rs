//! `lotus-bridge` library: a `no_std` translation stage that listens to a
//! Haltech ECU broadcast bus and re-packs the engine state into the frames a
//! Lotus instrument cluster expects, gauge-sweep startup animation included.
//! The crate exposes the codec infrastructure (bounded field reads, unit
//! conversions), the transport seams (frames, queues, clocks, CAN bus), and the
//! bridge components themselves.
#![no_std]

#[cfg(test)]
extern crate std;
//==================================================================================
/// Edge errors (frame construction, field reads, command parsing, runner).
pub mod error;
/// Low-level helpers shared by the decoder and the encoder.
pub mod infra;
/// Frame shapes, transport traits, message layouts, and the bridge components.
pub mod protocol;
//==================================================================================
