//! Translation pipeline between the Haltech ECU bus and the Lotus cluster.
//!
//! [`Bridge`] owns both stages and calls them in a fixed order: every inbound
//! frame goes through the [`EngineStateDecoder`] first, then the
//! [`DashEncoder`]; every scheduler tick lets the encoder read the decoder
//! through the [`EngineStateReader`](engine_state::EngineStateReader) view.
use core::fmt;

pub mod dash_encoder;
pub mod diagnostics;
pub mod engine_state;
pub mod runner;

use crate::protocol::transport::bus_frame::BusFrame;
use crate::protocol::transport::traits::clock::MonotonicClock;
use crate::protocol::transport::traits::outbound_queue::OutboundQueue;
use dash_encoder::{DashEncoder, DashEncoderConfig};
use engine_state::{DecoderConfig, EngineStateDecoder};

/// Command-channel target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    EngineState,
    Dash,
}

/// Decoder and encoder wired together.
#[derive(Debug)]
pub struct Bridge<C: MonotonicClock> {
    decoder: EngineStateDecoder,
    encoder: DashEncoder<C>,
}

impl<C: MonotonicClock> Bridge<C> {
    /// Bridge with default bus ids, frame id and a 1500 ms sweep.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, DecoderConfig::default(), DashEncoderConfig::default())
    }

    pub fn with_config(
        clock: C,
        decoder_config: DecoderConfig,
        encoder_config: DashEncoderConfig,
    ) -> Self {
        Self {
            decoder: EngineStateDecoder::with_config(decoder_config),
            encoder: DashEncoder::with_config(clock, encoder_config),
        }
    }

    pub fn decoder(&self) -> &EngineStateDecoder {
        &self.decoder
    }

    pub fn encoder(&self) -> &DashEncoder<C> {
        &self.encoder
    }

    /// Run a frame through both stages; returns it unchanged.
    pub fn process(&mut self, frame: BusFrame) -> BusFrame {
        let frame = self.decoder.process(frame);
        self.encoder.process(frame)
    }

    /// Scheduler hook.
    pub fn tick<Q: OutboundQueue + ?Sized>(&mut self, queue: &mut Q) {
        self.decoder.tick();
        self.encoder.tick(&self.decoder, queue);
    }

    /// [`tick`](Self::tick) with an explicit clock reading.
    pub fn tick_at<Q: OutboundQueue + ?Sized>(&mut self, now: u32, queue: &mut Q) {
        self.decoder.tick();
        self.encoder.tick_at(now, &self.decoder, queue);
    }

    /// Route a command-channel message to one component.
    pub fn command<W: fmt::Write + ?Sized>(
        &mut self,
        target: Component,
        bytes: &[u8],
        console: &mut W,
    ) {
        match target {
            Component::EngineState => self.decoder.command_handler(bytes, console),
            Component::Dash => self.encoder.command_handler(bytes, &self.decoder, console),
        }
    }
}

//==================================================================================TEST_BRIDGE
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
