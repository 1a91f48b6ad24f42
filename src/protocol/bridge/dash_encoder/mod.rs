//! Lotus side of the bridge: periodically packs the engine state into the
//! cluster's status frame.
//!
//! # State machine
//!
//! ```text
//!            reset (0x01)
//!        +----------------+
//!        v                |
//!   +---------+  elapsed >= 2 * half_sweep   +------+
//!   | Startup | ----------------------------> | Live |
//!   +---------+                               +------+
//! ```
//!
//! In `Startup` every gated tick emits a synthetic reading: needles at their
//! stops for the first half of the sweep, parked for the second half. In
//! `Live` every gated tick translates the current engine state.
//!
//! All timing uses `wrapping_sub` on the millisecond counter, so the gate and
//! the sweep survive the counter rolling over.
use core::fmt;

use crate::error::CommandError;
use crate::infra::codec::fields::split_u16_be;
use crate::infra::codec::units::{fuel_percent_to_byte, FuelConversion};
use crate::protocol::bridge::diagnostics::write_dash_status;
use crate::protocol::bridge::engine_state::EngineStateReader;
use crate::protocol::messages::dash::{DashReading, DASH_FRAME_ID, LOTUS_BUS_ID};
use crate::protocol::transport::bus_frame::BusFrame;
use crate::protocol::transport::traits::clock::MonotonicClock;
use crate::protocol::transport::traits::outbound_queue::OutboundQueue;
use crate::protocol::transport::DASH_UPDATE_INTERVAL_MS;

//==================================================================================Constants

/// Default duration of each half of the gauge sweep (ms).
///
/// Long enough for the tachometer needle to reach its stop; 5000 ms gives a
/// slower, more theatrical sweep on clusters with damped needles.
pub const DEFAULT_HALF_SWEEP_MS: u32 = 1500;

//==================================================================================Config

/// Encoder settings.
#[derive(Debug, Clone, Copy)]
pub struct DashEncoderConfig {
    /// Bus the cluster listens on.
    pub bus_id: u8,
    /// Identifier of the status frame.
    pub frame_id: u16,
    /// Duration of each half of the startup sweep (ms).
    pub half_sweep_ms: u32,
    /// Minimal delay between two emitted frames (ms).
    pub update_interval_ms: u32,
    /// Fuel percentage to gauge byte.
    pub fuel_conversion: FuelConversion,
}

impl DashEncoderConfig {
    pub fn builder() -> DashEncoderConfigBuilder {
        DashEncoderConfigBuilder::new()
    }
}

impl Default for DashEncoderConfig {
    fn default() -> Self {
        Self {
            bus_id: LOTUS_BUS_ID,
            frame_id: DASH_FRAME_ID,
            half_sweep_ms: DEFAULT_HALF_SWEEP_MS,
            update_interval_ms: DASH_UPDATE_INTERVAL_MS,
            fuel_conversion: fuel_percent_to_byte,
        }
    }
}

/// Fluent builder for [`DashEncoderConfig`].
#[derive(Debug)]
pub struct DashEncoderConfigBuilder {
    config: DashEncoderConfig,
}

impl DashEncoderConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DashEncoderConfig::default(),
        }
    }

    pub fn bus_id(mut self, bus_id: u8) -> Self {
        self.config.bus_id = bus_id;
        self
    }

    pub fn frame_id(mut self, frame_id: u16) -> Self {
        self.config.frame_id = frame_id;
        self
    }

    pub fn half_sweep_ms(mut self, half_sweep_ms: u32) -> Self {
        self.config.half_sweep_ms = half_sweep_ms;
        self
    }

    pub fn update_interval_ms(mut self, update_interval_ms: u32) -> Self {
        self.config.update_interval_ms = update_interval_ms;
        self
    }

    /// Swap the fuel gauge formula.
    pub fn fuel_conversion(mut self, fuel_conversion: FuelConversion) -> Self {
        self.config.fuel_conversion = fuel_conversion;
        self
    }

    pub fn build(self) -> DashEncoderConfig {
        self.config
    }
}

impl Default for DashEncoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================State

/// Encoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DashMode {
    /// Gauge sweep in progress. `None` until the first gated tick.
    Startup { sweep_started_at: Option<u32> },
    /// Live translation of the engine state.
    Live,
}

/// Sub-commands accepted on the command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DashCommand {
    /// `0x01`: replay the gauge sweep.
    ResetSweep,
    /// `0x02`: dump the reading the live translation currently produces.
    PrintStatus,
}

impl TryFrom<&[u8]> for DashCommand {
    type Error = CommandError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.first() {
            None => Err(CommandError::Empty),
            Some(0x01) => Ok(Self::ResetSweep),
            Some(0x02) => Ok(Self::PrintStatus),
            Some(&code) => Err(CommandError::UnknownCode { code }),
        }
    }
}

//==================================================================================Encoder

/// Cluster encoder driven by the scheduler tick.
#[derive(Debug)]
pub struct DashEncoder<C: MonotonicClock> {
    clock: C,
    config: DashEncoderConfig,
    mode: DashMode,
    last_emit_ms: u32,
}

impl<C: MonotonicClock> DashEncoder<C> {
    /// Encoder with default settings and the given sweep half-period.
    pub fn new(clock: C, half_sweep_ms: u32) -> Self {
        Self::with_config(
            clock,
            DashEncoderConfig::builder()
                .half_sweep_ms(half_sweep_ms)
                .build(),
        )
    }

    pub fn with_config(clock: C, config: DashEncoderConfig) -> Self {
        Self {
            clock,
            config,
            mode: DashMode::Startup {
                sweep_started_at: None,
            },
            last_emit_ms: 0,
        }
    }

    pub fn config(&self) -> &DashEncoderConfig {
        &self.config
    }

    pub fn mode(&self) -> DashMode {
        self.mode
    }

    /// Whether the sweep still has to run or finish.
    #[inline]
    pub fn is_startup(&self) -> bool {
        matches!(self.mode, DashMode::Startup { .. })
    }

    /// Clock reading of the last emitted frame.
    #[inline]
    pub fn last_emit_ms(&self) -> u32 {
        self.last_emit_ms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    //==================================================================================Process Functions
    /// The encoder does not react to traffic; frames pass through.
    #[inline]
    pub fn process(&mut self, frame: BusFrame) -> BusFrame {
        frame
    }

    /// Scheduler hook: emit one frame if the update interval has elapsed.
    pub fn tick<R, Q>(&mut self, reader: &R, queue: &mut Q)
    where
        R: EngineStateReader + ?Sized,
        Q: OutboundQueue + ?Sized,
    {
        let now = self.clock.now_ms();
        self.tick_at(now, reader, queue);
    }

    /// [`tick`](Self::tick) with an explicit clock reading.
    pub fn tick_at<R, Q>(&mut self, now: u32, reader: &R, queue: &mut Q)
    where
        R: EngineStateReader + ?Sized,
        Q: OutboundQueue + ?Sized,
    {
        if now.wrapping_sub(self.last_emit_ms) < self.config.update_interval_ms {
            return;
        }

        let reading = match self.mode {
            DashMode::Startup { .. } => self.sweep_step(now),
            DashMode::Live => self.translate(reader),
        };

        queue.push(reading.to_frame(self.config.bus_id, self.config.frame_id));
        self.last_emit_ms = now;
    }

    /// Live translation of an engine state into cluster units.
    ///
    /// Speed and temperature are forwarded as-is, truncated to one byte; the
    /// cluster's own offsets (mph + 11, degF + 14) are not applied.
    pub fn translate<R: EngineStateReader + ?Sized>(&self, reader: &R) -> DashReading {
        let (rpm_high, rpm_low) = split_u16_be(reader.rpm());
        DashReading {
            speed: reader.wheel_speed() as u8,
            rpm_high,
            rpm_low,
            fuel: (self.config.fuel_conversion)(reader.fuel_level()),
            temperature: reader.coolant_temp() as u8,
            mil: reader.mil().code(),
        }
    }

    /// Replay the gauge sweep from the next gated tick.
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Gauge sweep re-armed");

        self.mode = DashMode::Startup {
            sweep_started_at: None,
        };
    }

    /// Handle a command-channel message addressed to the encoder.
    ///
    /// Writing to the console is best-effort; a failing sink is ignored.
    pub fn command_handler<R, W>(&mut self, bytes: &[u8], reader: &R, console: &mut W)
    where
        R: EngineStateReader + ?Sized,
        W: fmt::Write + ?Sized,
    {
        match DashCommand::try_from(bytes) {
            Ok(DashCommand::ResetSweep) => self.reset(),
            Ok(DashCommand::PrintStatus) => {
                let reading = self.translate(reader);
                let _ = write_dash_status(console, &reading, reader.fuel_level());
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Dash command ignored: {}", _err);
            }
        }
    }

    /// One frame of the startup animation. Switches to `Live` once the full
    /// sweep has elapsed, after that tick's frame.
    fn sweep_step(&mut self, now: u32) -> DashReading {
        let started_at = match self.mode {
            DashMode::Startup {
                sweep_started_at: Some(started_at),
            } => started_at,
            _ => {
                #[cfg(feature = "defmt")]
                defmt::info!("Gauge sweep started at {} ms", now);

                self.mode = DashMode::Startup {
                    sweep_started_at: Some(now),
                };
                now
            }
        };

        let half = self.config.half_sweep_ms;
        let elapsed = now.wrapping_sub(started_at);
        let reading = if elapsed <= half {
            DashReading::SWEEP_RISING
        } else {
            DashReading::SWEEP_RESTING
        };

        if elapsed >= half.saturating_mul(2) {
            #[cfg(feature = "defmt")]
            defmt::info!("Gauge sweep finished after {} ms", elapsed);

            self.mode = DashMode::Live;
        }

        reading
    }
}
