//! Haltech side of the bridge: a tap on the ECU bus that keeps the latest
//! engine snapshot.
//!
//! The decoder never consumes frames. Every frame handed to
//! [`EngineStateDecoder::process`] comes back untouched so downstream stages
//! of the routing pipeline still see it; matching broadcasts update one field
//! of the snapshot as a side effect.
use core::fmt;

use crate::error::{CommandError, FieldError};
use crate::infra::codec::units::{deci_kelvin_to_celsius, tenths_to_whole};
use crate::protocol::bridge::diagnostics::write_engine_status;
use crate::protocol::messages::haltech::{
    HaltechFrame, MilCode, HALTECH_BUS_ID, STATUS_BYTE, STATUS_LIMP_BIT, STATUS_MIL_BIT,
};
use crate::protocol::transport::bus_frame::BusFrame;

/// Read-only view of the engine state.
///
/// This is the only capability the dashboard encoder needs, so it can be fed
/// by the decoder, a bare [`EngineState`], or any other source.
pub trait EngineStateReader {
    /// Engine speed, rpm.
    fn rpm(&self) -> u16;
    /// Road speed, whole km/h.
    fn wheel_speed(&self) -> u16;
    /// Coolant temperature, whole degrees Celsius.
    fn coolant_temp(&self) -> i16;
    /// Fuel level, percent.
    fn fuel_level(&self) -> u8;
    /// Warning lamp code.
    fn mil(&self) -> MilCode;
}

/// Latest decoded values. A single snapshot, not a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineState {
    pub rpm: u16,
    pub wheel_speed_kmh: u16,
    pub coolant_temp_c: i16,
    /// Never populated: the fuel broadcast is not decoded yet.
    pub fuel_level_percent: u8,
    pub mil: MilCode,
}

impl EngineStateReader for EngineState {
    #[inline]
    fn rpm(&self) -> u16 {
        self.rpm
    }

    #[inline]
    fn wheel_speed(&self) -> u16 {
        self.wheel_speed_kmh
    }

    #[inline]
    fn coolant_temp(&self) -> i16 {
        self.coolant_temp_c
    }

    #[inline]
    fn fuel_level(&self) -> u8 {
        self.fuel_level_percent
    }

    #[inline]
    fn mil(&self) -> MilCode {
        self.mil
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Bus carrying the ECU broadcasts.
    pub bus_id: u8,
}

impl DecoderConfig {
    pub const fn new(bus_id: u8) -> Self {
        Self { bus_id }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new(HALTECH_BUS_ID)
    }
}

/// Sub-commands accepted on the command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderCommand {
    /// `0x01`: dump the current readings to the console.
    PrintStatus,
}

impl TryFrom<&[u8]> for DecoderCommand {
    type Error = CommandError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.first() {
            None => Err(CommandError::Empty),
            Some(0x01) => Ok(Self::PrintStatus),
            Some(&code) => Err(CommandError::UnknownCode { code }),
        }
    }
}

/// Tap extracting the engine state from Haltech broadcasts.
#[derive(Debug, Clone, Default)]
pub struct EngineStateDecoder {
    config: DecoderConfig,
    state: EngineState,
}

impl EngineStateDecoder {
    /// Decoder listening on the default ECU bus.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            state: EngineState::default(),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Current snapshot.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    //==================================================================================Process Functions
    /// Observe a frame and hand it back unchanged.
    ///
    /// Frames from other buses, unknown identifiers, and payloads too short
    /// for the field they carry leave the snapshot untouched.
    pub fn process(&mut self, frame: BusFrame) -> BusFrame {
        if frame.bus_id != self.config.bus_id {
            return frame;
        }
        if let Some(kind) = HaltechFrame::from_id(frame.frame_id) {
            if let Err(_err) = self.decode(kind, &frame) {
                #[cfg(feature = "defmt")]
                defmt::debug!("Frame {} ignored: {}", frame.frame_id, _err);
            }
        }
        frame
    }

    /// Scheduler hook. Nothing periodic happens on the ECU side.
    pub fn tick(&mut self) {}

    /// Handle a command-channel message addressed to the decoder.
    ///
    /// Writing to the console is best-effort; a failing sink is ignored.
    pub fn command_handler<W: fmt::Write + ?Sized>(&mut self, bytes: &[u8], console: &mut W) {
        match DecoderCommand::try_from(bytes) {
            Ok(DecoderCommand::PrintStatus) => {
                let _ = write_engine_status(console, &self.state);
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Decoder command ignored: {}", _err);
            }
        }
    }

    /// Apply one broadcast to the snapshot.
    fn decode(&mut self, kind: HaltechFrame, frame: &BusFrame) -> Result<(), FieldError> {
        let reader = frame.reader();
        match kind {
            HaltechFrame::Rpm => {
                self.state.rpm = reader.read_u16_be(0)?;
            }
            HaltechFrame::WheelSpeed => {
                self.state.wheel_speed_kmh = tenths_to_whole(reader.read_u16_be(0)?);
            }
            HaltechFrame::CoolantTemp => {
                self.state.coolant_temp_c = deci_kelvin_to_celsius(reader.read_u16_be(0)?);
            }
            // Fuel layout is not mapped; the reading stays at its default.
            HaltechFrame::FuelLevel => {}
            HaltechFrame::Status => {
                let mil = reader.read_bit(STATUS_BYTE, STATUS_MIL_BIT)?;
                let limp = reader.read_bit(STATUS_BYTE, STATUS_LIMP_BIT)?;
                self.state.mil = MilCode::from_flags(mil, limp);
            }
        }
        Ok(())
    }
}

impl EngineStateReader for EngineStateDecoder {
    #[inline]
    fn rpm(&self) -> u16 {
        self.state.rpm
    }

    #[inline]
    fn wheel_speed(&self) -> u16 {
        self.state.wheel_speed_kmh
    }

    #[inline]
    fn coolant_temp(&self) -> i16 {
        self.state.coolant_temp_c
    }

    #[inline]
    fn fuel_level(&self) -> u8 {
        self.state.fuel_level_percent
    }

    #[inline]
    fn mil(&self) -> MilCode {
        self.state.mil
    }
}
