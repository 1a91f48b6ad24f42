//! Error definitions shared across library modules.
//! The translation path itself never fails; these types model the crate's
//! edges (frame construction, driver interop, bounded field reads, command
//! parsing, and the async runner).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while building a [`BusFrame`](crate::protocol::transport::bus_frame::BusFrame).
pub enum FrameError {
    /// Payload does not fit into a classic CAN frame.
    #[error("Payload too long: {len} bytes (max 8)")]
    PayloadTooLong { len: usize },
    /// Remote transmission requests carry no payload to translate.
    #[error("Remote frames are not supported")]
    RemoteFrame,
    /// Identifier does not fit into the 16-bit frame id used by the bridge.
    #[error("Identifier out of range: {id:#x}")]
    IdentifierOutOfRange { id: u32 },
    /// Frame id cannot be expressed as an 11-bit standard identifier.
    #[error("Invalid standard identifier: {id:#x}")]
    InvalidStandardId { id: u16 },
    /// Driver frame type refused the identifier/payload combination.
    #[error("Driver rejected the frame")]
    DriverRejected,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while reading a field out of a frame payload.
pub enum FieldError {
    /// Attempted to read past the declared frame length.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Bit index does not address a bit inside one byte.
    #[error("Bit index {bit} out of range (0..=7)")]
    BitOutOfRange { bit: u8 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while parsing a command-channel message.
pub enum CommandError {
    /// Message carried no sub-command byte.
    #[error("Empty command")]
    Empty,
    /// Sub-command code is not handled by the addressed component.
    #[error("Unknown command code {code:#04x}")]
    UnknownCode { code: u8 },
}

//==================================================================================RUNNER_ERROR
#[derive(Debug, Error)]
/// Errors ending the async bridge runner.
pub enum BridgeRunError<E: core::fmt::Debug> {
    /// Source bus failed while receiving.
    #[error("CAN bus receive error: {0:?}")]
    Receive(E),
    /// Destination bus refused a dashboard frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}
