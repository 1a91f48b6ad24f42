//! Haltech ECU broadcast frames.
//!
//! # Layout
//!
//! ```text
//! 0x360 (864)  bytes 0-1  engine speed, rpm, big-endian
//! 0x370 (880)  bytes 0-1  wheel speed, 0.1 km/h, big-endian
//! 0x3E0 (992)  bytes 0-1  coolant temperature, 0.1 K, big-endian
//! 0x3E2 (994)  fuel level (not decoded)
//! 0x3E4 (996)  byte 7     bit0 = MIL, bit2 = limp mode
//! ```

/// Bus the ECU is wired to on the routing hardware.
pub const HALTECH_BUS_ID: u8 = 1;

/// Bit of status byte 7 flagging an active malfunction.
pub const STATUS_MIL_BIT: u8 = 0;
/// Bit of status byte 7 flagging limp mode.
pub const STATUS_LIMP_BIT: u8 = 2;
/// Payload byte carrying the status flags.
pub const STATUS_BYTE: usize = 7;

/// Broadcast frames understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum HaltechFrame {
    Rpm = 0x360,
    WheelSpeed = 0x370,
    CoolantTemp = 0x3E0,
    FuelLevel = 0x3E2,
    Status = 0x3E4,
}

impl HaltechFrame {
    /// Map a raw frame id onto a known broadcast, if any.
    pub const fn from_id(frame_id: u16) -> Option<Self> {
        match frame_id {
            0x360 => Some(Self::Rpm),
            0x370 => Some(Self::WheelSpeed),
            0x3E0 => Some(Self::CoolantTemp),
            0x3E2 => Some(Self::FuelLevel),
            0x3E4 => Some(Self::Status),
            _ => None,
        }
    }

    /// Raw frame id.
    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }
}

/// Warning lamp code forwarded to the cluster's status byte.
///
/// Values are chosen so that they light meaningful lamps on the dashboard
/// (`0x06` = oil + MIL, `0x04` = oil, which the cluster shows while cranking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MilCode {
    /// Engine running, no fault.
    #[default]
    Running = 0x00,
    /// Limp mode or cranking.
    Limp = 0x04,
    /// Malfunction indicator lamp on.
    Fault = 0x06,
}

impl MilCode {
    /// Derive the code from the status flags; the MIL bit wins over limp.
    pub const fn from_flags(mil: bool, limp: bool) -> Self {
        if mil {
            Self::Fault
        } else if limp {
            Self::Limp
        } else {
            Self::Running
        }
    }

    /// Byte written into the dashboard frame.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
