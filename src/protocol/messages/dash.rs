//! Lotus instrument cluster status frame.
//!
//! # Layout (frame 0x400, eight bytes)
//!
//! ```text
//! Byte 0 : speed            (raw - 11 ~= mph, 0xFF top of range)
//! Byte 1 : reserved, 0x00
//! Byte 2 : rpm high byte    (rpm = hi * 256 + lo, 0x27 hi ~= 10,000 rpm)
//! Byte 3 : rpm low byte
//! Byte 4 : fuel level       (0x00 empty, 0xFF full)
//! Byte 5 : temperature      (raw - 14 ~= degF)
//! Byte 6 : status lamps     (bit0 shift, bit1 MIL, bit2 oil, bit3 TC)
//! Byte 7 : reserved, 0x00
//! ```
use core::fmt;

use crate::protocol::transport::bus_frame::BusFrame;

/// Bus the cluster is wired to on the routing hardware.
pub const LOTUS_BUS_ID: u8 = 2;

/// Identifier of the cluster status frame.
pub const DASH_FRAME_ID: u16 = 0x400;

/// Status code held during the sweep (oil + MIL lamps lit as a bulb check).
pub const SWEEP_STATUS: u8 = 0x06;

/// One cluster update, in raw dashboard units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DashReading {
    pub speed: u8,
    pub rpm_high: u8,
    pub rpm_low: u8,
    pub fuel: u8,
    pub temperature: u8,
    pub mil: u8,
}

impl DashReading {
    /// Needles driven to their stops during the rising half of the sweep.
    pub const SWEEP_RISING: Self = Self {
        speed: 0xFF,
        rpm_high: 0x27,
        rpm_low: 0x00,
        fuel: 0x00,
        temperature: 0x00,
        mil: SWEEP_STATUS,
    };

    /// Needles parked during the falling half of the sweep.
    pub const SWEEP_RESTING: Self = Self {
        speed: 0x00,
        rpm_high: 0x00,
        rpm_low: 0x00,
        fuel: 0x00,
        temperature: 0x00,
        mil: SWEEP_STATUS,
    };

    /// Engine speed as the cluster will read it back.
    #[inline]
    pub const fn rpm(&self) -> u16 {
        (self.rpm_high as u16) << 8 | self.rpm_low as u16
    }

    /// Pack into the eight-byte payload.
    pub const fn to_payload(&self) -> [u8; 8] {
        [
            self.speed,
            0x00,
            self.rpm_high,
            self.rpm_low,
            self.fuel,
            self.temperature,
            self.mil,
            0x00,
        ]
    }

    /// Build the dispatchable frame for `bus_id`.
    pub const fn to_frame(&self, bus_id: u8, frame_id: u16) -> BusFrame {
        BusFrame::outbound(bus_id, frame_id, self.to_payload())
    }

    /// Lamps lit by the status byte.
    #[inline]
    pub const fn lamps(&self) -> StatusLamps {
        StatusLamps::from_byte(self.mil)
    }
}

/// Decoded view of the cluster status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLamps {
    pub shift: bool,
    pub mil: bool,
    pub oil: bool,
    pub traction_control: bool,
}

impl StatusLamps {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            shift: byte & 0x01 != 0,
            mil: byte & 0x02 != 0,
            oil: byte & 0x04 != 0,
            traction_control: byte & 0x08 != 0,
        }
    }

    /// Back to the status byte.
    pub const fn to_byte(&self) -> u8 {
        (self.shift as u8)
            | (self.mil as u8) << 1
            | (self.oil as u8) << 2
            | (self.traction_control as u8) << 3
    }
}

/// Lamp names joined with `|`, `off` when nothing is lit.
impl fmt::Display for StatusLamps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lamps = [
            (self.shift, "shift"),
            (self.mil, "mil"),
            (self.oil, "oil"),
            (self.traction_control, "tc"),
        ];
        let mut first = true;
        for (lit, name) in lamps {
            if !lit {
                continue;
            }
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        if first {
            f.write_str("off")?;
        }
        Ok(())
    }
}
