//! Human-readable status dumps, printed on command only.
//!
//! The console is any [`core::fmt::Write`] sink: a UART writer on target, a
//! `String` on the host, or the fixed-capacity [`LineBuffer`] when the dump has
//! to be assembled before it is shipped somewhere.
use core::fmt::{self, Write};

use crate::protocol::bridge::engine_state::EngineState;
use crate::protocol::messages::dash::DashReading;

/// Dump the decoder snapshot.
pub fn write_engine_status<W: Write + ?Sized>(
    console: &mut W,
    state: &EngineState,
) -> fmt::Result {
    writeln!(console, "EngineStateDecoder status")?;
    writeln!(console, "RPM          {}", state.rpm)?;
    writeln!(console, "Speed        {}", state.wheel_speed_kmh)?;
    writeln!(console, "Coolant Temp {}", state.coolant_temp_c)?;
    writeln!(console, "Fuel Level   {}", state.fuel_level_percent)?;
    writeln!(console, "MIL          {:X}", state.mil.code())
}

/// Dump a dashboard reading next to the source fuel level it was built from.
pub fn write_dash_status<W: Write + ?Sized>(
    console: &mut W,
    reading: &DashReading,
    source_fuel_level: u8,
) -> fmt::Result {
    writeln!(console, "DashEncoder status")?;
    writeln!(console, "RPM 1        {}", reading.rpm_high)?;
    writeln!(console, "RPM 2        {}", reading.rpm_low)?;
    writeln!(console, "Speed        {}", reading.speed)?;
    writeln!(console, "Coolant Temp {}", reading.temperature)?;
    writeln!(console, "Source Fuel  {}", source_fuel_level)?;
    writeln!(console, "MIL          {:X}", reading.mil)?;
    writeln!(console, "Lamps        {}", reading.lamps())
}

/// Fixed-capacity text buffer implementing [`core::fmt::Write`].
///
/// Output past the capacity is cut at a character boundary and flagged.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 sequences are ever copied in.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Whether some output did not fit.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl<const N: usize> Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
            return Err(fmt::Error);
        }
        Ok(())
    }
}
