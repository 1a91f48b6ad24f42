//! Engineering unit conversions between the Haltech broadcast values and the
//! raw bytes shown by the Lotus cluster.
//!
//! All functions are pure integer arithmetic so they behave identically on a
//! microcontroller without FPU and on the host.
//!
//! ## Dashboard encodings
//!
//! ```text
//! speed       : raw - 11 ~= mph        (0x61 -> 86 mph, 0xFF = top of range)
//! temperature : raw - 14 ~= degF       (0xD0 -> 194 degF)
//! fuel        : 0x00 = empty, 0xFF = full
//! ```
//!
//! The live translation forwards speed and temperature untouched; the
//! `*_to_dash_*` helpers implement the documented encodings for firmware that
//! wants them.

/// Signature of a fuel percentage to dashboard byte conversion.
pub type FuelConversion = fn(u8) -> u8;

/// Offset added by the cluster's speed encoding on top of mph.
pub const DASH_SPEED_OFFSET: u16 = 11;

/// Offset added by the cluster's temperature encoding on top of degF.
pub const DASH_TEMPERATURE_OFFSET: i32 = 14;

/// Kelvin to Celsius offset, truncated to whole degrees.
pub const KELVIN_OFFSET: i16 = 273;

/// Collapse a value expressed in tenths (0.1 km/h, 0.1 K) to whole units.
#[inline]
pub const fn tenths_to_whole(raw: u16) -> u16 {
    raw / 10
}

/// Convert tenths of Kelvin to whole degrees Celsius.
///
/// Integer division happens before the offset: `3100 -> 310 K -> 37 degC`.
#[inline]
pub const fn deci_kelvin_to_celsius(raw: u16) -> i16 {
    tenths_to_whole(raw) as i16 - KELVIN_OFFSET
}

/// Fuel conversion used by the cluster firmware this bridge replaces.
///
/// The division runs first, so every value below 100 % truncates to `0` and
/// 100 % maps to `0xFF`. Kept as the default until a corrected gauge scale is
/// signed off; see [`fuel_percent_to_byte_scaled`].
#[inline]
pub fn fuel_percent_to_byte(percent: u8) -> u8 {
    ((percent as u16 / 100) * 255) as u8
}

/// Proportional fuel conversion: `0..=100 %` mapped onto `0x00..=0xFF`.
#[inline]
pub fn fuel_percent_to_byte_scaled(percent: u8) -> u8 {
    (percent.min(100) as u16 * 255 / 100) as u8
}

/// Encode a coolant temperature the way the cluster displays it
/// (`degF + 14`), clamped to the byte range.
pub fn celsius_to_dash_temperature(celsius: i16) -> u8 {
    let fahrenheit = celsius as i32 * 9 / 5 + 32;
    (fahrenheit + DASH_TEMPERATURE_OFFSET).clamp(0, u8::MAX as i32) as u8
}

/// Encode a road speed the way the cluster displays it (`mph + 11`),
/// saturating at `0xFF`.
pub fn kmh_to_dash_speed(kmh: u16) -> u8 {
    let mph = kmh as u32 * 621 / 1000;
    (mph + DASH_SPEED_OFFSET as u32).min(u8::MAX as u32) as u8
}
