//! Bounded field access for CAN payloads.
//! Haltech broadcasts pack their values big-endian on byte boundaries, with
//! status flags stored as single bits. Every read is checked against the
//! frame's declared length, so a short frame yields an error instead of stale
//! bytes from the unused tail of the buffer.
use crate::error::FieldError;

/// Reader over the valid bytes of a payload.
///
/// The reader is built from the populated slice only (`&data[..len]`), which
/// makes the declared length the hard bound for every access.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    buffer: &'a [u8],
}

impl<'a> FieldReader<'a> {
    /// Create a reader over the valid bytes of a payload.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Number of readable bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Checks whether the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read the byte at `offset`.
    pub fn read_u8(&self, offset: usize) -> Result<u8, FieldError> {
        self.buffer
            .get(offset)
            .copied()
            .ok_or(FieldError::OutOfBounds {
                asked: offset + 1,
                available: self.buffer.len(),
            })
    }

    /// Read a big-endian `u16` spanning `offset` and `offset + 1`.
    pub fn read_u16_be(&self, offset: usize) -> Result<u16, FieldError> {
        let end = offset + 2;
        if end > self.buffer.len() {
            return Err(FieldError::OutOfBounds {
                asked: end,
                available: self.buffer.len(),
            });
        }
        Ok(((self.buffer[offset] as u16) << 8) | self.buffer[offset + 1] as u16)
    }

    /// Read bit `bit` (0 = least significant) of the byte at `offset`.
    pub fn read_bit(&self, offset: usize, bit: u8) -> Result<bool, FieldError> {
        if bit > 7 {
            return Err(FieldError::BitOutOfRange { bit });
        }
        let byte = self.read_u8(offset)?;
        Ok((byte >> bit) & 0x01 == 0x01)
    }
}

/// Split a 16-bit value high byte first, as the dashboard expects it.
#[inline]
pub const fn split_u16_be(value: u16) -> (u8, u8) {
    ((value / 256) as u8, (value % 256) as u8)
}

//==================================================================================TEST_FIELDS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
