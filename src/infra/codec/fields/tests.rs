//! Bounded reads: big-endian words, single bits, and short payloads.
use super::*;

#[test]
/// Big-endian words are assembled high byte first.
fn test_read_u16_be() {
    let data = [0x06, 0xD2, 0x03, 0xE8];
    let reader = FieldReader::new(&data);
    assert_eq!(reader.read_u16_be(0).unwrap(), 1746);
    assert_eq!(reader.read_u16_be(2).unwrap(), 1000);
}

#[test]
/// A word straddling the declared length is refused.
fn test_read_u16_past_len() {
    let data = [0x06, 0xD2, 0x00];
    let reader = FieldReader::new(&data[..1]);
    assert_eq!(
        reader.read_u16_be(0),
        Err(FieldError::OutOfBounds {
            asked: 2,
            available: 1
        })
    );
}

#[test]
fn test_read_u8_out_of_bounds() {
    let reader = FieldReader::new(&[]);
    assert!(reader.is_empty());
    assert_eq!(
        reader.read_u8(7),
        Err(FieldError::OutOfBounds {
            asked: 8,
            available: 0
        })
    );
}

#[test]
/// Bits are numbered from the least significant one.
fn test_read_bit() {
    let data = [0, 0, 0, 0, 0, 0, 0, 0b0000_0101];
    let reader = FieldReader::new(&data);
    assert!(reader.read_bit(7, 0).unwrap());
    assert!(!reader.read_bit(7, 1).unwrap());
    assert!(reader.read_bit(7, 2).unwrap());
    assert!(!reader.read_bit(6, 0).unwrap());
}

#[test]
fn test_read_bit_rejects_invalid_index() {
    let data = [0xFF];
    let reader = FieldReader::new(&data);
    assert_eq!(reader.read_bit(0, 8), Err(FieldError::BitOutOfRange { bit: 8 }));
}

#[test]
/// 10,000 rpm lands on the 0x27 high byte the sweep uses.
fn test_split_u16_be() {
    assert_eq!(split_u16_be(1746), (0x06, 0xD2));
    assert_eq!(split_u16_be(10_000), (0x27, 0x10));
    assert_eq!(split_u16_be(0), (0, 0));
    assert_eq!(split_u16_be(u16::MAX), (0xFF, 0xFF));
}
