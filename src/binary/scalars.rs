use nom::{combinator::verify, number::complete::u8 as byte};

use crate::binary::errors::ParseResult;

/// Palette colors are plain RGB; the format has no alpha concept, entries are
/// always fully opaque.
pub type Rgb = rgb::RGB8;

/// Largest value a 6-bit DAC channel can hold.
pub const MAX_SIX_BIT: u8 = 63;

/// A single 6-bit channel byte. Anything above 63 cannot be this format.
pub fn six_bit(input: &[u8]) -> ParseResult<'_, u8> {
    verify(byte, |&value| value <= MAX_SIX_BIT)(input)
}

/// Widens a 6-bit channel to 8 bits: 0 maps to 0, 63 maps to 255.
///
/// Truncating division on purpose, matching the serializers this format comes
/// from. The narrowing below truncates the same way, so widening then
/// narrowing lands on the original value or one below it, never further off.
pub fn six_to_eight_bit(value: u8) -> u8 {
    (value as u16 * 255 / 63) as u8
}

/// Narrows an 8-bit channel to the 6-bit range 0-63.
pub fn eight_to_six_bit(value: u8) -> u8 {
    (value as u16 * 63 / 255) as u8
}
