use nom::{
    combinator::all_consuming,
    multi::many0,
};

use crate::binary::{
    errors::{FormatError, ParseResult},
    scalars::{eight_to_six_bit, six_bit, six_to_eight_bit, Rgb, MAX_SIX_BIT},
};

/// Returns true when `input` could plausibly be an 18-bit RGB triplet stream:
/// the length is a multiple of three and every byte fits in 6 bits. A
/// zero-length stream is an empty palette and counts as valid.
///
/// This is a content check only; the `.pal` extension is shared by plenty of
/// unrelated palette formats and proves nothing.
pub fn detect(input: &[u8]) -> bool {
    input.len() % 3 == 0 && input.iter().all(|&value| value <= MAX_SIX_BIT)
}

fn triplet(input: &[u8]) -> ParseResult<'_, Rgb> {
    let (input, r) = six_bit(input)?;
    let (input, g) = six_bit(input)?;
    let (input, b) = six_bit(input)?;
    Ok((
        input,
        Rgb {
            r: six_to_eight_bit(r),
            g: six_to_eight_bit(g),
            b: six_to_eight_bit(b),
        },
    ))
}

/// Decodes a triplet stream into its colors, in stream order.
///
/// Fails with [`FormatError::InvalidTriplets`] when the length is not a
/// multiple of three or any byte exceeds 63. The range check happens while
/// converting, and the first offending byte aborts the whole decode; there is
/// no partial result.
pub fn parse_triplets(input: &[u8]) -> Result<Vec<Rgb>, FormatError> {
    if input.len() % 3 != 0 {
        return Err(FormatError::InvalidTriplets);
    }
    // A byte > 63 makes `triplet` stop matching, leaving input behind for
    // all_consuming to reject.
    let (_, colors) =
        all_consuming(many0(triplet))(input).map_err(|_| FormatError::InvalidTriplets)?;
    Ok(colors)
}

/// Encodes colors as a triplet stream, three bytes per color in input order.
/// Never fails; an empty palette encodes to an empty buffer.
pub fn write_triplets(colors: &[Rgb]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(colors.len() * 3);
    for color in colors {
        buffer.push(eight_to_six_bit(color.r));
        buffer.push(eight_to_six_bit(color.g));
        buffer.push(eight_to_six_bit(color.b));
    }
    buffer
}
