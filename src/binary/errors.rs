use thiserror::Error;

pub type ParseResult<'a, T> = nom::IResult<&'a [u8], T>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("stream does not contain 18-bit RGB triplets")]
    InvalidTriplets,
}
