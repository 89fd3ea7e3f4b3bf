use crate::binary::{
    errors::FormatError,
    scalars::Rgb,
    triplets::{detect, parse_triplets, write_triplets},
};

/// A palette file format: content-based detection plus whole-buffer decode
/// and encode, with the display name and extensions a file picker would show.
pub trait PaletteFormat {
    /// Human-readable format name, for use in file filters.
    fn name(&self) -> &'static str;

    /// Conventional file extensions, without dots. Informational only;
    /// detection never consults them.
    fn extensions(&self) -> &'static [&'static str];

    /// Non-failing probe: could `bytes` plausibly be this format?
    fn detect(&self, bytes: &[u8]) -> bool;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Rgb>, FormatError>;

    fn encode(&self, colors: &[Rgb]) -> Vec<u8>;
}

/// The 18-bit RGB triplet format: headerless, three bytes per color, each
/// channel a 6-bit value as fed to a VGA DAC.
#[derive(Debug, Default, Copy, Clone)]
pub struct RgbTriplets18;

impl PaletteFormat for RgbTriplets18 {
    fn name(&self) -> &'static str {
        "18-bit RGB VGA Palette"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pal"]
    }

    fn detect(&self, bytes: &[u8]) -> bool {
        detect(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Rgb>, FormatError> {
        parse_triplets(bytes)
    }

    fn encode(&self, colors: &[Rgb]) -> Vec<u8> {
        write_triplets(colors)
    }
}

/// All built-in formats, in detection order.
pub static FORMATS: &[&(dyn PaletteFormat + Sync)] = &[&RgbTriplets18];

/// Returns the first registered format whose detect accepts `bytes`.
pub fn detect_format(bytes: &[u8]) -> Option<&'static (dyn PaletteFormat + Sync)> {
    FORMATS.iter().copied().find(|format| format.detect(bytes))
}
