pub mod binary;
pub mod format;
pub mod loader;


pub use binary::errors::FormatError;
pub use binary::scalars::Rgb;
pub use binary::triplets::{detect, parse_triplets, write_triplets};
pub use format::{detect_format, PaletteFormat, RgbTriplets18, FORMATS};
pub use loader::LoadPaletteError;
