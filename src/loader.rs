use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::binary::{
    errors::FormatError,
    scalars::Rgb,
    triplets::{detect, parse_triplets, write_triplets},
};

#[derive(Error, Debug)]
pub enum LoadPaletteError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn checked_path(path: &Path) -> Result<&Path, LoadPaletteError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(LoadPaletteError::NotFound(path.to_path_buf()))
    }
}

/// Probes whether the file at `path` holds 18-bit RGB triplets.
///
/// A missing file is a [`LoadPaletteError::NotFound`], not a `false`; only a
/// readable file gets a format verdict.
pub fn detect_file(path: impl AsRef<Path>) -> Result<bool, LoadPaletteError> {
    let bytes = std::fs::read(checked_path(path.as_ref())?)?;
    Ok(detect(&bytes))
}

/// Loads the palette stored at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Rgb>, LoadPaletteError> {
    let bytes = std::fs::read(checked_path(path.as_ref())?)?;
    Ok(parse_triplets(&bytes)?)
}

/// Writes `colors` as a triplet stream to `path`, creating or truncating it.
/// An empty palette writes a zero-length file.
pub fn save_file(path: impl AsRef<Path>, colors: &[Rgb]) -> Result<(), LoadPaletteError> {
    std::fs::write(path.as_ref(), write_triplets(colors))?;
    Ok(())
}

/// Reads `reader` to its end and decodes the bytes. Short reads surface as
/// the underlying I/O error, not a format verdict.
pub fn load_reader(mut reader: impl Read) -> Result<Vec<Rgb>, LoadPaletteError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_triplets(&bytes)?)
}

/// Encodes `colors` and writes the triplet stream to `writer`.
pub fn save_writer(mut writer: impl Write, colors: &[Rgb]) -> Result<(), LoadPaletteError> {
    writer.write_all(&write_triplets(colors))?;
    Ok(())
}
