//! Textual image codecs.
//!
//! Two formats are supported, selected by file extension:
//!
//! - `ppm`: plain RGB triples, magic `P3` (see [`ppm`]).
//! - `sbu`: color table plus run-length compressed index stream, magic `SBU`
//!   (see [`sbu`]).
//!
//! Decoders take the whole file contents; encoders write to any `io::Write`.
pub mod ppm;
pub mod sbu;
mod scanner;


use crate::error::{Error, Result};
use crate::image::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

pub use self::sbu::ColorTable;

/// On-disk image encodings understood by the tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Ppm,
    Sbu,
}

impl ImageFormat {
    /// Exact (case-sensitive) extension match.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ppm" => Some(ImageFormat::Ppm),
            "sbu" => Some(ImageFormat::Sbu),
            _ => None,
        }
    }

    /// Format implied by the extension of `path`'s file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or(Error::UnsupportedFormat { extension: ext })
    }
}

/// Decode a complete file in the given format.
pub fn decode(data: &[u8], format: ImageFormat) -> Result<PixelBuffer> {
    match format {
        ImageFormat::Ppm => ppm::decode(data),
        ImageFormat::Sbu => sbu::decode(data),
    }
}

/// Encode `image` in the given format.
pub fn encode<W: Write>(image: &PixelBuffer, format: ImageFormat, out: &mut W) -> Result<()> {
    match format {
        ImageFormat::Ppm => ppm::encode(image, out),
        ImageFormat::Sbu => sbu::encode(image, out),
    }
}

/// Encode into an in-memory byte vector.
pub fn encode_to_vec(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode(image, format, &mut out)?;
    Ok(out)
}
