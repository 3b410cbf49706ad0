//! Unified error type for pixel_stamp operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Format Errors ===
    #[error("Unsupported image format: '{extension}' (expected ppm or sbu)")]
    UnsupportedFormat { extension: String },

    #[error("Bad magic number: expected {expected}, found '{found}'")]
    BadMagic {
        expected: &'static str,
        found: String,
    },

    #[error("Malformed header: missing or invalid {field}")]
    MalformedHeader { field: &'static str },

    #[error("Color index {index} outside palette of {size} entries")]
    PaletteIndex { index: usize, size: usize },

    // === Font Errors ===
    #[error("Failed to load font asset '{path}': {source}")]
    FontAsset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Font asset contains no glyphs")]
    EmptyFont,

    #[error("Font asset defines {count} glyphs, at most 26 (A-Z) are supported")]
    TooManyGlyphs { count: usize },

    // === Content Errors ===
    #[error("No glyph for character '{ch}'")]
    MissingGlyph { ch: char },

    // === Config Errors ===
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
