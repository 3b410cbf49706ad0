//! Bitmap fonts drawn as ASCII grids.
//!
//! A font asset is plain text: every row of the file is one scanline, a space
//! is blank and any other character marks a used column. Glyphs sit side by
//! side and are separated by columns that are blank on every row. Glyphs are
//! keyed `'A'`, `'B'`, ... in left-to-right order. When stamped, only cells
//! holding [`INK`] paint.
//!
//! ```text
//!  ***   ****
//! *   *  *   *
//! *****  ****
//! *   *  *   *
//! *   *  ****
//! ```
mod loader;
mod scale;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

pub use self::loader::{GlyphSpans, RawFont};

/// Cell value that paints when a glyph is stamped.
pub const INK: u8 = b'*';

/// One character's cell grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    key: char,
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Glyph {
    /// Build from row-major cells; `None` if `cells.len() != rows * cols`.
    pub fn new(key: char, rows: usize, cols: usize, cells: Vec<u8>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Self {
            key,
            rows,
            cols,
            cells,
        })
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells of row `r`.
    pub fn row(&self, r: usize) -> &[u8] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    pub fn cell(&self, r: usize, c: usize) -> Option<u8> {
        (r < self.rows && c < self.cols).then(|| self.cells[r * self.cols + c])
    }

    /// `(row, col)` of every ink cell, row-major.
    pub fn ink_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == INK)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

/// Glyphs in the order they appear in the asset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Font {
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Split a raw grid into glyphs.
    ///
    /// The column scan runs twice: once to count glyphs (and reject assets
    /// with none or with more than 26), once to crop them.
    pub fn from_raw(raw: &RawFont) -> Result<Self> {
        let count = raw.glyph_spans().count();
        if count == 0 {
            return Err(Error::EmptyFont);
        }
        if count > 26 {
            return Err(Error::TooManyGlyphs { count });
        }

        let mut glyphs = Vec::with_capacity(count);
        for (key, span) in ('A'..='Z').zip(raw.glyph_spans()) {
            let cols = span.len();
            let cells = raw.crop(span);
            glyphs.push(Glyph {
                key,
                rows: raw.rows(),
                cols,
                cells,
            });
        }
        debug_assert_eq!(glyphs.len(), count);
        Ok(Self { glyphs })
    }

    /// Parse font asset text.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::from_raw(&RawFont::parse(data))
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Case-insensitive lookup against the uppercase glyph keys.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        let key = ch.to_ascii_uppercase();
        self.glyphs.iter().find(|g| g.key == key)
    }
}

/// Read and split the font asset at `path`.
pub fn load_font(path: &Path) -> Result<Font> {
    let data = fs::read(path).map_err(|source| Error::FontAsset {
        path: path.to_path_buf(),
        source,
    })?;
    let font = Font::parse(&data)?;
    debug!(
        "loaded font {} with {} glyphs ({} rows)",
        path.display(),
        font.len(),
        font.glyphs.first().map_or(0, Glyph::rows)
    );
    Ok(font)
}
