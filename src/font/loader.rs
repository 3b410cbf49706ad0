use std::ops::Range;

const BLANK: u8 = b' ';

/// Font asset split into rows. Rows may differ in length; missing cells read
/// as blank.
#[derive(Clone, Debug, Default)]
pub struct RawFont {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl RawFont {
    /// Split on `\n`, `\r\n` or a lone `\r`. A final line without a
    /// terminator is kept when non-empty.
    pub fn parse(data: &[u8]) -> Self {
        let mut rows = Vec::new();
        let mut current = Vec::new();
        let mut bytes = data.iter().copied().peekable();
        while let Some(b) = bytes.next() {
            match b {
                b'\r' => {
                    bytes.next_if_eq(&b'\n');
                    rows.push(std::mem::take(&mut current));
                }
                b'\n' => rows.push(std::mem::take(&mut current)),
                _ => current.push(b),
            }
        }
        if !current.is_empty() {
            rows.push(current);
        }
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// A column is empty when no row has a non-space character in it.
    pub fn is_empty_col(&self, col: usize) -> bool {
        self.rows
            .iter()
            .all(|row| row.get(col).map_or(true, |&c| c == BLANK))
    }

    /// Column ranges of consecutive non-empty columns, left to right.
    pub fn glyph_spans(&self) -> GlyphSpans<'_> {
        GlyphSpans { raw: self, col: 0 }
    }

    /// Copy every row's `span` columns into a row-major cell grid,
    /// blank-padding short rows.
    pub fn crop(&self, span: Range<usize>) -> Vec<u8> {
        let mut cells = Vec::with_capacity(self.rows.len() * span.len());
        for row in &self.rows {
            cells.extend(span.clone().map(|c| row.get(c).copied().unwrap_or(BLANK)));
        }
        cells
    }
}

/// Iterator over glyph column spans of a [`RawFont`].
#[derive(Clone)]
pub struct GlyphSpans<'a> {
    raw: &'a RawFont,
    col: usize,
}

impl Iterator for GlyphSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let width = self.raw.width();
        while self.col < width && self.raw.is_empty_col(self.col) {
            self.col += 1;
        }
        if self.col >= width {
            return None;
        }
        let start = self.col;
        while self.col < width && !self.raw.is_empty_col(self.col) {
            self.col += 1;
        }
        Some(start..self.col)
    }
}
