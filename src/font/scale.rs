use super::{Font, Glyph};
use std::iter;

impl Glyph {
    /// Nearest-neighbour upscale: every cell becomes a `factor × factor` block.
    pub fn scaled(&self, factor: usize) -> Glyph {
        let cols = self.cols * factor;
        let mut cells = Vec::with_capacity(self.cells.len() * factor * factor);
        for r in 0..self.rows {
            let wide: Vec<u8> = self
                .row(r)
                .iter()
                .flat_map(|&c| iter::repeat(c).take(factor))
                .collect();
            for _ in 0..factor {
                cells.extend_from_slice(&wide);
            }
        }
        Glyph {
            key: self.key,
            rows: self.rows * factor,
            cols,
            cells,
        }
    }
}

impl Font {
    /// Replace every glyph with its upscaled copy.
    ///
    /// A factor of 0 leaves every glyph with no cells: nothing is drawn and
    /// each character advances the cursor by one column.
    pub fn scale(&mut self, factor: usize) {
        if factor != 1 {
            for glyph in &mut self.glyphs {
                *glyph = glyph.scaled(factor);
            }
        }
    }
}
