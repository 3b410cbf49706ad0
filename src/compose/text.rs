use super::RenderParams;
use crate::error::{Error, Result};
use crate::font::{load_font, Font, Glyph};
use crate::image::{Pixel, PixelBuffer};
use log::debug;
use serde::Serialize;

/// Columns a space advances the cursor by.
pub const SPACE_ADVANCE: usize = 5;

/// What a completed render did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    /// Glyphs drawn.
    pub stamped: usize,
    /// Glyphs left out because some ink cell fell outside the image.
    pub skipped: usize,
    /// Cursor `(row, col)` after the last character.
    pub cursor: (usize, usize),
}

/// Load the font named by `render`, scale it, and stamp the message.
///
/// The image is untouched if the font cannot be loaded. A character with no
/// glyph aborts the render; characters before it stay drawn.
pub fn render_text(image: &mut PixelBuffer, render: &RenderParams) -> Result<RenderOutcome> {
    let mut font = load_font(&render.font_path)?;
    font.scale(render.font_size);
    stamp_message(image, &font, &render.message, render.row, render.col)
}

/// Stamp `message` with `font`, cursor starting at `(row, col)`.
pub fn stamp_message(
    image: &mut PixelBuffer,
    font: &Font,
    message: &str,
    row: usize,
    col: usize,
) -> Result<RenderOutcome> {
    let mut outcome = RenderOutcome {
        cursor: (row, col),
        ..Default::default()
    };
    for ch in message.chars() {
        let (row, col) = outcome.cursor;
        if ch == ' ' {
            outcome.cursor.1 = col.saturating_add(SPACE_ADVANCE);
            continue;
        }
        let glyph = font.glyph(ch).ok_or(Error::MissingGlyph { ch })?;
        if fits(image, glyph, row, col) {
            for (r, c) in glyph.ink_cells() {
                image.set(row + r, col + c, Pixel::WHITE);
            }
            outcome.stamped += 1;
        } else {
            debug!("glyph '{ch}' at ({row}, {col}) leaves the image, skipped");
            outcome.skipped += 1;
        }
        outcome.cursor.1 = col.saturating_add(glyph.cols() + 1);
    }
    Ok(outcome)
}

/// True when every ink cell of `glyph` placed at `(row, col)` is inside the
/// image. Blank cells may hang off the edge.
fn fits(image: &PixelBuffer, glyph: &Glyph, row: usize, col: usize) -> bool {
    glyph.ink_cells().all(|(r, c)| {
        row.checked_add(r)
            .zip(col.checked_add(c))
            .is_some_and(|(y, x)| image.contains(y, x))
    })
}
