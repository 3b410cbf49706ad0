//! In-place edits of a [`PixelBuffer`](crate::image::PixelBuffer): region
//! copy/paste and bitmap-font text stamping.
mod copy_paste;
mod text;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use self::copy_paste::copy_paste;
pub use self::text::{render_text, stamp_message, RenderOutcome, SPACE_ADVANCE};

/// Source rectangle of a copy, top-left at `(row, column)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyParams {
    pub row: usize,
    pub column: usize,
    pub width: usize,
    pub height: usize,
}

/// Destination origin of a paste.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteParams {
    pub row: usize,
    pub column: usize,
}

/// One text rendering request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    pub message: String,
    pub font_path: PathBuf,
    /// Integer upscale factor applied to every glyph; 0 draws nothing.
    pub font_size: usize,
    pub row: usize,
    pub col: usize,
}
