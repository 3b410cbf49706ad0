#![doc = include_str!("../README.md")]

pub mod codec;
pub mod compose;
pub mod config;
pub mod error;
pub mod font;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::codec::ImageFormat;
pub use crate::compose::{CopyParams, PasteParams, RenderOutcome, RenderParams};
pub use crate::config::Job;
pub use crate::error::{Error, Result};
pub use crate::image::{Pixel, PixelBuffer};
pub use crate::pipeline::{run_job, JobSummary};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_stamp::prelude::*;
///
/// let mut img = PixelBuffer::filled(8, 4, Pixel::new(0, 0, 64));
/// let copy = CopyParams { row: 0, column: 0, width: 2, height: 2 };
/// copy_paste(&mut img, copy, PasteParams { row: 2, column: 6 });
///
/// let font = Font::parse(b"* *\n***\n* *").unwrap();
/// let outcome = stamp_message(&mut img, &font, "a", 0, 0).unwrap();
/// assert_eq!(outcome.stamped, 1);
/// assert_eq!(img.get(1, 1), Some(Pixel::WHITE));
/// ```
pub mod prelude {
    pub use crate::compose::{copy_paste, render_text, stamp_message};
    pub use crate::font::{load_font, Font, Glyph};
    pub use crate::image::io::{load_image, save_image};
    pub use crate::{CopyParams, PasteParams, Pixel, PixelBuffer, RenderParams};
}
