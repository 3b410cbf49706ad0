//! Palette / run-length format (`SBU`).
//!
//! ```text
//! SBU
//! <width> <height>
//! <n> r0 g0 b0 r1 g1 b1 ...
//! idx *run idx idx ...
//! ```
//!
//! A bare integer places one pixel of `palette[idx]`; `*run idx` places `run`
//! consecutive pixels. The cursor walks the image in row-major order, so a run
//! may continue across a row boundary. Decoding stops as soon as every row is
//! filled.
use super::scanner::Scanner;
use crate::error::{Error, Result};
use crate::image::{Pixel, PixelBuffer};
use log::{debug, warn};
use std::collections::HashMap;
use std::io::Write;

pub const MAGIC: &str = "SBU";

/// Ordered set of distinct colors; a color's position is its encoded index.
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    entries: Vec<Pixel>,
    lookup: HashMap<Pixel, usize>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of every distinct color in `image`, in first-encounter order.
    pub fn from_image(image: &PixelBuffer) -> Self {
        let mut table = Self::new();
        for &p in image.pixels() {
            table.index_or_insert(p);
        }
        table
    }

    /// Index of `color`, appending it if it is not in the table yet.
    pub fn index_or_insert(&mut self, color: Pixel) -> usize {
        if let Some(&idx) = self.lookup.get(&color) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push(color);
        self.lookup.insert(color, idx);
        idx
    }

    pub fn index_of(&self, color: Pixel) -> Option<usize> {
        self.lookup.get(&color).copied()
    }

    pub fn get(&self, idx: usize) -> Option<Pixel> {
        self.entries.get(idx).copied()
    }

    pub fn entries(&self) -> &[Pixel] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Row-major write cursor that stops once the buffer is full.
struct Fill<'a> {
    pixels: &'a mut [Pixel],
    pos: usize,
}

impl Fill<'_> {
    fn is_full(&self) -> bool {
        self.pos >= self.pixels.len()
    }

    fn put(&mut self, color: Pixel, count: usize) {
        let end = self.pos.saturating_add(count).min(self.pixels.len());
        self.pixels[self.pos..end].fill(color);
        self.pos = end;
    }
}

pub fn decode(data: &[u8]) -> Result<PixelBuffer> {
    let mut sc = Scanner::new(data);
    let magic = sc.token().unwrap_or_default();
    if magic != MAGIC.as_bytes() {
        return Err(Error::BadMagic {
            expected: MAGIC,
            found: String::from_utf8_lossy(magic).into_owned(),
        });
    }
    let width: usize = sc.field("width")?;
    let height: usize = sc.field("height")?;
    let colors: usize = sc.field("palette size")?;
    let palette = (0..colors)
        .map(|_| sc.triple().ok_or(Error::MalformedHeader { field: "palette entry" }))
        .collect::<Result<Vec<Pixel>>>()?;
    debug!("sbu decode: {width}x{height}, {} palette entries", palette.len());

    let mut image = PixelBuffer::try_new(width, height)?;
    let mut fill = Fill {
        pixels: image.pixels_mut(),
        pos: 0,
    };
    if let Err(err) = decode_stream(&mut sc, &palette, &mut fill) {
        warn!("sbu decode stopped early: {err}");
    }
    if !fill.is_full() {
        debug!(
            "sbu decode: stream ended after {}/{} pixels",
            fill.pos,
            fill.pixels.len()
        );
    }
    Ok(image)
}

fn decode_stream(sc: &mut Scanner<'_>, palette: &[Pixel], fill: &mut Fill<'_>) -> Result<()> {
    let color = |index: usize| {
        palette.get(index).copied().ok_or(Error::PaletteIndex {
            index,
            size: palette.len(),
        })
    };
    while !fill.is_full() {
        let Some(b) = sc.peek_byte() else {
            break;
        };
        if b.is_ascii_digit() {
            let Some(index) = sc.unsigned() else {
                break;
            };
            fill.put(color(index)?, 1);
        } else if b == b'*' {
            sc.next_byte();
            let (Some(run), Some(index)) = (sc.unsigned(), sc.unsigned()) else {
                break;
            };
            fill.put(color(index)?, run);
        } else {
            sc.next_byte();
        }
    }
    Ok(())
}

pub fn encode<W: Write>(image: &PixelBuffer, out: &mut W) -> Result<()> {
    let mut table = ColorTable::from_image(image);
    debug!(
        "sbu encode: {}x{}, {} colors",
        image.width(),
        image.height(),
        table.len()
    );

    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    write!(out, "{} ", table.len())?;
    for p in table.entries() {
        write!(out, "{} {} {} ", p.r, p.g, p.b)?;
    }
    writeln!(out)?;

    for run in image.pixels().chunk_by(|a, b| a == b) {
        let idx = table.index_or_insert(run[0]);
        if run.len() == 1 {
            write!(out, "{idx} ")?;
        } else {
            write!(out, "*{} {idx} ", run.len())?;
        }
    }
    Ok(())
}
