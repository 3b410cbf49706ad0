//! Plain RGB format (`P3`).
//!
//! ```text
//! P3
//! <width> <height>
//! <max value>
//! r g b r g b ...
//! ```
//!
//! The max value is consumed and ignored. A truncated pixel body leaves the
//! remaining pixels at zero.
use super::scanner::Scanner;
use crate::error::{Error, Result};
use crate::image::{ImageView, PixelBuffer};
use log::debug;
use std::io::Write;

pub const MAGIC: &str = "P3";

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
    let _max: u32 = sc.field("max value")?;

    let mut image = PixelBuffer::try_new(width, height)?;
    let mut filled = 0usize;
    for px in image.pixels_mut() {
        let Some(p) = sc.triple() else {
            break;
        };
        *px = p;
        filled += 1;
    }
    debug!(
        "ppm decode: {width}x{height}, {filled}/{} pixels read",
        width * height
    );
    Ok(image)
}

pub fn encode<W: Write>(image: &PixelBuffer, out: &mut W) -> Result<()> {
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;
    for row in image.rows() {
        for p in row {
            write!(out, "{} {} {} ", p.r, p.g, p.b)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
