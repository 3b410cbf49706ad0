//! Owned RGB raster in row-major layout.
//!
//! `PixelBuffer` is the in-memory image every other stage works on: the codecs
//! fill and drain it, the compositor mutates it in place. Coordinates are
//! always `(row, col)`; out-of-range access is reported through `Option` /
//! `bool` rather than wrapping or panicking.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::mem;

/// A single 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Width × height grid of pixels, zero-initialised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Construct a black buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Construct a buffer where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Pixel) -> Self {
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Like [`PixelBuffer::new`], but reports sizes whose storage cannot be
    /// addressed or allocated instead of aborting.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        const TOO_BIG: Error = Error::MalformedHeader { field: "dimensions" };
        let count = width
            .checked_mul(height)
            .filter(|&n| {
                n.checked_mul(mem::size_of::<Pixel>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(TOO_BIG)?;
        let mut data = Vec::new();
        data.try_reserve_exact(count).map_err(|_| TOO_BIG)?;
        data.resize(count, Pixel::BLACK);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The degenerate 0×0 image produced by a failed decode.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap row-major pixel data. Returns `None` if the length does not match.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Pixel>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when `(row, col)` addresses a pixel of this buffer.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Pixel at `(row, col)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.contains(row, col).then(|| self.data[self.idx(row, col)])
    }

    /// Overwrite the pixel at `(row, col)`. Returns `false` (and writes
    /// nothing) outside the buffer.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, px: Pixel) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let i = self.idx(row, col);
        self.data[i] = px;
        true
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }
}

impl crate::image::traits::ImageView for PixelBuffer {
    type Pixel = Pixel;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl crate::image::traits::ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}
