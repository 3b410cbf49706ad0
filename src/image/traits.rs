//! Row access shared by every raster in the crate.
//!
//! Besides whole rows, views hand out *spans*: a run of pixels on one row
//! that is cut at the right edge, and empty when it starts outside the image.
//! Clipped edits (region copies, paste targets) are written in terms of spans
//! so that out-of-range coordinates never index the backing storage.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Up to `len` pixels of row `y` starting at column `x`.
    fn row_span(&self, y: usize, x: usize, len: usize) -> &[Self::Pixel] {
        if y >= self.height() || x >= self.width() {
            return Default::default();
        }
        let end = x.saturating_add(len).min(self.width());
        &self.row(y)[x..end]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Mutable counterpart of [`ImageView::row_span`].
    fn row_span_mut(&mut self, y: usize, x: usize, len: usize) -> &mut [Self::Pixel] {
        if y >= self.height() || x >= self.width() {
            return Default::default();
        }
        let end = x.saturating_add(len).min(self.width());
        &mut self.row_mut(y)[x..end]
    }
}

/// Iterator over the rows of a view, top to bottom.
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        let image = self.image;
        if self.y >= image.height() {
            return None;
        }
        let row = image.row(self.y);
        self.y += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
