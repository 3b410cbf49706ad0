use super::{CopyParams, PasteParams};
use crate::image::{ImageView, ImageViewMut, PixelBuffer};
use log::debug;

/// Copy the `copy` rectangle to `paste`'s origin.
///
/// The source is staged in a temporary buffer first, so overlapping
/// rectangles behave as if read before written. Cells are dropped when either
/// the destination or the matching source cell lies outside the image.
pub fn copy_paste(image: &mut PixelBuffer, copy: CopyParams, paste: PasteParams) {
    // Only the part of the source rectangle that overlaps the image is staged;
    // every other cell would be dropped on paste anyway.
    let width = copy.width.min(image.width().saturating_sub(copy.column));
    let height = copy.height.min(image.height().saturating_sub(copy.row));
    let mut staged = PixelBuffer::new(width, height);
    for i in 0..height {
        let src = image.row_span(copy.row + i, copy.column, width);
        staged.row_mut(i).copy_from_slice(src);
    }

    let mut written = 0usize;
    for (i, src) in staged.rows().enumerate() {
        let Some(dst_row) = paste.row.checked_add(i) else {
            break;
        };
        let dst = image.row_span_mut(dst_row, paste.column, width);
        dst.copy_from_slice(&src[..dst.len()]);
        written += dst.len();
    }
    debug!("copy_paste: {copy:?} -> {paste:?}, {written} pixels written");
}
