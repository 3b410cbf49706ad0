use super::*;
use crate::error::Error;
use crate::font::Font;
use crate::image::{Pixel, PixelBuffer};

/// Each pixel encodes its own coordinates so moves are easy to check.
fn coordinate_image(width: usize, height: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for row in 0..height {
        for col in 0..width {
            img.set(row, col, Pixel::new(row as u8, col as u8, 100));
        }
    }
    img
}

#[test]
fn in_bounds_copy_matches_manual_overwrite() {
    let original = coordinate_image(8, 6);
    let mut img = original.clone();
    let copy = CopyParams {
        row: 1,
        column: 2,
        width: 3,
        height: 2,
    };
    let paste = PasteParams { row: 3, column: 4 };
    copy_paste(&mut img, copy, paste);

    let mut expected = original.clone();
    for i in 0..2 {
        for j in 0..3 {
            let px = original.get(1 + i, 2 + j).unwrap();
            expected.set(3 + i, 4 + j, px);
        }
    }
    assert_eq!(img, expected);
}

#[test]
fn overlapping_copy_reads_before_writing() {
    let original = coordinate_image(5, 1);
    let mut img = original.clone();
    copy_paste(
        &mut img,
        CopyParams {
            row: 0,
            column: 0,
            width: 4,
            height: 1,
        },
        PasteParams { row: 0, column: 1 },
    );
    let cols: Vec<u8> = img.pixels().iter().map(|p| p.g).collect();
    assert_eq!(cols, vec![0, 0, 1, 2, 3]);
}

#[test]
fn destination_overflow_is_clipped() {
    let original = coordinate_image(4, 4);
    let mut img = original.clone();
    copy_paste(
        &mut img,
        CopyParams {
            row: 0,
            column: 0,
            width: 2,
            height: 2,
        },
        PasteParams { row: 3, column: 3 },
    );
    // Only (3,3) is inside; it receives source (0,0).
    assert_eq!(img.get(3, 3), original.get(0, 0));
    let changed = img
        .pixels()
        .iter()
        .zip(original.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(changed, 1);
}

#[test]
fn source_overflow_leaves_matching_destination_untouched() {
    let original = coordinate_image(4, 4);
    let mut img = original.clone();
    copy_paste(
        &mut img,
        CopyParams {
            row: 2,
            column: 3,
            width: 3,
            height: 3,
        },
        PasteParams { row: 0, column: 0 },
    );
    // Source rows 2..4 and column 3 exist; everything else of the rectangle is
    // out of bounds and the matching destination cells keep their value.
    assert_eq!(img.get(0, 0), original.get(2, 3));
    assert_eq!(img.get(1, 0), original.get(3, 3));
    assert_eq!(img.get(0, 1), original.get(0, 1));
    assert_eq!(img.get(2, 0), original.get(2, 0));
    assert_eq!(img.get(2, 2), original.get(2, 2));
}

#[test]
fn oversized_rectangle_is_clipped_to_the_image() {
    let original = coordinate_image(4, 4);
    let mut img = original.clone();
    copy_paste(
        &mut img,
        CopyParams {
            row: 1,
            column: 2,
            width: 1 << 32,
            height: 1 << 32,
        },
        PasteParams { row: 0, column: 0 },
    );
    // Source rows 1..4 and columns 2..4 exist, so a 3×2 block lands at (0,0).
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(img.get(i, j), original.get(1 + i, 2 + j));
        }
    }
    assert_eq!(img.get(0, 2), original.get(0, 2));
    assert_eq!(img.get(3, 0), original.get(3, 0));

    let mut far = original.clone();
    copy_paste(
        &mut far,
        CopyParams {
            row: usize::MAX,
            column: usize::MAX,
            width: usize::MAX,
            height: usize::MAX,
        },
        PasteParams {
            row: usize::MAX,
            column: usize::MAX,
        },
    );
    assert_eq!(far, original);
}

#[test]
fn copy_on_empty_image_is_a_no_op() {
    let mut img = PixelBuffer::empty();
    copy_paste(
        &mut img,
        CopyParams {
            row: 0,
            column: 0,
            width: 3,
            height: 3,
        },
        PasteParams { row: 1, column: 1 },
    );
    assert!(img.is_empty());
}

/// 'A' is 3 columns wide, 'B' is 2; both 2 rows.
fn small_font() -> Font {
    Font::parse(b"*** **\n* * * ").unwrap()
}

#[test]
fn space_and_glyph_advance_cursor() {
    let mut img = PixelBuffer::new(20, 4);
    let outcome = stamp_message(&mut img, &small_font(), "A B", 0, 0).unwrap();
    assert_eq!(outcome.stamped, 2);
    // A (3) + separator (1) + space (5) puts B at column 9.
    assert_eq!(img.get(0, 9), Some(Pixel::WHITE));
    assert_eq!(img.get(0, 8), Some(Pixel::BLACK));
    assert_eq!(outcome.cursor, (0, 9 + 2 + 1));
}

#[test]
fn zero_scaled_font_only_moves_the_cursor() {
    let mut font = small_font();
    font.scale(0);
    let mut img = PixelBuffer::new(6, 3);
    let outcome = stamp_message(&mut img, &font, "AB A", 1, 1).unwrap();
    assert_eq!(img, PixelBuffer::new(6, 3));
    // One column per glyph, five for the space.
    assert_eq!(outcome.cursor, (1, 1 + 1 + 1 + 5 + 1));
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn only_ink_cells_are_painted() {
    let mut img = PixelBuffer::filled(5, 3, Pixel::new(9, 9, 9));
    stamp_message(&mut img, &small_font(), "a", 1, 1).unwrap();
    assert_eq!(img.get(1, 1), Some(Pixel::WHITE));
    assert_eq!(img.get(1, 3), Some(Pixel::WHITE));
    assert_eq!(img.get(2, 2), Some(Pixel::new(9, 9, 9)));
    assert_eq!(img.get(2, 3), Some(Pixel::WHITE));
}

#[test]
fn glyph_crossing_the_edge_is_skipped_whole() {
    let mut img = PixelBuffer::new(10, 4);
    let outcome = stamp_message(&mut img, &small_font(), "A B", 0, 0).unwrap();
    // B would start at column 9 and needs columns 9..11.
    assert_eq!(outcome.stamped, 1);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(img.get(0, 9), Some(Pixel::BLACK));
    let white = img.pixels().iter().filter(|&&p| p == Pixel::WHITE).count();
    assert_eq!(white, 5, "only the ink of A should be drawn");
}

#[test]
fn blank_cells_may_hang_off_the_edge() {
    // A's last row is blank, so it fits a 2-row image; B's is not.
    let font = Font::parse(b"* *\n* *\n  *").unwrap();
    let mut img = PixelBuffer::new(1, 2);
    let outcome = stamp_message(&mut img, &font, "A", 0, 0).unwrap();
    assert_eq!(outcome.stamped, 1);
    assert_eq!(img.pixels(), &[Pixel::WHITE, Pixel::WHITE]);

    let mut img = PixelBuffer::new(1, 2);
    let outcome = stamp_message(&mut img, &font, "b", 0, 0).unwrap();
    assert_eq!(outcome.skipped, 1);
    assert_eq!(img, PixelBuffer::new(1, 2));
}

#[test]
fn unknown_character_keeps_earlier_glyphs() {
    let mut img = PixelBuffer::new(20, 4);
    let err = stamp_message(&mut img, &small_font(), "AB7A", 0, 0).unwrap_err();
    assert!(matches!(err, Error::MissingGlyph { ch: '7' }));
    assert_eq!(img.get(0, 0), Some(Pixel::WHITE));
    assert_eq!(img.get(0, 4), Some(Pixel::WHITE));
    // The trailing 'A' at column 7 was never drawn.
    assert_eq!(img.get(0, 7), Some(Pixel::BLACK));
}

#[test]
fn render_text_with_missing_font_leaves_image_alone() {
    let mut img = PixelBuffer::new(4, 4);
    let render = RenderParams {
        message: "A".into(),
        font_path: "definitely/not/here.txt".into(),
        font_size: 1,
        row: 0,
        col: 0,
    };
    let err = render_text(&mut img, &render).unwrap_err();
    assert!(matches!(err, Error::FontAsset { .. }));
    assert_eq!(img, PixelBuffer::new(4, 4));
}
