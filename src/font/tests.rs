use super::*;
use crate::error::Error;

fn ascii(rows: &[&str]) -> Vec<u8> {
    rows.join("\n").into_bytes()
}

#[test]
fn two_glyphs_with_gutter_and_margins() {
    let data = ascii(&[" **   * ", " *   ** ", " **   * "]);
    let font = Font::parse(&data).unwrap();
    assert_eq!(font.len(), 2);

    let a = &font.glyphs()[0];
    assert_eq!(a.key(), 'A');
    assert_eq!((a.rows(), a.cols()), (3, 2));
    assert_eq!(a.row(1), b"* ");

    let b = &font.glyphs()[1];
    assert_eq!(b.key(), 'B');
    assert_eq!((b.rows(), b.cols()), (3, 2));
    assert_eq!(b.row(0), b" *");
    assert_eq!(b.row(1), b"**");
}

#[test]
fn short_rows_read_as_blank() {
    // Row 0 ends before the second glyph; its columns are padded blank.
    let data = ascii(&["*", "*  *", "*  *"]);
    let raw = RawFont::parse(&data);
    assert_eq!(raw.width(), 4);
    assert!(raw.is_empty_col(1));
    assert!(!raw.is_empty_col(3));

    let font = Font::from_raw(&raw).unwrap();
    assert_eq!(font.len(), 2);
    assert_eq!(font.glyphs()[1].row(0), b" ");
    assert_eq!(font.glyphs()[1].row(1), b"*");
}

#[test]
fn non_ink_marks_keep_a_column_occupied() {
    // '.' is not ink but still belongs to the glyph.
    let data = ascii(&["*.*", "* *"]);
    let font = Font::parse(&data).unwrap();
    assert_eq!(font.len(), 1);
    let g = &font.glyphs()[0];
    assert_eq!(g.cols(), 3);
    assert_eq!(g.cell(0, 1), Some(b'.'));
    let ink: Vec<_> = g.ink_cells().collect();
    assert_eq!(ink, vec![(0, 0), (0, 2), (1, 0), (1, 2)]);
}

#[test]
fn crlf_line_breaks_split_rows_once() {
    let font = Font::parse(b"* *\r\n* *\r\n").unwrap();
    assert_eq!(font.len(), 2);
    assert_eq!(font.glyphs()[0].rows(), 2);
}

#[test]
fn span_count_matches_glyph_count() {
    let data = ascii(&["*  *   * *", "*  *   * *"]);
    let raw = RawFont::parse(&data);
    let spans: Vec<_> = raw.glyph_spans().collect();
    assert_eq!(spans, vec![0..1, 3..4, 7..8, 9..10]);
    assert_eq!(Font::from_raw(&raw).unwrap().len(), spans.len());
}

#[test]
fn blank_asset_has_no_glyphs() {
    assert!(matches!(Font::parse(b"    \n   \n"), Err(Error::EmptyFont)));
    assert!(matches!(Font::parse(b""), Err(Error::EmptyFont)));
}

#[test]
fn more_than_26_glyphs_is_rejected() {
    let row = "* ".repeat(27);
    assert!(matches!(
        Font::parse(row.as_bytes()),
        Err(Error::TooManyGlyphs { count: 27 })
    ));
}

#[test]
fn lookup_is_case_insensitive() {
    let font = Font::parse(b"* **").unwrap();
    assert_eq!(font.glyph('b').map(Glyph::cols), Some(2));
    assert_eq!(font.glyph('A').map(Glyph::cols), Some(1));
    assert!(font.glyph('c').is_none());
    assert!(font.glyph('1').is_none());
}

#[test]
fn scaling_by_zero_empties_every_glyph() {
    let mut font = Font::parse(b"* **\n* * ").unwrap();
    font.scale(0);
    assert_eq!(font.len(), 2);
    for g in font.glyphs() {
        assert_eq!((g.rows(), g.cols()), (0, 0));
        assert_eq!(g.ink_cells().count(), 0);
    }
}

#[test]
fn scaling_by_three_expands_cells_into_blocks() {
    let glyph = Glyph::new('A', 2, 2, b"* **".to_vec()).unwrap();
    let big = glyph.scaled(3);
    assert_eq!((big.rows(), big.cols()), (6, 6));
    for r in 0..6 {
        for c in 0..6 {
            assert_eq!(
                big.cell(r, c),
                glyph.cell(r / 3, c / 3),
                "cell ({r}, {c}) should copy ({}, {})",
                r / 3,
                c / 3
            );
        }
    }
}

#[test]
fn font_scale_keeps_size_one() {
    let mut font = Font::parse(b"**\n *").unwrap();
    let original = font.clone();
    font.scale(1);
    assert_eq!(font, original);

    font.scale(2);
    let g = &font.glyphs()[0];
    assert_eq!((g.rows(), g.cols()), (4, 4));
    assert_eq!(g.row(2), b"  **");
}
