//! Property-based tests for the LCD row mapping and the character ROM.

use buriview::font::glyph;
use buriview::grid::{to_grid, DDRAM_SIZE, LCD_COLS};
use buriview::VisError;
use proptest::prelude::*;

proptest! {
    /// Property: rows come from DDRAM 0x00, 0x40, 0x14, 0x54, never row-major
    #[test]
    fn prop_rows_follow_ddram_addressing(ddram in prop::collection::vec(any::<u8>(), DDRAM_SIZE..=160)) {
        let grid = to_grid(&ddram).unwrap();
        prop_assert_eq!(&grid.row(0)[..], &ddram[0..20]);
        prop_assert_eq!(&grid.row(1)[..], &ddram[64..84]);
        prop_assert_eq!(&grid.row(2)[..], &ddram[20..40]);
        prop_assert_eq!(&grid.row(3)[..], &ddram[84..104]);
    }

    /// Property: anything short of the last addressed byte is rejected, not indexed
    #[test]
    fn prop_short_buffers_rejected(len in 0usize..DDRAM_SIZE) {
        let ddram = vec![0x41u8; len];
        match to_grid(&ddram) {
            Err(VisError::BufferTooSmall { needed, actual }) => {
                prop_assert_eq!(needed, DDRAM_SIZE);
                prop_assert_eq!(actual, len);
            }
            other => prop_assert!(false, "expected BufferTooSmall, got {:?}", other),
        }
    }

    /// Property: every code has a glyph of 8 rows, 5 dots wide
    #[test]
    fn prop_font_lookup_total(code in any::<u8>()) {
        let g = glyph(code);
        prop_assert_eq!(g.rows().len(), 8);
        for row in g.rows() {
            prop_assert!(*row < 0x20);
        }
    }
}

#[test]
fn test_grid_row_width() {
    let grid = to_grid(&[b' '; DDRAM_SIZE]).unwrap();
    assert_eq!(grid.rows().count(), 4);
    assert!(grid.rows().all(|r| r.len() == LCD_COLS));
}
