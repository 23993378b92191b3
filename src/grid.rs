use crate::error::VisError;

/// visible geometry of the 4x20 character LCD
pub const LCD_ROWS: usize = 4;
pub const LCD_COLS: usize = 20;

/// DDRAM address span of the controller. Only 80 cells are visible; 0x28-0x3f
/// and anything past 0x67 is never shown.
pub const DDRAM_SIZE: usize = 104;

/// DDRAM start address of each visible row, top to bottom. The controller
/// splits DDRAM into two 40-byte lines at 0x00 and 0x40, and a 4-line module
/// folds each of them across two physical rows.
pub const ROW_OFFSETS: [usize; LCD_ROWS] = [0x00, 0x40, 0x14, 0x54];

/// The display contents as the viewer sees them, one byte per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid([[u8; LCD_COLS]; LCD_ROWS]);

impl CharacterGrid {
    pub fn row(&self, r: usize) -> &[u8; LCD_COLS] {
        &self.0[r]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; LCD_COLS]> {
        self.0.iter()
    }

    /// the row as text, non-ASCII shown as '?'
    pub fn row_text(&self, r: usize) -> String {
        self.0[r]
            .iter()
            .map(|b| match b {
                0x20..=0x7e => *b as char,
                _ => '?',
            })
            .collect()
    }
}

/// Reinterpret DDRAM as the grid of visible characters.
pub fn to_grid(ddram: &[u8]) -> Result<CharacterGrid, VisError> {
    if ddram.len() < DDRAM_SIZE {
        return Err(VisError::BufferTooSmall {
            needed: DDRAM_SIZE,
            actual: ddram.len(),
        });
    }
    let mut grid = [[0u8; LCD_COLS]; LCD_ROWS];
    for (row, offset) in grid.iter_mut().zip(ROW_OFFSETS) {
        row.copy_from_slice(&ddram[offset..offset + LCD_COLS]);
    }
    Ok(CharacterGrid(grid))
}

/// DDRAM address of a visible (row, col)
pub fn ddram_addr(row: usize, col: usize) -> usize {
    ROW_OFFSETS[row % LCD_ROWS] + col % LCD_COLS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Vec<u8> {
        (0..DDRAM_SIZE as u8).collect()
    }

    #[test]
    fn test_row_addressing() {
        let g = to_grid(&numbered()).unwrap();
        assert_eq!(g.row(0)[0], 0);
        assert_eq!(g.row(0)[19], 19);
        assert_eq!(g.row(1)[0], 64);
        assert_eq!(g.row(1)[19], 83);
        assert_eq!(g.row(2)[0], 20);
        assert_eq!(g.row(2)[19], 39);
        assert_eq!(g.row(3)[0], 84);
        assert_eq!(g.row(3)[19], 103);
    }

    #[test]
    fn test_not_row_major() {
        let g = to_grid(&numbered()).unwrap();
        assert_ne!(g.row(1)[0], 20);
    }

    #[test]
    fn test_padding_never_shown() {
        let mut buf = vec![b' '; DDRAM_SIZE];
        for b in &mut buf[40..64] {
            *b = b'#';
        }
        let g = to_grid(&buf).unwrap();
        assert!(g.rows().all(|r| !r.contains(&b'#')));
    }

    #[test]
    fn test_too_small() {
        match to_grid(&[0; 80]) {
            Err(VisError::BufferTooSmall { needed, actual }) => {
                assert_eq!(needed, 104);
                assert_eq!(actual, 80);
            }
            other => panic!("expected BufferTooSmall, got {:?}", other),
        }
        assert!(to_grid(&[0; 103]).is_err());
        assert!(to_grid(&[]).is_err());
    }

    #[test]
    fn test_longer_buffer_ok() {
        assert!(to_grid(&[0; 128]).is_ok());
    }

    #[test]
    fn test_ddram_addr_matches_grid() {
        let buf = numbered();
        let g = to_grid(&buf).unwrap();
        for r in 0..LCD_ROWS {
            for c in 0..LCD_COLS {
                assert_eq!(g.row(r)[c] as usize, ddram_addr(r, c));
            }
        }
    }

    #[test]
    fn test_row_text() {
        let mut buf = vec![b' '; DDRAM_SIZE];
        buf[64..69].copy_from_slice(b"hello");
        buf[84] = 0xff;
        let g = to_grid(&buf).unwrap();
        assert_eq!(g.row_text(1), "hello               ");
        assert!(g.row_text(3).starts_with('?'));
    }
}
