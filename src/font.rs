use crate::config::{GlyphMetrics, LcdPalette, Rgb};
use crate::font_rom::CHAR_ROM;

/// glyph cell dimensions, in dots
pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 8;

/// One 5x8 dot-matrix character. Row 0 is the top; within a row bit 4 is the
/// leftmost dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; GLYPH_ROWS]);

impl Glyph {
    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.0
    }

    /// is the dot at (col, row) lit
    pub fn lit(&self, col: usize, row: usize) -> bool {
        self.0[row] & (1 << (GLYPH_COLS - 1 - col)) != 0
    }
}

/// look up the character generator ROM
pub fn glyph(code: u8) -> Glyph {
    Glyph(CHAR_ROM[code as usize])
}

/// a rectangle of pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelImage {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        PixelImage {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, colour: Rgb) {
        for row in y..(y + h).min(self.height) {
            let start = row * self.width;
            for px in &mut self.pixels[start + x.min(self.width)..start + (x + w).min(self.width)] {
                *px = colour;
            }
        }
    }

    /// copy `src` in with its top-left corner at (x, y), clipped to our bounds
    pub fn blit(&mut self, src: &PixelImage, x: usize, y: usize) {
        if x >= self.width {
            return;
        }
        for sy in 0..src.height {
            let dy = y + sy;
            if dy >= self.height {
                break;
            }
            let w = src.width.min(self.width.saturating_sub(x));
            let dst = dy * self.width + x;
            let from = sy * src.width;
            self.pixels[dst..dst + w].copy_from_slice(&src.pixels[from..from + w]);
        }
    }
}

/// Draw one glyph as an LCD would show it: every dot is drawn, lit or dim, on
/// the panel background.
pub fn render_glyph(g: &Glyph, palette: &LcdPalette, metrics: &GlyphMetrics) -> PixelImage {
    let pitch = metrics.px_size + metrics.px_space;
    let mut im = PixelImage::new(
        metrics.block_width(),
        metrics.block_height(),
        palette.background,
    );
    for row in 0..GLYPH_ROWS {
        for col in 0..GLYPH_COLS {
            let colour = if g.lit(col, row) {
                palette.on
            } else {
                palette.off
            };
            im.fill_rect(
                pitch * col + metrics.px_space,
                pitch * row + metrics.px_space,
                metrics.px_size,
                metrics.px_size,
                colour,
            );
        }
    }
    im
}

/// All 256 glyphs pre-rendered for one palette and dot size.
pub struct FontAtlas {
    palette: LcdPalette,
    metrics: GlyphMetrics,
    blocks: Vec<PixelImage>,
}

impl FontAtlas {
    pub fn new(palette: LcdPalette, metrics: GlyphMetrics) -> Self {
        let blocks = (0..=255u8)
            .map(|c| render_glyph(&glyph(c), &palette, &metrics))
            .collect();
        FontAtlas {
            palette,
            metrics,
            blocks,
        }
    }

    pub fn block(&self, code: u8) -> &PixelImage {
        &self.blocks[code as usize]
    }

    pub fn palette(&self) -> &LcdPalette {
        &self.palette
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(im: &PixelImage, colour: Rgb) -> usize {
        (0..im.height())
            .flat_map(|y| (0..im.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| im.get(x, y) == colour)
            .count()
    }

    #[test]
    fn test_table_is_total() {
        for c in 0..=255u8 {
            let g = glyph(c);
            assert_eq!(g.rows().len(), 8);
            assert!(g.rows().iter().all(|r| *r < 0x20), "glyph {:02x} wider than 5", c);
        }
    }

    #[test]
    fn test_undefined_codes_blank() {
        for c in 0x00..0x20u8 {
            assert_eq!(glyph(c).rows(), &[0; 8]);
        }
        assert_eq!(glyph(0x20).rows(), &[0; 8]);
    }

    #[test]
    fn test_letter_a() {
        let a = glyph(b'A');
        // .###.
        assert!(!a.lit(0, 0));
        assert!(a.lit(1, 0));
        assert!(a.lit(3, 0));
        assert!(!a.lit(4, 0));
        // #####
        assert!((0..5).all(|c| a.lit(c, 4)));
        // cursor row
        assert!((0..5).all(|c| !a.lit(c, 7)));
    }

    #[test]
    fn test_render_glyph_layout() {
        let p = LcdPalette::default();
        let m = GlyphMetrics::default();
        let im = render_glyph(&glyph(b'A'), &p, &m);
        assert_eq!((im.width(), im.height()), (22, 34));
        // frame and gaps are background
        assert_eq!(im.get(0, 0), p.background);
        assert_eq!(im.get(4, 2), p.background);
        // dot (0,0) is dim, dot (1,0) lit
        assert_eq!(im.get(2, 2), p.off);
        assert_eq!(im.get(3, 3), p.off);
        assert_eq!(im.get(6, 2), p.on);
        assert_eq!(im.get(7, 3), p.on);
    }

    #[test]
    fn test_terminal_metrics_have_no_background() {
        let p = LcdPalette::default();
        let im = render_glyph(&glyph(b'A'), &p, &GlyphMetrics::TERMINAL);
        assert_eq!((im.width(), im.height()), (5, 8));
        assert_eq!(count_of(&im, p.background), 0);
        assert_eq!(im.get(1, 0), p.on);
        assert_eq!(im.get(0, 0), p.off);
    }

    #[test]
    fn test_atlas_has_every_code() {
        let atlas = FontAtlas::new(LcdPalette::default(), GlyphMetrics::default());
        for c in 0..=255u8 {
            assert_eq!(atlas.block(c).width(), 22);
        }
        assert_eq!(atlas.block(b'A'), &render_glyph(&glyph(b'A'), atlas.palette(), atlas.metrics()));
    }

    #[test]
    fn test_blit_clips() {
        let mut dst = PixelImage::new(4, 4, Rgb(0, 0, 0));
        let src = PixelImage::new(3, 3, Rgb(1, 1, 1));
        dst.blit(&src, 2, 2);
        assert_eq!(dst.get(3, 3), Rgb(1, 1, 1));
        assert_eq!(dst.get(1, 1), Rgb(0, 0, 0));
        assert_eq!(count_of(&dst, Rgb(1, 1, 1)), 4);
    }
}
