use crate::config::{GlyphMetrics, LcdPalette};
use crate::error::VisError;
use crate::font::{FontAtlas, PixelImage};
use crate::grid::{to_grid, CharacterGrid, DDRAM_SIZE, LCD_COLS, LCD_ROWS};
use crate::machine::{Peripheral, Subscription};
use log::{debug, warn};
use std::sync::Arc;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::widgets::{Block, Borders, Widget};
use tui::Frame;

/// upper half block: fg paints the top pixel, bg the bottom one
const HALF_BLOCK: &str = "\u{2580}";

struct Attached {
    peripheral: Arc<dyn Peripheral>,
    subscription: Subscription,
}

/// Turns the LCD controller's DDRAM into a picture of the panel. Redraws on
/// attach and whenever the peripheral reports a change.
pub struct LcdRenderer {
    atlas: FontAtlas,
    attached: Option<Attached>,
    surface: Option<PixelImage>,
}

impl LcdRenderer {
    pub fn new(palette: LcdPalette, metrics: GlyphMetrics) -> Self {
        LcdRenderer {
            atlas: FontAtlas::new(palette, metrics),
            attached: None,
            surface: None,
        }
    }

    /// size of the rendered panel, in pixels
    pub fn image_size(&self) -> (usize, usize) {
        let m = self.atlas.metrics();
        (LCD_COLS * m.block_width(), LCD_ROWS * m.block_height())
    }

    /// Watch `peripheral` and draw it straight away. A previously attached
    /// peripheral is detached first.
    pub fn attach(&mut self, peripheral: Arc<dyn Peripheral>) -> Result<(), VisError> {
        self.detach();
        let subscription = peripheral.subscribe();
        self.attached = Some(Attached {
            peripheral,
            subscription,
        });
        self.render()
    }

    /// stop watching and blank the surface
    pub fn detach(&mut self) {
        if self.attached.take().is_some() {
            debug!("lcd detached");
        }
        self.surface = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Redraw if the peripheral changed since the last poll. Returns whether a
    /// redraw happened.
    pub fn poll(&mut self) -> Result<bool, VisError> {
        let changed = match &self.attached {
            Some(a) => a.subscription.changed(),
            None => false,
        };
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    /// Redraw from the attached peripheral. An undersized DDRAM fails without
    /// touching the current surface.
    pub fn render(&mut self) -> Result<(), VisError> {
        let grid = match &self.attached {
            Some(a) => read_grid(a.peripheral.as_ref())?,
            None => return Ok(()),
        };
        self.surface = Some(self.render_grid(&grid));
        Ok(())
    }

    /// lay out one glyph block per character, left to right, top to bottom
    pub fn render_grid(&self, grid: &CharacterGrid) -> PixelImage {
        let m = self.atlas.metrics();
        let (w, h) = self.image_size();
        let mut im = PixelImage::new(w, h, self.atlas.palette().background);
        for (r, row) in grid.rows().enumerate() {
            for (c, code) in row.iter().enumerate() {
                im.blit(
                    self.atlas.block(*code),
                    c * m.block_width(),
                    r * m.block_height(),
                );
            }
        }
        im
    }

    /// the last rendered panel; None while detached
    pub fn surface(&self) -> Option<&PixelImage> {
        self.surface.as_ref()
    }

    pub fn draw<B: tui::backend::Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default()
            .title("Display")
            .borders(Borders::ALL)
            .style(Style::default().bg(self.atlas.palette().background.into()));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if let Some(im) = &self.surface {
            f.render_widget(LcdWidget { image: im }, inner);
        }
    }
}

fn read_grid(peripheral: &dyn Peripheral) -> Result<CharacterGrid, VisError> {
    let mut grid = Err(VisError::BufferTooSmall {
        needed: DDRAM_SIZE,
        actual: 0,
    });
    peripheral.with_ddram(&mut |ddram: &[u8]| grid = to_grid(ddram));
    if let Err(e) = &grid {
        warn!("not rendering lcd: {}", e);
    }
    grid
}

/// Paints a pixel image two rows per terminal cell.
pub struct LcdWidget<'a> {
    pub image: &'a PixelImage,
}

impl<'a> Widget for LcdWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let im = self.image;
        let cols = (area.width as usize).min(im.width());
        let rows = (area.height as usize).min((im.height() + 1) / 2);
        for cy in 0..rows {
            for cx in 0..cols {
                let top = im.get(cx, cy * 2);
                let bottom = if cy * 2 + 1 < im.height() {
                    im.get(cx, cy * 2 + 1)
                } else {
                    top
                };
                buf.get_mut(area.x + cx as u16, area.y + cy as u16)
                    .set_symbol(HALF_BLOCK)
                    .set_fg(top.into())
                    .set_bg(bottom.into());
            }
        }
    }
}
