use crate::error::VisError;
use crate::memory::MemoryMap;
use log::debug;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Frame;

/// bytes per page and per dump line
pub const PAGE_SIZE: usize = 0x100;
pub const LINE_SIZE: usize = 0x10;

/// highest selectable page
pub const MAX_PAGE: u16 = 0xff;

/// cells needed to show a whole page, frame included
pub const VIEW_WIDTH: u16 = 76;
pub const VIEW_HEIGHT: u16 = 19;

/// Hex/ASCII dump of one 256-byte page of machine memory.
pub struct MemoryPageViewer {
    page: u8,
    lines: Vec<String>,
}

impl MemoryPageViewer {
    pub fn new() -> Self {
        MemoryPageViewer {
            page: 0,
            lines: Vec::new(),
        }
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    /// select a page; out of range pages are rejected and the current one kept
    pub fn set_page(&mut self, page: u16) -> Result<(), VisError> {
        if page > MAX_PAGE {
            return Err(VisError::PageOutOfRange(page));
        }
        debug!("memory view page 0x{:02X}", page);
        self.page = page as u8;
        Ok(())
    }

    pub fn next_page(&mut self) {
        self.page = self.page.wrapping_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.wrapping_sub(1);
    }

    /// re-read the page and rebuild the dump
    pub fn refresh(&mut self, memory: &dyn MemoryMap) {
        let base = self.page as u16 * PAGE_SIZE as u16;
        let mut contents = [0u8; PAGE_SIZE];
        memory.read_into(base, &mut contents);

        self.lines.clear();
        self.lines.push(header());
        for (i, chunk) in contents.chunks(LINE_SIZE).enumerate() {
            self.lines
                .push(render_line(base as usize + i * LINE_SIZE, chunk));
        }
    }

    /// header followed by 16 dump lines, empty before the first refresh
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn draw<B: tui::backend::Backend>(&self, f: &mut Frame<B>, area: Rect, focused: bool) {
        let text: Vec<Spans> = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let style = if i == 0 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Spans::from(Span::styled(l.as_str(), style))
            })
            .collect();
        let title = format!("Memory  page 0x{:02X}", self.page);
        let border = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border);
        let dump = Paragraph::new(text).block(block);
        f.render_widget(dump, area);
    }
}

impl Default for MemoryPageViewer {
    fn default() -> Self {
        Self::new()
    }
}

fn hex_group(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// column offsets, lined up over the hex bytes
pub fn header() -> String {
    let cols: Vec<u8> = (0..LINE_SIZE as u8).collect();
    format!("      {}  {}", hex_group(&cols[..8]), hex_group(&cols[8..]))
}

/// `OOOO  xx xx xx xx xx xx xx xx  xx xx xx xx xx xx xx xx  |aaaaaaaaaaaaaaaa|`
pub fn render_line(offset: usize, contents: &[u8]) -> String {
    let hex = contents
        .chunks(8)
        .map(hex_group)
        .collect::<Vec<_>>()
        .join("  ");
    let ascii: String = contents
        .iter()
        .map(|b| match b {
            32..=126 => *b as char,
            _ => '.',
        })
        .collect();
    format!("{:04X}  {:48}  |{:16}|", offset, hex, ascii)
}
