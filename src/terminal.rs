//! Serial terminal attached to the machine's ACIA.
//!
//! The machine thread pushes received bytes into a [`ByteQueue`] through an
//! [`Inbound`] handle. The UI thread drains the queue once per tick, feeds
//! the bytes through a VT100/ANSI parser into a [`ScreenBuffer`], and draws
//! it. Keystrokes go the other way through the machine's transmit callback.
//!
//! The queue lock is only ever held to push a byte or to swap the whole
//! buffer out; decoding and drawing happen after it is released.

use crate::input::key_text;
use crossterm::event::KeyEvent;
use log::{debug, trace, warn};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, Borders, Widget};
use tui::Frame;
use vte::{Params, Parser, Perform};

/// the machine's transmit entry point; fire and forget, one byte at a time
pub type Transmit = Box<dyn FnMut(u8) + Send>;

const TAB_WIDTH: usize = 8;

/// Bytes received from the machine and not yet decoded.
#[derive(Default)]
pub struct ByteQueue {
    bytes: Mutex<Vec<u8>>,
}

impl ByteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // a panic elsewhere can't leave a Vec half-pushed, so poisoning is ignored
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, b: u8) {
        self.lock().push(b);
    }

    /// take everything queued so far, leaving the queue empty
    pub fn drain(&self) -> Vec<u8> {
        mem::take(&mut *self.lock())
    }
}

/// Cloneable, thread-safe handle the machine uses to deliver received bytes.
#[derive(Clone)]
pub struct Inbound(Arc<ByteQueue>);

impl Inbound {
    pub fn receive_byte(&self, b: u8) {
        self.0.push(b);
    }
}

impl From<Arc<ByteQueue>> for Inbound {
    fn from(q: Arc<ByteQueue>) -> Self {
        Inbound(q)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub data: char,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { data: ' ' }
    }
}

/// Character cells plus cursor, updated only by feeding it decoded bytes.
pub struct ScreenBuffer {
    rows: usize,
    cols: usize,
    lines: Vec<Vec<Cell>>,
    cursor: Cursor,
    saved: Cursor,
    // cursor sits past the last column; the next printable wraps first
    pending_wrap: bool,
    bell: bool,
}

impl ScreenBuffer {
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        ScreenBuffer {
            rows,
            cols,
            lines: vec![vec![Cell::default(); cols]; rows],
            cursor: Cursor::default(),
            saved: Cursor::default(),
            pending_wrap: false,
            bell: false,
        }
    }

    /// (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn line(&self, y: usize) -> &[Cell] {
        &self.lines[y]
    }

    pub fn line_text(&self, y: usize) -> String {
        self.lines[y].iter().map(|c| c.data).collect()
    }

    /// does the cursor occupy (x, y)
    pub fn is_cursor(&self, x: usize, y: usize) -> bool {
        self.cursor.x == x && self.cursor.y == y
    }

    /// BEL seen since the last call
    pub fn take_bell(&mut self) -> bool {
        mem::take(&mut self.bell)
    }

    /// change geometry, keeping the top-left of what's on screen
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(1);
        let cols = cols.max(1);
        self.lines.resize(rows, vec![Cell::default(); cols]);
        for line in &mut self.lines {
            line.resize(cols, Cell::default());
        }
        self.rows = rows;
        self.cols = cols;
        self.cursor.x = self.cursor.x.min(cols - 1);
        self.cursor.y = self.cursor.y.min(rows - 1);
        self.pending_wrap = false;
    }

    pub fn reset(&mut self) {
        *self = ScreenBuffer::new(self.rows, self.cols);
    }

    fn blank_line(&self) -> Vec<Cell> {
        vec![Cell::default(); self.cols]
    }

    fn put_char(&mut self, c: char) {
        if self.pending_wrap {
            self.pending_wrap = false;
            self.cursor.x = 0;
            self.index();
        }
        self.lines[self.cursor.y][self.cursor.x] = Cell { data: c };
        if self.cursor.x + 1 == self.cols {
            self.pending_wrap = true;
        } else {
            self.cursor.x += 1;
        }
    }

    /// move down a line, scrolling at the bottom
    fn index(&mut self) {
        if self.cursor.y + 1 == self.rows {
            self.scroll_up(1);
        } else {
            self.cursor.y += 1;
        }
    }

    fn reverse_index(&mut self) {
        if self.cursor.y == 0 {
            self.scroll_down(1);
        } else {
            self.cursor.y -= 1;
        }
    }

    fn scroll_up(&mut self, n: usize) {
        for _ in 0..n.min(self.rows) {
            self.lines.remove(0);
            self.lines.push(self.blank_line());
        }
    }

    fn scroll_down(&mut self, n: usize) {
        for _ in 0..n.min(self.rows) {
            self.lines.pop();
            self.lines.insert(0, self.blank_line());
        }
    }

    fn move_to(&mut self, x: usize, y: usize) {
        self.cursor.x = x.min(self.cols - 1);
        self.cursor.y = y.min(self.rows - 1);
        self.pending_wrap = false;
    }

    fn erase(&mut self, y: usize, from: usize, to: usize) {
        let to = to.min(self.cols);
        for cell in &mut self.lines[y][from.min(to)..to] {
            *cell = Cell::default();
        }
    }

    fn erase_in_display(&mut self, mode: u16) {
        let Cursor { x, y } = self.cursor;
        match mode {
            0 => {
                self.erase(y, x, self.cols);
                for row in y + 1..self.rows {
                    self.erase(row, 0, self.cols);
                }
            }
            1 => {
                for row in 0..y {
                    self.erase(row, 0, self.cols);
                }
                self.erase(y, 0, x + 1);
            }
            2 | 3 => {
                for row in 0..self.rows {
                    self.erase(row, 0, self.cols);
                }
            }
            _ => trace!("ignoring ED {}", mode),
        }
    }

    fn erase_in_line(&mut self, mode: u16) {
        let Cursor { x, y } = self.cursor;
        match mode {
            0 => self.erase(y, x, self.cols),
            1 => self.erase(y, 0, x + 1),
            2 => self.erase(y, 0, self.cols),
            _ => trace!("ignoring EL {}", mode),
        }
    }

    fn insert_chars(&mut self, n: usize) {
        let Cursor { x, y } = self.cursor;
        let line = &mut self.lines[y];
        let n = n.min(self.cols - x);
        line.truncate(self.cols - n);
        for _ in 0..n {
            line.insert(x, Cell::default());
        }
    }

    fn delete_chars(&mut self, n: usize) {
        let Cursor { x, y } = self.cursor;
        let line = &mut self.lines[y];
        let n = n.min(self.cols - x);
        line.drain(x..x + n);
        line.resize(self.cols, Cell::default());
    }

    fn insert_lines(&mut self, n: usize) {
        let y = self.cursor.y;
        for _ in 0..n.min(self.rows - y) {
            self.lines.pop();
            self.lines.insert(y, self.blank_line());
        }
        self.cursor.x = 0;
        self.pending_wrap = false;
    }

    fn delete_lines(&mut self, n: usize) {
        let y = self.cursor.y;
        for _ in 0..n.min(self.rows - y) {
            self.lines.remove(y);
            self.lines.push(self.blank_line());
        }
        self.cursor.x = 0;
        self.pending_wrap = false;
    }
}

/// nth CSI parameter, 0 and missing both meaning `default`
fn arg(params: &Params, n: usize, default: usize) -> usize {
    match params.iter().nth(n).and_then(|p| p.first().copied()) {
        Some(0) | None => default,
        Some(v) => v as usize,
    }
}

/// nth CSI parameter where 0 is a real value
fn mode(params: &Params) -> u16 {
    params.iter().next().and_then(|p| p.first().copied()).unwrap_or(0)
}

impl Perform for ScreenBuffer {
    fn print(&mut self, c: char) {
        self.put_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            0x07 => self.bell = true,
            0x08 => {
                if self.pending_wrap {
                    self.pending_wrap = false;
                } else if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                }
            }
            0x09 => {
                let next = (self.cursor.x / TAB_WIDTH + 1) * TAB_WIDTH;
                self.move_to(next, self.cursor.y);
            }
            // LF, VT, FF
            0x0a..=0x0c => {
                self.pending_wrap = false;
                self.index();
            }
            0x0d => {
                self.cursor.x = 0;
                self.pending_wrap = false;
            }
            _ => trace!("ignoring C0 0x{:02x}", byte),
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        // private modes (CSI ? ...) and overlong sequences aren't ours to handle
        if ignore || !intermediates.is_empty() {
            trace!("ignoring CSI {:?} {}", intermediates, action);
            return;
        }
        let Cursor { x, y } = self.cursor;
        match action {
            'A' => self.move_to(x, y.saturating_sub(arg(params, 0, 1))),
            'B' => self.move_to(x, y + arg(params, 0, 1)),
            'C' => self.move_to(x + arg(params, 0, 1), y),
            'D' => self.move_to(x.saturating_sub(arg(params, 0, 1)), y),
            'E' => self.move_to(0, y + arg(params, 0, 1)),
            'F' => self.move_to(0, y.saturating_sub(arg(params, 0, 1))),
            'G' | '`' => self.move_to(arg(params, 0, 1) - 1, y),
            'd' => self.move_to(x, arg(params, 0, 1) - 1),
            'H' | 'f' => self.move_to(arg(params, 1, 1) - 1, arg(params, 0, 1) - 1),
            'J' => self.erase_in_display(mode(params)),
            'K' => self.erase_in_line(mode(params)),
            '@' => self.insert_chars(arg(params, 0, 1)),
            'P' => self.delete_chars(arg(params, 0, 1)),
            'X' => {
                let n = arg(params, 0, 1);
                self.erase(y, x, x + n);
            }
            'L' => self.insert_lines(arg(params, 0, 1)),
            'M' => self.delete_lines(arg(params, 0, 1)),
            'S' => self.scroll_up(arg(params, 0, 1)),
            'T' => self.scroll_down(arg(params, 0, 1)),
            's' => self.saved = self.cursor,
            'u' => {
                let Cursor { x, y } = self.saved;
                self.move_to(x, y);
            }
            // colours and attributes aren't shown
            'm' => {}
            _ => trace!("ignoring CSI {}", action),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        // charset designation and friends
        if !intermediates.is_empty() {
            trace!("ignoring ESC {:?} {}", intermediates, byte as char);
            return;
        }
        match byte {
            b'D' => {
                self.pending_wrap = false;
                self.index();
            }
            b'E' => {
                self.move_to(0, self.cursor.y);
                self.index();
            }
            b'M' => {
                self.pending_wrap = false;
                self.reverse_index();
            }
            b'7' => self.saved = self.cursor,
            b'8' => {
                let Cursor { x, y } = self.saved;
                self.move_to(x, y);
            }
            b'c' => self.reset(),
            _ => trace!("ignoring ESC {}", byte as char),
        }
    }
}

/// Inbound queue, decoder and screen for one serial terminal, plus the
/// outbound path for keystrokes.
pub struct TerminalBridge {
    queue: Arc<ByteQueue>,
    parser: Parser,
    screen: ScreenBuffer,
    transmit: Option<Transmit>,
    dirty: bool,
}

impl TerminalBridge {
    pub fn new(rows: usize, cols: usize) -> Self {
        TerminalBridge {
            queue: Arc::new(ByteQueue::new()),
            parser: Parser::new(),
            screen: ScreenBuffer::new(rows, cols),
            transmit: None,
            dirty: true,
        }
    }

    /// handle for the machine's receive path
    pub fn inbound(&self) -> Inbound {
        Inbound(self.queue.clone())
    }

    pub fn receive_byte(&self, b: u8) {
        self.queue.push(b);
    }

    /// connect the outbound path to the machine
    pub fn set_transmit(&mut self, transmit: Transmit) {
        self.transmit = Some(transmit);
    }

    /// Decode everything received since the last poll. Returns whether
    /// anything was decoded.
    pub fn poll(&mut self) -> bool {
        let bytes = self.queue.drain();
        if bytes.is_empty() {
            return false;
        }
        trace!("decoding {} bytes", bytes.len());
        for b in bytes {
            self.parser.advance(&mut self.screen, b);
        }
        self.dirty = true;
        true
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.screen.resize(rows, cols);
        self.dirty = true;
    }

    /// BEL received since the last call
    pub fn take_bell(&mut self) -> bool {
        self.screen.take_bell()
    }

    /// true once after each change that needs a redraw
    pub fn take_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }

    /// Send typed text to the machine, one code point at a time, in order.
    /// Each code point goes out as a single byte carrying its value; the ACIA
    /// is 8 bits wide, so anything above U+00FF is dropped.
    pub fn send_text(&mut self, text: &str) {
        let transmit = match &mut self.transmit {
            Some(t) => t,
            None => {
                debug!("no transmit attached, dropping {:?}", text);
                return;
            }
        };
        for c in text.chars() {
            match u8::try_from(u32::from(c)) {
                Ok(b) => transmit(b),
                Err(_) => warn!("can't send U+{:04X} over serial, dropped", u32::from(c)),
            }
        }
    }

    /// send whatever text a key press produces; keys without text are dropped
    pub fn send_key(&mut self, key: &KeyEvent) {
        if let Some(text) = key_text(key) {
            self.send_text(&text);
        }
    }
}

/// Screen geometry for a terminal, kept in step with the screen's size.
pub struct TerminalView {
    cached_size: Option<(usize, usize)>,
    width: u16,
    height: u16,
    focused: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView {
            cached_size: None,
            width: 0,
            height: 0,
            focused: false,
        }
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Note new contents; recomputes geometry if rows/cols changed. Returns
    /// whether the geometry changed.
    pub fn contents_changed(&mut self, screen: &ScreenBuffer) -> bool {
        let size = screen.size();
        if self.cached_size == Some(size) {
            return false;
        }
        let (rows, cols) = size;
        self.cached_size = Some(size);
        self.width = (cols + 2).min(u16::MAX as usize) as u16;
        self.height = (rows + 2).min(u16::MAX as usize) as u16;
        debug!("terminal geometry {}x{}", self.width, self.height);
        true
    }

    /// (width, height) in cells including the frame
    pub fn geometry(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn draw<B: tui::backend::Backend>(&self, f: &mut Frame<B>, area: Rect, screen: &ScreenBuffer) {
        let area = Rect::new(
            area.x,
            area.y,
            self.width.min(area.width),
            self.height.min(area.height),
        );
        let border = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title("Terminal")
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            ScreenWidget {
                screen,
                focused: self.focused,
            },
            inner,
        );
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// White on black monospace grid. The cursor cell is inverted while the view
/// has focus and only underlined while it doesn't.
pub struct ScreenWidget<'a> {
    pub screen: &'a ScreenBuffer,
    pub focused: bool,
}

impl<'a> ScreenWidget<'a> {
    pub fn text_style() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn cursor_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Self::text_style().add_modifier(Modifier::UNDERLINED)
        }
    }
}

impl<'a> Widget for ScreenWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (rows, cols) = self.screen.size();
        let rows = rows.min(area.height as usize);
        let cols = cols.min(area.width as usize);
        for y in 0..rows {
            for (x, cell) in self.screen.line(y)[..cols].iter().enumerate() {
                let style = if self.screen.is_cursor(x, y) {
                    Self::cursor_style(self.focused)
                } else {
                    Self::text_style()
                };
                buf.get_mut(area.x + x as u16, area.y + y as u16)
                    .set_char(cell.data)
                    .set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;
    use std::thread;

    fn fed(rows: usize, cols: usize, bytes: &[u8]) -> TerminalBridge {
        let mut t = TerminalBridge::new(rows, cols);
        for b in bytes {
            t.receive_byte(*b);
        }
        t.poll();
        t
    }

    #[test]
    fn test_print_advances_cursor() {
        let t = fed(24, 80, b"A");
        assert_eq!(t.screen().cursor(), Cursor { x: 1, y: 0 });
        assert_eq!(t.screen().line(0)[0].data, 'A');
    }

    #[test]
    fn test_crlf() {
        let t = fed(24, 80, b"abc\r\n");
        assert_eq!(t.screen().cursor(), Cursor { x: 0, y: 1 });
        assert!(t.screen().line_text(0).starts_with("abc "));
    }

    #[test]
    fn test_lf_keeps_column() {
        let t = fed(24, 80, b"ab\n");
        assert_eq!(t.screen().cursor(), Cursor { x: 2, y: 1 });
    }

    #[test]
    fn test_crlf_scrolls_at_bottom() {
        let t = fed(3, 10, b"one\r\ntwo\r\nthree\r\nfour");
        assert_eq!(t.screen().cursor(), Cursor { x: 4, y: 2 });
        assert_eq!(t.screen().line_text(0).trim_end(), "two");
        assert_eq!(t.screen().line_text(1).trim_end(), "three");
        assert_eq!(t.screen().line_text(2).trim_end(), "four");
    }

    #[test]
    fn test_autowrap_is_deferred() {
        let mut t = fed(3, 4, b"abcd");
        // cursor parks on the last column until the next printable
        assert_eq!(t.screen().cursor(), Cursor { x: 3, y: 0 });
        t.receive_byte(b'e');
        t.poll();
        assert_eq!(t.screen().cursor(), Cursor { x: 1, y: 1 });
        assert_eq!(t.screen().line_text(1), "e   ");
    }

    #[test]
    fn test_cr_at_margin_cancels_wrap() {
        let t = fed(3, 4, b"abcd\rX");
        assert_eq!(t.screen().line_text(0), "Xbcd");
        assert_eq!(t.screen().cursor(), Cursor { x: 1, y: 0 });
    }

    #[test]
    fn test_backspace_and_tab() {
        let t = fed(2, 20, b"ab\x08c\tZ");
        assert_eq!(t.screen().line_text(0).trim_end(), "ac      Z");
        assert_eq!(t.screen().cursor(), Cursor { x: 9, y: 0 });
    }

    #[test]
    fn test_cursor_position_and_erase() {
        let t = fed(5, 10, b"xxxxxxxxxx\r\nyyyyyyyyyy\x1b[1;4H\x1b[K\x1b[2;3H\x1b[1K");
        assert_eq!(t.screen().line_text(0), "xxx       ");
        assert_eq!(t.screen().line_text(1), "   yyyyyyy");
        assert_eq!(t.screen().cursor(), Cursor { x: 2, y: 1 });
    }

    #[test]
    fn test_clear_screen() {
        let t = fed(3, 5, b"hello\x1b[2J\x1b[H");
        for y in 0..3 {
            assert_eq!(t.screen().line_text(y), "     ");
        }
        assert_eq!(t.screen().cursor(), Cursor::default());
    }

    #[test]
    fn test_relative_moves_clamp() {
        let t = fed(4, 6, b"\x1b[10B\x1b[99C");
        assert_eq!(t.screen().cursor(), Cursor { x: 5, y: 3 });
        let t = fed(4, 6, b"\x1b[2;2H\x1b[5A\x1b[5D");
        assert_eq!(t.screen().cursor(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn test_insert_delete_chars() {
        let t = fed(1, 6, b"abcdef\x1b[1;2H\x1b[2@");
        assert_eq!(t.screen().line_text(0), "a  bcd");
        let t = fed(1, 6, b"abcdef\x1b[1;2H\x1b[2P");
        assert_eq!(t.screen().line_text(0), "adef  ");
        let t = fed(1, 6, b"abcdef\x1b[1;2H\x1b[2X");
        assert_eq!(t.screen().line_text(0), "a  def");
    }

    #[test]
    fn test_insert_delete_lines() {
        let t = fed(3, 2, b"aa\r\nbb\r\ncc\x1b[2;1H\x1b[L");
        assert_eq!(t.screen().line_text(1), "  ");
        assert_eq!(t.screen().line_text(2), "bb");
        let t = fed(3, 2, b"aa\r\nbb\r\ncc\x1b[1;1H\x1b[M");
        assert_eq!(t.screen().line_text(0), "bb");
        assert_eq!(t.screen().line_text(2), "  ");
    }

    #[test]
    fn test_reverse_index_scrolls_down() {
        let t = fed(2, 2, b"aa\x1bM");
        assert_eq!(t.screen().line_text(0), "  ");
        assert_eq!(t.screen().line_text(1), "aa");
    }

    #[test]
    fn test_save_restore() {
        let t = fed(5, 10, b"ab\x1b7\x1b[4;4Hz\x1b8q");
        assert_eq!(t.screen().line_text(0).trim_end(), "abq");
    }

    #[test]
    fn test_unknown_sequences_ignored() {
        let t = fed(2, 10, b"\x1b[?25l\x1b[31mred\x1b[0m\x1b(B\x1b]0;title\x07!");
        assert_eq!(t.screen().line_text(0).trim_end(), "red!");
    }

    #[test]
    fn test_invalid_utf8_degrades() {
        let t = fed(1, 4, b"\xff\xfeA");
        assert!(t.screen().line_text(0).contains('A'));
    }

    #[test]
    fn test_bell() {
        let mut t = fed(1, 4, b"\x07");
        assert!(t.take_bell());
        assert!(!t.take_bell());
        assert_eq!(t.screen().cursor(), Cursor::default());
    }

    #[test]
    fn test_batches_are_associative() {
        let mut a = TerminalBridge::new(4, 8);
        a.receive_byte(b'x');
        a.receive_byte(b'\r');
        a.receive_byte(b'\n');
        a.poll();
        let b = fed(4, 8, b"x\r\n");
        assert_eq!(a.screen().cursor(), b.screen().cursor());
        for y in 0..4 {
            assert_eq!(a.screen().line_text(y), b.screen().line_text(y));
        }
    }

    #[test]
    fn test_escape_split_across_polls() {
        let mut t = TerminalBridge::new(5, 10);
        for b in b"\x1b[3" {
            t.receive_byte(*b);
        }
        t.poll();
        for b in b";5H*" {
            t.receive_byte(*b);
        }
        t.poll();
        assert_eq!(t.screen().line(2)[4].data, '*');
    }

    #[test]
    fn test_poll_reports_work_and_dirty() {
        let mut t = TerminalBridge::new(2, 2);
        assert!(t.take_dirty());
        assert!(!t.poll());
        assert!(!t.take_dirty());
        t.receive_byte(b'a');
        assert!(t.poll());
        assert!(t.take_dirty());
        assert!(!t.take_dirty());
    }

    #[test]
    fn test_queue_survives_poisoned_lock() {
        let q = Arc::new(ByteQueue::new());
        q.push(b'a');
        let holder = q.clone();
        let crashed = thread::spawn(move || {
            let _guard = holder.lock();
            panic!("receiver died holding the queue");
        })
        .join();
        assert!(crashed.is_err());
        assert!(q.bytes.is_poisoned());

        q.push(b'b');
        assert_eq!(q.drain(), b"ab");
        assert!(q.drain().is_empty());
    }

    #[test]
    fn test_concurrent_receive_loses_nothing() {
        let mut t = TerminalBridge::new(24, 80);
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let inbound = t.inbound();
                thread::spawn(move || {
                    for _ in 0..100 {
                        inbound.receive_byte(b'x');
                    }
                })
            })
            .collect();
        let mut polls = 0;
        while workers.iter().any(|w| !w.is_finished()) && polls < 1000 {
            t.poll();
            polls += 1;
        }
        for w in workers {
            w.join().unwrap();
        }
        t.poll();
        let count: usize = (0..24)
            .map(|y| t.screen().line(y).iter().filter(|c| c.data == 'x').count())
            .sum();
        assert_eq!(count, 400);
    }

    fn recording_bridge() -> (TerminalBridge, mpsc::Receiver<u8>) {
        let (tx, rx) = mpsc::channel();
        let mut t = TerminalBridge::new(2, 2);
        t.set_transmit(Box::new(move |b| tx.send(b).unwrap()));
        (t, rx)
    }

    #[test]
    fn test_send_text_in_order() {
        let (mut t, rx) = recording_bridge();
        t.send_text("hi\r");
        t.send_text("é");
        drop(t);
        let sent: Vec<u8> = rx.iter().collect();
        assert_eq!(sent, vec![b'h', b'i', b'\r', 0xe9]);
    }

    #[test]
    fn test_send_text_drops_wide_code_points() {
        let (mut t, rx) = recording_bridge();
        t.send_text("a\u{20ac}b\u{1f600}\u{ff}");
        drop(t);
        let sent: Vec<u8> = rx.iter().collect();
        assert_eq!(sent, vec![b'a', b'b', 0xff]);
    }

    #[test]
    fn test_send_key() {
        let (mut t, rx) = recording_bridge();
        t.send_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        t.send_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        t.send_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        drop(t);
        let sent: Vec<u8> = rx.iter().collect();
        assert_eq!(sent, vec![0x03, b'\r']);
    }

    #[test]
    fn test_send_without_transmit_is_harmless() {
        let mut t = TerminalBridge::new(2, 2);
        t.send_text("lost");
    }

    #[test]
    fn test_resize_keeps_content_and_clamps_cursor() {
        let mut t = fed(3, 6, b"abc\r\n\r\nxyz");
        t.resize(2, 2);
        assert_eq!(t.screen().size(), (2, 2));
        assert_eq!(t.screen().line_text(0), "ab");
        assert_eq!(t.screen().cursor(), Cursor { x: 1, y: 1 });
    }

    #[test]
    fn test_geometry_follows_size() {
        let mut t = TerminalBridge::new(24, 80);
        let mut v = TerminalView::new();
        assert!(v.contents_changed(t.screen()));
        assert_eq!(v.geometry(), (82, 26));
        assert!(!v.contents_changed(t.screen()));
        t.resize(10, 40);
        assert!(v.contents_changed(t.screen()));
        assert_eq!(v.geometry(), (42, 12));
    }

    #[test]
    fn test_view_focus() {
        let mut v = TerminalView::default();
        assert!(!v.has_focus());
        v.set_focus(true);
        assert!(v.has_focus());
    }

    #[test]
    fn test_cursor_style_depends_on_focus() {
        let t = fed(2, 4, b"ab");
        let area = Rect::new(0, 0, 4, 2);

        let mut focused = Buffer::empty(area);
        ScreenWidget {
            screen: t.screen(),
            focused: true,
        }
        .render(area, &mut focused);
        let c = focused.get(2, 0);
        assert_eq!((c.fg, c.bg), (Color::Black, Color::White));

        let mut unfocused = Buffer::empty(area);
        ScreenWidget {
            screen: t.screen(),
            focused: false,
        }
        .render(area, &mut unfocused);
        let c = unfocused.get(2, 0);
        assert_eq!((c.fg, c.bg), (Color::White, Color::Black));
        assert!(c.modifier.contains(Modifier::UNDERLINED));

        // other cells are plain either way
        assert_eq!(focused.get(0, 0).symbol, "a");
        assert_eq!(focused.get(0, 0).bg, Color::Black);
    }
}
