use crate::error::VisError;
use std::path::PathBuf;
use std::time::Duration;
use tui::style::Color;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// parse `RRGGBB`, with or without a leading `#`
    pub fn parse(s: &str) -> Result<Rgb, VisError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // from_str_radix alone would take a sign, e.g. "+F+F+F"
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(VisError::InvalidColour(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| VisError::InvalidColour(s.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Color {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// the three tints of a backlit dot-matrix LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdPalette {
    pub on: Rgb,
    pub off: Rgb,
    pub background: Rgb,
}

impl Default for LcdPalette {
    fn default() -> Self {
        LcdPalette {
            on: Rgb(250, 220, 20),
            off: Rgb(60, 40, 20),
            background: Rgb(0, 0, 20),
        }
    }
}

/// size of one LCD dot and the gap around it, in output pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub px_size: usize,
    pub px_space: usize,
}

impl GlyphMetrics {
    /// one terminal cell per dot, no gap
    pub const TERMINAL: GlyphMetrics = GlyphMetrics {
        px_size: 1,
        px_space: 0,
    };

    /// width of a rendered glyph block
    pub fn block_width(&self) -> usize {
        5 * (self.px_size + self.px_space) + self.px_space
    }

    /// height of a rendered glyph block
    pub fn block_height(&self) -> usize {
        8 * (self.px_size + self.px_space) + self.px_space
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        GlyphMetrics {
            px_size: 2,
            px_space: 2,
        }
    }
}

/// where `--load` puts a file unless told otherwise
pub const DEFAULT_LOAD_ADDR: u16 = 0x5000;

/// everything the front-end needs to know at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub palette: LcdPalette,
    pub metrics: GlyphMetrics,
    pub terminal_rows: usize,
    pub terminal_cols: usize,
    /// UI tick: input poll, serial drain, LCD notifications
    pub tick: Duration,
    /// memory viewer refresh, approx 15Hz
    pub memory_refresh: Duration,
    pub mute: bool,
    pub load: Option<PathBuf>,
    pub load_addr: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            palette: LcdPalette::default(),
            metrics: GlyphMetrics::TERMINAL,
            terminal_rows: 24,
            terminal_cols: 80,
            tick: Duration::from_millis(16),
            memory_refresh: Duration::from_millis(66),
            mute: false,
            load: None,
            load_addr: DEFAULT_LOAD_ADDR,
        }
    }
}
