//! Live views of a simulated Buri microcomputer, in a terminal.
//!
//! ## Design
//!
//! * the machine runs on its own thread and owns memory, the LCD controller
//!   and the ACIA; nothing here blocks on it
//! * views only read machine state, by snapshot or on change notification;
//!   the one write path is keystrokes going out through the transmit callback
//! * the LCD is drawn dot by dot from the HD44780 character ROM, following the
//!   controller's real DDRAM row addressing
//! * the serial terminal is a small VT100/ANSI screen fed from a locked byte
//!   queue; the lock is held only to push or to swap the queue out
//! * the memory dump re-reads one 256-byte page at ~15Hz
//!
//! Model
//!
//! ```text
//! machine thread                      UI thread
//!  |-- memory  ------ snapshot ------> memview
//!  |-- lcd ddram ---- notify/read ---> display (font, grid)
//!  `-- acia rx ------ ByteQueue -----> terminal -> screen
//!      acia tx <----- transmit ------- keystrokes
//! ```
pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
mod font_rom;
pub mod grid;
pub mod input;
pub mod machine;
pub mod memory;
pub mod memview;
pub mod sound;
pub mod terminal;

pub use error::VisError;
