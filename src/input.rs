use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use log::trace;
use std::io;
use std::time::Duration;

/// reads UI events
pub trait Input {
    /// everything that arrived since the last call, without blocking
    fn read_events(&mut self) -> Result<Vec<Event>, io::Error>;
}

/// keyboard and resize events from the controlling terminal, via crossterm
pub struct CrosstermInput;

impl CrosstermInput {
    /// puts the terminal in raw mode until dropped
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(CrosstermInput)
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("couldn't leave raw mode: {}", e);
        }
    }
}

impl Input for CrosstermInput {
    fn read_events(&mut self) -> Result<Vec<Event>, io::Error> {
        let mut events = Vec::new();
        while poll(Duration::from_millis(0))? {
            let ev = read()?;
            trace!("event {:?}", ev);
            events.push(ev);
        }
        Ok(events)
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    events: Vec<Event>,
}

impl DummyInput {
    pub fn new(events: &[Event]) -> Self {
        DummyInput {
            events: Vec::from(events),
        }
    }

    /// key presses for each char of `s`
    pub fn typing(s: &str) -> Self {
        let events: Vec<Event> = s
            .chars()
            .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
            .collect();
        DummyInput { events }
    }
}

impl Input for DummyInput {
    fn read_events(&mut self) -> Result<Vec<Event>, io::Error> {
        Ok(std::mem::take(&mut self.events))
    }
}

/// The text a key press types, the way a serial terminal would send it.
/// Keys that type nothing (arrows, function keys) give None.
pub fn key_text(key: &KeyEvent) -> Option<String> {
    let c = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            match c.to_ascii_uppercase() {
                // Ctrl-@ through Ctrl-_
                u @ '@'..='_' => ((u as u8) & 0x1f) as char,
                '?' => '\x7f',
                _ => return None,
            }
        }
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Backspace => '\x08',
        KeyCode::Tab => '\t',
        KeyCode::Esc => '\x1b',
        KeyCode::Delete => '\x7f',
        _ => return None,
    };
    Some(c.to_string())
}
