//! The front-end environment: sets everything up, then runs the UI loop.
//!
//! ```text
//! run
//!  |-- machine (own thread), memory, lcd peripheral
//!  |-- terminal bridge  <- inbound bytes from the machine
//!  |                    -> keystrokes to the machine
//!  `-- loop, once per tick
//!       |-- read input events, route keys to the focused view
//!       |-- drain + decode serial, poll lcd notifications
//!       |-- refresh memory dump at ~15Hz
//!       |-- draw if anything changed
//!       `-- sleep out the rest of the tick
//! ```

use crate::config::Config;
use crate::display::LcdRenderer;
use crate::input::{CrosstermInput, Input};
use crate::machine::{LoopbackMachine, Peripheral};
use crate::memory::{FlatMemory, MemoryMap};
use crate::memview::{MemoryPageViewer, VIEW_HEIGHT, VIEW_WIDTH};
use crate::sound::{Bell, Mute, SimpleBeep};
use crate::terminal::{TerminalBridge, TerminalView};
use crossterm::event::{Event, KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tui::backend::{Backend, CrosstermBackend};
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::style::{Color, Style};
use tui::widgets::Paragraph;
use tui::{Frame, Terminal};

const HELP: &str = "F1 terminal  F2 memory  PgUp/PgDn page  F10 quit";

/// which view gets the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Terminal,
    Memory,
}

/// All the views plus the data sources they read.
pub struct App {
    memory: Box<dyn MemoryMap>,
    lcd: LcdRenderer,
    bridge: TerminalBridge,
    term_view: TerminalView,
    memview: MemoryPageViewer,
    bell: Box<dyn Bell>,
    focus: Focus,
    memory_refresh: Duration,
    last_memory_refresh: Option<Instant>,
    redraw: bool,
    quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        memory: Box<dyn MemoryMap>,
        lcd: Arc<dyn Peripheral>,
        bridge: TerminalBridge,
        bell: Box<dyn Bell>,
    ) -> Self {
        let mut renderer = LcdRenderer::new(config.palette, config.metrics);
        if let Err(e) = renderer.attach(lcd) {
            warn!("lcd attached but not drawable: {}", e);
        }
        let mut term_view = TerminalView::new();
        term_view.contents_changed(bridge.screen());
        term_view.set_focus(true);
        App {
            memory,
            lcd: renderer,
            bridge,
            term_view,
            memview: MemoryPageViewer::new(),
            bell,
            focus: Focus::Terminal,
            memory_refresh: config.memory_refresh,
            last_memory_refresh: None,
            redraw: true,
            quit: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            debug!("focus {:?}", focus);
            self.focus = focus;
            self.term_view.set_focus(focus == Focus::Terminal);
            self.redraw = true;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn bridge(&self) -> &TerminalBridge {
        &self.bridge
    }

    pub fn memview(&self) -> &MemoryPageViewer {
        &self.memview
    }

    pub fn lcd(&self) -> &LcdRenderer {
        &self.lcd
    }

    pub fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(w, h) => {
                debug!("resized to {}x{}", w, h);
                self.redraw = true;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::F(10) => self.quit = true,
            KeyCode::F(1) => self.set_focus(Focus::Terminal),
            KeyCode::F(2) => self.set_focus(Focus::Memory),
            _ => match self.focus {
                Focus::Terminal => self.bridge.send_key(&key),
                Focus::Memory => self.memory_key(key),
            },
        }
    }

    fn memory_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::PageUp | KeyCode::Char('+') | KeyCode::Char('=') => self.memview.next_page(),
            KeyCode::PageDown | KeyCode::Char('-') => self.memview.prev_page(),
            KeyCode::Home => {
                if let Err(e) = self.memview.set_page(0) {
                    warn!("{}", e);
                }
            }
            _ => return,
        }
        // show the new page straight away
        self.memview.refresh(self.memory.as_ref());
        self.redraw = true;
    }

    /// one UI tick: decode serial, watch the lcd, refresh memory when due
    pub fn tick(&mut self, now: Instant) {
        self.bridge.poll();
        if self.bridge.take_dirty() {
            self.term_view.contents_changed(self.bridge.screen());
            self.redraw = true;
        }

        if self.bridge.take_bell() {
            if let Err(e) = self.bell.beep() {
                warn!("bell: {}", e);
            }
        }
        if let Err(e) = self.bell.update(now) {
            warn!("bell: {}", e);
        }

        match self.lcd.poll() {
            Ok(true) => self.redraw = true,
            Ok(false) => {}
            Err(e) => debug!("lcd: {}", e),
        }

        let due = match self.last_memory_refresh {
            Some(t) => now.duration_since(t) >= self.memory_refresh,
            None => true,
        };
        if due {
            self.memview.refresh(self.memory.as_ref());
            self.last_memory_refresh = Some(now);
            self.redraw = true;
        }
    }

    /// true once after anything changed on screen
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn draw<B: Backend>(&self, f: &mut Frame<B>) {
        let (term_w, _) = self.term_view.geometry();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(term_w), Constraint::Min(0)].as_ref())
            .split(f.size());

        self.term_view.draw(f, columns[0], self.bridge.screen());

        let (im_w, im_h) = self.lcd.image_size();
        let lcd_w = im_w as u16 + 2;
        let lcd_h = ((im_h + 1) / 2) as u16 + 2;
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(lcd_h),
                    Constraint::Length(VIEW_HEIGHT),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(columns[1]);

        self.lcd.draw(f, narrowed(right[0], lcd_w));
        self.memview
            .draw(f, narrowed(right[1], VIEW_WIDTH), self.focus == Focus::Memory);
        f.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            right[2],
        );
    }
}

fn narrowed(area: Rect, width: u16) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), area.height)
}

/// Poll input, tick and draw until asked to quit.
pub fn main_loop<B: Backend>(
    app: &mut App,
    input: &mut dyn Input,
    terminal: &mut Terminal<B>,
    tick: Duration,
) -> Result<(), Box<dyn Error>> {
    loop {
        let now = Instant::now();
        for ev in input.read_events()? {
            app.handle_event(ev);
        }
        if app.should_quit() {
            return Ok(());
        }
        app.tick(now);
        if app.take_redraw() {
            terminal.draw(|f| app.draw(f))?;
        }
        spin_sleep::sleep(tick.saturating_sub(now.elapsed()));
    }
}

/// set up the machine and the terminal UI, run until F10
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut memory = FlatMemory::new();
    if let Some(path) = &config.load {
        let mut f = File::open(path)?;
        let n = memory.write_any(&mut f, config.load_addr)?;
        info!(
            "loaded {} bytes from {} at 0x{:04X}",
            n,
            path.display(),
            config.load_addr
        );
    }

    let mut machine = LoopbackMachine::new(memory);
    let mut bridge = TerminalBridge::new(config.terminal_rows, config.terminal_cols);
    bridge.set_transmit(machine.transmitter());
    machine.start(bridge.inbound());

    let bell: Box<dyn Bell> = if config.mute {
        Box::new(Mute::new())
    } else {
        Box::new(SimpleBeep::new())
    };
    let mut app = App::new(
        &config,
        Box::new(machine.memory()),
        machine.lcd(),
        bridge,
        bell,
    );

    let mut input = CrosstermInput::new()?;
    let result = in_alternate_screen(&mut io::stdout(), || {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        let result = main_loop(&mut app, &mut input, &mut terminal, config.tick);
        terminal.show_cursor()?;
        result
    });
    drop(input);
    machine.stop();
    result
}

/// run `f` on the alternate screen, and leave it again however `f` ends
fn in_alternate_screen<W: Write>(
    out: &mut W,
    f: impl FnOnce() -> Result<(), Box<dyn Error>>,
) -> Result<(), Box<dyn Error>> {
    execute!(out, EnterAlternateScreen)?;
    let result = f();
    let left = execute!(out, LeaveAlternateScreen);
    result?;
    left?;
    Ok(())
}
