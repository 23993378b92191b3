//! The machine side of the fence: the LCD peripheral the simulator owns, and a
//! small loopback machine that stands in for the full simulator when the
//! front-end runs on its own.
//!
//! Everything here runs on the machine thread. The UI only ever reads DDRAM
//! and memory through snapshots, and only ever writes through the transmit
//! callback.

use crate::grid::{ddram_addr, DDRAM_SIZE, LCD_COLS, LCD_ROWS};
use crate::memory::{FlatMemory, SharedMemory};
use crate::terminal::{Inbound, Transmit};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A character display controller whose internal buffer can be read and
/// watched for changes.
pub trait Peripheral: Send + Sync {
    /// call `f` with a borrowed view of the controller's DDRAM
    fn with_ddram(&self, f: &mut dyn FnMut(&[u8]));

    /// get notified whenever DDRAM changes
    fn subscribe(&self) -> Subscription;
}

/// Change notifications for one observer. Dropping it unsubscribes.
pub struct Subscription {
    rx: Receiver<()>,
}

impl Subscription {
    /// a subscription and the sender the peripheral keeps
    pub fn channel() -> (Sender<()>, Subscription) {
        let (tx, rx) = mpsc::channel();
        (tx, Subscription { rx })
    }

    /// true if anything changed since the last call; any number of pending
    /// notifications count once
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

/// HD44780-style character LCD controller, 4x20 module.
pub struct LcdPeripheral {
    ddram: RwLock<[u8; DDRAM_SIZE]>,
    listeners: Mutex<Vec<Sender<()>>>,
}

impl LcdPeripheral {
    /// DDRAM powers up full of spaces
    pub fn new() -> Self {
        LcdPeripheral {
            ddram: RwLock::new([b' '; DDRAM_SIZE]),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// write into DDRAM starting at `addr`; bytes past the end of DDRAM are dropped
    pub fn write(&self, addr: usize, data: &[u8]) {
        {
            let mut ddram = self.ddram.write().unwrap_or_else(PoisonError::into_inner);
            let start = addr.min(DDRAM_SIZE);
            let end = (addr + data.len()).min(DDRAM_SIZE);
            ddram[start..end].copy_from_slice(&data[..end - start]);
        }
        self.notify();
    }

    /// write one character at a visible position
    pub fn put(&self, row: usize, col: usize, c: u8) {
        self.write(ddram_addr(row, col), &[c]);
    }

    pub fn clear(&self) {
        *self.ddram.write().unwrap_or_else(PoisonError::into_inner) = [b' '; DDRAM_SIZE];
        self.notify();
    }

    fn notify(&self) {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.retain(|tx| tx.send(()).is_ok());
    }
}

impl Default for LcdPeripheral {
    fn default() -> Self {
        Self::new()
    }
}

impl Peripheral for LcdPeripheral {
    fn with_ddram(&self, f: &mut dyn FnMut(&[u8])) {
        let ddram = self.ddram.read().unwrap_or_else(PoisonError::into_inner);
        f(&ddram[..])
    }

    fn subscribe(&self) -> Subscription {
        let (tx, sub) = Subscription::channel();
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        sub
    }
}

/// where the loopback machine logs received bytes
pub const RX_LOG_ADDR: u16 = 0x0200;
/// 16-bit little-endian tick counter
pub const TICK_COUNTER_ADDR: u16 = 0x0000;

const LOOP_PERIOD: Duration = Duration::from_millis(10);
const BANNER: &[u8] = b"buri loopback ready\r\n";

/// Stand-in for the simulator: serial is wired back on itself (loop://), and
/// typed characters are mirrored onto the LCD.
pub struct LoopbackMachine {
    memory: SharedMemory,
    lcd: Arc<LcdPeripheral>,
    tx: Sender<u8>,
    rx: Option<Receiver<u8>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LoopbackMachine {
    pub fn new(memory: FlatMemory) -> Self {
        let (tx, rx) = mpsc::channel();
        LoopbackMachine {
            memory: SharedMemory::new(memory),
            lcd: Arc::new(LcdPeripheral::new()),
            tx,
            rx: Some(rx),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    pub fn memory(&self) -> SharedMemory {
        self.memory.clone()
    }

    pub fn lcd(&self) -> Arc<LcdPeripheral> {
        self.lcd.clone()
    }

    /// the machine's transmit entry point, for the terminal's outbound path
    pub fn transmitter(&self) -> Transmit {
        let tx = self.tx.clone();
        Box::new(move |b| {
            if tx.send(b).is_err() {
                debug!("machine stopped, dropping outbound byte 0x{:02x}", b);
            }
        })
    }

    /// start the machine thread; bytes it receives come back through `inbound`
    pub fn start(&mut self, inbound: Inbound) {
        let rx = match self.rx.take() {
            Some(rx) => rx,
            None => {
                warn!("loopback machine already started");
                return;
            }
        };
        self.running.store(true, Ordering::SeqCst);
        let mut state = LoopbackState {
            memory: self.memory.clone(),
            lcd: self.lcd.clone(),
            inbound,
            row: 0,
            col: 0,
            rx_count: 0,
            ticks: 0,
        };
        let running = self.running.clone();
        self.handle = Some(thread::spawn(move || {
            state.boot();
            while running.load(Ordering::SeqCst) {
                match rx.recv_timeout(LOOP_PERIOD) {
                    Ok(b) => state.serial_in(b),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
                state.tick();
            }
            debug!("loopback machine thread exiting");
        }));
        info!("loopback machine started");
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(h) = self.handle.take() {
            if h.join().is_err() {
                warn!("loopback machine thread panicked");
            }
        }
    }
}

impl Drop for LoopbackMachine {
    fn drop(&mut self) {
        self.stop();
    }
}

struct LoopbackState {
    memory: SharedMemory,
    lcd: Arc<LcdPeripheral>,
    inbound: Inbound,
    row: usize,
    col: usize,
    rx_count: u8,
    ticks: u16,
}

impl LoopbackState {
    fn boot(&mut self) {
        self.lcd.clear();
        self.lcd.write(ddram_addr(0, 0), b"buri loopback");
        self.row = 1;
        for &b in BANNER {
            self.inbound.receive_byte(b);
        }
    }

    /// a byte arrived on the serial port
    fn serial_in(&mut self, b: u8) {
        let addr = RX_LOG_ADDR + self.rx_count as u16;
        self.memory.with_mut(|m| m.set_byte(addr, b));
        self.rx_count = self.rx_count.wrapping_add(1);

        self.mirror_to_lcd(b);

        self.inbound.receive_byte(b);
        if b == b'\r' {
            self.inbound.receive_byte(b'\n');
        }
    }

    fn mirror_to_lcd(&mut self, b: u8) {
        match b {
            b'\r' | b'\n' => self.next_row(),
            0x08 | 0x7f => {
                if self.col > 0 {
                    self.col -= 1;
                    self.lcd.put(self.row, self.col, b' ');
                }
            }
            0x20..=0x7e => {
                self.lcd.put(self.row, self.col, b);
                self.col += 1;
                if self.col == LCD_COLS {
                    self.next_row();
                }
            }
            _ => {}
        }
    }

    fn next_row(&mut self) {
        self.col = 0;
        self.row = (self.row + 1) % LCD_ROWS;
        self.lcd.write(ddram_addr(self.row, 0), &[b' '; LCD_COLS]);
    }

    fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        let ticks = self.ticks.to_le_bytes();
        self.memory.with_mut(|m| {
            m.set_byte(TICK_COUNTER_ADDR, ticks[0]);
            m.set_byte(TICK_COUNTER_ADDR + 1, ticks[1]);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::to_grid;
    use crate::memory::MemoryMap;
    use crate::terminal::ByteQueue;

    fn grid_of(lcd: &LcdPeripheral) -> crate::grid::CharacterGrid {
        let mut grid = None;
        lcd.with_ddram(&mut |d: &[u8]| grid = Some(to_grid(d).unwrap()));
        grid.unwrap()
    }

    #[test]
    fn test_ddram_starts_blank() {
        let lcd = LcdPeripheral::new();
        lcd.with_ddram(&mut |d: &[u8]| {
            assert_eq!(d.len(), DDRAM_SIZE);
            assert!(d.iter().all(|b| *b == b' '));
        });
    }

    #[test]
    fn test_write_clips_to_ddram() {
        let lcd = LcdPeripheral::new();
        lcd.write(100, b"abcdef");
        lcd.with_ddram(&mut |d: &[u8]| assert_eq!(&d[100..], b"abcd"));
        lcd.write(500, b"x");
    }

    #[test]
    fn test_put_uses_row_addressing() {
        let lcd = LcdPeripheral::new();
        lcd.put(1, 0, b'X');
        lcd.with_ddram(&mut |d: &[u8]| assert_eq!(d[64], b'X'));
        assert_eq!(grid_of(&lcd).row(1)[0], b'X');
    }

    #[test]
    fn test_notifications_coalesce() {
        let lcd = LcdPeripheral::new();
        let sub = lcd.subscribe();
        assert!(!sub.changed());
        lcd.write(0, b"a");
        lcd.write(1, b"b");
        lcd.clear();
        assert!(sub.changed());
        assert!(!sub.changed());
    }

    #[test]
    fn test_dropped_subscription_pruned() {
        let lcd = LcdPeripheral::new();
        let keep = lcd.subscribe();
        drop(lcd.subscribe());
        lcd.write(0, b"a");
        assert_eq!(lcd.listeners.lock().unwrap().len(), 1);
        assert!(keep.changed());
    }

    fn state(queue: &Arc<ByteQueue>) -> LoopbackState {
        LoopbackState {
            memory: SharedMemory::new(FlatMemory::new()),
            lcd: Arc::new(LcdPeripheral::new()),
            inbound: Inbound::from(queue.clone()),
            row: 0,
            col: 0,
            rx_count: 0,
            ticks: 0,
        }
    }

    #[test]
    fn test_loopback_echo_and_log() {
        let q = Arc::new(ByteQueue::new());
        let mut s = state(&q);
        s.serial_in(b'h');
        s.serial_in(b'i');
        s.serial_in(b'\r');
        assert_eq!(q.drain(), b"hi\r\n");

        let mut log = [0u8; 3];
        s.memory.read_into(RX_LOG_ADDR, &mut log);
        assert_eq!(&log, b"hi\r");

        let g = grid_of(&s.lcd);
        assert!(g.row_text(0).starts_with("hi "));
        assert_eq!((s.row, s.col), (1, 0));
    }

    #[test]
    fn test_loopback_backspace_and_wrap() {
        let q = Arc::new(ByteQueue::new());
        let mut s = state(&q);
        s.serial_in(b'a');
        s.serial_in(0x08);
        assert_eq!(grid_of(&s.lcd).row(0)[0], b' ');
        for _ in 0..LCD_COLS {
            s.serial_in(b'z');
        }
        assert_eq!((s.row, s.col), (1, 0));
        assert_eq!(grid_of(&s.lcd).row_text(0), "z".repeat(LCD_COLS));
    }

    #[test]
    fn test_tick_counter() {
        let q = Arc::new(ByteQueue::new());
        let mut s = state(&q);
        for _ in 0..0x102 {
            s.tick();
        }
        let mut counter = [0u8; 2];
        s.memory.read_into(TICK_COUNTER_ADDR, &mut counter);
        assert_eq!(u16::from_le_bytes(counter), 0x102);
    }

    #[test]
    fn test_machine_thread_round_trip() {
        let q = Arc::new(ByteQueue::new());
        let mut m = LoopbackMachine::new(FlatMemory::new());
        m.start(Inbound::from(q.clone()));
        let mut tx = m.transmitter();
        tx(b'Q');

        let mut seen = Vec::new();
        for _ in 0..200 {
            seen.extend(q.drain());
            if seen.ends_with(b"Q") {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        m.stop();
        assert!(seen.starts_with(BANNER));
        assert!(seen.ends_with(b"Q"));
    }
}
