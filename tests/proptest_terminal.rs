//! Property-based tests for the serial terminal's inbound path.

use buriview::terminal::TerminalBridge;
use proptest::prelude::*;

const ROWS: usize = 6;
const COLS: usize = 12;

fn snapshot(t: &TerminalBridge) -> (Vec<String>, (usize, usize)) {
    let lines = (0..ROWS).map(|y| t.screen().line_text(y)).collect();
    let c = t.screen().cursor();
    (lines, (c.x, c.y))
}

/// printable text, control codes and escape sequence fragments
fn terminal_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => 0x20u8..0x7f,
            1 => Just(b'\r'),
            1 => Just(b'\n'),
            1 => Just(0x08u8),
            1 => Just(0x1bu8),
            1 => Just(b'['),
            1 => 0x30u8..0x3a,
            1 => prop::sample::select(vec![b'A', b'B', b'C', b'D', b'H', b'J', b'K', b'm']),
        ],
        0..200,
    )
}

proptest! {
    /// Property: however the bytes are split between polls, the screen ends up the same
    #[test]
    fn prop_drain_is_associative(bytes in terminal_bytes(), split in any::<prop::sample::Index>()) {
        let cut = split.index(bytes.len() + 1);

        let mut batched = TerminalBridge::new(ROWS, COLS);
        for b in &bytes[..cut] {
            batched.receive_byte(*b);
        }
        batched.poll();
        for b in &bytes[cut..] {
            batched.receive_byte(*b);
        }
        batched.poll();

        let mut whole = TerminalBridge::new(ROWS, COLS);
        for b in &bytes {
            whole.receive_byte(*b);
        }
        whole.poll();

        prop_assert_eq!(snapshot(&batched), snapshot(&whole));
    }

    /// Property: enqueueing twice then draining once equals enqueueing once
    #[test]
    fn prop_enqueue_batches_merge(a in terminal_bytes(), b in terminal_bytes()) {
        let mut two = TerminalBridge::new(ROWS, COLS);
        let inbound = two.inbound();
        for x in a.iter().chain(b.iter()) {
            inbound.receive_byte(*x);
        }
        two.poll();

        let mut one = TerminalBridge::new(ROWS, COLS);
        let joined: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
        for x in &joined {
            one.receive_byte(*x);
        }
        one.poll();

        prop_assert_eq!(snapshot(&two), snapshot(&one));
    }

    /// Property: the cursor never leaves the screen
    #[test]
    fn prop_cursor_stays_on_screen(bytes in terminal_bytes()) {
        let mut t = TerminalBridge::new(ROWS, COLS);
        for b in &bytes {
            t.receive_byte(*b);
        }
        t.poll();
        let c = t.screen().cursor();
        prop_assert!(c.x < COLS);
        prop_assert!(c.y < ROWS);
    }
}
