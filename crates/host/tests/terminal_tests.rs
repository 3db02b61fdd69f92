use std::cell::Cell;
use std::io::Cursor;

use tempo_tapper_core::traits::TimeSource;
use tempo_tapper_host::terminal::{BANNER, HINT, INVALID};
use tempo_tapper_host::TerminalSession;

/// Clock that moves forward by a fixed step on every reading.
///
/// The session reads the clock once per tap, so consecutive taps are
/// exactly `step_us` apart.
struct SteppingClock {
    next_us: Cell<u64>,
    step_us: u64,
}

impl SteppingClock {
    fn new(step_us: u64) -> Self {
        Self {
            next_us: Cell::new(0),
            step_us,
        }
    }
}

impl TimeSource for SteppingClock {
    type Time = u64;

    fn now(&self) -> u64 {
        let now = self.next_us.get();
        self.next_us.set(now + self.step_us);
        now
    }
}

fn run_session(clock: SteppingClock, input: &str) -> String {
    run_session_bytes(clock, input.as_bytes())
}

fn run_session_bytes(clock: SteppingClock, input: &[u8]) -> String {
    let mut session = TerminalSession::new(clock, 2);
    let mut out = Vec::new();
    session
        .run(Cursor::new(input), &mut out)
        .expect("session failed");
    String::from_utf8(out).expect("session wrote invalid UTF-8")
}

fn status(bpm: &str, period_ms: &str) -> String {
    format!("Tempo: {bpm} BPM, Period: {period_ms}ms\n{HINT}\n")
}

#[test]
fn test_empty_input_prints_banner_only() {
    let out = run_session(SteppingClock::new(500_000), "");
    assert_eq!(out, format!("{BANNER}\n"));
}

#[test]
fn test_taps_at_120_bpm() {
    let out = run_session(SteppingClock::new(500_000), "\n\n\nq\n");

    let expected = format!(
        "{BANNER}\n{}{}{}",
        status("0.00", "0.00"),
        status("120.00", "500.00"),
        status("120.00", "500.00"),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_reset_starts_new_measurement() {
    let out = run_session(SteppingClock::new(250_000), "\n\nr\n\nq\n");

    let expected = format!(
        "{BANNER}\n{}{}{BANNER}\n{}",
        status("0.00", "0.00"),
        status("240.00", "250.00"),
        status("0.00", "0.00"),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_invalid_line_keeps_tempo() {
    let out = run_session(SteppingClock::new(1_000_000), "\n\nhello\n");

    let expected = format!(
        "{BANNER}\n{}{}{INVALID}\n{}",
        status("0.00", "0.00"),
        status("60.00", "1000.00"),
        status("60.00", "1000.00"),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_quit_ignores_remaining_input() {
    let out = run_session(SteppingClock::new(500_000), "q\n\n\n");
    assert_eq!(out, format!("{BANNER}\n"));
}

#[test]
fn test_windows_line_endings_tap() {
    let out = run_session(SteppingClock::new(400_000), "\r\n\r\n");

    let expected = format!(
        "{BANNER}\n{}{}",
        status("0.00", "0.00"),
        status("150.00", "400.00"),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_non_utf8_line_is_invalid_input() {
    let out = run_session_bytes(SteppingClock::new(500_000), b"\n\xff\xfe\n\nq\n");

    let expected = format!(
        "{BANNER}\n{}{INVALID}\n{}{}",
        status("0.00", "0.00"),
        status("0.00", "0.00"),
        status("120.00", "500.00"),
    );
    assert_eq!(out, expected);
}
