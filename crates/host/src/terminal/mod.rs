//! Line-oriented terminal tap session.
//!
//! Each line read from the input is one command:
//!
//! | input | action |
//! |---|---|
//! | empty line (Enter) | tap |
//! | `r` | reset, then show the banner again |
//! | `q` or end of input | quit |
//! | anything else | reported as invalid |
//!
//! After a tap or an invalid line the current tempo and period are printed.

use std::io::{BufRead, Write};

use tempo_tapper_core::tapper::TempoTapper;
use tempo_tapper_core::traits::TimeSource;

use crate::error::Result;

pub const BANNER: &str = "Use the enter key to tap a tempo. Press q to quit.";
pub const HINT: &str = "Press r to reset, press q to quit.";
pub const INVALID: &str = "Invalid input!";

/// Parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tap,
    Reset,
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Command::Tap,
            "r" | "R" => Command::Reset,
            "q" | "Q" => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive tap session over any reader/writer pair.
pub struct TerminalSession<T: TimeSource> {
    tapper: TempoTapper<T>,
    precision: usize,
}

impl<T: TimeSource> TerminalSession<T> {
    /// Create a session printing `precision` decimal places.
    pub fn new(time: T, precision: usize) -> Self {
        Self {
            tapper: TempoTapper::new(time),
            precision,
        }
    }

    /// Read commands until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{BANNER}")?;
        out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Undecodable bytes end up as an invalid command
            let command = Command::parse(&String::from_utf8_lossy(&buf));
            if self.handle(command, out)? == Flow::Quit {
                return Ok(());
            }
            out.flush()?;
        }

        log::debug!("Input closed");
        Ok(())
    }

    /// Apply one command and write its response.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        log::trace!("Command: {command:?}");

        match command {
            Command::Tap => {
                self.tapper.tap();
                log::debug!(
                    "Tap {}: period {} us",
                    self.tapper.tap_count(),
                    self.tapper.period_us()
                );
            }
            Command::Invalid => writeln!(out, "{INVALID}")?,
            Command::Reset => {
                self.tapper.reset();
                log::info!("Tempo reset");
                writeln!(out, "{BANNER}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => {
                self.tapper.reset();
                log::info!("Quit requested");
                return Ok(Flow::Quit);
            }
        }

        writeln!(out, "{}", self.status_line())?;
        writeln!(out, "{HINT}")?;
        Ok(Flow::Continue)
    }

    /// Current tempo and period, e.g. `Tempo: 120.00 BPM, Period: 500.00ms`.
    pub fn status_line(&self) -> String {
        let period_ms = self.tapper.period_us() as f32 / 1000.0;
        format!(
            "Tempo: {:.prec$} BPM, Period: {:.prec$}ms",
            self.tapper.bpm(),
            period_ms,
            prec = self.precision
        )
    }

    /// Tempo accumulator driven by this session.
    pub fn tapper(&self) -> &TempoTapper<T> {
        &self.tapper
    }
}
