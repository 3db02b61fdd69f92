//! tempo_tapper_host - Tap tempo on a POSIX host
//!
//! Binds the core tempo accumulator to the system wall clock and provides a
//! line-oriented terminal session around it.

pub mod cli;
pub mod error;
pub mod logging;
pub mod platform;
pub mod terminal;

pub use cli::Args;
pub use error::{HostError, Result};
pub use platform::SystemClock;
pub use terminal::{Command, Flow, TerminalSession};

/// Tempo accumulator bound to the system wall clock
pub type TempoTapper = tempo_tapper_core::TempoTapper<SystemClock>;
