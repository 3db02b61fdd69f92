//! Platform abstraction layer
//!
//! All RP2350-specific code is isolated to this module: the Embassy clock,
//! button and LED pins, the board wiring and build-time configuration.

pub mod board;
pub mod config;
pub mod gpio;

#[cfg(feature = "embassy")]
pub mod time;

pub use board::{BoardPins, BOARD_PINS};
pub use config::build_params;
pub use gpio::{ButtonPin, LedPin};

#[cfg(feature = "pico2_w")]
pub use gpio::{EmbassyButton, EmbassyLed};

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
