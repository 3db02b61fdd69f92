#![cfg_attr(not(test), no_std)]

//! tempo_tapper_firmware - Embassy firmware for the tap tempo board
//!
//! This crate binds the core tempo accumulator to the RP2350: the Embassy
//! clock, the two push buttons and the beat LED.
//!
//! # Design Principles
//!
//! - **Embassy tasks**: The metronome runs as a polled async loop
//! - **Platform implementations**: TimeSource and GPIO bindings
//! - **Host-testable**: Task logic runs against mock pins and `MockTime`

// Platform abstraction layer (clock, GPIO, board wiring)
pub mod platform;

// Firmware infrastructure (logging)
pub mod core;

// Tap metronome task
pub mod app;

// Note: Logging macros (log_info!, log_warn!, log_debug!) are exported at
// crate root via #[macro_export] in core::logging

/// Tempo accumulator bound to the Embassy clock
#[cfg(feature = "embassy")]
pub type TempoTapper = tempo_tapper_core::TempoTapper<platform::EmbassyTime>;
