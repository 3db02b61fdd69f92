//! tempo_tapper_core - Pure no_std tap tempo logic
//!
//! This crate contains the platform-agnostic tempo accumulator and the
//! time abstraction it runs on. It can be tested on host without any
//! feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: The clock is injected via `TimeSource`
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic time abstractions (TimeSource, TimeValue)
//! - [`timeval`]: Seconds + microseconds time value for wall clocks
//! - [`tapper`]: Tempo accumulator (period and BPM from taps)
//! - [`input`]: Debounced active-low push buttons
//! - [`indicator`]: Non-blocking LED pulse output
//! - [`metronome`]: Two-button tap metronome loop
//! - [`params`]: Metronome parameters

#![no_std]

pub mod indicator;
pub mod input;
pub mod metronome;
pub mod params;
pub mod tapper;
pub mod timeval;
pub mod traits;

pub use tapper::{TapState, TempoTapper};
pub use timeval::Timeval;
pub use traits::{MockTime, TimeSource, TimeValue};
