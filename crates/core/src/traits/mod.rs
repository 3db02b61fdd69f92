//! Core traits for platform-agnostic tempo measurement.
//!
//! This module provides trait abstractions that decouple the tempo
//! accumulator from platform-specific clocks (Embassy, POSIX, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live in the firmware and host crates

pub mod time;

pub use time::{MockTime, TimeSource, TimeValue};
