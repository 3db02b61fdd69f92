//! Metronome Parameter Definitions
//!
//! # Parameters
//!
//! - `pulse_len_ms` - LED on-time for each tap and beat pulse
//! - `debounce_ms` - Lockout after an accepted button press

/// Default LED pulse length in milliseconds
const DEFAULT_PULSE_LEN_MS: u32 = 50;

/// Default button debounce lockout in milliseconds
const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Minimum LED pulse length in milliseconds
const MIN_PULSE_LEN_MS: u32 = 1;

/// Maximum LED pulse length in milliseconds
const MAX_PULSE_LEN_MS: u32 = 1_000;

/// Maximum debounce lockout in milliseconds
const MAX_DEBOUNCE_MS: u32 = 1_000;

/// Tap metronome parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetronomeParams {
    /// LED pulse length in milliseconds
    pub pulse_len_ms: u32,
    /// Button debounce lockout in milliseconds
    pub debounce_ms: u32,
}

impl Default for MetronomeParams {
    fn default() -> Self {
        Self {
            pulse_len_ms: DEFAULT_PULSE_LEN_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl MetronomeParams {
    /// Create parameters, clamping each value to its supported range.
    pub fn new(pulse_len_ms: u32, debounce_ms: u32) -> Self {
        Self {
            pulse_len_ms: pulse_len_ms.clamp(MIN_PULSE_LEN_MS, MAX_PULSE_LEN_MS),
            debounce_ms: debounce_ms.min(MAX_DEBOUNCE_MS),
        }
    }

    /// Pulse length in microseconds
    pub fn pulse_len_us(&self) -> u64 {
        self.pulse_len_ms as u64 * 1_000
    }

    /// Debounce lockout in microseconds
    pub fn debounce_us(&self) -> u64 {
        self.debounce_ms as u64 * 1_000
    }
}
