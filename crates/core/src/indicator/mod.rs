//! Non-blocking pulse indicator
//!
//! Drives a single LED output as a fixed-length pulse without sleeping:
//! the caller starts a pulse and then polls `update` from its main loop.

use crate::input::Level;
use crate::traits::TimeValue;

/// Indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseState<V: TimeValue> {
    /// Output is off.
    Idle,
    /// Output is on since `start` for `len_us` microseconds.
    Pulsing { start: V, len_us: u64 },
}

/// LED pulse generator.
#[derive(Debug, Clone)]
pub struct PulseIndicator<V: TimeValue> {
    state: PulseState<V>,
}

impl<V: TimeValue> PulseIndicator<V> {
    /// Create an indicator with the output off.
    pub fn new() -> Self {
        Self {
            state: PulseState::Idle,
        }
    }

    /// Turn the output on for `len_us`, restarting any pulse in progress.
    pub fn start(&mut self, now: V, len_us: u64) {
        self.state = PulseState::Pulsing { start: now, len_us };
    }

    /// Turn the output off immediately.
    pub fn cancel(&mut self) {
        self.state = PulseState::Idle;
    }

    /// End the pulse once its length has elapsed.
    pub fn update(&mut self, now: V) {
        if let PulseState::Pulsing { start, len_us } = self.state {
            if now.sub(start).as_micros() >= len_us {
                self.state = PulseState::Idle;
            }
        }
    }

    /// Output level to drive.
    pub fn level(&self) -> Level {
        match self.state {
            PulseState::Idle => Level::Low,
            PulseState::Pulsing { .. } => Level::High,
        }
    }

    /// Current pulse state.
    pub fn state(&self) -> PulseState<V> {
        self.state
    }
}

impl<V: TimeValue> Default for PulseIndicator<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let led: PulseIndicator<u64> = PulseIndicator::new();
        assert_eq!(led.level(), Level::Low);
        assert_eq!(led.state(), PulseState::Idle);
    }

    #[test]
    fn test_pulse_lasts_its_length() {
        let mut led = PulseIndicator::new();
        led.start(1_000u64, 50_000);
        assert_eq!(led.level(), Level::High);

        led.update(50_999);
        assert_eq!(led.level(), Level::High);

        led.update(51_000);
        assert_eq!(led.level(), Level::Low);
    }

    #[test]
    fn test_cancel_turns_off_immediately() {
        let mut led = PulseIndicator::new();
        led.start(0u64, 50_000);
        led.cancel();
        assert_eq!(led.level(), Level::Low);
    }

    #[test]
    fn test_restart_extends_pulse() {
        let mut led = PulseIndicator::new();
        led.start(0u64, 50_000);
        led.start(40_000, 50_000);

        led.update(60_000);
        assert_eq!(led.level(), Level::High);
        led.update(90_000);
        assert_eq!(led.level(), Level::Low);
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let mut led: PulseIndicator<u64> = PulseIndicator::new();
        led.update(1_000_000);
        assert_eq!(led.state(), PulseState::Idle);
    }
}
