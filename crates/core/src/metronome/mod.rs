//! Tap metronome
//!
//! Platform-agnostic main loop body for a two-button tap tempo device:
//! a tap button feeds the tempo accumulator, a reset button clears it, and
//! an LED pulses on every tap and then keeps pulsing at the measured tempo.
//!
//! The board code samples its pins, calls [`TapMetronome::poll`] and drives
//! the LED from [`TapMetronome::led`]. Nothing here blocks.

use bitflags::bitflags;

use crate::indicator::PulseIndicator;
use crate::input::{Button, Level};
use crate::params::MetronomeParams;
use crate::tapper::TempoTapper;
use crate::traits::{TimeSource, TimeValue};

bitflags! {
    /// What happened during one poll
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MetronomeEvents: u8 {
        /// Tap button press registered
        const TAPPED = 0b00000001;
        /// Reset button press registered
        const RESET = 0b00000010;
        /// Beat pulse started from the measured period
        const BEAT = 0b00000100;
    }
}

/// Two-button tap tempo metronome.
#[derive(Debug)]
pub struct TapMetronome<T: TimeSource> {
    tapper: TempoTapper<T>,
    tap_button: Button<T::Time>,
    reset_button: Button<T::Time>,
    led: PulseIndicator<T::Time>,
    beat_start: T::Time,
    params: MetronomeParams,
}

impl<T: TimeSource> TapMetronome<T> {
    /// Create a metronome with both buttons seeded from their current levels.
    pub fn new(time: T, params: MetronomeParams, tap_level: Level, reset_level: Level) -> Self {
        let beat_start = time.now();
        Self {
            tapper: TempoTapper::new(time),
            tap_button: Button::new(tap_level, params.debounce_us()),
            reset_button: Button::new(reset_level, params.debounce_us()),
            led: PulseIndicator::new(),
            beat_start,
            params,
        }
    }

    /// Run one loop iteration with freshly sampled button levels.
    pub fn poll(&mut self, tap_level: Level, reset_level: Level) -> MetronomeEvents {
        let mut events = MetronomeEvents::empty();
        let now = self.tapper.time_source().now();

        if self.tap_button.update(tap_level, now) {
            self.tapper.tap();
            // Beat period restarts at the tap
            self.beat_start = now;
            self.led.start(now, self.params.pulse_len_us());
            events |= MetronomeEvents::TAPPED;
        }

        if self.reset_button.update(reset_level, now) {
            self.tapper.reset();
            self.led.cancel();
            events |= MetronomeEvents::RESET;
        }

        let period = self.tapper.period_us();
        if period > 0 && now.sub(self.beat_start).as_micros() >= period {
            self.beat_start = now;
            self.led.start(now, self.params.pulse_len_us());
            events |= MetronomeEvents::BEAT;
        }

        self.led.update(now);
        events
    }

    /// LED output level to drive.
    pub fn led(&self) -> Level {
        self.led.level()
    }

    /// Measured tempo, 0.0 until two taps.
    pub fn bpm(&self) -> f32 {
        self.tapper.bpm()
    }

    /// Measured beat period in microseconds, 0 until two taps.
    pub fn period_us(&self) -> u64 {
        self.tapper.period_us()
    }

    /// Underlying tempo accumulator.
    pub fn tapper(&self) -> &TempoTapper<T> {
        &self.tapper
    }

    /// Pulse and debounce settings in use.
    pub fn params(&self) -> &MetronomeParams {
        &self.params
    }
}
