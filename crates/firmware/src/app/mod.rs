//! Tap metronome task
//!
//! Samples the tap and reset buttons, feeds the core metronome and drives
//! the beat LED. `MetronomeTask::step` is one loop iteration and is
//! host-testable; `run` wraps it in the Embassy poll loop.

use tempo_tapper_core::metronome::{MetronomeEvents, TapMetronome};
use tempo_tapper_core::params::MetronomeParams;
use tempo_tapper_core::traits::TimeSource;

use crate::platform::{ButtonPin, LedPin};
use crate::{log_debug, log_info, log_warn};

/// Button sampling period in microseconds
pub const POLL_INTERVAL_US: u64 = 1_000;

/// Metronome bound to its button and LED pins
pub struct MetronomeTask<T: TimeSource, B: ButtonPin, L: LedPin> {
    metronome: TapMetronome<T>,
    tap_button: B,
    reset_button: B,
    led: L,
}

impl<T: TimeSource, B: ButtonPin, L: LedPin> MetronomeTask<T, B, L> {
    /// Create the task, seeding edge detection from the current button levels.
    pub fn new(time: T, tap_button: B, reset_button: B, led: L, params: MetronomeParams) -> Self {
        let tap_level = tap_button.level();
        let reset_level = reset_button.level();

        if tap_level == tempo_tapper_core::input::Level::PRESSED {
            log_warn!("Tap button held at startup, waiting for release");
        }

        Self {
            metronome: TapMetronome::new(time, params, tap_level, reset_level),
            tap_button,
            reset_button,
            led,
        }
    }

    /// Run one loop iteration.
    pub fn step(&mut self) -> MetronomeEvents {
        let events = self
            .metronome
            .poll(self.tap_button.level(), self.reset_button.level());
        self.led.set_level(self.metronome.led());

        if events.contains(MetronomeEvents::TAPPED) {
            log_info!("Tempo: {} BPM", self.metronome.bpm());
        }
        if events.contains(MetronomeEvents::RESET) {
            log_info!("Reset!");
        }
        if events.contains(MetronomeEvents::BEAT) {
            log_debug!("Beat, period {} us", self.metronome.period_us());
        }

        events
    }

    pub fn metronome(&self) -> &TapMetronome<T> {
        &self.metronome
    }

    pub fn led(&self) -> &L {
        &self.led
    }
}

/// Poll the metronome forever at [`POLL_INTERVAL_US`].
#[cfg(feature = "pico2_w")]
pub async fn run<B: ButtonPin, L: LedPin>(
    mut task: MetronomeTask<crate::platform::EmbassyTime, B, L>,
) {
    use embassy_time::{Duration, Ticker};

    let mut ticker = Ticker::every(Duration::from_micros(POLL_INTERVAL_US));
    loop {
        task.step();
        ticker.next().await;
    }
}
