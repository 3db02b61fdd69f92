//! GPIO abstractions for the tap and reset buttons and the beat LED
//!
//! Buttons are active low with the internal pull-up enabled. These traits
//! let the metronome task run against Embassy GPIO on target and against
//! mock pins in host tests.

use tempo_tapper_core::input::Level;

/// Digital input sampled once per loop iteration
pub trait ButtonPin {
    /// Current pin level
    fn level(&self) -> Level;
}

/// Digital output driving the beat LED
pub trait LedPin {
    /// Drive the pin to `level`
    fn set_level(&mut self, level: Level);
}

// =============================================================================
// Embassy GPIO Implementations (RP2350)
// =============================================================================

/// Button pin implementation using Embassy GPIO
#[cfg(feature = "pico2_w")]
pub struct EmbassyButton<'d> {
    pin: embassy_rp::gpio::Input<'d>,
}

#[cfg(feature = "pico2_w")]
impl<'d> EmbassyButton<'d> {
    /// Create button from Embassy GPIO input
    ///
    /// The input should be configured with `Pull::Up`.
    pub fn new(pin: embassy_rp::gpio::Input<'d>) -> Self {
        Self { pin }
    }
}

#[cfg(feature = "pico2_w")]
impl ButtonPin for EmbassyButton<'_> {
    fn level(&self) -> Level {
        Level::from(self.pin.is_high())
    }
}

/// LED pin implementation using Embassy GPIO
#[cfg(feature = "pico2_w")]
pub struct EmbassyLed<'d> {
    pin: embassy_rp::gpio::Output<'d>,
}

#[cfg(feature = "pico2_w")]
impl<'d> EmbassyLed<'d> {
    /// Create LED from Embassy GPIO output
    pub fn new(pin: embassy_rp::gpio::Output<'d>) -> Self {
        Self { pin }
    }
}

#[cfg(feature = "pico2_w")]
impl LedPin for EmbassyLed<'_> {
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        }
    }
}

// =============================================================================
// Mock Implementations (host tests)
// =============================================================================

/// Mock button whose level is set by the test
#[cfg(test)]
#[derive(Debug)]
pub struct MockButton {
    level: core::cell::Cell<Level>,
}

#[cfg(test)]
impl MockButton {
    pub fn released() -> Self {
        Self {
            level: core::cell::Cell::new(Level::RELEASED),
        }
    }

    pub fn press(&self) {
        self.level.set(Level::PRESSED);
    }

    pub fn release(&self) {
        self.level.set(Level::RELEASED);
    }
}

#[cfg(test)]
impl ButtonPin for &MockButton {
    fn level(&self) -> Level {
        self.level.get()
    }
}

/// Mock LED recording the last driven level and the number of rising edges
#[cfg(test)]
#[derive(Debug)]
pub struct MockLed {
    pub level: Level,
    pub pulses: u32,
}

#[cfg(test)]
impl MockLed {
    pub fn new() -> Self {
        Self {
            level: Level::Low,
            pulses: 0,
        }
    }
}

#[cfg(test)]
impl LedPin for MockLed {
    fn set_level(&mut self, level: Level) {
        if self.level == Level::Low && level == Level::High {
            self.pulses += 1;
        }
        self.level = level;
    }
}
