//! Push-button input handling
//!
//! Buttons are wired active-low with the pin pulled up: a pressed button
//! reads `Low`. A press is reported once per released -> pressed edge, and
//! further edges are ignored until the debounce lockout has elapsed.

use crate::traits::TimeValue;

/// Digital pin level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level a pulled-up button reads while held down.
    pub const PRESSED: Level = Level::Low;
    /// Level a pulled-up button reads while released.
    pub const RELEASED: Level = Level::High;
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Edge-detecting, debounced push button.
#[derive(Debug, Clone)]
pub struct Button<V: TimeValue> {
    previous: Level,
    debounce_us: u64,
    last_press: Option<V>,
}

impl<V: TimeValue> Button<V> {
    /// Create a button, seeding edge detection with its current level.
    pub fn new(initial: Level, debounce_us: u64) -> Self {
        Self {
            previous: initial,
            debounce_us,
            last_press: None,
        }
    }

    /// Feed a fresh sample; returns `true` on an accepted press.
    pub fn update(&mut self, level: Level, now: V) -> bool {
        let edge = self.previous == Level::RELEASED && level == Level::PRESSED;
        self.previous = level;

        if !edge {
            return false;
        }

        let settled = match self.last_press {
            Some(pressed_at) => now.sub(pressed_at).as_micros() >= self.debounce_us,
            None => true,
        };

        if settled {
            self.last_press = Some(now);
        }
        settled
    }

    /// Level seen at the previous sample.
    pub fn level(&self) -> Level {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE_US: u64 = 200_000;

    #[test]
    fn test_press_edge_detected_once() {
        let mut button: Button<u64> = Button::new(Level::High, DEBOUNCE_US);

        assert!(button.update(Level::Low, 1_000));
        // Still held: no new edge
        assert!(!button.update(Level::Low, 2_000));
        assert!(!button.update(Level::Low, 500_000));
    }

    #[test]
    fn test_release_is_not_a_press() {
        let mut button: Button<u64> = Button::new(Level::Low, DEBOUNCE_US);

        assert!(!button.update(Level::High, 1_000));
        assert!(!button.update(Level::High, 2_000));
    }

    #[test]
    fn test_initially_held_button_needs_release() {
        let mut button: Button<u64> = Button::new(Level::PRESSED, DEBOUNCE_US);

        assert!(!button.update(Level::Low, 1_000));
        button.update(Level::High, 2_000);
        assert!(button.update(Level::Low, 3_000));
    }

    #[test]
    fn test_bounce_inside_lockout_is_ignored() {
        let mut button: Button<u64> = Button::new(Level::High, DEBOUNCE_US);

        assert!(button.update(Level::Low, 0));
        button.update(Level::High, 5_000);
        assert!(!button.update(Level::Low, 10_000));
        button.update(Level::High, 150_000);
        assert!(!button.update(Level::Low, 199_999));
    }

    #[test]
    fn test_press_after_lockout_is_accepted() {
        let mut button: Button<u64> = Button::new(Level::High, DEBOUNCE_US);

        assert!(button.update(Level::Low, 0));
        button.update(Level::High, 100_000);
        assert!(button.update(Level::Low, 200_000));
    }

    #[test]
    fn test_lockout_measured_across_counter_wrap() {
        let mut button: Button<u32> = Button::new(Level::High, DEBOUNCE_US);

        assert!(button.update(Level::Low, u32::MAX - 50_000));
        button.update(Level::High, u32::MAX);
        assert!(!button.update(Level::Low, 100_000));
        button.update(Level::High, 120_000);
        assert!(button.update(Level::Low, 160_000));
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }
}
