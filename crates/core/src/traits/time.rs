//! Time abstraction traits for platform-agnostic tempo measurement.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! clocks (Embassy tick counter, POSIX wall clock, mock, etc.) and the
//! `TimeValue` trait describing the arithmetic a clock reading must support.
//! Together they let the tempo accumulator run unchanged on a host and on a
//! microcontroller.

use core::cell::Cell;

/// Arithmetic over an opaque, platform-defined time representation.
///
/// Implementations:
/// - [`Timeval`](crate::timeval::Timeval): seconds + microseconds pair (POSIX)
/// - `u32` / `u64`: microsecond tick counters (microcontrollers)
///
/// `sub` assumes `self >= earlier`. A reading taken before `earlier` (clock
/// rollback, counter overflow) produces a wrapped value instead of an error.
pub trait TimeValue: Copy + core::fmt::Debug {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns `self + other`.
    fn add(self, other: Self) -> Self;

    /// Returns `self - earlier`.
    fn sub(self, earlier: Self) -> Self;

    /// Converts the value to microseconds.
    fn as_micros(self) -> u64;
}

macro_rules! impl_tick_counter {
    ($($ty:ty),*) => {
        $(
            impl TimeValue for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn sub(self, earlier: Self) -> Self {
                    self.wrapping_sub(earlier)
                }

                #[inline]
                fn as_micros(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_tick_counter!(u32, u64);

/// Platform-agnostic clock used to timestamp taps.
///
/// A given build binds exactly one implementation:
/// - `EmbassyTime` (in firmware crate) for RP2350 targets, `u64` ticks
/// - `SystemClock` (in host crate) for POSIX hosts, `Timeval`
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use tempo_tapper_core::traits::{MockTime, TimeSource, TimeValue};
///
/// let time = MockTime::new();
/// let start = time.now();
/// time.advance(20_000);
/// assert_eq!(time.now().sub(start).as_micros(), 20_000);
/// ```
pub trait TimeSource {
    /// Platform time representation.
    type Time: TimeValue;

    /// Returns the current clock reading.
    fn now(&self) -> Self::Time;

    /// Returns the current clock reading in microseconds.
    fn now_us(&self) -> u64 {
        self.now().as_micros()
    }
}

impl<S: TimeSource + ?Sized> TimeSource for &S {
    type Time = S::Time;

    fn now(&self) -> Self::Time {
        (**self).now()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// Readings are `u64` microsecond ticks. Hand a `&MockTime` to the consumer
/// to keep control of the clock from the test body.
///
/// # Example
///
/// ```
/// use tempo_tapper_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_us(), 0);
///
/// time.advance(1000); // Advance 1ms
/// assert_eq!(time.now_us(), 1000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    type Time = u64;

    fn now(&self) -> u64 {
        self.current_us.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now(), 0);
        assert_eq!(time.now_us(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial(5_000_000);
        assert_eq!(time.now_us(), 5_000_000);
    }

    #[test]
    fn mock_time_set_and_advance() {
        let time = MockTime::new();
        time.set(1_000_000);
        assert_eq!(time.now_us(), 1_000_000);

        time.advance(500_000);
        assert_eq!(time.now_us(), 1_500_000);
    }

    #[test]
    fn borrowed_source_follows_owner() {
        let time = MockTime::new();
        let borrowed = &time;

        time.advance(42);
        assert_eq!(borrowed.now(), 42);
    }

    #[test]
    fn tick_counter_zero_is_identity() {
        assert_eq!(<u64 as TimeValue>::zero().add(7), 7);
        assert_eq!(<u32 as TimeValue>::zero().add(7), 7);
    }

    #[test]
    fn tick_counter_arithmetic() {
        assert_eq!(TimeValue::sub(1_500u64, 500), 1_000);
        assert_eq!(TimeValue::add(1_500u32, 500), 2_000);
        assert_eq!(TimeValue::as_micros(123_456u32), 123_456);
    }

    #[test]
    fn u32_counter_wraps_like_micros() {
        // Reading taken just after the counter overflowed
        let before = u32::MAX - 99;
        let after = 100u32;
        assert_eq!(TimeValue::sub(after, before), 200);
    }

    #[test]
    fn rollback_wraps_instead_of_panicking() {
        let delta = TimeValue::sub(100u64, 200);
        assert_eq!(delta, u64::MAX - 99);
    }
}
