//! Compound seconds + microseconds time value
//!
//! Mirrors the POSIX `struct timeval` layout used by wall-clock sources.
//! Values are kept normalised (`micros < 1_000_000`); addition carries and
//! subtraction borrows exactly like `timeradd` / `timersub`.

use core::time::Duration;

use crate::traits::TimeValue;

/// Microseconds per second
pub const US_PER_SECOND: u32 = 1_000_000;

/// Seconds + microseconds time value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timeval {
    secs: u64,
    micros: u32,
}

impl Timeval {
    /// Create a normalised time value.
    ///
    /// Excess microseconds are carried into the seconds field.
    pub const fn new(secs: u64, micros: u32) -> Self {
        Self {
            secs: secs.wrapping_add((micros / US_PER_SECOND) as u64),
            micros: micros % US_PER_SECOND,
        }
    }

    /// Build a time value from a microsecond count.
    pub const fn from_micros(us: u64) -> Self {
        Self {
            secs: us / US_PER_SECOND as u64,
            micros: (us % US_PER_SECOND as u64) as u32,
        }
    }

    /// Whole seconds.
    pub const fn secs(&self) -> u64 {
        self.secs
    }

    /// Sub-second microseconds, always below one second.
    pub const fn subsec_micros(&self) -> u32 {
        self.micros
    }
}

impl From<Duration> for Timeval {
    fn from(duration: Duration) -> Self {
        Self {
            secs: duration.as_secs(),
            micros: duration.subsec_micros(),
        }
    }
}

impl TimeValue for Timeval {
    fn zero() -> Self {
        Self { secs: 0, micros: 0 }
    }

    fn add(self, other: Self) -> Self {
        let mut secs = self.secs.wrapping_add(other.secs);
        let mut micros = self.micros + other.micros;
        if micros >= US_PER_SECOND {
            secs = secs.wrapping_add(1);
            micros -= US_PER_SECOND;
        }
        Self { secs, micros }
    }

    fn sub(self, earlier: Self) -> Self {
        let mut secs = self.secs.wrapping_sub(earlier.secs);
        let micros = if self.micros < earlier.micros {
            secs = secs.wrapping_sub(1);
            self.micros + US_PER_SECOND - earlier.micros
        } else {
            self.micros - earlier.micros
        };
        Self { secs, micros }
    }

    fn as_micros(self) -> u64 {
        self.secs
            .wrapping_mul(US_PER_SECOND as u64)
            .wrapping_add(self.micros as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalises_micros() {
        let t = Timeval::new(1, 2_500_000);
        assert_eq!(t.secs(), 3);
        assert_eq!(t.subsec_micros(), 500_000);
    }

    #[test]
    fn test_add_carries_into_seconds() {
        let a = Timeval::new(1, 700_000);
        let b = Timeval::new(0, 600_000);
        assert_eq!(a.add(b), Timeval::new(2, 300_000));
    }

    #[test]
    fn test_sub_borrows_from_seconds() {
        let later = Timeval::new(10, 200_000);
        let earlier = Timeval::new(9, 700_000);
        assert_eq!(later.sub(earlier), Timeval::new(0, 500_000));
    }

    #[test]
    fn test_zero_is_additive_identity() {
        let t = Timeval::new(42, 17);
        assert_eq!(Timeval::zero().add(t), t);
        assert_eq!(t.sub(Timeval::zero()), t);
    }

    #[test]
    fn test_as_micros() {
        assert_eq!(Timeval::new(3, 250_000).as_micros(), 3_250_000);
        assert_eq!(Timeval::zero().as_micros(), 0);
    }

    #[test]
    fn test_from_micros_matches_as_micros() {
        let t = Timeval::from_micros(1_234_567_890);
        assert_eq!(t.secs(), 1_234);
        assert_eq!(t.subsec_micros(), 567_890);
        assert_eq!(t.as_micros(), 1_234_567_890);
    }

    #[test]
    fn test_from_duration_truncates_nanos() {
        let t = Timeval::from(Duration::new(5, 123_456_789));
        assert_eq!(t, Timeval::new(5, 123_456));
    }

    #[test]
    fn test_rollback_wraps() {
        let earlier = Timeval::new(5, 0);
        let later = Timeval::new(4, 0);
        // Undefined ordering yields a wrapped value, never a panic
        let delta = later.sub(earlier);
        assert_eq!(delta.secs(), u64::MAX);
        assert_eq!(delta.subsec_micros(), 0);
    }
}
