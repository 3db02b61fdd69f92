//! Wall-clock time source for POSIX hosts.
//!
//! Reads the system time of day as a seconds + microseconds pair, like
//! `gettimeofday`. The wall clock can be stepped by NTP or the user; a step
//! backwards between two taps yields a wrapped interval, not an error.

use std::time::{SystemTime, UNIX_EPOCH};

use tempo_tapper_core::timeval::Timeval;
use tempo_tapper_core::traits::{TimeSource, TimeValue};

/// System wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    type Time = Timeval;

    fn now(&self) -> Timeval {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => Timeval::from(since_epoch),
            Err(e) => {
                log::warn!("System clock is before the Unix epoch: {e}");
                Timeval::zero()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_after_epoch() {
        let clock = SystemClock::new();
        // 2020-01-01T00:00:00Z
        assert!(clock.now().secs() > 1_577_836_800);
    }

    #[test]
    fn test_now_is_normalised() {
        let clock = SystemClock::new();
        assert!(clock.now().subsec_micros() < 1_000_000);
    }

    #[test]
    fn test_successive_readings_measure_sleep() {
        let clock = SystemClock::new();
        let start = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let elapsed = clock.now().sub(start).as_micros();

        assert!(elapsed >= 20_000, "elapsed {elapsed} us");
        assert!(elapsed < 5_000_000, "elapsed {elapsed} us");
    }
}
