//! Embassy-based time source implementation.
//!
//! This module provides the `EmbassyTime` implementation of the
//! `TimeSource` trait using Embassy's time driver.

use tempo_tapper_core::traits::TimeSource;

/// Embassy-based time source using the Embassy time driver.
///
/// Readings are microseconds since boot as a `u64` tick counter, so tap
/// intervals use plain tick arithmetic.
///
/// # Example
///
/// ```ignore
/// use tempo_tapper_firmware::platform::EmbassyTime;
/// use tempo_tapper_core::traits::TimeSource;
///
/// let time = EmbassyTime;
/// let now = time.now();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    type Time = u64;

    fn now(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
