//! Tempo accumulator
//!
//! Converts a sequence of tap timestamps into a running mean period and BPM.
//! The mean is kept incrementally as a sum of intervals plus a count, so
//! memory and update cost stay constant no matter how long a session runs.
//!
//! Every interval since the last reset has equal weight: there is no window,
//! no outlier rejection and no drift tracking.

use crate::traits::{TimeSource, TimeValue};

/// Microseconds per minute, the numerator of the BPM conversion
pub const US_PER_MINUTE: u64 = 60 * 1_000_000;

/// Tap counting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapState {
    /// No tap since construction/reset; the next tap only sets the baseline.
    #[default]
    AwaitingBaseline,
    /// Baseline set; `intervals` inter-tap intervals summed so far.
    Sampling { intervals: u32 },
}

/// Tap tempo accumulator bound to a time source.
///
/// Platform crates alias this to their one time source, so the clock is
/// picked at build time and calls are monomorphised.
///
/// # Example
///
/// ```
/// use tempo_tapper_core::tapper::TempoTapper;
/// use tempo_tapper_core::traits::MockTime;
///
/// let time = MockTime::new();
/// let mut tapper = TempoTapper::new(&time);
///
/// tapper.tap();
/// time.advance(500_000);
/// tapper.tap();
///
/// assert_eq!(tapper.period_us(), 500_000);
/// assert_eq!(tapper.bpm(), 120.0);
/// ```
#[derive(Debug, Clone)]
pub struct TempoTapper<T: TimeSource> {
    time: T,
    period_sum: T::Time,
    last_tap: T::Time,
    state: TapState,
}

impl<T: TimeSource> TempoTapper<T> {
    /// Create a tapper in the reset state.
    pub fn new(time: T) -> Self {
        Self {
            time,
            period_sum: T::Time::zero(),
            last_tap: T::Time::zero(),
            state: TapState::AwaitingBaseline,
        }
    }

    /// Discard all measured intervals.
    ///
    /// The last tap timestamp is left as is; it is ignored until a new
    /// baseline tap overwrites it.
    pub fn reset(&mut self) {
        self.state = TapState::AwaitingBaseline;
        self.period_sum = T::Time::zero();
    }

    /// Register a tap at the current clock reading.
    ///
    /// Once `u32::MAX` intervals are summed, further taps only move the
    /// baseline and the mean stays frozen until reset.
    pub fn tap(&mut self) {
        let now = self.time.now();

        self.state = match self.state {
            TapState::AwaitingBaseline => TapState::Sampling { intervals: 0 },
            // Count is pinned; the sum must keep matching it
            saturated @ TapState::Sampling {
                intervals: u32::MAX,
            } => saturated,
            TapState::Sampling { intervals } => {
                let delta = now.sub(self.last_tap);
                self.period_sum = self.period_sum.add(delta);
                TapState::Sampling {
                    intervals: intervals + 1,
                }
            }
        };

        self.last_tap = now;
    }

    /// Mean inter-tap period in microseconds.
    ///
    /// Returns 0 until two taps have been registered. Division truncates.
    pub fn period_us(&self) -> u64 {
        match self.state {
            TapState::Sampling { intervals } if intervals >= 1 => {
                self.period_sum.as_micros() / intervals as u64
            }
            _ => 0,
        }
    }

    /// Tempo in beats per minute, 0.0 while the period is unknown.
    pub fn bpm(&self) -> f32 {
        match self.period_us() {
            0 => 0.0,
            period => US_PER_MINUTE as f32 / period as f32,
        }
    }

    /// Current counting phase.
    pub fn state(&self) -> TapState {
        self.state
    }

    /// Number of summed intervals.
    pub fn interval_count(&self) -> u32 {
        match self.state {
            TapState::AwaitingBaseline => 0,
            TapState::Sampling { intervals } => intervals,
        }
    }

    /// Tap counter in its sentinel form: -1 before the baseline tap,
    /// otherwise the number of summed intervals.
    pub fn tap_count(&self) -> i64 {
        match self.state {
            TapState::AwaitingBaseline => -1,
            TapState::Sampling { intervals } => intervals as i64,
        }
    }

    /// Time source this tapper reads.
    pub fn time_source(&self) -> &T {
        &self.time
    }
}

impl<T: TimeSource + Default> Default for TempoTapper<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
