//! Build-time metronome configuration
//!
//! `build.rs` forwards `TAP_PULSE_MS` and `TAP_DEBOUNCE_MS` from the build
//! environment. Unparseable values fall back to the defaults.

use tempo_tapper_core::params::MetronomeParams;

/// Parse a millisecond setting, falling back to `default`.
fn parse_ms(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}

/// Metronome parameters baked into this build.
pub fn build_params() -> MetronomeParams {
    let defaults = MetronomeParams::default();
    MetronomeParams::new(
        parse_ms(env!("TAP_PULSE_MS"), defaults.pulse_len_ms),
        parse_ms(env!("TAP_DEBOUNCE_MS"), defaults.debounce_ms),
    )
}
