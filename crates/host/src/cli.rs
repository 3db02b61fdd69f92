//! Command-line arguments for the `tempo_tapper` binary.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "tempo_tapper",
    version,
    about = "Tap a tempo with the enter key and read it back in BPM"
)]
pub struct Args {
    /// Decimal places shown for tempo and period.
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub precision: u8,

    /// Log filter used when RUST_LOG is not set (e.g. "debug").
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
