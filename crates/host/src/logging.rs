//! Logger setup for the host binary.
//!
//! Logs go to stderr so they never interleave with the session output on
//! stdout. `RUST_LOG` overrides the filter passed on the command line.

use env_logger::{Builder, Env};

use crate::error::Result;

/// Install the global logger.
pub fn init_logger(default_filter: &str) -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
