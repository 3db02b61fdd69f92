//! Core firmware infrastructure
//!
//! Firmware-specific support code shared by the application tasks.
//! Logging macros (log_info!, log_warn!, log_debug!) are exported at the
//! crate root via #[macro_export].

pub mod logging;
