/// Errors that can occur while running a tap session.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type for host operations
pub type Result<T> = core::result::Result<T, HostError>;
