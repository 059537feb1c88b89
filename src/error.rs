//! Error types for the ev3kit platform layer
//!
//! Only construction-time and selection failures are errors. Failures inside
//! running task code are panics and are not caught by the drivers.

use crate::devices::Port;

/// Result type for ev3kit operations
pub type Result<T> = core::result::Result<T, Ev3Error>;

/// Errors that can occur while wiring or selecting a configuration.
#[derive(Debug, thiserror::Error)]
pub enum Ev3Error {
    #[error("could not find config for {0}")]
    ConfigNotFound(String),

    #[error("no config selected (pass --config <name> or set {})", crate::config::CONFIG_ENV)]
    NoConfigSelected,

    #[error("device already leased by an active task: {0}")]
    DeviceBusy(String),

    #[error("no device on port {0}")]
    DeviceUnavailable(Port),

    #[error("catalog has no pages")]
    EmptyCatalog,

    #[error("menu page has no entries: {0}")]
    EmptyPage(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
