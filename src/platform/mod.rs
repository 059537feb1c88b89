//! Platform layer
//!
//! - [`host`]: wall-clock time source and blocking ticker for Linux hosts
//!   (the EV3 brick itself and development machines)
//! - [`mock`]: recording device implementations for tests and demos

pub mod host;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use host::{StdTicker, StdTime};
