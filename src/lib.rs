//! ev3kit - Cooperative task runner for EV3 robot controllers
//!
//! This library provides the host platform layer on top of `ev3kit_core`:
//! wall-clock pacing, hardware capability interfaces with exclusive leases,
//! motor tasks, the task catalog and menu, and explicit configuration
//! selection.

// Logging facade (log_* macros)
pub mod logging;

pub mod error;

// Platform layer: host clock and mock devices
pub mod platform;

// Hardware capability interfaces
pub mod devices;

// Tasks built on the host clock and devices
pub mod tasks;

// Blocking drivers on the host clock
pub mod driver;

// Task catalog and operator menu
pub mod menu;

// Configuration selection
pub mod config;

// Demo configurations on mock hardware
#[cfg(feature = "mock")]
pub mod demo;

pub use error::{Ev3Error, Result};
pub use ev3kit_core;
