//! Mock platform implementation for testing
//!
//! Recording implementations of the device traits. Motors and sensors are
//! plain values meant to be wrapped in a [`Device`](crate::devices::Device).
//! Mocks a test must poke while something else owns them (touch sensor,
//! buttons, display) are cheap cloneable handles to shared state.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled (default; used by the demo configs)
//!
//! # Example
//!
//! ```
//! use ev3kit::devices::{Device, Motor};
//! use ev3kit::platform::mock::MockMotor;
//!
//! let motor = Device::new("left", MockMotor::new());
//! let lease = motor.try_lease().unwrap();
//! lease.with(|m| m.set(40.0)).unwrap();
//! assert_eq!(motor.read(|m| m.last_power()), Some(40.0));
//! ```

#![cfg(any(test, feature = "mock"))]

mod brick;
mod buttons;
mod display;
mod motor;
mod sensors;

pub use brick::MockBrick;
pub use buttons::MockButtons;
pub use display::MockDisplay;
pub use motor::MockMotor;
pub use sensors::{MockColor, MockGyro, MockInfrared, MockTouch, MockUltrasonic};
