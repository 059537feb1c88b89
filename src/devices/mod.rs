//! Hardware capability interfaces
//!
//! Tasks talk to hardware only through these traits. Concrete ev3dev
//! drivers live outside this crate; [`crate::platform::mock`] provides
//! recording implementations for tests.
//!
//! Devices shared between catalog entries are wrapped in a [`Device`] and
//! driven through a [`DeviceLease`].

mod buttons;
mod display;
mod lease;
mod motor;
mod port;
mod sensors;

pub use buttons::{Button, ButtonSource};
pub use display::{Display, LINE_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use lease::{Device, DeviceLease};
pub use motor::{check_power, Motor, MotorError, MotorState, MotorStopAction};
pub use port::Port;
pub use sensors::{
    BeaconButton, ColorSensor, GyroSensor, InfraredSensor, TouchSensor, UltrasonicSensor,
};
