//! Motor capability interface
//!
//! Power values are percentages in [-100.0, +100.0]:
//! - `+100.0` = full forward
//! - `0.0` = stopped
//! - `-100.0` = full reverse

use bitflags::bitflags;

use super::lease::Device;

/// Motor control error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MotorError {
    /// Power value outside [-100.0, +100.0]
    #[error("power outside [-100, 100]")]
    InvalidPower,
    /// Device write failed (motor unplugged, sysfs error)
    #[error("motor hardware fault")]
    HardwareFault,
}

/// What the motor does when told to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotorStopAction {
    /// Remove power and let the motor freewheel
    #[default]
    Coast,
    /// Short the windings for passive braking
    Brake,
    /// Actively hold the current position
    Hold,
}

impl MotorStopAction {
    /// ev3dev `stop_action` attribute value
    pub const fn as_str(self) -> &'static str {
        match self {
            MotorStopAction::Coast => "coast",
            MotorStopAction::Brake => "brake",
            MotorStopAction::Hold => "hold",
        }
    }
}

bitflags! {
    /// Motor state flags as reported by the tacho motor driver
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MotorState: u8 {
        const RUNNING = 0b00001;
        const RAMPING = 0b00010;
        const HOLDING = 0b00100;
        const OVERLOADED = 0b01000;
        const STALLED = 0b10000;
    }
}

/// Motor capability (platform-independent)
///
/// Position and speed are in scaled units: raw tacho counts divided by
/// `count_per_rot` and multiplied by `scale`, negated when inverted.
pub trait Motor: Send {
    /// Tacho counts per rotation
    fn count_per_rot(&self) -> u32;

    fn state(&self) -> MotorState;

    fn inverted(&self) -> bool;
    fn set_inverted(&mut self, inverted: bool);

    fn scale(&self) -> f64;
    fn set_scale(&mut self, scale: f64);

    fn position(&self) -> f64;
    fn reset_position(&mut self, position: f64);

    fn speed(&self) -> f64;

    /// Set motor power
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidPower` if power is outside [-100.0, +100.0].
    /// Returns `MotorError::HardwareFault` if the device write fails.
    fn set(&mut self, power: f64) -> Result<(), MotorError>;

    /// Stop using the configured stop action.
    fn stop(&mut self) -> Result<(), MotorError>;

    fn stop_action(&self) -> MotorStopAction;
    fn set_stop_action(&mut self, action: MotorStopAction);
}

impl<M: Motor + 'static> From<Device<M>> for Device<dyn Motor> {
    fn from(device: Device<M>) -> Self {
        Device {
            label: device.label,
            leased: device.leased,
            inner: device.inner,
        }
    }
}

/// Validate a power value against the [-100.0, +100.0] range.
pub fn check_power(power: f64) -> Result<f64, MotorError> {
    if (-100.0..=100.0).contains(&power) {
        Ok(power)
    } else {
        Err(MotorError::InvalidPower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_power() {
        assert_eq!(check_power(50.0), Ok(50.0));
        assert_eq!(check_power(-100.0), Ok(-100.0));
        assert_eq!(check_power(100.5), Err(MotorError::InvalidPower));
        assert_eq!(check_power(f64::NAN), Err(MotorError::InvalidPower));
    }

    #[test]
    fn test_motor_error_messages() {
        assert_eq!(
            MotorError::InvalidPower.to_string(),
            "power outside [-100, 100]"
        );
        assert_eq!(MotorError::HardwareFault.to_string(), "motor hardware fault");

        let source: &dyn std::error::Error = &MotorError::HardwareFault;
        assert!(source.source().is_none());
    }

    #[test]
    fn test_stop_action_strings() {
        assert_eq!(MotorStopAction::default().as_str(), "coast");
        assert_eq!(MotorStopAction::Hold.as_str(), "hold");
    }

    #[test]
    fn test_motor_state_flags() {
        let state = MotorState::RUNNING | MotorState::STALLED;
        assert!(state.contains(MotorState::STALLED));
        assert!(!state.contains(MotorState::HOLDING));
    }
}
