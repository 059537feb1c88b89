//! Mock motor implementation for testing

use crate::devices::{check_power, Motor, MotorError, MotorState, MotorStopAction};

/// Mock motor
///
/// Records every power command for test verification. Position does not
/// move on its own; tests set it with [`MockMotor::set_position`].
#[derive(Debug, Clone)]
pub struct MockMotor {
    powers: Vec<f64>,
    stops: u32,
    position: f64,
    speed: f64,
    scale: f64,
    inverted: bool,
    stop_action: MotorStopAction,
    fault: bool,
}

impl MockMotor {
    /// Create a new mock motor
    pub fn new() -> Self {
        Self {
            powers: Vec::new(),
            stops: 0,
            position: 0.0,
            speed: 0.0,
            scale: 1.0,
            inverted: false,
            stop_action: MotorStopAction::Coast,
            fault: false,
        }
    }

    /// Every power value set, in order
    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    pub fn last_power(&self) -> Option<f64> {
        self.powers.last().copied()
    }

    /// Number of `stop` calls
    pub fn stop_count(&self) -> u32 {
        self.stops
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Make every subsequent command fail with `HardwareFault`
    pub fn inject_fault(&mut self) {
        self.fault = true;
    }
}

impl Default for MockMotor {
    fn default() -> Self {
        Self::new()
    }
}

impl Motor for MockMotor {
    fn count_per_rot(&self) -> u32 {
        360
    }

    fn state(&self) -> MotorState {
        if self.speed != 0.0 {
            MotorState::RUNNING
        } else {
            MotorState::HOLDING
        }
    }

    fn inverted(&self) -> bool {
        self.inverted
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn reset_position(&mut self, position: f64) {
        self.position = position;
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn set(&mut self, power: f64) -> Result<(), MotorError> {
        if self.fault {
            return Err(MotorError::HardwareFault);
        }
        let power = check_power(power)?;
        self.powers.push(power);
        self.speed = power;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MotorError> {
        if self.fault {
            return Err(MotorError::HardwareFault);
        }
        self.stops += 1;
        self.speed = 0.0;
        Ok(())
    }

    fn stop_action(&self) -> MotorStopAction {
        self.stop_action
    }

    fn set_stop_action(&mut self, action: MotorStopAction) {
        self.stop_action = action;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_motor_records_power() {
        let mut motor = MockMotor::new();
        assert_eq!(motor.last_power(), None);

        motor.set(50.0).unwrap();
        motor.set(-20.0).unwrap();
        assert_eq!(motor.powers(), &[50.0, -20.0]);
        assert_eq!(motor.state(), MotorState::RUNNING);

        // Test invalid power
        assert_eq!(motor.set(120.0), Err(MotorError::InvalidPower));
        assert_eq!(motor.powers().len(), 2);

        motor.stop().unwrap();
        assert_eq!(motor.stop_count(), 1);
        assert_eq!(motor.state(), MotorState::HOLDING);
    }

    #[test]
    fn test_mock_motor_fault() {
        let mut motor = MockMotor::new();
        motor.inject_fault();
        assert_eq!(motor.set(10.0), Err(MotorError::HardwareFault));
        assert_eq!(motor.stop(), Err(MotorError::HardwareFault));
    }
}
