//! Mock brick: devices attached to ports

use std::collections::HashMap;

use crate::devices::{Device, Port};
use crate::error::{Ev3Error, Result};

use super::{MockButtons, MockColor, MockDisplay, MockGyro, MockMotor, MockTouch};

#[derive(Debug, Clone)]
enum Attached {
    Motor(Device<MockMotor>),
    Gyro(Device<MockGyro>),
    Color(Device<MockColor>),
    Touch(MockTouch),
}

/// Mock EV3 brick
///
/// Devices are attached to ports up front; configuration code then looks
/// them up by port and gets `Ev3Error::DeviceUnavailable` for an empty or
/// mismatched port, like it would on the real brick.
#[derive(Debug, Clone, Default)]
pub struct MockBrick {
    ports: HashMap<Port, Attached>,
    buttons: MockButtons,
    display: MockDisplay,
}

impl MockBrick {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// `Ev3Error::InvalidArgument` if `port` is not an output port.
    pub fn attach_motor(&mut self, port: Port) -> Result<Device<MockMotor>> {
        if !port.is_output() {
            return Err(Ev3Error::InvalidArgument(format!("motor on input port {port}")));
        }
        let device = Device::new(port.address(), MockMotor::new());
        self.ports.insert(port, Attached::Motor(device.clone()));
        Ok(device)
    }

    /// # Errors
    ///
    /// `Ev3Error::InvalidArgument` if `port` is not an input port.
    pub fn attach_gyro(&mut self, port: Port) -> Result<Device<MockGyro>> {
        check_input(port)?;
        let device = Device::new(port.address(), MockGyro::new());
        self.ports.insert(port, Attached::Gyro(device.clone()));
        Ok(device)
    }

    /// # Errors
    ///
    /// `Ev3Error::InvalidArgument` if `port` is not an input port.
    pub fn attach_color(&mut self, port: Port) -> Result<Device<MockColor>> {
        check_input(port)?;
        let device = Device::new(port.address(), MockColor::default());
        self.ports.insert(port, Attached::Color(device.clone()));
        Ok(device)
    }

    /// # Errors
    ///
    /// `Ev3Error::InvalidArgument` if `port` is not an input port.
    pub fn attach_touch(&mut self, port: Port) -> Result<MockTouch> {
        check_input(port)?;
        let touch = MockTouch::new();
        self.ports.insert(port, Attached::Touch(touch.clone()));
        Ok(touch)
    }

    /// # Errors
    ///
    /// `Ev3Error::DeviceUnavailable` if no motor is attached to `port`.
    pub fn motor(&self, port: Port) -> Result<Device<MockMotor>> {
        match self.ports.get(&port) {
            Some(Attached::Motor(device)) => Ok(device.clone()),
            _ => Err(Ev3Error::DeviceUnavailable(port)),
        }
    }

    /// # Errors
    ///
    /// `Ev3Error::DeviceUnavailable` if no gyro is attached to `port`.
    pub fn gyro(&self, port: Port) -> Result<Device<MockGyro>> {
        match self.ports.get(&port) {
            Some(Attached::Gyro(device)) => Ok(device.clone()),
            _ => Err(Ev3Error::DeviceUnavailable(port)),
        }
    }

    /// # Errors
    ///
    /// `Ev3Error::DeviceUnavailable` if no color sensor is attached to `port`.
    pub fn color(&self, port: Port) -> Result<Device<MockColor>> {
        match self.ports.get(&port) {
            Some(Attached::Color(device)) => Ok(device.clone()),
            _ => Err(Ev3Error::DeviceUnavailable(port)),
        }
    }

    /// # Errors
    ///
    /// `Ev3Error::DeviceUnavailable` if no touch sensor is attached to `port`.
    pub fn touch(&self, port: Port) -> Result<MockTouch> {
        match self.ports.get(&port) {
            Some(Attached::Touch(touch)) => Ok(touch.clone()),
            _ => Err(Ev3Error::DeviceUnavailable(port)),
        }
    }

    /// Every attached motor, in port order
    pub fn motors(&self) -> Vec<Device<MockMotor>> {
        Port::OUTPUTS
            .into_iter()
            .filter_map(|port| self.motor(port).ok())
            .collect()
    }

    pub fn buttons(&self) -> MockButtons {
        self.buttons.clone()
    }

    pub fn display(&self) -> MockDisplay {
        self.display.clone()
    }
}

fn check_input(port: Port) -> Result<()> {
    if port.is_output() {
        return Err(Ev3Error::InvalidArgument(format!("sensor on output port {port}")));
    }
    Ok(())
}
