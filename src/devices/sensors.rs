//! Sensor capability interfaces
//!
//! All readings are taken at call time; none of these methods block for
//! longer than one device read.

/// EV3 color sensor
pub trait ColorSensor: Send {
    /// Ambient light intensity, percent
    fn ambient(&self) -> f64;

    /// Reflected light intensity, percent
    fn reflection(&self) -> f64;

    /// Raw red, green and blue components
    fn rgb(&self) -> (f64, f64, f64);
}

/// EV3 gyro sensor
pub trait GyroSensor: Send {
    /// Rotation rate in degrees per second
    fn rate(&self) -> f64;

    /// Heading in degrees relative to the last reset
    fn angle(&self) -> f64;

    /// Angle and rate read in one transaction
    fn angle_rate(&self) -> (f64, f64) {
        (self.angle(), self.rate())
    }

    fn reset_angle(&mut self, angle: f64);

    /// Recalibrate the zero-rate offset. The robot must be still.
    fn calibrate(&mut self);
}

/// EV3 touch sensor
pub trait TouchSensor: Send {
    fn is_pressed(&self) -> bool;
}

/// Buttons of the infrared beacon remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeaconButton {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Beacon,
}

/// EV3 infrared sensor
pub trait InfraredSensor: Send {
    /// Proximity, percent of range
    fn distance(&self) -> f64;

    /// Remote buttons held on `channel` (1-4)
    fn buttons(&self, channel: u8) -> Vec<BeaconButton>;
}

/// EV3 ultrasonic sensor
pub trait UltrasonicSensor: Send {
    /// Distance in centimetres
    fn distance(&self) -> f64;

    /// Distance measured without emitting, centimetres
    fn distance_silent(&self) -> f64;

    /// Whether another ultrasonic sensor is transmitting nearby
    fn presence(&self) -> bool;
}
