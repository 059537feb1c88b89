//! Mock sensor implementations for testing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::devices::{
    BeaconButton, ColorSensor, GyroSensor, InfraredSensor, TouchSensor, UltrasonicSensor,
};

/// Mock color sensor with fixed readings
#[derive(Debug, Clone, Default)]
pub struct MockColor {
    pub ambient: f64,
    pub reflection: f64,
    pub rgb: (f64, f64, f64),
}

impl ColorSensor for MockColor {
    fn ambient(&self) -> f64 {
        self.ambient
    }

    fn reflection(&self) -> f64 {
        self.reflection
    }

    fn rgb(&self) -> (f64, f64, f64) {
        self.rgb
    }
}

/// Mock gyro sensor
#[derive(Debug, Clone, Default)]
pub struct MockGyro {
    pub angle: f64,
    pub rate: f64,
    calibrations: u32,
}

impl MockGyro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `calibrate` calls
    pub fn calibrations(&self) -> u32 {
        self.calibrations
    }
}

impl GyroSensor for MockGyro {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    fn reset_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    fn calibrate(&mut self) {
        self.rate = 0.0;
        self.calibrations += 1;
    }
}

/// Mock touch sensor
///
/// Clones share the pressed state.
#[derive(Debug, Clone, Default)]
pub struct MockTouch {
    pressed: Arc<AtomicBool>,
}

impl MockTouch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.pressed.store(true, Ordering::Relaxed);
    }

    pub fn release(&self) {
        self.pressed.store(false, Ordering::Relaxed);
    }
}

impl TouchSensor for MockTouch {
    fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Relaxed)
    }
}

/// Mock infrared sensor
#[derive(Debug, Clone, Default)]
pub struct MockInfrared {
    pub distance: f64,
    /// Buttons held, per channel 1-4
    pub held: [Vec<BeaconButton>; 4],
}

impl InfraredSensor for MockInfrared {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn buttons(&self, channel: u8) -> Vec<BeaconButton> {
        usize::from(channel)
            .checked_sub(1)
            .and_then(|i| self.held.get(i))
            .cloned()
            .unwrap_or_default()
    }
}

/// Mock ultrasonic sensor
#[derive(Debug, Clone, Default)]
pub struct MockUltrasonic {
    pub distance: f64,
    pub presence: bool,
}

impl UltrasonicSensor for MockUltrasonic {
    fn distance(&self) -> f64 {
        self.distance
    }

    fn distance_silent(&self) -> f64 {
        self.distance
    }

    fn presence(&self) -> bool {
        self.presence
    }
}
