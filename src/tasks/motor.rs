//! Motor tasks
//!
//! A motor task leases its motor for the whole activation and releases it
//! in `end`, after commanding zero power. A task dropped while still holding
//! its lease (a sibling panicked mid-run) zeroes the motor on the way out.

use crate::devices::{check_power, Device, DeviceLease, Motor};
use crate::error::{Ev3Error, Result};
use crate::{log_error, log_warn};
use ev3kit_core::Task;

/// Holds a motor at a fixed power until interrupted.
///
/// Never completes on its own; bound it with a timeout, a race or `until`.
///
/// # Panics
///
/// `init` panics if another active task holds the motor. Two tasks driving
/// the same motor at once is a wiring error in the catalog.
pub struct SetPower<M: Motor + ?Sized> {
    device: Device<M>,
    power: f64,
    lease: Option<DeviceLease<M>>,
}

impl<M: Motor + ?Sized> SetPower<M> {
    pub fn power(&self) -> f64 {
        self.power
    }

    fn apply(&self, power: f64) {
        if let Some(lease) = &self.lease {
            if let Err(e) = lease.with(|motor| motor.set(power)) {
                log_error!("{}: set power {} failed: {}", lease.label(), power, e);
            }
        }
    }
}

impl<M: Motor + ?Sized> Drop for SetPower<M> {
    fn drop(&mut self) {
        if self.lease.is_some() {
            self.apply(0.0);
        }
    }
}

/// Build a [`SetPower`] task for `device`.
///
/// # Errors
///
/// Returns `Ev3Error::InvalidArgument` if `power` is outside [-100, 100].
pub fn set_power<M: Motor + ?Sized>(device: &Device<M>, power: f64) -> Result<SetPower<M>> {
    let power = check_power(power).map_err(|e| {
        Ev3Error::InvalidArgument(format!("{}: {} ({})", device.label(), power, e))
    })?;
    Ok(SetPower {
        device: device.clone(),
        power,
        lease: None,
    })
}

impl<M: Motor + ?Sized> Task for SetPower<M> {
    fn init(&mut self) {
        match self.device.try_lease() {
            Ok(lease) => self.lease = Some(lease),
            Err(e) => panic!("motor task cannot start: {e}"),
        }
        self.apply(self.power);
    }

    fn step(&mut self) {
        self.apply(self.power);
    }

    fn end(&mut self, _interrupted: bool) {
        self.apply(0.0);
        self.lease = None;
    }

    fn is_done(&mut self) -> bool {
        false
    }
}

/// Stop every motor, leased or not.
///
/// Used when the operator leaves the menu or after a run is cancelled.
pub fn stop_all(motors: &[Device<dyn Motor>]) {
    for device in motors {
        if let Err(e) = device.force(|motor| motor.stop()) {
            log_warn!("{}: stop failed: {}", device.label(), e);
        }
    }
}
