//! Shared device handles with runtime-checked exclusive leases
//!
//! Several tasks in a catalog may be wired to the same motor, but only one
//! of them may drive it at a time. A task takes a [`DeviceLease`] for the
//! duration of its activation; a second task trying to lease the same device
//! while the first is active gets `Ev3Error::DeviceBusy` instead of silently
//! fighting over the hardware.
//!
//! Reads that cannot disturb another task (sensor values, motor position) go
//! through [`Device::read`] and never need a lease.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Ev3Error, Result};

/// Shared, cloneable handle to one physical device.
pub struct Device<D: ?Sized> {
    pub(crate) label: Arc<str>,
    pub(crate) leased: Arc<AtomicBool>,
    pub(crate) inner: Arc<Mutex<D>>,
}

impl<D> Device<D> {
    /// Wrap a device under a human-readable label (used in errors and logs).
    pub fn new(label: impl Into<Arc<str>>, device: D) -> Self {
        Self {
            label: label.into(),
            leased: Arc::new(AtomicBool::new(false)),
            inner: Arc::new(Mutex::new(device)),
        }
    }
}

impl<D: ?Sized> Device<D> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether an active task currently holds the lease
    pub fn is_leased(&self) -> bool {
        self.leased.load(Ordering::Acquire)
    }

    /// Take exclusive control of the device.
    ///
    /// # Errors
    ///
    /// Returns `Ev3Error::DeviceBusy` if another lease is alive.
    pub fn try_lease(&self) -> Result<DeviceLease<D>> {
        self.leased
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Ev3Error::DeviceBusy(self.label.to_string()))?;

        Ok(DeviceLease {
            label: self.label.clone(),
            leased: self.leased.clone(),
            inner: self.inner.clone(),
        })
    }

    /// Mutable access bypassing the lease.
    ///
    /// Only for bringing hardware to a safe state (emergency stop).
    pub(crate) fn force<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut guard = lock(&self.inner);
        f(&mut *guard)
    }

    /// Shared read access, allowed while leased.
    pub fn read<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        let guard = lock(&self.inner);
        f(&*guard)
    }
}

impl<D: ?Sized> Clone for Device<D> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            leased: self.leased.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<D: ?Sized> core::fmt::Debug for Device<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Device")
            .field("label", &self.label)
            .field("leased", &self.is_leased())
            .finish()
    }
}

/// Exclusive control of a device, released on drop.
///
/// Dropping only releases the lease; it does not touch the device. Tasks that
/// drive hardware bring it to a safe state themselves (see `SetPower`).
/// Code that catches a task panic and keeps running should also call
/// `stop_all` before reusing the motors.
pub struct DeviceLease<D: ?Sized> {
    label: Arc<str>,
    leased: Arc<AtomicBool>,
    inner: Arc<Mutex<D>>,
}

impl<D: ?Sized> DeviceLease<D> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Mutable access to the leased device.
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut guard = lock(&self.inner);
        f(&mut *guard)
    }
}

impl<D: ?Sized> Drop for DeviceLease<D> {
    fn drop(&mut self) {
        self.leased.store(false, Ordering::Release);
    }
}

// A panic inside a task while it held the device must not wedge the
// device for the safe-stop path that follows.
fn lock<D: ?Sized>(inner: &Mutex<D>) -> MutexGuard<'_, D> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
