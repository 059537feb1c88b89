//! Fixed-rate pacing for driver loops.
//!
//! A ticker blocks until the next boundary of a fixed grid
//! `origin + k * interval`. When a loop iteration runs past one or more
//! boundaries the ticker returns immediately and realigns to the next
//! boundary on the grid: missed ticks are absorbed, never queued.

use core::time::Duration;

use super::time::{micros, MockTime, TimeSource};

/// Fixed-rate pacing source used by the drivers.
pub trait Ticker {
    /// Tick period
    fn interval(&self) -> Duration;

    /// Block until the next tick boundary.
    fn next(&mut self);
}

/// Boundary bookkeeping shared by all ticker implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    interval_us: u64,
    next_us: u64,
}

impl TickSchedule {
    /// Start a schedule whose first boundary is one interval after `now_us`.
    pub fn new(now_us: u64, interval: Duration) -> Self {
        let interval_us = micros(interval).max(1);
        Self {
            interval_us,
            next_us: now_us.saturating_add(interval_us),
        }
    }

    /// Tick period in microseconds
    pub fn interval_us(&self) -> u64 {
        self.interval_us
    }

    /// Next boundary in microseconds
    pub fn next_boundary_us(&self) -> u64 {
        self.next_us
    }

    /// Returns how long to block from `now_us` and advances to the following boundary.
    ///
    /// Returns 0 when the boundary has already passed.
    pub fn delay_from(&mut self, now_us: u64) -> u64 {
        if now_us < self.next_us {
            let delay = self.next_us - now_us;
            self.next_us = self.next_us.saturating_add(self.interval_us);
            return delay;
        }

        let missed = (now_us - self.next_us) / self.interval_us + 1;
        self.next_us = self
            .next_us
            .saturating_add(missed.saturating_mul(self.interval_us));
        0
    }
}

/// Ticker that advances a [`MockTime`] instead of sleeping.
#[derive(Debug, Clone)]
pub struct MockTicker {
    time: MockTime,
    schedule: TickSchedule,
    ticks: u64,
}

impl MockTicker {
    /// Create a ticker whose first boundary is one `interval` from the current mock time.
    pub fn new(time: MockTime, interval: Duration) -> Self {
        let schedule = TickSchedule::new(time.now_us(), interval);
        Self {
            time,
            schedule,
            ticks: 0,
        }
    }

    /// Number of times `next` has been called
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Ticker for MockTicker {
    fn interval(&self) -> Duration {
        Duration::from_micros(self.schedule.interval_us())
    }

    fn next(&mut self) {
        let delay = self.schedule.delay_from(self.time.now_us());
        self.time.advance(delay);
        self.ticks += 1;
    }
}
