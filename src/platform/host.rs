//! Host time source and ticker backed by `std::time::Instant`.

use std::thread;
use std::time::{Duration, Instant};

use ev3kit_core::traits::{micros, Clock, TickSchedule, Ticker, TimeSource};

/// Monotonic wall-clock time source.
///
/// Times are measured from the instant the source was created; clones share
/// that origin.
#[derive(Debug, Clone, Copy)]
pub struct StdTime {
    origin: Instant,
}

impl StdTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for StdTime {
    fn now_us(&self) -> u64 {
        micros(self.origin.elapsed())
    }
}

impl Clock for StdTime {
    type Ticker = StdTicker;

    fn ticker(&self, interval: Duration) -> StdTicker {
        StdTicker::new(*self, interval)
    }
}

/// Fixed-rate ticker that sleeps the calling thread until the next boundary.
///
/// A late call returns immediately and the missed boundaries are dropped.
#[derive(Debug, Clone)]
pub struct StdTicker {
    time: StdTime,
    schedule: TickSchedule,
}

impl StdTicker {
    pub fn new(time: StdTime, interval: Duration) -> Self {
        let schedule = TickSchedule::new(time.now_us(), interval);
        Self { time, schedule }
    }

    /// Ticker on a fresh time source.
    pub fn every(interval: Duration) -> Self {
        Self::new(StdTime::new(), interval)
    }
}

impl Ticker for StdTicker {
    fn interval(&self) -> Duration {
        Duration::from_micros(self.schedule.interval_us())
    }

    fn next(&mut self) {
        let delay_us = self.schedule.delay_from(self.time.now_us());
        if delay_us > 0 {
            thread::sleep(Duration::from_micros(delay_us));
        }
    }
}
