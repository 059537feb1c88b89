//! Time abstraction traits for platform-agnostic timing operations.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! time providers (host wall clock, mock, etc.) so that `Wait` tasks and the
//! drivers can be tested deterministically on host.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

use super::ticker::{MockTicker, Ticker};

/// Platform-agnostic time source for tasks and drivers.
///
/// This trait abstracts over different time providers:
/// - `StdTime` (in the ev3kit crate) backed by `std::time::Instant`
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use ev3kit_core::traits::{MockTime, TimeSource};
///
/// fn expired<T: TimeSource>(time: &T, started_us: u64, limit_us: u64) -> bool {
///     time.elapsed_since(started_us) > limit_us
/// }
///
/// let time = MockTime::new();
/// time.advance(1500);
/// assert!(expired(&time, 0, 1000));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since the source's origin.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }

    /// Returns current time in microseconds since the source's origin.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle a reference in the future.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
///
/// `u64::MAX` reads as "never" everywhere it is compared against elapsed time.
pub fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// A time source that can also pace a loop.
///
/// The menu builds a fresh ticker every time it starts running a task, so it
/// needs to create tickers on demand rather than own a single one.
pub trait Clock: TimeSource {
    /// Ticker type produced by this clock
    type Ticker: Ticker;

    /// Create a fixed-rate ticker whose first boundary is one `interval` from now.
    fn ticker(&self, interval: Duration) -> Self::Ticker;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// Clones share the same counter, so a `Wait` task holding a clone observes
/// every `advance` made by the test or by a [`MockTicker`].
///
/// # Example
///
/// ```
/// use ev3kit_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let task_view = time.clone();
///
/// time.advance(1000); // Advance 1ms
/// assert_eq!(task_view.now_us(), 1000);
/// assert_eq!(task_view.now_ms(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Arc<AtomicU64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Arc::new(AtomicU64::new(us)),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.store(us, Ordering::Relaxed);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, us: u64) {
        let _ = self
            .current_us
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(us))
            });
    }

    /// Advances the current time by a `Duration`.
    pub fn advance_by(&self, duration: Duration) {
        self.advance(micros(duration));
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.current_us.load(Ordering::Relaxed)
    }
}

impl Clock for MockTime {
    type Ticker = MockTicker;

    fn ticker(&self, interval: Duration) -> MockTicker {
        MockTicker::new(self.clone(), interval)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
