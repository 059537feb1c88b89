//! Execution drivers
//!
//! Drivers own the only blocking point of the system: the pause until the
//! next tick boundary. Tasks themselves never block.
//!
//! - [`run_to_completion`]: tight loop, no pacing
//! - [`run_at_fixed_interval`]: paced loop with overrun detection
//! - [`run_cancellable`]: paced loop that also polls an external cancel signal
//!
//! Errors inside task code (panics in predicates or callbacks) are not
//! caught here; they unwind to the driver's caller.

use core::time::Duration;

use crate::stats::LoopStats;
use crate::task::Task;
use crate::traits::{micros, Ticker, TimeSource};

/// How a paced run finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The task reported done and was ended with `interrupted = false`
    Completed,
    /// The cancel signal fired and the task was ended with `interrupted = true`
    Cancelled,
}

/// Summary of a paced run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub stats: LoopStats,
    /// Wall time from `init` to `end` in microseconds
    pub elapsed_us: u64,
}

impl RunReport {
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_us)
    }
}

/// Run a task in a tight loop until it reports done.
pub fn run_to_completion<T: Task + ?Sized>(task: &mut T) {
    task.init();
    while !task.is_done() {
        task.step();
    }
    task.end(false);
}

/// Run a task once per tick of `ticker` until it reports done.
///
/// A step that takes longer than the tick interval is logged and counted;
/// the ticker absorbs the overrun rather than running extra steps to catch up.
pub fn run_at_fixed_interval<T, C, K>(task: &mut T, time: &C, ticker: &mut K) -> RunReport
where
    T: Task + ?Sized,
    C: TimeSource,
    K: Ticker,
{
    run_cancellable(task, time, ticker, || false, Duration::ZERO)
}

/// Run a task at a fixed interval, stopping early when `cancel` fires.
///
/// `cancel` is polled once per iteration, before the step. A cancel is only
/// honoured once more than `debounce` has elapsed since the run started, so
/// the input that launched the task cannot also stop it.
pub fn run_cancellable<T, C, K, F>(
    task: &mut T,
    time: &C,
    ticker: &mut K,
    mut cancel: F,
    debounce: Duration,
) -> RunReport
where
    T: Task + ?Sized,
    C: TimeSource,
    K: Ticker,
    F: FnMut() -> bool,
{
    let interval_us = micros(ticker.interval());
    let debounce_us = micros(debounce);
    let started_us = time.now_us();
    let mut stats = LoopStats::default();

    task.init();
    while !task.is_done() {
        if cancel() && time.elapsed_since(started_us) > debounce_us {
            task.end(true);
            return RunReport {
                outcome: RunOutcome::Cancelled,
                stats,
                elapsed_us: time.elapsed_since(started_us),
            };
        }

        let step_started_us = time.now_us();
        task.step();
        let step_us = time.elapsed_since(step_started_us);

        if stats.record(step_us, interval_us) {
            tracing::warn!(step_us, interval_us, "loop time overrun");
        }

        ticker.next();
    }
    task.end(false);

    RunReport {
        outcome: RunOutcome::Completed,
        stats,
        elapsed_us: time.elapsed_since(started_us),
    }
}
