//! Drivers on the host wall clock
//!
//! Thin wrappers over the `ev3kit_core` drivers that supply [`StdTime`] and
//! a sleeping [`StdTicker`].

use std::time::Duration;

use ev3kit_core::{Clock, RunReport, Task};

use crate::platform::StdTime;

/// Run `task` in a tight loop until it reports done.
pub fn run_to_completion<T: Task + ?Sized>(task: &mut T) {
    ev3kit_core::run_to_completion(task);
}

/// Run `task` once every `interval` of wall-clock time until it reports done.
///
/// Blocks the calling thread. Steps that overrun the interval are logged
/// as warnings and counted in the returned report.
pub fn run_at_fixed_interval<T: Task + ?Sized>(task: &mut T, interval: Duration) -> RunReport {
    let time = StdTime::new();
    let mut ticker = time.ticker(interval);
    ev3kit_core::run_at_fixed_interval(task, &time, &mut ticker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{wait, TaskExt};
    use ev3kit_core::{Noop, RunOnce, RunOutcome};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Instant;

    #[test]
    #[serial_test::serial]
    fn test_fixed_interval_wait_then_run_once() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let mut task = wait(Duration::from_millis(10)).then(RunOnce::new(move || flag.set(true)));

        let started = Instant::now();
        let report = run_at_fixed_interval(&mut task, Duration::from_millis(1));

        assert!(started.elapsed() >= Duration::from_millis(10));
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert!(ran.get());
    }

    #[test]
    #[serial_test::serial]
    fn test_fixed_interval_paces_steps() {
        let mut counter = crate::tasks::Counter::new(5);

        let started = Instant::now();
        let report = run_at_fixed_interval(&mut counter, Duration::from_millis(10));

        assert_eq!(report.stats.ticks, 5);
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_run_to_completion_on_host() {
        let mut task = RunOnce::new(|| {}).then(Noop);
        run_to_completion(&mut task);
        assert!(task.is_done());
    }
}
