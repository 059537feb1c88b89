//! Task contract and composition
//!
//! A [`Task`] is a schedulable unit driven one tick at a time. Tasks are
//! composed into trees: combinators own several children, decorators own
//! exactly one. Ownership is strict: every child is owned by exactly one
//! parent, so each child has a single termination path.
//!
//! # Lifecycle
//!
//! One activation of a task is:
//!
//! 1. `init()` - called once before any `step`/`is_done`
//! 2. `is_done()` / `step()` - polled by the driver until done
//! 3. `end(interrupted)` - called exactly once
//!
//! After `end` a task may be activated again with a fresh `init`.
//!
//! # Components
//!
//! - [`primitives`]: Wait, RunOnce, EmitText, Conditional, Noop
//! - [`combinators`]: Sequence, ParallelAll, ParallelRace
//! - [`decorators`]: Until, Repeat, OnCompletion, timeout, only_if

use alloc::boxed::Box;
use core::time::Duration;

use crate::traits::TimeSource;

pub mod combinators;
pub mod decorators;
pub mod primitives;

#[cfg(test)]
pub(crate) mod probe;

pub use combinators::{ParallelAll, ParallelRace, Sequence};
pub use decorators::{only_if, timeout, OnCompletion, Repeat, Until};
pub use primitives::{Conditional, EmitText, Noop, RunOnce, TextSink, Wait};

/// Capability contract every schedulable unit implements.
pub trait Task {
    /// Prepare internal state for a new activation. Must not block.
    fn init(&mut self);

    /// Advance by one tick. Must return promptly.
    fn step(&mut self) {}

    /// Release the activation. `interrupted` is true when the task did not
    /// reach its own completion condition.
    fn end(&mut self, _interrupted: bool) {}

    /// Whether the task has reached its completion condition.
    ///
    /// Only decorators that detect an interruption at query time (`Until`)
    /// and `Repeat` mutate state here.
    fn is_done(&mut self) -> bool;
}

/// Heap-owned, exclusively-owned task handle held by composites.
pub type BoxTask = Box<dyn Task>;

impl<T: Task + ?Sized> Task for Box<T> {
    fn init(&mut self) {
        (**self).init();
    }

    fn step(&mut self) {
        (**self).step();
    }

    fn end(&mut self, interrupted: bool) {
        (**self).end(interrupted);
    }

    fn is_done(&mut self) -> bool {
        (**self).is_done()
    }
}

/// Fluent composition helpers.
///
/// Every method consumes `self` and returns a new owned task, so a task can
/// only ever end up inside one composite.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use ev3kit_core::{run_to_completion, MockTime, Noop, RunOnce, TaskExt};
///
/// let time = MockTime::new();
/// let mut task = Noop
///     .then(RunOnce::new(|| {}))
///     .timeout_on(Duration::from_secs(1), time);
/// run_to_completion(&mut task);
/// ```
pub trait TaskExt: Task + Sized + 'static {
    /// Box this task.
    fn boxed(self) -> BoxTask {
        Box::new(self)
    }

    /// Run `next` after this task completes.
    fn then<T: Task + 'static>(self, next: T) -> Sequence {
        Sequence::new().with(self).with(next)
    }

    /// Run `other` at the same time, finishing when both have finished.
    fn alongside<T: Task + 'static>(self, other: T) -> ParallelAll {
        ParallelAll::new().with(self).with(other)
    }

    /// Run `other` at the same time, finishing when either finishes.
    ///
    /// On a same-tick finish this task wins, as it is polled first.
    fn race_with<T: Task + 'static>(self, other: T) -> ParallelRace {
        ParallelRace::new().with(self).with(other)
    }

    /// Interrupt this task if it has not finished after `duration` on `time`.
    fn timeout_on<C: TimeSource + 'static>(self, duration: Duration, time: C) -> ParallelRace {
        timeout(self, duration, time)
    }

    /// Interrupt this task as soon as `predicate` returns true.
    fn until<P: FnMut() -> bool + 'static>(self, predicate: P) -> Until<Self, P> {
        Until::new(self, predicate)
    }

    /// Run this task only if `predicate` returns true when it is initialized.
    fn only_if<P: FnMut() -> bool + 'static>(self, predicate: P) -> Conditional<Self, Noop, P> {
        only_if(predicate, self)
    }

    /// Restart this task every time it completes. Never completes on its own.
    fn repeatedly(self) -> Repeat<Self> {
        Repeat::new(self)
    }

    /// Invoke `callback(interrupted)` after this task has been ended.
    fn when_done<F: FnMut(bool) + 'static>(self, callback: F) -> OnCompletion<Self, F> {
        OnCompletion::new(self, callback)
    }
}

impl<T: Task + Sized + 'static> TaskExt for T {}
