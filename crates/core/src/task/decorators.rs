//! Decorators: tasks wrapping exactly one inner task
//!
//! `Timeout` and `Gate` carry no state of their own and are expressed as
//! compositions of the primitives and combinators ([`timeout`], [`only_if`]).

use core::time::Duration;

use super::combinators::ParallelRace;
use super::primitives::{Conditional, Noop, Wait};
use super::Task;
use crate::traits::TimeSource;

/// Race `task` against a [`Wait`] of `duration`.
///
/// If the timer wins, `task` is ended with `interrupted = true`.
pub fn timeout<T, C>(task: T, duration: Duration, time: C) -> ParallelRace
where
    T: Task + 'static,
    C: TimeSource + 'static,
{
    ParallelRace::new().with(task).with(Wait::new(duration, time))
}

/// Run `task` only if `predicate` holds when the gate is initialized.
pub fn only_if<T, P>(predicate: P, task: T) -> Conditional<T, Noop, P>
where
    T: Task,
    P: FnMut() -> bool,
{
    Conditional::new(predicate, task, Noop)
}

/// Stops the inner task as soon as a predicate becomes true.
///
/// The predicate is checked in `is_done`. Once it has fired, the inner task
/// is always ended with `interrupted = true`, whatever flag the caller passes.
pub struct Until<T, P> {
    task: T,
    predicate: P,
    interrupted: bool,
}

impl<T: Task, P: FnMut() -> bool> Until<T, P> {
    pub fn new(task: T, predicate: P) -> Self {
        Self {
            task,
            predicate,
            interrupted: false,
        }
    }

    /// Whether the predicate stopped the current activation
    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }
}

impl<T: Task, P: FnMut() -> bool> Task for Until<T, P> {
    fn init(&mut self) {
        self.interrupted = false;
        self.task.init();
    }

    fn step(&mut self) {
        self.task.step();
    }

    fn end(&mut self, interrupted: bool) {
        self.task.end(self.interrupted || interrupted);
    }

    fn is_done(&mut self) -> bool {
        // Sticky for the activation so repeated queries agree with `end`.
        if self.interrupted {
            return true;
        }
        if (self.predicate)() {
            self.interrupted = true;
            return true;
        }
        self.task.is_done()
    }
}

/// Re-initializes the inner task every time it completes.
///
/// Never reports done; stop it with an enclosing timeout, race, `Until` or
/// an external cancel.
pub struct Repeat<T> {
    task: T,
    cycles: u64,
}

impl<T: Task> Repeat<T> {
    pub fn new(task: T) -> Self {
        Self { task, cycles: 0 }
    }

    /// Completed inner activations since the last `init`
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl<T: Task> Task for Repeat<T> {
    fn init(&mut self) {
        self.cycles = 0;
        self.task.init();
    }

    fn step(&mut self) {
        self.task.step();
    }

    fn end(&mut self, interrupted: bool) {
        self.task.end(interrupted);
    }

    fn is_done(&mut self) -> bool {
        if self.task.is_done() {
            self.task.end(false);
            self.task.init();
            self.cycles += 1;
        }
        false
    }
}

/// Invokes a callback with the interrupted flag after the inner task ends.
pub struct OnCompletion<T, F> {
    task: T,
    callback: F,
}

impl<T: Task, F: FnMut(bool)> OnCompletion<T, F> {
    pub fn new(task: T, callback: F) -> Self {
        Self { task, callback }
    }
}

impl<T: Task, F: FnMut(bool)> Task for OnCompletion<T, F> {
    fn init(&mut self) {
        self.task.init();
    }

    fn step(&mut self) {
        self.task.step();
    }

    fn end(&mut self, interrupted: bool) {
        self.task.end(interrupted);
        (self.callback)(interrupted);
    }

    fn is_done(&mut self) -> bool {
        self.task.is_done()
    }
}
