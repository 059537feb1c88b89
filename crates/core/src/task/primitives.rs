//! Primitive tasks
//!
//! Leaves of a task tree. Anything that touches hardware is built from these
//! (or implements [`Task`] directly) in the platform crate.

use alloc::string::String;
use core::time::Duration;

use super::Task;
use crate::traits::{micros, TimeSource};

/// Waits for a duration measured on a [`TimeSource`].
///
/// The comparison is strict: a wait of `duration` is not done at exactly
/// `duration` elapsed, only after it.
#[derive(Debug, Clone)]
pub struct Wait<C: TimeSource> {
    duration_us: u64,
    started_us: u64,
    time: C,
}

impl<C: TimeSource> Wait<C> {
    pub fn new(duration: Duration, time: C) -> Self {
        Self {
            duration_us: micros(duration),
            started_us: 0,
            time,
        }
    }

    /// Configured wait duration
    pub fn duration(&self) -> Duration {
        Duration::from_micros(self.duration_us)
    }
}

impl<C: TimeSource> Task for Wait<C> {
    fn init(&mut self) {
        self.started_us = self.time.now_us();
    }

    fn is_done(&mut self) -> bool {
        self.time.elapsed_since(self.started_us) > self.duration_us
    }
}

/// Invokes a function once per activation, at `init`. Done immediately.
pub struct RunOnce<F: FnMut()> {
    f: F,
}

impl<F: FnMut()> RunOnce<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut()> Task for RunOnce<F> {
    fn init(&mut self) {
        (self.f)();
    }

    fn is_done(&mut self) -> bool {
        true
    }
}

/// Output channel for [`EmitText`].
pub trait TextSink {
    fn emit(&mut self, text: &str);
}

impl<F: FnMut(&str)> TextSink for F {
    fn emit(&mut self, text: &str) {
        self(text)
    }
}

/// Writes a fixed string to a sink once per activation. Done immediately.
pub struct EmitText<S: TextSink> {
    text: String,
    sink: S,
}

impl<S: TextSink> EmitText<S> {
    pub fn new(text: impl Into<String>, sink: S) -> Self {
        Self {
            text: text.into(),
            sink,
        }
    }

    /// Like [`EmitText::new`] with a trailing newline.
    pub fn line(text: impl Into<String>, sink: S) -> Self {
        let mut text = text.into();
        text.push('\n');
        Self::new(text, sink)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<S: TextSink> Task for EmitText<S> {
    fn init(&mut self) {
        self.sink.emit(&self.text);
    }

    fn is_done(&mut self) -> bool {
        true
    }
}

/// Task that does nothing and is done immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl Task for Noop {
    fn init(&mut self) {}

    fn is_done(&mut self) -> bool {
        true
    }
}

/// Runs `a` or `b` depending on a predicate sampled once at `init`.
///
/// The chosen branch is fixed for the whole activation; every other call
/// delegates to it.
pub struct Conditional<A, B, P> {
    predicate: P,
    a: A,
    b: B,
    run_a: bool,
}

impl<A, B, P> Conditional<A, B, P>
where
    A: Task,
    B: Task,
    P: FnMut() -> bool,
{
    pub fn new(predicate: P, a: A, b: B) -> Self {
        Self {
            predicate,
            a,
            b,
            run_a: true,
        }
    }

    fn branch(&mut self) -> &mut dyn Task {
        if self.run_a {
            &mut self.a
        } else {
            &mut self.b
        }
    }
}

impl<A, B, P> Task for Conditional<A, B, P>
where
    A: Task,
    B: Task,
    P: FnMut() -> bool,
{
    fn init(&mut self) {
        self.run_a = (self.predicate)();
        self.branch().init();
    }

    fn step(&mut self) {
        self.branch().step();
    }

    fn end(&mut self, interrupted: bool) {
        self.branch().end(interrupted);
    }

    fn is_done(&mut self) -> bool {
        self.branch().is_done()
    }
}
