//! ev3kit_core - Pure no_std task composition for the ev3kit robot controller
//!
//! This crate contains the cooperative scheduler: the task contract, its
//! primitives, combinators and decorators, and the two execution drivers.
//! It can be tested on host without any feature flags or platform code.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: Only `core` and `alloc`
//! - **Trait abstractions**: Time and pacing are injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic time and pacing (TimeSource, Ticker, Clock)
//! - [`task`]: Task contract, primitives, combinators, decorators
//! - [`driver`]: Run-to-completion and fixed-interval drivers
//! - [`stats`]: Loop timing statistics collected by the drivers

#![no_std]

extern crate alloc;

pub mod driver;
pub mod stats;
pub mod task;
pub mod traits;

pub use driver::{run_at_fixed_interval, run_cancellable, run_to_completion, RunOutcome, RunReport};
pub use stats::LoopStats;
pub use task::{
    only_if, timeout, BoxTask, Conditional, EmitText, Noop, OnCompletion, ParallelAll,
    ParallelRace, Repeat, RunOnce, Sequence, Task, TaskExt, TextSink, Until, Wait,
};
pub use traits::{Clock, MockTicker, MockTime, TickSchedule, Ticker, TimeSource};
