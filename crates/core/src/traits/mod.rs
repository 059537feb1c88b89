//! Core traits for platform-agnostic timing.
//!
//! This module provides trait abstractions that decouple the scheduler
//! from the platform clock.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Wall-clock implementations live in the ev3kit crate

pub mod ticker;
pub mod time;

pub use ticker::{MockTicker, TickSchedule, Ticker};
pub use time::{micros, Clock, MockTime, TimeSource};
