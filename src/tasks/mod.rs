//! Tasks on the host platform
//!
//! Re-exports the core task types together with helpers bound to the
//! wall clock ([`wait`], [`TimeoutExt::with_timeout`]) and standard output.

use std::io::Write;
use std::time::Duration;

use crate::platform::StdTime;

pub mod counter;
pub mod motor;

pub use counter::Counter;
pub use ev3kit_core::task::{
    only_if, BoxTask, Conditional, EmitText, Noop, OnCompletion, ParallelAll, ParallelRace,
    Repeat, RunOnce, Sequence, Task, TaskExt, TextSink, Until, Wait,
};
pub use motor::{set_power, stop_all, SetPower};

/// Wait for `duration` of wall-clock time.
pub fn wait(duration: Duration) -> Wait<StdTime> {
    Wait::new(duration, StdTime::new())
}

/// Writes to standard output and flushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        // Nothing useful to do if the console is gone.
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

/// Writes each emitted text as an info log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TextSink for LogSink {
    fn emit(&mut self, text: &str) {
        crate::log_info!("{}", text.trim_end());
    }
}

/// Print `text` to standard output.
pub fn print(text: impl Into<String>) -> EmitText<StdoutSink> {
    EmitText::new(text, StdoutSink)
}

/// Print `text` and a newline to standard output.
pub fn println(text: impl Into<String>) -> EmitText<StdoutSink> {
    EmitText::line(text, StdoutSink)
}

/// Wall-clock timeout for any task.
pub trait TimeoutExt: TaskExt {
    /// Interrupt this task if it has not finished after `duration`.
    fn with_timeout(self, duration: Duration) -> ParallelRace {
        self.timeout_on(duration, StdTime::new())
    }
}

impl<T: TaskExt> TimeoutExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use ev3kit_core::run_to_completion;
    use std::time::Instant;

    #[test]
    fn test_print_helpers() {
        assert_eq!(print("a").text(), "a");
        assert_eq!(println("a").text(), "a\n");
    }

    #[test]
    fn test_log_sink_is_a_one_tick_task() {
        let mut task = EmitText::line("hello", LogSink);
        run_to_completion(&mut task);
        assert!(task.is_done());
    }

    #[test]
    #[serial_test::serial]
    fn test_with_timeout_uses_wall_clock() {
        let started = Instant::now();
        let mut task = wait(Duration::from_secs(5)).with_timeout(Duration::from_millis(30));

        run_to_completion(&mut task);

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(30));
        assert!(elapsed < Duration::from_secs(5));
        assert_eq!(task.winner(), Some(1));
    }
}
