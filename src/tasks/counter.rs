//! Counting task used by the demo configurations

use ev3kit_core::Task;

/// Counts one per step until `target`, logging progress.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    current: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self { target, current: 0 }
    }

    pub fn current(&self) -> u32 {
        self.current
    }
}

impl Task for Counter {
    fn init(&mut self) {
        self.current = 0;
    }

    fn step(&mut self) {
        self.current += 1;
        crate::log_debug!("count {}", self.current);
    }

    fn end(&mut self, interrupted: bool) {
        if interrupted {
            crate::log_info!("Interrupted at {} / {}", self.current, self.target);
        } else {
            crate::log_info!("Counted to {}", self.target);
        }
    }

    fn is_done(&mut self) -> bool {
        self.current >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev3kit_core::{run_to_completion, TaskExt};

    #[test]
    fn test_counter_reaches_target() {
        let mut counter = Counter::new(10);
        run_to_completion(&mut counter);
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn test_counter_restarts_under_repeat() {
        let mut task = Counter::new(3).repeatedly();
        task.init();
        for _ in 0..7 {
            task.step();
            task.is_done();
        }
        task.end(true);
        assert_eq!(task.cycles(), 2);
    }
}
