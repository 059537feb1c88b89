use std::cell::RefCell;
use std::rc::Rc;

use ev3kit::tasks::Task;

/// Shared lifecycle log of every [`Recorder`] built from it.
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

#[allow(dead_code)]
impl Log {
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// `end` flags recorded for `name`, in order
    pub fn ends(&self, name: &str) -> Vec<bool> {
        let prefix = format!("{name} end ");
        self.0
            .borrow()
            .iter()
            .filter_map(|e| e.strip_prefix(&prefix).map(|flag| flag == "true"))
            .collect()
    }

    pub fn record(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }
}

/// Task that finishes after `steps` steps, or never.
pub struct Recorder {
    name: &'static str,
    log: Log,
    steps: Option<u32>,
    taken: u32,
}

#[allow(dead_code)]
impl Recorder {
    pub fn finite(name: &'static str, steps: u32, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            steps: Some(steps),
            taken: 0,
        }
    }

    pub fn endless(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            steps: None,
            taken: 0,
        }
    }
}

impl Task for Recorder {
    fn init(&mut self) {
        self.taken = 0;
        self.log.record(format!("{} init", self.name));
    }

    fn step(&mut self) {
        self.taken += 1;
    }

    fn end(&mut self, interrupted: bool) {
        self.log.record(format!("{} end {}", self.name, interrupted));
    }

    fn is_done(&mut self) -> bool {
        self.steps.is_some_and(|n| self.taken >= n)
    }
}
