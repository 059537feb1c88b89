//! Recording task used by the unit tests of this crate.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use super::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Init(&'static str),
    Step(&'static str),
    End(&'static str, bool),
}

/// Shared, ordered log of lifecycle calls.
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(crate) fn inits(&self, name: &str) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Init(n) if *n == name))
            .count()
    }

    pub(crate) fn steps(&self, name: &str) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Step(n) if *n == name))
            .count()
    }

    pub(crate) fn ends(&self, name: &str) -> Vec<bool> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::End(n, interrupted) if *n == name => Some(*interrupted),
                _ => None,
            })
            .collect()
    }
}

/// Task that completes after a fixed number of steps, or never.
pub(crate) struct Probe {
    name: &'static str,
    journal: Journal,
    done_after: Option<u32>,
    steps: u32,
}

impl Probe {
    pub(crate) fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: journal.clone(),
            done_after: None,
            steps: 0,
        }
    }

    pub(crate) fn done_after(mut self, steps: u32) -> Self {
        self.done_after = Some(steps);
        self
    }
}

impl Task for Probe {
    fn init(&mut self) {
        self.steps = 0;
        self.journal.push(Event::Init(self.name));
    }

    fn step(&mut self) {
        self.steps += 1;
        self.journal.push(Event::Step(self.name));
    }

    fn end(&mut self, interrupted: bool) {
        self.journal.push(Event::End(self.name, interrupted));
    }

    fn is_done(&mut self) -> bool {
        self.done_after.is_some_and(|n| self.steps >= n)
    }
}
