//! Combinators: tasks that own and interleave several children
//!
//! Children are always polled in the order they were added. "Parallel"
//! means interleaved within one tick on one thread, never concurrent.
//!
//! Every combinator forwards an external interruption: `end(true)` on a
//! combinator that still has active children ends each of them with `true`.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::{BoxTask, Task};

/// Runs children one after another, one active at a time.
///
/// Children are initialized lazily, just before they become current. A child
/// that is already done right after its `init` is ended in the same tick, so
/// several children may complete within one `step`.
#[derive(Default)]
pub struct Sequence {
    tasks: Vec<BoxTask>,
    current: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn with<T: Task + 'static>(mut self, task: T) -> Self {
        self.push(task);
        self
    }

    pub fn push<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the active child (`len()` once finished)
    pub fn current(&self) -> usize {
        self.current
    }
}

impl FromIterator<BoxTask> for Sequence {
    fn from_iter<I: IntoIterator<Item = BoxTask>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
            current: 0,
        }
    }
}

impl Task for Sequence {
    fn init(&mut self) {
        self.current = 0;
        if let Some(first) = self.tasks.first_mut() {
            first.init();
        }
    }

    fn step(&mut self) {
        let Some(task) = self.tasks.get_mut(self.current) else {
            return;
        };
        task.step();

        while let Some(task) = self.tasks.get_mut(self.current) {
            if !task.is_done() {
                break;
            }
            task.end(false);
            self.current += 1;

            if let Some(next) = self.tasks.get_mut(self.current) {
                next.init();
            }
        }
    }

    fn end(&mut self, _interrupted: bool) {
        // Children that finished were ended as they completed; only the
        // active one is still running.
        if let Some(active) = self.tasks.get_mut(self.current) {
            active.end(true);
        }
    }

    fn is_done(&mut self) -> bool {
        self.current >= self.tasks.len()
    }
}

/// Runs every child at once and finishes when all of them have finished.
#[derive(Default)]
pub struct ParallelAll {
    tasks: Vec<BoxTask>,
    running: Vec<bool>,
    remaining: usize,
}

impl ParallelAll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child.
    pub fn with<T: Task + 'static>(mut self, task: T) -> Self {
        self.push(task);
        self
    }

    pub fn push<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
        self.running.push(false);
    }

    /// Number of children that have not finished in this activation
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl FromIterator<BoxTask> for ParallelAll {
    fn from_iter<I: IntoIterator<Item = BoxTask>>(iter: I) -> Self {
        let tasks: Vec<BoxTask> = iter.into_iter().collect();
        let running = alloc::vec![false; tasks.len()];
        Self {
            tasks,
            running,
            remaining: 0,
        }
    }
}

impl Task for ParallelAll {
    fn init(&mut self) {
        self.remaining = self.tasks.len();
        for (task, running) in self.tasks.iter_mut().zip(self.running.iter_mut()) {
            *running = true;
            task.init();
        }
    }

    fn step(&mut self) {
        for (task, running) in self.tasks.iter_mut().zip(self.running.iter_mut()) {
            if !*running {
                continue;
            }
            task.step();

            if task.is_done() {
                task.end(false);
                *running = false;
                self.remaining -= 1;
            }
        }
    }

    fn end(&mut self, _interrupted: bool) {
        for (task, running) in self.tasks.iter_mut().zip(self.running.iter_mut()) {
            if *running {
                task.end(true);
                *running = false;
            }
        }
        self.remaining = 0;
    }

    fn is_done(&mut self) -> bool {
        self.remaining == 0
    }
}

/// Runs every child at once and finishes as soon as one finishes.
///
/// The winner is the first child found done, in insertion order, during a
/// `step`. It is ended with `false`; every other child is ended with `true`.
/// An empty race is done immediately.
#[derive(Default)]
pub struct ParallelRace {
    tasks: Vec<BoxTask>,
    winner: Option<usize>,
}

impl ParallelRace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child.
    pub fn with<T: Task + 'static>(mut self, task: T) -> Self {
        self.push(task);
        self
    }

    pub fn push<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
    }

    /// Index of the child that finished first in this activation
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
}

impl FromIterator<BoxTask> for ParallelRace {
    fn from_iter<I: IntoIterator<Item = BoxTask>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
            winner: None,
        }
    }
}

impl Task for ParallelRace {
    fn init(&mut self) {
        self.winner = None;
        for task in &mut self.tasks {
            task.init();
        }
    }

    fn step(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.step();

            if self.winner.is_none() && task.is_done() {
                self.winner = Some(index);
            }
        }
    }

    fn end(&mut self, _interrupted: bool) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.end(self.winner != Some(index));
        }
    }

    fn is_done(&mut self) -> bool {
        self.winner.is_some() || self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::probe::{Event, Journal, Probe};
    use super::super::TaskExt;
    use super::*;
    use crate::driver::run_to_completion;
    use alloc::vec;

    #[test]
    fn test_sequence_runs_in_order() {
        let journal = Journal::default();
        let mut seq = Sequence::new()
            .with(Probe::new("a", &journal).done_after(2))
            .with(Probe::new("b", &journal).done_after(1))
            .with(Probe::new("c", &journal).done_after(1));

        run_to_completion(&mut seq);

        assert_eq!(
            journal.events(),
            vec![
                Event::Init("a"),
                Event::Step("a"),
                Event::Step("a"),
                Event::End("a", false),
                Event::Init("b"),
                Event::Step("b"),
                Event::End("b", false),
                Event::Init("c"),
                Event::Step("c"),
                Event::End("c", false),
            ]
        );
        assert_eq!(seq.current(), seq.len());
    }

    #[test]
    fn test_sequence_chains_instant_children_in_one_tick() {
        let journal = Journal::default();
        let mut seq = Sequence::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal).done_after(0))
            .with(Probe::new("c", &journal).done_after(0))
            .with(Probe::new("d", &journal));

        seq.init();
        seq.step();

        assert_eq!(seq.current(), 3);
        assert_eq!(journal.ends("b"), vec![false]);
        assert_eq!(journal.ends("c"), vec![false]);
        assert_eq!(journal.steps("b"), 0);
        assert_eq!(journal.inits("d"), 1);
    }

    #[test]
    fn test_sequence_children_initialized_lazily() {
        let journal = Journal::default();
        let mut seq = Sequence::new()
            .with(Probe::new("a", &journal).done_after(3))
            .with(Probe::new("b", &journal).done_after(1));

        seq.init();
        seq.step();

        assert_eq!(journal.inits("a"), 1);
        assert_eq!(journal.inits("b"), 0);
    }

    #[test]
    fn test_sequence_external_interrupt_ends_active_child() {
        let journal = Journal::default();
        let mut seq = Sequence::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal))
            .with(Probe::new("c", &journal).done_after(1));

        seq.init();
        seq.step();
        seq.step();
        seq.end(true);

        assert_eq!(journal.ends("a"), vec![false]);
        assert_eq!(journal.ends("b"), vec![true]);
        assert!(journal.ends("c").is_empty(), "never-started child is not ended");
    }

    #[test]
    fn test_sequence_empty_is_done() {
        let mut seq = Sequence::new();
        seq.init();
        assert!(seq.is_done());
        assert!(seq.is_empty());
        seq.end(false);
    }

    #[test]
    fn test_parallel_all_waits_for_every_child() {
        let journal = Journal::default();
        let mut all = Probe::new("a", &journal)
            .done_after(1)
            .alongside(Probe::new("b", &journal).done_after(3));
        all.push(Probe::new("c", &journal).done_after(2));

        all.init();
        all.step();
        assert_eq!(all.remaining(), 2);
        assert!(!all.is_done());

        all.step();
        all.step();
        assert!(all.is_done());
        all.end(false);

        for name in ["a", "b", "c"] {
            assert_eq!(journal.ends(name), vec![false], "{name}");
        }
        // a is not stepped after finishing
        assert_eq!(journal.steps("a"), 1);
        assert_eq!(journal.steps("b"), 3);
    }

    #[test]
    fn test_parallel_all_external_interrupt() {
        let journal = Journal::default();
        let mut all = ParallelAll::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal));

        all.init();
        all.step();
        all.end(true);

        assert_eq!(journal.ends("a"), vec![false]);
        assert_eq!(journal.ends("b"), vec![true]);
    }

    #[test]
    fn test_parallel_all_reactivates_all_children() {
        let journal = Journal::default();
        let mut all = ParallelAll::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal).done_after(2));

        run_to_completion(&mut all);
        run_to_completion(&mut all);

        assert_eq!(journal.inits("a"), 2);
        assert_eq!(journal.ends("b"), vec![false, false]);
    }

    #[test]
    fn test_race_winner_and_losers() {
        let journal = Journal::default();
        let mut race = ParallelRace::new()
            .with(Probe::new("slow", &journal).done_after(5))
            .with(Probe::new("fast", &journal).done_after(2));

        run_to_completion(&mut race);

        assert_eq!(race.winner(), Some(1));
        assert_eq!(journal.ends("fast"), vec![false]);
        assert_eq!(journal.ends("slow"), vec![true]);
    }

    #[test]
    fn test_race_no_hard_coded_favorite() {
        let journal = Journal::default();
        let mut race = ParallelRace::new()
            .with(Probe::new("slow", &journal).done_after(2))
            .with(Probe::new("fast", &journal).done_after(5));

        run_to_completion(&mut race);

        assert_eq!(race.winner(), Some(0));
        assert_eq!(journal.ends("slow"), vec![false]);
        assert_eq!(journal.ends("fast"), vec![true]);
    }

    #[test]
    fn test_race_tie_goes_to_first_in_order() {
        let journal = Journal::default();
        let mut race = ParallelRace::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal).done_after(1))
            .with(Probe::new("c", &journal).done_after(1));

        run_to_completion(&mut race);

        assert_eq!(race.winner(), Some(0));
        assert_eq!(journal.ends("a"), vec![false]);
        assert_eq!(journal.ends("b"), vec![true]);
        assert_eq!(journal.ends("c"), vec![true]);
        // Later children are still stepped on the winning tick
        assert_eq!(journal.steps("c"), 1);
    }

    #[test]
    fn test_race_external_interrupt_ends_all() {
        let journal = Journal::default();
        let mut race = ParallelRace::new()
            .with(Probe::new("a", &journal))
            .with(Probe::new("b", &journal));

        race.init();
        race.step();
        race.end(true);

        assert_eq!(journal.ends("a"), vec![true]);
        assert_eq!(journal.ends("b"), vec![true]);
    }

    #[test]
    fn test_race_winner_cleared_on_init() {
        let journal = Journal::default();
        let mut race = ParallelRace::new()
            .with(Probe::new("a", &journal).done_after(1))
            .with(Probe::new("b", &journal));

        run_to_completion(&mut race);
        race.init();
        assert_eq!(race.winner(), None);
        assert!(!race.is_done());
    }

    #[test]
    fn test_race_empty_is_done() {
        let mut race = ParallelRace::new();
        race.init();
        assert!(race.is_done());
    }

    #[test]
    fn test_from_iterator() {
        let journal = Journal::default();
        let mut seq: Sequence = ["a", "b"]
            .into_iter()
            .map(|name| Probe::new(name, &journal).done_after(1).boxed())
            .collect();

        run_to_completion(&mut seq);
        assert_eq!(journal.ends("b"), vec![false]);
    }
}
