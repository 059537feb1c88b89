//! Operator menu loop

use ev3kit_core::{run_cancellable, Clock, RunOutcome, RunReport, Ticker};

use super::catalog::Catalog;
use super::cursor::MenuCursor;
use super::input::MenuInput;
use crate::config::MenuTiming;
use crate::{log_info, log_warn};

/// Result of one menu tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Still browsing; nothing was run this tick
    Browsing,
    /// An entry was run to completion or cancelled, and browsing resumed
    Ran {
        page: usize,
        entry: usize,
        report: RunReport,
    },
    /// Exit was requested; further ticks do nothing
    Exited,
}

/// Browses a [`Catalog`] and runs the selected entry on request.
///
/// Running an entry blocks the tick until it completes or the input
/// cancels it. Only one entry runs at a time.
pub struct MainMenu<I, C> {
    input: I,
    catalog: Catalog,
    clock: C,
    timing: MenuTiming,
    cursor: MenuCursor,
    exited: bool,
}

impl<I: MenuInput, C: Clock> MainMenu<I, C> {
    pub fn new(input: I, catalog: Catalog, clock: C) -> Self {
        Self {
            input,
            catalog,
            clock,
            timing: MenuTiming::default(),
            cursor: MenuCursor::new(),
            exited: false,
        }
    }

    pub fn with_timing(mut self, timing: MenuTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Selected (page, entry)
    pub fn selection(&self) -> (usize, usize) {
        (self.cursor.page(), self.cursor.entry())
    }

    /// One browsing iteration: exit check, navigation, optional run, redraw.
    pub fn tick(&mut self) -> MenuState {
        let Self {
            input,
            catalog,
            clock,
            timing,
            cursor,
            exited,
        } = self;

        if *exited {
            return MenuState::Exited;
        }
        if input.exit() {
            log_info!("menu exit");
            *exited = true;
            return MenuState::Exited;
        }

        if input.next_entry() {
            cursor.next_entry();
        }
        if input.previous_entry() {
            cursor.previous_entry();
        }
        if let Some(entry) = input.set_entry() {
            cursor.set_entry(entry);
        }
        if input.next_page() {
            cursor.next_page();
        }
        if input.previous_page() {
            cursor.previous_page();
        }
        if let Some(page) = input.set_page() {
            cursor.set_page(page);
        }
        cursor.clamp(catalog);

        let (page, entry) = (cursor.page(), cursor.entry());
        let mut state = MenuState::Browsing;

        if input.run_selected() {
            input.display(catalog, entry, page, true);

            if let Some(selected) = catalog.entry_mut(page, entry) {
                let name = selected.name().to_string();
                log_info!("running {}", name);

                let mut ticker = clock.ticker(timing.run_interval);
                let report = run_cancellable(
                    selected.task_mut(),
                    &*clock,
                    &mut ticker,
                    || input.cancel_running(),
                    timing.cancel_debounce,
                );

                if report.outcome == RunOutcome::Cancelled {
                    log_warn!("{} cancelled", name);
                }
                log_info!("{} took {:?}", name, report.elapsed());
                if report.stats.overruns > 0 {
                    log_warn!(
                        "{}: {} overruns, max step {} us",
                        name,
                        report.stats.overruns,
                        report.stats.max_step_us
                    );
                }

                state = MenuState::Ran {
                    page,
                    entry,
                    report,
                };
            }
        }

        input.display(catalog, entry, page, false);
        state
    }

    /// Run the menu until exit, one tick per browse period.
    pub fn start(&mut self) {
        let mut ticker = self.clock.ticker(self.timing.browse_tick);
        while self.tick() != MenuState::Exited {
            ticker.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuPage;
    use ev3kit_core::{MockTime, Noop, Task, TimeSource};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// One scripted tick of operator input
    #[derive(Debug, Default, Clone)]
    struct Frame {
        exit: bool,
        run: bool,
        next_entry: bool,
        previous_entry: bool,
        set_entry: Option<usize>,
        next_page: bool,
        previous_page: bool,
        set_page: Option<usize>,
    }

    #[derive(Default)]
    struct Scripted {
        frames: VecDeque<Frame>,
        current: Frame,
        cancel_after: Option<u32>,
        cancel_polls: u32,
        displays: Vec<(usize, usize, bool)>,
    }

    impl Scripted {
        fn new(frames: Vec<Frame>) -> Self {
            Self {
                frames: frames.into(),
                ..Default::default()
            }
        }
    }

    impl MenuInput for Scripted {
        fn exit(&mut self) -> bool {
            self.current = self.frames.pop_front().unwrap_or(Frame {
                exit: true,
                ..Default::default()
            });
            self.current.exit
        }

        fn run_selected(&mut self) -> bool {
            self.current.run
        }

        fn next_entry(&mut self) -> bool {
            self.current.next_entry
        }

        fn previous_entry(&mut self) -> bool {
            self.current.previous_entry
        }

        fn set_entry(&mut self) -> Option<usize> {
            self.current.set_entry
        }

        fn next_page(&mut self) -> bool {
            self.current.next_page
        }

        fn previous_page(&mut self) -> bool {
            self.current.previous_page
        }

        fn set_page(&mut self) -> Option<usize> {
            self.current.set_page
        }

        fn cancel_running(&mut self) -> bool {
            self.cancel_polls += 1;
            self.cancel_after.is_some_and(|n| self.cancel_polls > n)
        }

        fn display(&mut self, _catalog: &Catalog, entry: usize, page: usize, running: bool) {
            self.displays.push((page, entry, running));
        }
    }

    /// Records its lifecycle; done after `steps` steps, or never.
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        steps: Option<u32>,
        taken: u32,
    }

    impl Task for Recorder {
        fn init(&mut self) {
            self.taken = 0;
            self.log.borrow_mut().push("init".into());
        }

        fn step(&mut self) {
            self.taken += 1;
        }

        fn end(&mut self, interrupted: bool) {
            self.log.borrow_mut().push(format!("end {interrupted}"));
        }

        fn is_done(&mut self) -> bool {
            self.steps.is_some_and(|n| self.taken >= n)
        }
    }

    fn catalog(log: &Rc<RefCell<Vec<String>>>) -> Catalog {
        Catalog::new(vec![
            MenuPage::new("one")
                .with_task("a", Noop)
                .with_task("b", Noop)
                .with_task(
                    "finite",
                    Recorder {
                        log: log.clone(),
                        steps: Some(3),
                        taken: 0,
                    },
                ),
            MenuPage::new("two").with_task(
                "forever",
                Recorder {
                    log: log.clone(),
                    steps: None,
                    taken: 0,
                },
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_navigation_resets_entry_on_page_change() {
        let log = Rc::default();
        let frames = vec![
            Frame {
                set_entry: Some(2),
                ..Default::default()
            },
            Frame {
                next_page: true,
                ..Default::default()
            },
            Frame {
                previous_page: true,
                ..Default::default()
            },
            Frame {
                previous_page: true,
                ..Default::default()
            },
        ];
        let mut menu = MainMenu::new(Scripted::new(frames), catalog(&log), MockTime::new());

        menu.tick();
        assert_eq!(menu.selection(), (0, 2));
        menu.tick();
        assert_eq!(menu.selection(), (1, 0));
        menu.tick();
        assert_eq!(menu.selection(), (0, 0));
        menu.tick();
        assert_eq!(menu.selection(), (0, 0));
    }

    #[test]
    fn test_run_to_completion_returns_to_browsing() {
        let log = Rc::default();
        let frames = vec![Frame {
            set_entry: Some(2),
            run: true,
            ..Default::default()
        }];
        let time = MockTime::new();
        let mut menu = MainMenu::new(Scripted::new(frames), catalog(&log), time.clone());

        match menu.tick() {
            MenuState::Ran {
                page,
                entry,
                report,
            } => {
                assert_eq!((page, entry), (0, 2));
                assert_eq!(report.outcome, RunOutcome::Completed);
                assert_eq!(report.stats.ticks, 3);
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(*log.borrow(), vec!["init", "end false"]);
        assert_eq!(time.now_us(), 60_000);
        assert_eq!(
            menu.input_mut().displays,
            vec![(0, 2, true), (0, 2, false)]
        );
    }

    #[test]
    fn test_cancel_after_debounce() {
        let log = Rc::default();
        let frames = vec![Frame {
            set_page: Some(1),
            run: true,
            ..Default::default()
        }];
        let time = MockTime::new();
        let mut input = Scripted::new(frames);
        // Cancel is asserted from the first poll
        input.cancel_after = Some(0);
        let mut menu = MainMenu::new(input, catalog(&log), time.clone());

        let MenuState::Ran { report, .. } = menu.tick() else {
            panic!("entry did not run");
        };

        assert_eq!(report.outcome, RunOutcome::Cancelled);
        assert!(report.elapsed_us > 100_000);
        assert_eq!(*log.borrow(), vec!["init", "end true"]);
    }

    #[test]
    fn test_exit_is_terminal() {
        let log = Rc::default();
        let frames = vec![
            Frame::default(),
            Frame {
                exit: true,
                ..Default::default()
            },
            Frame {
                run: true,
                ..Default::default()
            },
        ];
        let mut menu = MainMenu::new(Scripted::new(frames), catalog(&log), MockTime::new());

        assert_eq!(menu.tick(), MenuState::Browsing);
        assert_eq!(menu.tick(), MenuState::Exited);
        assert_eq!(menu.tick(), MenuState::Exited);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_start_loops_until_exit() {
        let log = Rc::default();
        let time = MockTime::new();
        let frames = vec![Frame::default(); 4];
        let mut menu = MainMenu::new(Scripted::new(frames), catalog(&log), time.clone());

        // Four browsing ticks, then the exhausted script asks to exit
        menu.start();

        assert_eq!(time.now_us(), 200_000);
        assert_eq!(menu.input_mut().displays.len(), 4);
    }
}
