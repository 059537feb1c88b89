//! Line-based menu input for running on a host terminal

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::catalog::Catalog;
use super::input::{render, MenuInput};

/// One operator command typed on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    NextEntry,
    PreviousEntry,
    Entry(usize),
    NextPage,
    PreviousPage,
    Page(usize),
    Run,
    Cancel,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line.
    ///
    /// `j`/`k` move the entry, `l`/`h` the page, a number selects an entry,
    /// `p<n>` a page, an empty line or `r` runs, `c` cancels, `q` quits.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let command = match line {
            "" | "r" | "run" => ConsoleCommand::Run,
            "j" | "down" => ConsoleCommand::NextEntry,
            "k" | "up" => ConsoleCommand::PreviousEntry,
            "l" | "right" => ConsoleCommand::NextPage,
            "h" | "left" => ConsoleCommand::PreviousPage,
            "c" | "cancel" => ConsoleCommand::Cancel,
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            _ => {
                if let Some(page) = line.strip_prefix('p') {
                    ConsoleCommand::Page(page.parse().ok()?)
                } else {
                    ConsoleCommand::Entry(line.parse().ok()?)
                }
            }
        };
        Some(command)
    }
}

/// Menu input fed by a channel of [`ConsoleCommand`]s.
///
/// At most one command is applied per browsing tick. Commands other than
/// cancel that arrive while a task runs are held and applied, in order, once
/// browsing resumes. The menu is printed to standard output whenever it
/// changes.
pub struct ConsoleInput {
    commands: Receiver<ConsoleCommand>,
    held: VecDeque<ConsoleCommand>,
    current: Option<ConsoleCommand>,
    closed: bool,
    shown: Vec<String>,
}

impl ConsoleInput {
    pub fn new(commands: Receiver<ConsoleCommand>) -> Self {
        Self {
            commands,
            held: VecDeque::new(),
            current: None,
            closed: false,
            shown: Vec::new(),
        }
    }

    /// Input reading commands from standard input on a background thread.
    pub fn spawn_stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || read_commands(std::io::stdin().lock(), &tx));
        Self::new(rx)
    }

    fn poll(&mut self) -> Option<ConsoleCommand> {
        self.held.pop_front().or_else(|| self.receive())
    }

    fn receive(&mut self) -> Option<ConsoleCommand> {
        match self.commands.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                None
            }
        }
    }
}

/// Forward parsed lines from `reader` until it ends or the receiver is gone.
pub fn read_commands(reader: impl BufRead, commands: &Sender<ConsoleCommand>) {
    for line in reader.lines() {
        let Ok(line) = line else { break };
        match ConsoleCommand::parse(&line) {
            Some(command) => {
                if commands.send(command).is_err() {
                    break;
                }
            }
            None => crate::log_warn!("unknown command {:?}", line),
        }
    }
}

impl MenuInput for ConsoleInput {
    fn exit(&mut self) -> bool {
        self.current = self.poll();
        // End of input leaves the menu
        self.closed || self.current == Some(ConsoleCommand::Quit)
    }

    fn run_selected(&mut self) -> bool {
        self.current == Some(ConsoleCommand::Run)
    }

    fn next_entry(&mut self) -> bool {
        self.current == Some(ConsoleCommand::NextEntry)
    }

    fn previous_entry(&mut self) -> bool {
        self.current == Some(ConsoleCommand::PreviousEntry)
    }

    fn set_entry(&mut self) -> Option<usize> {
        match self.current {
            Some(ConsoleCommand::Entry(entry)) => Some(entry),
            _ => None,
        }
    }

    fn next_page(&mut self) -> bool {
        self.current == Some(ConsoleCommand::NextPage)
    }

    fn previous_page(&mut self) -> bool {
        self.current == Some(ConsoleCommand::PreviousPage)
    }

    fn set_page(&mut self) -> Option<usize> {
        match self.current {
            Some(ConsoleCommand::Page(page)) => Some(page),
            _ => None,
        }
    }

    fn cancel_running(&mut self) -> bool {
        match self.receive() {
            Some(ConsoleCommand::Cancel | ConsoleCommand::Quit) => true,
            Some(command) => {
                self.held.push_back(command);
                false
            }
            None => false,
        }
    }

    fn display(&mut self, catalog: &Catalog, entry: usize, page: usize, running: bool) {
        let lines = render(catalog, entry, page, running);
        if lines != self.shown {
            println!("{}", lines.join("\n"));
            self.shown = lines;
        }
    }
}
