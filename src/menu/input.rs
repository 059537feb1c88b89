//! Operator input and menu rendering
//!
//! [`MenuInput`] is polled by [`super::MainMenu`] once per tick. All queries
//! are edge-style: a true answer should be reported once per operator action.

use crate::devices::{Button, ButtonSource, Display, LINE_HEIGHT, SCREEN_HEIGHT};

use super::catalog::Catalog;

/// Navigation queries and display callback consumed by the menu.
pub trait MenuInput {
    /// Leave the menu. Only polled while browsing.
    fn exit(&mut self) -> bool;

    /// Start the selected entry.
    fn run_selected(&mut self) -> bool;

    fn next_entry(&mut self) -> bool;
    fn previous_entry(&mut self) -> bool;

    /// Jump straight to an entry on the current page.
    fn set_entry(&mut self) -> Option<usize> {
        None
    }

    fn next_page(&mut self) -> bool;
    fn previous_page(&mut self) -> bool;

    /// Jump straight to a page; the entry is reset.
    fn set_page(&mut self) -> Option<usize> {
        None
    }

    /// Stop the running entry. Polled once per run tick.
    fn cancel_running(&mut self) -> bool;

    /// Redraw for the current selection.
    fn display(&mut self, catalog: &Catalog, entry: usize, page: usize, running: bool);
}

/// Lines shown for a selection: page header, then a window of entries with
/// the selected one marked.
pub fn render(catalog: &Catalog, entry: usize, page: usize, running: bool) -> Vec<String> {
    let Some(current) = catalog.page(page) else {
        return Vec::new();
    };

    let mut lines = vec![format!("{} ({}/{})", current.name(), page + 1, catalog.len())];
    if running {
        if let Some(task) = current.entries().get(entry) {
            lines.push(format!("Running: {}", task.name()));
        }
        return lines;
    }

    let rows = (SCREEN_HEIGHT / LINE_HEIGHT) as usize - 1;
    let first = entry.saturating_sub(rows - 1);
    for (idx, task) in current.entries().iter().enumerate().skip(first).take(rows) {
        let marker = if idx == entry { '>' } else { ' ' };
        lines.push(format!("{marker} {}", task.name()));
    }
    lines
}

/// Menu driven by the brick buttons and drawn on the brick display.
///
/// Down/Up select entries, Right/Left select pages, Center runs. Back exits
/// while browsing and, held, cancels a running entry.
pub struct ButtonMenuInput<B, D> {
    buttons: B,
    display: D,
    shown: Vec<String>,
}

impl<B: ButtonSource, D: Display> ButtonMenuInput<B, D> {
    pub fn new(buttons: B, display: D) -> Self {
        Self {
            buttons,
            display,
            shown: Vec::new(),
        }
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<B: ButtonSource, D: Display> MenuInput for ButtonMenuInput<B, D> {
    fn exit(&mut self) -> bool {
        self.buttons.is_pressed(Button::Back)
    }

    fn run_selected(&mut self) -> bool {
        self.buttons.is_pressed(Button::Center)
    }

    fn next_entry(&mut self) -> bool {
        self.buttons.is_pressed(Button::Down)
    }

    fn previous_entry(&mut self) -> bool {
        self.buttons.is_pressed(Button::Up)
    }

    fn next_page(&mut self) -> bool {
        self.buttons.is_pressed(Button::Right)
    }

    fn previous_page(&mut self) -> bool {
        self.buttons.is_pressed(Button::Left)
    }

    fn cancel_running(&mut self) -> bool {
        // Level, so a press inside the debounce window still cancels once
        // the window closes. The edge is consumed so it does not also exit.
        let held = self.buttons.is_down(Button::Back);
        if held {
            self.buttons.is_pressed(Button::Back);
        }
        held
    }

    fn display(&mut self, catalog: &Catalog, entry: usize, page: usize, running: bool) {
        let lines = render(catalog, entry, page, running);
        if lines == self.shown {
            return;
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.display.print_lines(&refs);
        self.shown = lines;
    }
}
