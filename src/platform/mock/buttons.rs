//! Mock button source for testing

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::devices::{Button, ButtonSource};

#[derive(Debug, Default)]
struct ButtonState {
    down: HashSet<Button>,
    pressed: HashSet<Button>,
    released: HashSet<Button>,
}

/// Mock button source
///
/// Clones share state: a test scripts presses on one clone while the menu
/// polls another. Edges are consumed by the first query that sees them.
#[derive(Debug, Clone, Default)]
pub struct MockButtons {
    state: Arc<Mutex<ButtonState>>,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a button down (level and pressed edge).
    pub fn press(&self, button: Button) {
        self.with(|s| {
            s.down.insert(button);
            s.pressed.insert(button);
        });
    }

    /// Let a button up (level and released edge).
    pub fn release(&self, button: Button) {
        self.with(|s| {
            if s.down.remove(&button) {
                s.released.insert(button);
            }
        });
    }

    /// Press and release within one watcher period.
    pub fn tap(&self, button: Button) {
        self.press(button);
        self.release(button);
    }

    fn with<R>(&self, f: impl FnOnce(&mut ButtonState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl ButtonSource for MockButtons {
    fn is_pressed(&self, button: Button) -> bool {
        self.with(|s| s.pressed.remove(&button))
    }

    fn is_released(&self, button: Button) -> bool {
        self.with(|s| s.released.remove(&button))
    }

    fn is_down(&self, button: Button) -> bool {
        self.with(|s| s.down.contains(&button))
    }
}
