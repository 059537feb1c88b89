//! Mock display for testing

use std::sync::{Arc, Mutex, PoisonError};

use crate::devices::Display;

#[derive(Debug, Default)]
struct Screen {
    texts: Vec<(u32, u32, String)>,
    pixels: Vec<(u32, u32, bool)>,
    clears: usize,
}

/// Mock display
///
/// Keeps everything drawn since the last `clear`. Clones share the screen.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    screen: Arc<Mutex<Screen>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text drawn since the last clear, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let screen = self.lock();
        let mut texts = screen.texts.clone();
        texts.sort_by_key(|(x, y, _)| (*y, *x));
        texts.into_iter().map(|(_, _, text)| text).collect()
    }

    /// Number of `clear` calls
    pub fn clears(&self) -> usize {
        self.lock().clears
    }

    /// Pixels drawn since the last clear
    pub fn pixels(&self) -> Vec<(u32, u32, bool)> {
        self.lock().pixels.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Display for MockDisplay {
    fn clear(&mut self) {
        let mut screen = self.lock();
        screen.texts.clear();
        screen.pixels.clear();
        screen.clears += 1;
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str) {
        self.lock().texts.push((x, y, text.to_string()));
    }

    fn draw_pixel(&mut self, x: u32, y: u32, black: bool) {
        self.lock().pixels.push((x, y, black));
    }
}
