//! Menu selection state

use super::catalog::Catalog;

/// Selected page and entry.
///
/// Navigation moves freely; [`MenuCursor::clamp`] brings the indices back
/// into range once all inputs of a tick have been applied. Moving past
/// either end clamps, it never wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    page: isize,
    entry: isize,
}

impl MenuCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page.max(0) as usize
    }

    pub fn entry(&self) -> usize {
        self.entry.max(0) as usize
    }

    pub fn next_entry(&mut self) {
        self.entry += 1;
    }

    pub fn previous_entry(&mut self) {
        self.entry -= 1;
    }

    pub fn set_entry(&mut self, entry: usize) {
        self.entry = to_index(entry);
    }

    /// Changing page resets the entry.
    pub fn next_page(&mut self) {
        self.page += 1;
        self.entry = 0;
    }

    pub fn previous_page(&mut self) {
        self.page -= 1;
        self.entry = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = to_index(page);
        self.entry = 0;
    }

    /// Clamp both indices into the ranges of `catalog`.
    pub fn clamp(&mut self, catalog: &Catalog) {
        self.page = self.page.clamp(0, last_index(catalog.len()));
        let entries = catalog.page(self.page()).map_or(0, |p| p.len());
        self.entry = self.entry.clamp(0, last_index(entries));
    }
}

fn to_index(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

fn last_index(len: usize) -> isize {
    to_index(len.saturating_sub(1))
}
