//! Task catalog: named pages of named tasks

use std::fmt;

use ev3kit_core::{BoxTask, Task};

use crate::error::{Ev3Error, Result};

/// A task with the label shown in the menu.
pub struct NamedTask {
    name: String,
    task: BoxTask,
}

impl NamedTask {
    pub fn new(name: impl Into<String>, task: impl Task + 'static) -> Self {
        Self {
            name: name.into(),
            task: Box::new(task),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn task_mut(&mut self) -> &mut BoxTask {
        &mut self.task
    }
}

impl fmt::Debug for NamedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedTask").field(&self.name).finish()
    }
}

/// One menu page.
#[derive(Debug)]
pub struct MenuPage {
    name: String,
    entries: Vec<NamedTask>,
}

impl MenuPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    pub fn with_task(mut self, name: impl Into<String>, task: impl Task + 'static) -> Self {
        self.add_task(name, task);
        self
    }

    pub fn add_task(&mut self, name: impl Into<String>, task: impl Task + 'static) {
        self.entries.push(NamedTask::new(name, task));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[NamedTask] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validated list of pages. Never empty, and no page is empty.
#[derive(Debug)]
pub struct Catalog {
    pages: Vec<MenuPage>,
}

impl Catalog {
    /// # Errors
    ///
    /// `Ev3Error::EmptyCatalog` if `pages` is empty,
    /// `Ev3Error::EmptyPage` if any page has no entries.
    pub fn new(pages: Vec<MenuPage>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Ev3Error::EmptyCatalog);
        }
        if let Some(page) = pages.iter().find(|p| p.is_empty()) {
            return Err(Ev3Error::EmptyPage(page.name.clone()));
        }
        Ok(Self { pages })
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn pages(&self) -> &[MenuPage] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&MenuPage> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn entry(&self, page: usize, entry: usize) -> Option<&NamedTask> {
        self.pages.get(page)?.entries.get(entry)
    }

    pub fn entry_mut(&mut self, page: usize, entry: usize) -> Option<&mut NamedTask> {
        self.pages.get_mut(page)?.entries.get_mut(entry)
    }

    /// Indices of the entry called `entry` on the page called `page`.
    pub fn find(&self, page: &str, entry: &str) -> Option<(usize, usize)> {
        let page_idx = self.pages.iter().position(|p| p.name == page)?;
        let entry_idx = self.pages[page_idx]
            .entries
            .iter()
            .position(|e| e.name == entry)?;
        Some((page_idx, entry_idx))
    }
}

/// Incremental catalog construction.
///
/// ```
/// use ev3kit::menu::Catalog;
/// use ev3kit::tasks::{println, Counter};
///
/// let mut builder = Catalog::builder();
/// builder
///     .page("runs")
///     .task("test", println("Testing"))
///     .task("count", Counter::new(10))
///     .add();
/// let catalog = builder.build().unwrap();
/// assert_eq!(catalog.find("runs", "count"), Some((0, 1)));
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    pages: Vec<MenuPage>,
}

impl CatalogBuilder {
    /// Start a page; it joins the catalog when [`PageBuilder::add`] is called.
    pub fn page(&mut self, name: impl Into<String>) -> PageBuilder<'_> {
        PageBuilder {
            builder: self,
            page: MenuPage::new(name),
        }
    }

    pub fn push(&mut self, page: MenuPage) -> &mut Self {
        self.pages.push(page);
        self
    }

    /// # Errors
    ///
    /// See [`Catalog::new`].
    pub fn build(self) -> Result<Catalog> {
        Catalog::new(self.pages)
    }
}

/// Page under construction, borrowed from a [`CatalogBuilder`].
pub struct PageBuilder<'a> {
    builder: &'a mut CatalogBuilder,
    page: MenuPage,
}

impl PageBuilder<'_> {
    pub fn task(mut self, name: impl Into<String>, task: impl Task + 'static) -> Self {
        self.page.add_task(name, task);
        self
    }

    pub fn add(self) {
        self.builder.pages.push(self.page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev3kit_core::Noop;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(Ev3Error::EmptyCatalog)));
    }

    #[test]
    fn test_empty_page_rejected() {
        let pages = vec![MenuPage::new("a").with_task("x", Noop), MenuPage::new("b")];
        match Catalog::new(pages) {
            Err(Ev3Error::EmptyPage(name)) => assert_eq!(name, "b"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_builder_keeps_order() {
        let mut builder = Catalog::builder();
        builder.page("first").task("a", Noop).task("b", Noop).add();
        builder.push(MenuPage::new("second").with_task("c", Noop));
        let mut catalog = builder.build().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.page(1).unwrap().name(), "second");
        assert_eq!(catalog.entry(0, 1).unwrap().name(), "b");
        assert!(catalog.entry(0, 2).is_none());
        assert!(catalog.entry_mut(2, 0).is_none());
        assert_eq!(catalog.find("second", "c"), Some((1, 0)));
        assert_eq!(catalog.find("second", "a"), None);
    }

    #[test]
    fn test_page_dropped_without_add() {
        let mut builder = Catalog::builder();
        let _ = builder.page("forgotten").task("a", Noop);
        assert!(matches!(builder.build(), Err(Ev3Error::EmptyCatalog)));
    }
}
