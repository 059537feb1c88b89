//! Task catalog and operator menu
//!
//! - [`catalog`]: pages of named tasks, validated non-empty
//! - [`cursor`]: selection state with clamped navigation
//! - [`input`]: operator input contract and the brick button implementation
//! - [`console`]: line-based input for host terminals
//! - [`main_menu`]: browse/run loop with the cancel path

pub mod catalog;
pub mod console;
pub mod cursor;
pub mod input;
pub mod main_menu;

pub use catalog::{Catalog, CatalogBuilder, MenuPage, NamedTask, PageBuilder};
pub use console::{ConsoleCommand, ConsoleInput};
pub use cursor::MenuCursor;
pub use input::{render, ButtonMenuInput, MenuInput};
pub use main_menu::{MainMenu, MenuState};
