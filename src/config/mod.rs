//! Configuration selection
//!
//! A configuration is a named factory that wires devices into a [`Catalog`].
//! The registry is an ordinary value built by the program entry point; the
//! name to use comes from the command line or [`CONFIG_ENV`].

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Ev3Error, Result};
use crate::menu::Catalog;

/// Environment variable naming the configuration when none is passed on the
/// command line.
pub const CONFIG_ENV: &str = "EV3KIT_CONFIG";

/// Builds the catalog for one robot.
pub type ConfigFactory = Box<dyn Fn() -> Result<Catalog>>;

/// Named configuration factories.
#[derive(Default)]
pub struct ConfigRegistry {
    configs: BTreeMap<String, ConfigFactory>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Catalog> + 'static,
    {
        let name = name.into();
        if self.configs.insert(name.clone(), Box::new(factory)).is_some() {
            crate::log_warn!("config {} registered twice, keeping the last", name);
        }
        self
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Build the catalog of the configuration called `name`.
    ///
    /// # Errors
    ///
    /// `Ev3Error::ConfigNotFound` if nothing is registered under `name`, or
    /// whatever the factory returns.
    pub fn select(&self, name: &str) -> Result<Catalog> {
        let factory = self
            .configs
            .get(name)
            .ok_or_else(|| Ev3Error::ConfigNotFound(name.to_string()))?;
        crate::log_info!("using config {}", name);
        factory()
    }
}

/// Chooses the configuration name: command line first, then the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSelector {
    cli: Option<String>,
    env: Option<String>,
}

impl ConfigSelector {
    pub fn new(cli: Option<String>, env: Option<String>) -> Self {
        Self { cli, env }
    }

    /// Selector reading [`CONFIG_ENV`] from the process environment.
    pub fn from_env(cli: Option<String>) -> Self {
        Self::new(cli, std::env::var(CONFIG_ENV).ok())
    }

    /// # Errors
    ///
    /// `Ev3Error::NoConfigSelected` if neither source names a configuration.
    pub fn resolve(&self) -> Result<&str> {
        [&self.cli, &self.env]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .ok_or(Ev3Error::NoConfigSelected)
    }

    /// Resolve the name and build its catalog from `registry`.
    pub fn select(&self, registry: &ConfigRegistry) -> Result<Catalog> {
        registry.select(self.resolve()?)
    }
}

/// Menu pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTiming {
    /// Period of the browsing loop
    pub browse_tick: Duration,
    /// Step interval while an entry runs
    pub run_interval: Duration,
    /// Cancels are ignored for this long after an entry starts
    pub cancel_debounce: Duration,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            browse_tick: Duration::from_millis(50),
            run_interval: Duration::from_millis(20),
            cancel_debounce: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuPage;
    use ev3kit_core::Noop;

    fn registry() -> ConfigRegistry {
        let mut registry = ConfigRegistry::new();
        registry
            .register("bop", || Catalog::new(vec![MenuPage::new("runs").with_task("a", Noop)]))
            .register("broken", || Catalog::new(Vec::new()));
        registry
    }

    #[test]
    fn test_select_registered() {
        let catalog = registry().select("bop").unwrap();
        assert_eq!(catalog.page(0).unwrap().name(), "runs");
        assert_eq!(registry().names().collect::<Vec<_>>(), vec!["bop", "broken"]);
    }

    #[test]
    fn test_select_unknown() {
        let err = registry().select("missing").err().unwrap();
        assert_eq!(err.to_string(), "could not find config for missing");
    }

    #[test]
    fn test_factory_error_is_returned() {
        assert!(matches!(registry().select("broken"), Err(Ev3Error::EmptyCatalog)));
    }

    #[test]
    fn test_selector_prefers_cli() {
        let selector = ConfigSelector::new(Some("bop".into()), Some("other".into()));
        assert_eq!(selector.resolve().unwrap(), "bop");

        let selector = ConfigSelector::new(Some("  ".into()), Some("other".into()));
        assert_eq!(selector.resolve().unwrap(), "other");

        let selector = ConfigSelector::new(None, None);
        assert!(matches!(selector.resolve(), Err(Ev3Error::NoConfigSelected)));
    }

    #[test]
    fn test_selector_select() {
        let selector = ConfigSelector::new(None, Some("bop".into()));
        assert!(selector.select(&registry()).is_ok());
    }

    #[test]
    fn test_menu_timing_defaults() {
        let timing = MenuTiming::default();
        assert_eq!(timing.browse_tick, Duration::from_millis(50));
        assert_eq!(timing.run_interval, Duration::from_millis(20));
        assert_eq!(timing.cancel_debounce, Duration::from_millis(100));
    }
}
