//! Configuration sources for the process-wide warn level.
//!
//! The engine never caches the warn level: every failure asks its
//! [`ConfigSource`] again, so a value changed halfway through a test applies to
//! the next failing check.

use std::collections::HashMap;
use std::env;
use std::sync::{PoisonError, RwLock};

use crate::policy::WarnLevel;

/// Key holding the process-wide "errors as warnings" level.
pub const ERRORS_AS_WARNINGS_KEY: &str = "SOFTASSERT_ERRORS_AS_WARNINGS";

/// A read-only key/value configuration provider.
pub trait ConfigSource: Send + Sync {
    /// Returns the raw value stored under `key`.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Reads and interprets the warn level.
    fn warn_level(&self) -> WarnLevel {
        WarnLevel::from_config_value(self.lookup(ERRORS_AS_WARNINGS_KEY).as_deref())
    }
}

/// Reads from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory source, mainly for tests that must not touch the environment.
#[derive(Debug, Default)]
pub struct MemorySource {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with the warn level already set.
    #[must_use]
    pub fn with_warn_level(level: WarnLevel) -> Self {
        let source = Self::new();
        source.set_warn_level(level);
        source
    }

    /// Stores `value` under `key`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Removes `key`.
    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    /// Sets the warn level; `Disabled` removes the key.
    pub fn set_warn_level(&self, level: WarnLevel) {
        match level {
            WarnLevel::Disabled => self.remove(ERRORS_AS_WARNINGS_KEY),
            WarnLevel::Minimal => self.set(ERRORS_AS_WARNINGS_KEY, "1"),
            WarnLevel::Verbose => self.set(ERRORS_AS_WARNINGS_KEY, "2"),
        }
    }
}

impl ConfigSource for MemorySource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
