//! Entry points: the free functions and the reusable [`Checker`].

use std::fmt;
use std::sync::Arc;

use crate::config::{ConfigSource, EnvSource};
use crate::diagnostics::Diagnostics;
use crate::location::CallSite;
use crate::logger::Logger;
use crate::subject::ValueToCheck;

use super::{Check, Reporter};

/// Opens a chain on `value`, reading the warn level from the environment.
///
/// ```
/// use softassert::check;
///
/// check(10, "seq_num").is_equal_to(10);
/// check("1", None).is_numeric();
/// ```
#[track_caller]
pub fn check<'d, T>(value: T, description: impl Into<Option<&'d str>>) -> Check<T> {
    Checker::default().check_with(value, description, None)
}

/// Like [`check`], with an explicit per-check override: `Some(true)` warns,
/// `Some(false)` raises, `None` defers to the process-wide level.
#[track_caller]
pub fn check_with<'d, T>(
    value: T,
    description: impl Into<Option<&'d str>>,
    as_warn: Option<bool>,
) -> Check<T> {
    Checker::default().check_with(value, description, as_warn)
}

/// Like [`check`], but failures warn instead of raising.
#[track_caller]
pub fn check_or_warn<'d, T>(value: T, description: impl Into<Option<&'d str>>) -> Check<T> {
    Checker::default().check_with(value, description, Some(true))
}

/// Reusable factory for checks sharing defaults.
///
/// Per-check overrides win over [`warn_by_default`](Self::warn_by_default),
/// which wins over the process-wide warn level.
///
/// ```
/// use softassert::{Checker, MemorySource, WarnLevel};
///
/// let checker = Checker::new().with_config(MemorySource::with_warn_level(WarnLevel::Minimal));
/// // Logged as a warning instead of panicking.
/// checker.check(10, "seq_num").is_equal_to(9);
/// ```
#[derive(Clone)]
pub struct Checker {
    as_warn: Option<bool>,
    logger: Logger,
    config: Arc<dyn ConfigSource>,
    diagnostics: Diagnostics,
}

impl Checker {
    /// Creates a checker with environment config, the ambient logger and
    /// stderr diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance-level default for the warn override.
    #[must_use]
    pub fn warn_by_default(mut self, as_warn: bool) -> Self {
        self.as_warn = Some(as_warn);
        self
    }

    /// Sets the logger used for warnings.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Sets the configuration source.
    #[must_use]
    pub fn with_config(self, config: impl ConfigSource + 'static) -> Self {
        self.with_shared_config(Arc::new(config))
    }

    /// Sets a configuration source shared with the caller.
    #[must_use]
    pub fn with_shared_config(mut self, config: Arc<dyn ConfigSource>) -> Self {
        self.config = config;
        self
    }

    /// Sets the diagnostic stream for stack dumps.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Opens a chain on `value` using this checker's defaults.
    #[track_caller]
    pub fn check<'d, T>(&self, value: T, description: impl Into<Option<&'d str>>) -> Check<T> {
        self.check_with(value, description, None)
    }

    /// Opens a chain on `value` with a per-check override.
    #[track_caller]
    pub fn check_with<'d, T>(
        &self,
        value: T,
        description: impl Into<Option<&'d str>>,
        as_warn: Option<bool>,
    ) -> Check<T> {
        let reporter = Reporter::new(Arc::clone(&self.config))
            .with_as_warn(as_warn.or(self.as_warn))
            .with_logger(self.logger.clone())
            .with_diagnostics(self.diagnostics.clone())
            .with_call_site(CallSite::capture());
        Check::from_parts(ValueToCheck::new(value, description.into()), reporter)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            as_warn: None,
            logger: Logger::ambient(),
            config: Arc::new(EnvSource),
            diagnostics: Diagnostics::stderr(),
        }
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("as_warn", &self.as_warn)
            .field("logger", &self.logger)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}
