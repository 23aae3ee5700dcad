//! The shared failure branch.

use std::fmt;
use std::sync::Arc;

use crate::config::{ConfigSource, EnvSource};
use crate::diagnostics::Diagnostics;
use crate::location::{self, CallSite};
use crate::logger::Logger;
use crate::policy::{self, Detail, Policy};

/// Decides what happens when a check fails, and makes it happen.
///
/// The warn level is read from the config source on every failure, never
/// cached at construction.
#[derive(Clone)]
pub struct Reporter {
    as_warn: Option<bool>,
    logger: Logger,
    config: Arc<dyn ConfigSource>,
    diagnostics: Diagnostics,
    call_site: Option<CallSite>,
}

impl Reporter {
    /// Creates a reporter reading the warn level from `config`.
    #[must_use]
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self {
            as_warn: None,
            logger: Logger::ambient(),
            config,
            diagnostics: Diagnostics::stderr(),
            call_site: None,
        }
    }

    /// Sets the per-check override.
    #[must_use]
    pub fn with_as_warn(mut self, as_warn: Option<bool>) -> Self {
        self.as_warn = as_warn;
        self
    }

    /// Sets the logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Sets the diagnostic stream.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Sets the call site reported in warnings.
    #[must_use]
    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    /// The per-check override, if any.
    #[must_use]
    pub const fn as_warn(&self) -> Option<bool> {
        self.as_warn
    }

    /// The captured call site, if any.
    #[must_use]
    pub const fn call_site(&self) -> Option<&CallSite> {
        self.call_site.as_ref()
    }

    /// Resolves the policy against the current warn level.
    #[must_use]
    pub fn policy(&self) -> Policy {
        policy::resolve(self.as_warn, self.config.warn_level())
    }

    /// Handles one failed check.
    ///
    /// # Panics
    ///
    /// Panics with `message` when the resolved policy is [`Policy::Raise`].
    #[track_caller]
    pub fn report(&self, message: &str) {
        let detail = match self.policy() {
            Policy::Raise => panic!("{message}"),
            Policy::Warn(detail) => detail,
        };

        let site = self
            .logger
            .scoped(|| location::resolve_or_fallback(self.call_site.as_ref()));
        let line = format!("[{site}]: {message}");
        if detail == Detail::Trace {
            self.diagnostics.dump_stack(&line);
        }
        self.logger.warn(&line);
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(Arc::new(EnvSource))
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("as_warn", &self.as_warn)
            .field("logger", &self.logger)
            .field("diagnostics", &self.diagnostics)
            .field("call_site", &self.call_site)
            .finish_non_exhaustive()
    }
}
