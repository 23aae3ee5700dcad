//! Logger handle for warn-mode failures.
//!
//! Warnings are `tracing` events at `WARN` on the [`LOG_TARGET`] target. By
//! default they go to whatever subscriber is current for the calling thread; a
//! [`Logger`] built from a [`Dispatch`] routes them to that subscriber instead.

use std::fmt;

use tracing::{dispatcher, Dispatch, Subscriber};

/// Target used for warning events.
pub const LOG_TARGET: &str = "softassert";

/// Where warn-mode failures are logged.
#[derive(Clone, Default)]
pub struct Logger {
    dispatch: Option<Dispatch>,
}

impl Logger {
    /// Logs through the thread's current default subscriber.
    #[must_use]
    pub const fn ambient() -> Self {
        Self { dispatch: None }
    }

    /// Logs through a specific dispatcher.
    #[must_use]
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    /// Logs through `subscriber`.
    #[must_use]
    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::from_dispatch(Dispatch::new(subscriber))
    }

    /// Emits `line` at warning severity.
    pub fn warn(&self, line: &str) {
        self.scoped(|| tracing::warn!(target: LOG_TARGET, "{line}"));
    }

    /// Runs `f` with this logger's subscriber as the thread default, so any
    /// event `f` emits lands where the warnings do.
    pub fn scoped<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.dispatch {
            Some(dispatch) => dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("custom", &self.dispatch.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry;

    use super::*;
    use crate::test_support::Capture;

    #[test]
    fn test_custom_logger_receives_warning() {
        let capture = Capture::default();

        capture.logger().warn("[basic.rs:10]: Expected:[1] to be equal to [2]");

        let events = capture.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(events[0].target, LOG_TARGET);
        assert_eq!(events[0].message, "[basic.rs:10]: Expected:[1] to be equal to [2]");
    }

    #[test]
    fn test_ambient_logger_uses_thread_default() {
        let capture = Capture::default();
        let dispatch = Dispatch::new(registry().with(capture.clone()));

        dispatcher::with_default(&dispatch, || Logger::ambient().warn("ambient"));

        assert_eq!(capture.messages(), vec!["ambient".to_string()]);
    }

    #[test]
    fn test_debug_hides_dispatch() {
        assert_eq!(format!("{:?}", Logger::ambient()), "Logger { custom: false }");
    }
}
