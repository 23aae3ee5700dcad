//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use softassert::{Checker, Diagnostics, Logger, MemorySource, WarnLevel};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{registry, Layer};

#[derive(Debug, Clone)]
pub struct SampleMsg {
    pub msg_type: String,
    pub seq_num: u32,
    pub data: String,
}

impl SampleMsg {
    pub fn new(msg_type: &str, seq_num: u32, data: &str) -> Self {
        Self {
            msg_type: msg_type.to_string(),
            seq_num,
            data: data.to_string(),
        }
    }

    pub fn sample() -> Self {
        Self::new("fix4.1", 10, "trade_msg")
    }
}

/// Collects `WARN` messages routed through [`Capture::logger`].
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<(Level, String)>>>);

impl Capture {
    pub fn logger(&self) -> Logger {
        Logger::from_subscriber(registry().with(self.clone()))
    }

    pub fn warnings(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().push((*event.metadata().level(), visitor.0));
    }
}

/// In-memory stand-in for stderr.
#[derive(Clone, Default)]
pub struct Stderr(Arc<Mutex<Vec<u8>>>);

impl Stderr {
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::to_writer(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Stderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A checker wired to in-memory config, logger and diagnostics.
pub struct Harness {
    pub config: Arc<MemorySource>,
    pub capture: Capture,
    pub stderr: Stderr,
    pub checker: Checker,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_checker(Checker::new())
    }

    pub fn with_checker(checker: Checker) -> Self {
        let config = Arc::new(MemorySource::new());
        let capture = Capture::default();
        let stderr = Stderr::default();
        let checker = checker
            .with_shared_config(config.clone())
            .with_logger(capture.logger())
            .with_diagnostics(stderr.diagnostics());
        Self {
            config,
            capture,
            stderr,
            checker,
        }
    }

    pub fn set_level(&self, level: WarnLevel) {
        self.config.set_warn_level(level);
    }
}

/// Runs `f`, which must panic, and returns the panic message.
pub fn raises<R>(f: impl FnOnce() -> R) -> String {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the check to raise"),
        Err(payload) => payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_default(),
    }
}
