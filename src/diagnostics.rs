//! Diagnostic stream for verbose stack dumps.
//!
//! Dumps bypass the logging facility so they stay visible even when no
//! subscriber is installed. Each dump is written with one `write_all` while
//! holding the stream lock, so concurrent dumps never interleave mid-line.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// First line of every stack dump.
pub const STACK_DUMP_MARKER: &str = "---- softassert stack dump ----";

/// A writer shared between the caller and the diagnostic stream.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Destination for stack dumps: stderr or a caller-supplied writer.
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<SharedWriter>,
}

impl Diagnostics {
    /// Writes to the process's standard error stream.
    #[must_use]
    pub const fn stderr() -> Self {
        Self { sink: None }
    }

    /// Writes to `writer`.
    #[must_use]
    pub fn to_writer<W: Write + Send + 'static>(writer: W) -> Self {
        let sink: SharedWriter = Arc::new(Mutex::new(writer));
        Self { sink: Some(sink) }
    }

    /// Writes to a writer shared with the caller.
    #[must_use]
    pub fn shared(writer: SharedWriter) -> Self {
        Self { sink: Some(writer) }
    }

    /// Writes a stack dump for `headline`, the already formatted warning.
    pub fn dump_stack(&self, headline: &str) {
        let dump = render_dump(headline, &Backtrace::force_capture());
        let _ = self.write_all(dump.as_bytes());
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.sink {
            Some(sink) => {
                let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
                writer.write_all(bytes)?;
                writer.flush()
            }
            None => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(bytes)?;
                stderr.flush()
            }
        }
    }
}

fn render_dump(headline: &str, backtrace: &Backtrace) -> String {
    format!("{STACK_DUMP_MARKER}\n{headline}\n{backtrace}\n")
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = if self.sink.is_some() { "writer" } else { "stderr" };
        f.debug_struct("Diagnostics").field("target", &target).finish()
    }
}
