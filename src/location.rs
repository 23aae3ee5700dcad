//! Caller location capture.
//!
//! Failures are detected deep inside the engine, but diagnostics must point at
//! the test line that opened the chain. Entry points are `#[track_caller]`, so
//! [`CallSite::capture`] called from them records the caller's position at
//! compile time instead of walking the stack at runtime.

use std::fmt;
use std::panic::Location;
use std::path::Path;

use tracing::error;

use crate::error::LocationError;

/// Rendering used when no call site is available.
pub const UNKNOWN_LOCATION: &str = "<unknown>:0";

/// Source position of the code that opened an assertion chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    location: &'static Location<'static>,
}

impl CallSite {
    /// Captures the location of the nearest non-`#[track_caller]` caller.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// Full source path as reported by the compiler.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Line number of the call.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Column number of the call.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Renders `<file basename>:<line>`.
    #[must_use]
    pub fn render(&self) -> String {
        let file = self.file();
        let name = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);
        format!("{name}:{}", self.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Resolves the `file:line` token for a check.
///
/// # Errors
///
/// Returns [`LocationError::MissingCallSite`] when the check was assembled
/// without a captured call site.
pub fn resolve(site: Option<&CallSite>) -> Result<String, LocationError> {
    site.map(CallSite::render).ok_or(LocationError::MissingCallSite)
}

/// Like [`resolve`], but never fails: an unresolved site is reported on the
/// `softassert::location` target and rendered as [`UNKNOWN_LOCATION`].
#[must_use]
pub fn resolve_or_fallback(site: Option<&CallSite>) -> String {
    resolve(site).unwrap_or_else(|err| {
        error!(target: "softassert::location", %err, "failed to get line no. for failed check");
        UNKNOWN_LOCATION.to_string()
    })
}
