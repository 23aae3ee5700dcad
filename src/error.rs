//! Error types for softassert.
//!
//! Assertion failures are not errors in this sense: they either panic or are
//! logged. The types here cover the supporting machinery, configuration parsing
//! and call-site resolution, which can fail without affecting the outcome of a
//! check.

use thiserror::Error;

/// Errors raised while interpreting configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The warn level value is not one of the known spellings.
    #[error("Unrecognized warn level '{value}' (expected one of: 0, 1, 2, disabled, minimal, verbose)")]
    UnknownWarnLevel {
        /// The raw value as read.
        value: String,
    },
}

/// Errors raised while resolving the caller's source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The check was assembled without a call site.
    #[error("No call site was captured for this check")]
    MissingCallSite,
}
