//! # softassert - fluent test assertions that can degrade to warnings
//!
//! `softassert` wraps a value under test and an optional description in a
//! [`Check`], then runs a chain of predicates against it. A failing predicate
//! either panics, which fails the test the usual way, or logs a warning and
//! lets the chain continue.
//!
//! ## Core Concepts
//!
//! - **Check**: the chainable handle returned by [`check`] or [`Checker::check`]
//! - **Policy**: raise or warn, resolved per failure from the per-check
//!   override, the checker default and the process-wide [`WarnLevel`]
//! - **Call site**: the `file:line` of the entry-point call, shown in warnings
//! - **Assertion**: the trait extensions implement to add predicates
//!
//! ## Usage
//!
//! ```rust
//! use softassert::{check, check_or_warn, TypeTag};
//!
//! check("fix4.1", "msg_type")
//!     .is_instance_of(TypeTag::of::<&str>())
//!     .is_in(["fix4.1", "fix4.2"]);
//! check(10, "seq_num").is_equal_to(10);
//!
//! // Logged, not raised.
//! check_or_warn(10, "seq_num").is_equal_to(9);
//! ```
//!
//! ## Process-wide warn level
//!
//! Setting `SOFTASSERT_ERRORS_AS_WARNINGS` turns failures into warnings for
//! every check without a per-check override: `1` (or `minimal`) logs the
//! message with its location, `2` (or `verbose`) also dumps the call stack to
//! stderr. The value is re-read on every failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod format;
pub mod location;
pub mod logger;
pub mod policy;
pub mod predicate;
pub mod subject;

#[cfg(test)]
mod test_support;

pub use config::{ConfigSource, EnvSource, MemorySource, ERRORS_AS_WARNINGS_KEY};
pub use diagnostics::{Diagnostics, STACK_DUMP_MARKER};
pub use engine::{check, check_or_warn, check_with, Assertion, Check, Checker, Reporter};
pub use error::{ConfigError, LocationError};
pub use location::CallSite;
pub use logger::{Logger, LOG_TARGET};
pub use policy::{Detail, Policy, WarnLevel};
pub use predicate::{Expected, Numeric, Populated, StrictBool, TypeSet, TypeTag};
pub use subject::ValueToCheck;
