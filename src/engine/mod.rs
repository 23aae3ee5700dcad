//! The assertion engine.
//!
//! A [`Check`] holds one [`ValueToCheck`] and a [`Reporter`]. Every predicate
//! consumes the check and hands it back, so calls chain:
//!
//! ```
//! use softassert::check;
//!
//! check("trade_msg", "data").is_populated().is_not_equal_to("any");
//! ```
//!
//! A failing predicate goes through [`Reporter::report`]: under the raise
//! policy it panics at the caller's line and the chain stops there; under the
//! warn policy it logs and returns, so the rest of the chain still runs.
//!
//! New predicates are added through the [`Assertion`] trait; see its docs.

mod checker;
mod reporter;

use std::fmt::{self, Debug};

pub use checker::{check, check_or_warn, check_with, Checker};
pub use reporter::Reporter;

use crate::format;
use crate::predicate::{Expected, Numeric, Populated, StrictBool, TypeSet};
use crate::subject::ValueToCheck;

/// Capabilities shared by the built-in check and any user extension.
///
/// Extensions are ordinary traits implemented for [`Check`] (or for any
/// `A: Assertion`). They evaluate their condition on [`subject`](Self::subject)
/// and hand the outcome to [`ensure`](Self::ensure), which applies the same
/// policy as the built-in predicates.
///
/// ```
/// use softassert::{check, Assertion, Check};
///
/// trait OrderingChecks {
///     fn is_greater_than(self, other: i64) -> Self;
/// }
///
/// impl OrderingChecks for Check<i64> {
///     #[track_caller]
///     fn is_greater_than(self, other: i64) -> Self {
///         let holds = *self.value() > other;
///         self.ensure(holds, |check| check.format_compare(&other, "to be greater than"))
///     }
/// }
///
/// check(10_i64, "seq_num").is_greater_than(5).is_equal_to(10);
/// ```
pub trait Assertion: Sized {
    /// Type of the checked value.
    type Target: Debug;

    /// The value under test.
    fn subject(&self) -> &ValueToCheck<Self::Target>;

    /// The failure branch bound to this check.
    fn reporter(&self) -> &Reporter;

    /// Reports a failure and returns the check for further chaining.
    ///
    /// # Panics
    ///
    /// Panics with `message` under the raise policy.
    #[track_caller]
    fn fail(self, message: &str) -> Self {
        self.reporter().report(message);
        self
    }

    /// Passes the check through when `holds`, otherwise fails with the message
    /// built by `message`.
    ///
    /// # Panics
    ///
    /// Panics under the raise policy when `holds` is false.
    #[track_caller]
    fn ensure<F>(self, holds: bool, message: F) -> Self
    where
        F: FnOnce(&Self) -> String,
    {
        if holds {
            return self;
        }
        let message = message(&self);
        self.fail(&message)
    }

    /// `Expected:[<value>] <condition> [<operand>]`, with description prefix.
    fn format_compare<O: Debug + ?Sized>(&self, operand: &O, condition: &str) -> String {
        format::compare(self.subject(), operand, condition)
    }

    /// `Expected:<<value>> <condition>`, with description prefix.
    fn format_value(&self, condition: &str) -> String {
        format::value(self.subject(), condition)
    }
}

/// A chainable check bound to one value.
#[derive(Clone)]
pub struct Check<T> {
    subject: ValueToCheck<T>,
    reporter: Reporter,
}

impl<T> Check<T> {
    /// Assembles a check from its parts.
    ///
    /// Entry points set the call site on the reporter; a check built here
    /// without one reports `<unknown>:0` in warnings.
    #[must_use]
    pub const fn from_parts(subject: ValueToCheck<T>, reporter: Reporter) -> Self {
        Self { subject, reporter }
    }

    /// The checked value.
    pub const fn value(&self) -> &T {
        self.subject.value()
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.subject.description()
    }

    /// Ends the chain and returns the checked value.
    pub fn into_value(self) -> T {
        self.subject.into_value()
    }
}

impl<T: Debug> Assertion for Check<T> {
    type Target = T;

    fn subject(&self) -> &ValueToCheck<T> {
        &self.subject
    }

    fn reporter(&self) -> &Reporter {
        &self.reporter
    }
}

impl<T: Debug> Check<T> {
    /// Fails unless the value equals `expected`.
    #[track_caller]
    pub fn is_equal_to<E: Debug>(self, expected: E) -> Self
    where
        T: PartialEq<E>,
    {
        let holds = *self.value() == expected;
        self.ensure(holds, |check| check.format_compare(&expected, "to be equal to"))
    }

    /// Fails if the value equals `expected`.
    #[track_caller]
    pub fn is_not_equal_to<E: Debug>(self, expected: E) -> Self
    where
        T: PartialEq<E>,
    {
        let holds = *self.value() != expected;
        self.ensure(holds, |check| check.format_compare(&expected, "to be not equal to"))
    }

    /// Fails unless the value's type is one of `types`.
    #[track_caller]
    pub fn is_instance_of(self, types: impl Into<TypeSet>) -> Self
    where
        T: 'static,
    {
        let types = types.into();
        let holds = types.contains::<T>();
        self.ensure(holds, |check| check.format_compare(&types, "to be an instance of"))
    }

    /// Fails if the value's type is one of `types`.
    #[track_caller]
    pub fn is_not_instance_of(self, types: impl Into<TypeSet>) -> Self
    where
        T: 'static,
    {
        let types = types.into();
        let holds = !types.contains::<T>();
        self.ensure(holds, |check| check.format_compare(&types, "to be not an instance of"))
    }

    /// Fails unless the value is a member of `seq`.
    #[track_caller]
    pub fn is_in<I>(self, seq: I) -> Self
    where
        I: IntoIterator,
        I::Item: Debug,
        T: PartialEq<I::Item>,
    {
        let items: Vec<I::Item> = seq.into_iter().collect();
        let holds = items.iter().any(|item| self.value() == item);
        self.ensure(holds, |check| check.format_compare(&items, "to be in"))
    }

    /// Fails if the value is a member of `seq`.
    #[track_caller]
    pub fn is_not_in<I>(self, seq: I) -> Self
    where
        I: IntoIterator,
        I::Item: Debug,
        T: PartialEq<I::Item>,
    {
        let items: Vec<I::Item> = seq.into_iter().collect();
        let holds = !items.iter().any(|item| self.value() == item);
        self.ensure(holds, |check| check.format_compare(&items, "to be not in"))
    }

    /// Fails unless the value equals `expected`, or, when `expected` is a
    /// sequence, is one of its members.
    #[track_caller]
    pub fn is_equal_or_in_seq<E: Debug>(self, expected: impl Into<Expected<E>>) -> Self
    where
        T: PartialEq<E>,
    {
        let expected = expected.into();
        let holds = expected.admits(self.value());
        self.ensure(holds, |check| check.format_compare(&expected, "to be equal to or in"))
    }

    /// Fails unless the value is populated (non-empty, non-zero, `true`).
    #[track_caller]
    pub fn is_populated(self) -> Self
    where
        T: Populated,
    {
        let holds = self.value().is_populated();
        self.ensure(holds, |check| check.format_value("to be populated"))
    }

    /// Fails if the value is populated.
    #[track_caller]
    pub fn is_not_populated(self) -> Self
    where
        T: Populated,
    {
        let holds = !self.value().is_populated();
        self.ensure(holds, |check| check.format_value("to be not populated"))
    }

    /// Fails unless the value is exactly `true`.
    #[track_caller]
    pub fn is_true(self) -> Self
    where
        T: StrictBool,
    {
        let holds = self.value().strict_bool() == Some(true);
        self.ensure(holds, |check| check.format_value("to be true"))
    }

    /// Fails unless the value is exactly `false`.
    #[track_caller]
    pub fn is_false(self) -> Self
    where
        T: StrictBool,
    {
        let holds = self.value().strict_bool() == Some(false);
        self.ensure(holds, |check| check.format_value("to be false"))
    }

    /// Fails unless the value is a number or text that fully parses as one.
    #[track_caller]
    pub fn is_numeric(self) -> Self
    where
        T: Numeric,
    {
        let holds = self.value().is_numeric();
        self.ensure(holds, |check| check.format_value("to be numeric"))
    }
}

impl<T: Debug> Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("subject", &self.subject)
            .field("reporter", &self.reporter)
            .finish()
    }
}
