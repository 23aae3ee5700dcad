//! Failure message rendering.
//!
//! Two shapes exist: the compare form for predicates with an operand,
//! `Expected:[<value>] <condition> [<operand>]`, and the value form for unary
//! predicates, `Expected:<<value>> <condition>`. Both get a `[<description>]: `
//! prefix when the subject carries a description. Values render with `Debug`.

use std::fmt::Debug;

use crate::subject::ValueToCheck;

/// Renders a message for a predicate that compares the subject to an operand.
pub fn compare<T: Debug, O: Debug + ?Sized>(
    subject: &ValueToCheck<T>,
    operand: &O,
    condition: &str,
) -> String {
    let message = format!("Expected:[{:?}] {condition} [{operand:?}]", subject.value());
    with_description(message, subject.description())
}

/// Renders a message for a predicate that only inspects the subject.
pub fn value<T: Debug>(subject: &ValueToCheck<T>, condition: &str) -> String {
    let message = format!("Expected:<{:?}> {condition}", subject.value());
    with_description(message, subject.description())
}

/// Prefixes `message` with `[<description>]: ` when a description is present.
pub fn with_description(message: String, description: Option<&str>) -> String {
    match description {
        Some(desc) if !desc.is_empty() => format!("[{desc}]: {message}"),
        _ => message,
    }
}
