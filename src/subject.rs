//! The value under test.
//!
//! A [`ValueToCheck`] pairs the checked value with an optional description.
//! It is built once per assertion chain and never changes afterwards, so every
//! predicate in a chain observes the same subject.

/// A value under test plus an optional human-readable description.
///
/// # Examples
///
/// ```
/// use softassert::ValueToCheck;
///
/// let subject = ValueToCheck::new(10, Some("seq_num"));
/// assert_eq!(*subject.value(), 10);
/// assert_eq!(subject.description(), Some("seq_num"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueToCheck<T> {
    value: T,
    description: Option<String>,
}

impl<T> ValueToCheck<T> {
    /// Creates a subject. An empty description is dropped.
    pub fn new<D: Into<String>>(value: T, description: Option<D>) -> Self {
        let description = description
            .map(Into::into)
            .filter(|desc: &String| !desc.is_empty());
        Self { value, description }
    }

    /// Creates a subject without a description.
    pub const fn unnamed(value: T) -> Self {
        Self {
            value,
            description: None,
        }
    }

    /// Returns the checked value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Consumes the subject and returns the checked value.
    pub fn into_value(self) -> T {
        self.value
    }
}
