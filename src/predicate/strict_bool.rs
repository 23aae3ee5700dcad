//! Strict boolean identity, as opposed to truthiness.

/// Types that may hold an actual `bool`.
pub trait StrictBool {
    /// The held boolean, or `None` when there is none.
    fn strict_bool(&self) -> Option<bool>;
}

impl StrictBool for bool {
    fn strict_bool(&self) -> Option<bool> {
        Some(*self)
    }
}

impl StrictBool for Option<bool> {
    fn strict_bool(&self) -> Option<bool> {
        *self
    }
}

impl<T: StrictBool + ?Sized> StrictBool for &T {
    fn strict_bool(&self) -> Option<bool> {
        (**self).strict_bool()
    }
}
