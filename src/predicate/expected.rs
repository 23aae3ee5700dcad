//! Operand of `is_equal_or_in_seq`: one value or a sequence of candidates.

use std::fmt;

/// Either a single expected value or a sequence the value must belong to.
///
/// Scalars, strings, arrays and `Vec`s convert implicitly, so callers can
/// write `is_equal_or_in_seq(1)` as well as `is_equal_or_in_seq([1, 2, 3])`.
/// To compare against a whole sequence for equality, wrap it with
/// [`Expected::one`].
#[derive(Clone, PartialEq, Eq)]
pub enum Expected<E> {
    /// Passes when the value equals this one.
    One(E),
    /// Passes when the value equals any member.
    AnyOf(Vec<E>),
}

impl<E> Expected<E> {
    /// A single expected value.
    pub const fn one(expected: E) -> Self {
        Self::One(expected)
    }

    /// A sequence of accepted values.
    pub fn any_of<I: IntoIterator<Item = E>>(candidates: I) -> Self {
        Self::AnyOf(candidates.into_iter().collect())
    }

    /// True when `value` equals the single value or a member of the sequence.
    pub fn admits<T: PartialEq<E> + ?Sized>(&self, value: &T) -> bool {
        match self {
            Self::One(expected) => value == expected,
            Self::AnyOf(candidates) => candidates.iter().any(|candidate| value == candidate),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Expected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(expected) => expected.fmt(f),
            Self::AnyOf(candidates) => f.debug_list().entries(candidates).finish(),
        }
    }
}

impl<E, const N: usize> From<[E; N]> for Expected<E> {
    fn from(candidates: [E; N]) -> Self {
        Self::any_of(candidates)
    }
}

impl<E> From<Vec<E>> for Expected<E> {
    fn from(candidates: Vec<E>) -> Self {
        Self::AnyOf(candidates)
    }
}

impl<'a> From<&'a str> for Expected<&'a str> {
    fn from(expected: &'a str) -> Self {
        Self::One(expected)
    }
}

impl From<String> for Expected<String> {
    fn from(expected: String) -> Self {
        Self::One(expected)
    }
}

macro_rules! impl_expected_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expected<$ty> {
                fn from(expected: $ty) -> Self {
                    Self::One(expected)
                }
            }
        )*
    };
}

impl_expected_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);
