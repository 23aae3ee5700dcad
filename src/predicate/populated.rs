//! Truthiness for collections, strings, numbers and flags.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types with a "populated" (non-empty, non-zero, non-false) state.
pub trait Populated {
    /// Returns true when the value counts as populated.
    fn is_populated(&self) -> bool;
}

impl Populated for str {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl Populated for String {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Populated for [T] {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Populated for [T; N] {
    fn is_populated(&self) -> bool {
        N > 0
    }
}

impl<T> Populated for Vec<T> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Populated for VecDeque<T> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Populated for HashMap<K, V, S> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Populated for HashSet<T, S> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Populated for BTreeMap<K, V> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Populated for BTreeSet<T> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

impl Populated for bool {
    fn is_populated(&self) -> bool {
        *self
    }
}

impl<T: Populated> Populated for Option<T> {
    fn is_populated(&self) -> bool {
        self.as_ref().is_some_and(Populated::is_populated)
    }
}

impl<T: Populated + ?Sized> Populated for &T {
    fn is_populated(&self) -> bool {
        (**self).is_populated()
    }
}

impl<T: Populated + ?Sized> Populated for Box<T> {
    fn is_populated(&self) -> bool {
        (**self).is_populated()
    }
}

macro_rules! impl_populated_int {
    ($($ty:ty),*) => {
        $(
            impl Populated for $ty {
                fn is_populated(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_populated_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Populated for f32 {
    fn is_populated(&self) -> bool {
        *self != 0.0
    }
}

impl Populated for f64 {
    fn is_populated(&self) -> bool {
        *self != 0.0
    }
}
