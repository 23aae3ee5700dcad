//! Type identity for the instance-of predicates.
//!
//! Rust checks types statically, so "is an instance of" compares the
//! [`TypeId`] of the checked value's own type with a set of candidates. A
//! reference is a different type from its referent: `&i32` is not `i32`.

use std::any::{type_name, TypeId};
use std::fmt;

/// A single type to match against.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name as reported by [`type_name`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One or more candidate types.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeSet(Vec<TypeTag>);

impl TypeSet {
    /// True when `T` is one of the candidates.
    #[must_use]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.0.iter().any(|tag| tag.id == id)
    }

    /// The candidate tags.
    #[must_use]
    pub fn tags(&self) -> &[TypeTag] {
        &self.0
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => single.fmt(f),
            tags => {
                let mut tuple = f.debug_tuple("");
                for tag in tags {
                    tuple.field(tag);
                }
                tuple.finish()
            }
        }
    }
}

impl From<TypeTag> for TypeSet {
    fn from(tag: TypeTag) -> Self {
        Self(vec![tag])
    }
}

impl<const N: usize> From<[TypeTag; N]> for TypeSet {
    fn from(tags: [TypeTag; N]) -> Self {
        Self(tags.to_vec())
    }
}

impl From<Vec<TypeTag>> for TypeSet {
    fn from(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }
}

impl From<&[TypeTag]> for TypeSet {
    fn from(tags: &[TypeTag]) -> Self {
        Self(tags.to_vec())
    }
}
