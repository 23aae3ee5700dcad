//! Capability traits behind the built-in predicates.
//!
//! Each trait says what a predicate means for a given type: when a value is
//! populated, when it is strictly `true`, when it reads as a number. Checking
//! a type that lacks the capability is a compile error, not a failed check.

mod expected;
mod numeric;
mod populated;
mod strict_bool;
mod types;

pub use expected::Expected;
pub use numeric::Numeric;
pub use populated::Populated;
pub use strict_bool::StrictBool;
pub use types::{TypeSet, TypeTag};
