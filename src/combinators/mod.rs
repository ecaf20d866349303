//! Logical combinators over predicates
//!
//! Each combinator is a zero-cost struct capturing its input predicates by
//! value. Free factory functions mirror the struct constructors; for method
//! chaining use [`PredicateExt`](crate::predicate::PredicateExt).

mod and;
mod not;
mod or;
mod xor;

pub use and::{all_of, and, and3, AllOf, And, And3};
pub use not::{not, Not};
pub use or::{any_of, none_of, or, or3, AnyOf, NoneOf, Or, Or3};
pub use xor::{xor, Xor};
