//! # Conjunct
//!
//! Logical combinators over predicate functions.
//!
//! Given one or more functions returning `bool`, Conjunct builds a new
//! predicate of the same argument shape that applies NOT, AND, OR, or XOR
//! semantics across the results. Composition is pure and allocation-free:
//! every combinator is a small struct that captures its input predicates by
//! value and forwards the argument tuple to them.
//!
//! ## Argument tuples
//!
//! Predicates take their positional arguments as a tuple: `()` for
//! zero-argument predicates, `(A,)` for one, `(A, B)` for two, and
//! `(A, B, C)` for three. Plain closures and `fn` items of those arities
//! implement [`Predicate`] out of the box. Combining predicates never
//! changes the argument shape: the result of `and(p, q)` accepts exactly
//! the tuple `p` and `q` accept.
//!
//! ## Evaluation order
//!
//! `and`/`or` evaluate left to right and short-circuit, exactly like `&&`
//! and `||`. `xor` always evaluates both operands, left first. A panic in
//! any evaluated predicate propagates unchanged and skips everything after
//! it.
//!
//! ## Quick example
//!
//! ```rust
//! use conjunct::prelude::*;
//!
//! fn is_none_or_empty(s: Option<&str>) -> bool {
//!     s.map_or(true, str::is_empty)
//! }
//!
//! fn parses_as_int(s: Option<&str>) -> bool {
//!     s.map_or(false, |v| v.parse::<i32>().is_ok())
//! }
//!
//! let looks_like_int = and(not(is_none_or_empty), parses_as_int);
//!
//! assert!(looks_like_int.check((Some("1234"),)));
//! assert!(looks_like_int.check((Some("-1"),)));
//! assert!(!looks_like_int.check((None,)));
//! assert!(!looks_like_int.check((Some("1abc"),)));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod predicate;
pub mod testing;

// Re-exports
pub use combinators::{
    all_of, and, and3, any_of, none_of, not, or, or3, xor, AllOf, And, And3, AnyOf, NoneOf, Not,
    Or, Or3, Xor,
};
pub use predicate::{Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{
        all_of, and, and3, any_of, none_of, not, or, or3, xor, AllOf, And, And3, AnyOf, NoneOf,
        Not, Or, Or3, Xor,
    };
    pub use crate::predicate::{Predicate, PredicateExt};
}
