//! Core predicate trait and combinator chaining
//!
//! This module provides the foundational [`Predicate`] trait and the
//! [`PredicateExt`] extension trait for composing predicates with logical
//! operators.

use crate::combinators::{And, Not, Or, Xor};

/// A predicate over an argument tuple `Args`.
///
/// `Args` is one of `()`, `(A,)`, `(A, B)`, or `(A, B, C)` — the positional
/// arguments the predicate accepts, threaded through unchanged by every
/// combinator. Closures and `fn` items of matching arity implement this
/// trait automatically.
///
/// # Example
///
/// ```rust
/// use conjunct::predicate::Predicate;
///
/// let is_even = |x: i32| x % 2 == 0;
/// assert!(is_even.check((4,)));
/// assert!(!is_even.check((3,)));
///
/// let ordered = |a: i32, b: i32| a <= b;
/// assert!(ordered.check((1, 2)));
/// ```
pub trait Predicate<Args> {
    /// Evaluate this predicate on the given arguments.
    fn check(&self, args: Args) -> bool;
}

// Blanket impls for closures and fn items, one per supported arity.
// Tuples beyond three elements have no impl, which caps arity at the
// type level.

impl<F> Predicate<()> for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn check(&self, _args: ()) -> bool {
        self()
    }
}

impl<A, F> Predicate<(A,)> for F
where
    F: Fn(A) -> bool,
{
    #[inline]
    fn check(&self, args: (A,)) -> bool {
        self(args.0)
    }
}

impl<A, B, F> Predicate<(A, B)> for F
where
    F: Fn(A, B) -> bool,
{
    #[inline]
    fn check(&self, args: (A, B)) -> bool {
        self(args.0, args.1)
    }
}

impl<A, B, C, F> Predicate<(A, B, C)> for F
where
    F: Fn(A, B, C) -> bool,
{
    #[inline]
    fn check(&self, args: (A, B, C)) -> bool {
        self(args.0, args.1, args.2)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical
/// operators. All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let out_of_range = (|x: i32| x > 0).and(|x: i32| x < 100).not();
/// assert!(out_of_range.check((-5,))); // not (> 0 and < 100)
/// assert!(!out_of_range.check((50,)));
/// ```
pub trait PredicateExt<Args>: Predicate<Args> + Sized {
    /// Combine with AND logic.
    ///
    /// Evaluates `self` first; `other` is not evaluated when `self`
    /// returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conjunct::prelude::*;
    ///
    /// let p = (|x: i32| x > 0).and(|x: i32| x < 100);
    /// assert!(p.check((50,)));
    /// assert!(!p.check((0,)));
    /// assert!(!p.check((100,)));
    /// ```
    fn and<P: Predicate<Args>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Evaluates `self` first; `other` is not evaluated when `self`
    /// returns true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conjunct::prelude::*;
    ///
    /// let p = (|x: i32| x < 0).or(|x: i32| x > 100);
    /// assert!(p.check((-5,)));
    /// assert!(p.check((150,)));
    /// assert!(!p.check((50,)));
    /// ```
    fn or<P: Predicate<Args>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with XOR logic.
    ///
    /// Both predicates are always evaluated, `self` first. The result is
    /// true iff exactly one of them returns true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conjunct::prelude::*;
    ///
    /// let p = (|x: i32| x > 0).xor(|x: i32| x % 2 == 0);
    /// assert!(p.check((3,)));  // positive, odd
    /// assert!(p.check((-4,))); // negative, even
    /// assert!(!p.check((4,))); // both true
    /// assert!(!p.check((-3,))); // both false
    /// ```
    fn xor<P: Predicate<Args>>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conjunct::prelude::*;
    ///
    /// let p = (|x: i32| x > 0).not();
    /// assert!(p.check((-5,)));
    /// assert!(!p.check((5,)));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<Args, P: Predicate<Args>> PredicateExt<Args> for P {}
