//! OR combinators - short-circuit disjunction

use crate::predicate::Predicate;

/// OR combinator - either predicate must be true.
///
/// Predicates are evaluated left to right with `||` semantics: the second
/// predicate is not evaluated when the first returns true, and a panic in
/// an evaluated predicate aborts the rest.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<Args, P1, P2> Predicate<Args> for Or<P1, P2>
where
    Args: Clone,
    P1: Predicate<Args>,
    P2: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.check(args.clone()) || self.1.check(args)
    }
}

/// OR combinator over three predicates.
///
/// Same left-to-right short-circuit semantics as [`Or`].
#[derive(Clone, Copy, Debug)]
pub struct Or3<P1, P2, P3>(pub P1, pub P2, pub P3);

impl<Args, P1, P2, P3> Predicate<Args> for Or3<P1, P2, P3>
where
    Args: Clone,
    P1: Predicate<Args>,
    P2: Predicate<Args>,
    P3: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.check(args.clone()) || self.1.check(args.clone()) || self.2.check(args)
    }
}

/// Create a predicate that is true when either `first` or `second` is true.
///
/// Evaluation is left to right and short-circuits at the first true.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let out_of_range = or(|x: i32| x < 0, |x: i32| x > 100);
/// assert!(out_of_range.check((-5,)));
/// assert!(out_of_range.check((150,)));
/// assert!(!out_of_range.check((50,)));
/// ```
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or(first, second)
}

/// Create a predicate that is true when any of the three predicates is true.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let whitespace_like = or3(
///     |s: &str| s.is_empty(),
///     |s: &str| s.trim().is_empty(),
///     |s: &str| s.starts_with('#'),
/// );
/// assert!(whitespace_like.check(("   ",)));
/// assert!(whitespace_like.check(("# comment",)));
/// assert!(!whitespace_like.check(("text",)));
/// ```
pub fn or3<P1, P2, P3>(first: P1, second: P2, third: P3) -> Or3<P1, P2, P3> {
    Or3(first, second, third)
}

/// Check if any predicate is satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array, so all predicates must share one type; for
/// mixed predicate types use [`or`]/[`or3`] or `.or()` chaining. Evaluation
/// short-circuits left to right. An empty array is false.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<Args, P, const N: usize> Predicate<Args> for AnyOf<P, N>
where
    Args: Clone,
    P: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.iter().any(|p| p.check(args.clone()))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let special: [fn(i32) -> bool; 3] = [|x| x == 1, |x| x == 5, |x| x == 10];
/// let is_special = any_of(special);
/// assert!(is_special.check((5,)));
/// assert!(!is_special.check((7,)));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied.
///
/// Equivalent to `not(any_of(...))`: stops at the first predicate that
/// returns true. An empty array is true.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<Args, P, const N: usize> Predicate<Args> for NoneOf<P, N>
where
    Args: Clone,
    P: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        !self.0.iter().any(|p| p.check(args.clone()))
    }
}

/// Create a predicate that checks if no given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let special: [fn(i32) -> bool; 2] = [|x| x == 1, |x| x == 5];
/// let ordinary = none_of(special);
/// assert!(ordinary.check((7,)));
/// assert!(!ordinary.check((5,)));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
