//! AND combinators - short-circuit conjunction

use crate::predicate::Predicate;

/// AND combinator - both predicates must be true.
///
/// Predicates are evaluated left to right with `&&` semantics: the second
/// predicate is not evaluated when the first returns false, and a panic in
/// an evaluated predicate aborts the rest.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<Args, P1, P2> Predicate<Args> for And<P1, P2>
where
    Args: Clone,
    P1: Predicate<Args>,
    P2: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.check(args.clone()) && self.1.check(args)
    }
}

/// AND combinator over three predicates.
///
/// Same left-to-right short-circuit semantics as [`And`].
#[derive(Clone, Copy, Debug)]
pub struct And3<P1, P2, P3>(pub P1, pub P2, pub P3);

impl<Args, P1, P2, P3> Predicate<Args> for And3<P1, P2, P3>
where
    Args: Clone,
    P1: Predicate<Args>,
    P2: Predicate<Args>,
    P3: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.check(args.clone()) && self.1.check(args.clone()) && self.2.check(args)
    }
}

/// Create a predicate that is true when both `first` and `second` are true.
///
/// Evaluation is left to right and short-circuits at the first false.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let in_range = and(|x: i32| x > 0, |x: i32| x < 100);
/// assert!(in_range.check((50,)));
/// assert!(!in_range.check((0,)));
/// assert!(!in_range.check((100,)));
/// ```
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And(first, second)
}

/// Create a predicate that is true when all three predicates are true.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let valid = and3(
///     |s: &str| !s.is_empty(),
///     |s: &str| s.len() < 10,
///     |s: &str| s.is_ascii(),
/// );
/// assert!(valid.check(("abc",)));
/// assert!(!valid.check(("",)));
/// ```
pub fn and3<P1, P2, P3>(first: P1, second: P2, third: P3) -> And3<P1, P2, P3> {
    And3(first, second, third)
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array, so all predicates must share one type; for
/// mixed predicate types use [`and`]/[`and3`] or `.and()` chaining.
/// Evaluation short-circuits left to right. An empty array is vacuously
/// true.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<Args, P, const N: usize> Predicate<Args> for AllOf<P, N>
where
    Args: Clone,
    P: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.iter().all(|p| p.check(args.clone()))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// let bounds: [fn(i32) -> bool; 3] = [|x| x > 0, |x| x > -10, |x| x > -100];
/// let above_all = all_of(bounds);
/// assert!(above_all.check((50,)));
/// assert!(!above_all.check((-50,)));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}
