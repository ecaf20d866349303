//! XOR combinator

use crate::predicate::Predicate;

/// XOR combinator - true iff exactly one predicate is true.
///
/// Both predicates are always evaluated (both results are needed), left
/// first. A panic in the left predicate skips the right one.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<Args, P1, P2> Predicate<Args> for Xor<P1, P2>
where
    Args: Clone,
    P1: Predicate<Args>,
    P2: Predicate<Args>,
{
    #[inline]
    fn check(&self, args: Args) -> bool {
        self.0.check(args.clone()) ^ self.1.check(args)
    }
}

/// Create a predicate that is true when `first` and `second` disagree.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// assert!(xor(|| true, || false).check(()));
/// assert!(!xor(|| true, || true).check(()));
/// assert!(!xor(|| false, || false).check(()));
/// ```
pub fn xor<P1, P2>(first: P1, second: P2) -> Xor<P1, P2> {
    Xor(first, second)
}
