//! NOT combinator

use crate::predicate::Predicate;

/// NOT combinator - inverts the wrapped predicate.
///
/// The returned predicate accepts the same argument tuple as the wrapped
/// one. A panic in the wrapped predicate propagates unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<Args, P: Predicate<Args>> Predicate<Args> for Not<P> {
    #[inline]
    fn check(&self, args: Args) -> bool {
        !self.0.check(args)
    }
}

/// Create a predicate that is true when `pred` is false.
///
/// # Example
///
/// ```rust
/// use conjunct::prelude::*;
///
/// fn is_none_or_empty(s: Option<&str>) -> bool {
///     s.map_or(true, str::is_empty)
/// }
///
/// let present = not(is_none_or_empty);
/// assert!(!present.check((None,)));
/// assert!(!present.check((Some(""),)));
/// assert!(present.check((Some("abc"),)));
/// ```
pub fn not<P>(pred: P) -> Not<P> {
    Not(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverts_every_arity() {
        assert!(!not(|| true).check(()));
        assert!(not(|| false).check(()));

        assert!(not(|x: i32| x > 0).check((-1,)));
        assert!(!not(|x: i32| x > 0).check((1,)));

        let shorter = not(|a: &str, b: &str| a.len() >= b.len());
        assert!(shorter.check(("ab", "abcd")));
        assert!(!shorter.check(("abcd", "ab")));

        let triangle = |a: u32, b: u32, c: u32| a + b > c;
        assert!(!not(triangle).check((3, 4, 5)));
        assert!(not(triangle).check((1, 2, 10)));
    }

    #[test]
    fn double_negation_restores() {
        let is_even = |x: i32| x % 2 == 0;
        for x in [-2, -1, 0, 1, 2] {
            assert_eq!(not(not(is_even)).check((x,)), is_even.check((x,)));
        }
    }
}
