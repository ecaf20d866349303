//! Test support for observing predicate evaluation
//!
//! The combinators promise specific evaluation orders: `and`/`or` stop at
//! the first decisive result, `xor` always runs both sides. [`Spy`] makes
//! those promises observable by counting how often a wrapped predicate is
//! actually invoked.
//!
//! # Example
//!
//! ```rust
//! use conjunct::prelude::*;
//! use conjunct::testing::Spy;
//!
//! let (spy, calls) = Spy::new(|_: i32| true);
//! let p = and(|_: i32| false, spy);
//!
//! assert!(!p.check((7,)));
//! assert_eq!(calls.get(), 0); // short-circuited past the spy
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::predicate::Predicate;

/// Wraps a predicate and counts how many times it is evaluated.
///
/// Counting happens before the inner predicate runs, so a panicking inner
/// predicate still registers its invocation.
pub struct Spy<P> {
    inner: P,
    calls: Rc<Cell<usize>>,
}

/// Shared handle reporting how often a [`Spy`] has fired.
///
/// Obtained from [`Spy::new`]; there is no standalone constructor.
#[derive(Clone, Debug)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    /// Number of times the spied predicate has been evaluated.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl<P> Spy<P> {
    /// Wrap `inner`, returning the spy and a handle to its call count.
    pub fn new(inner: P) -> (Self, CallCount) {
        let calls = Rc::new(Cell::new(0));
        (
            Spy {
                inner,
                calls: Rc::clone(&calls),
            },
            CallCount(calls),
        )
    }
}

impl<Args, P: Predicate<Args>> Predicate<Args> for Spy<P> {
    fn check(&self, args: Args) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.inner.check(args)
    }
}

impl<P> fmt::Debug for Spy<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spy")
            .field("inner", &"<predicate>")
            .field("calls", &self.calls.get())
            .finish()
    }
}
