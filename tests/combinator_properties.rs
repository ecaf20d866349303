//! Property-based tests for the logical combinators.
//!
//! Predicate results are driven from arbitrary booleans so every branch of
//! each truth table is exercised, alongside arbitrary inputs to confirm
//! arguments are threaded through untouched.

use conjunct::prelude::*;
use conjunct::testing::Spy;
use proptest::prelude::*;

proptest! {
    #[test]
    fn not_inverts(a in any::<bool>(), x in any::<i32>()) {
        let p = move |_: i32| a;
        prop_assert_eq!(not(p).check((x,)), !a);
    }

    #[test]
    fn and_matches_logical_and(a in any::<bool>(), b in any::<bool>(), x in any::<i32>()) {
        let p1 = move |_: i32| a;
        let p2 = move |_: i32| b;
        prop_assert_eq!(and(p1, p2).check((x,)), a && b);
    }

    #[test]
    fn and3_matches_logical_and(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>(),
        x in any::<i32>(),
    ) {
        let p1 = move |_: i32| a;
        let p2 = move |_: i32| b;
        let p3 = move |_: i32| c;
        prop_assert_eq!(and3(p1, p2, p3).check((x,)), a && b && c);
    }

    #[test]
    fn or_matches_logical_or(a in any::<bool>(), b in any::<bool>(), x in any::<i32>()) {
        let p1 = move |_: i32| a;
        let p2 = move |_: i32| b;
        prop_assert_eq!(or(p1, p2).check((x,)), a || b);
    }

    #[test]
    fn or3_matches_logical_or(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>(),
        x in any::<i32>(),
    ) {
        let p1 = move |_: i32| a;
        let p2 = move |_: i32| b;
        let p3 = move |_: i32| c;
        prop_assert_eq!(or3(p1, p2, p3).check((x,)), a || b || c);
    }

    #[test]
    fn xor_matches_result_inequality(a in any::<bool>(), b in any::<bool>(), x in any::<i32>()) {
        let p1 = move |_: i32| a;
        let p2 = move |_: i32| b;
        prop_assert_eq!(xor(p1, p2).check((x,)), a != b);
    }

    #[test]
    fn and_never_evaluates_past_a_false(b in any::<bool>(), x in any::<i32>()) {
        let (spy, calls) = Spy::new(move |_: i32| b);
        prop_assert!(!and(|_: i32| false, spy).check((x,)));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_never_evaluates_past_a_true(b in any::<bool>(), x in any::<i32>()) {
        let (spy, calls) = Spy::new(move |_: i32| b);
        prop_assert!(or(|_: i32| true, spy).check((x,)));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn xor_evaluates_both_exactly_once(a in any::<bool>(), b in any::<bool>(), x in any::<i32>()) {
        let (left, left_calls) = Spy::new(move |_: i32| a);
        let (right, right_calls) = Spy::new(move |_: i32| b);
        prop_assert_eq!(xor(left, right).check((x,)), a != b);
        prop_assert_eq!(left_calls.get(), 1);
        prop_assert_eq!(right_calls.get(), 1);
    }

    #[test]
    fn binary_arity_threads_both_arguments(x in any::<i32>(), y in any::<i32>()) {
        let lt = |a: i32, b: i32| a < b;
        let ne = |a: i32, b: i32| a != b;
        prop_assert_eq!(and(lt, ne).check((x, y)), x < y && x != y);
        prop_assert_eq!(or(lt, ne).check((x, y)), x < y || x != y);
        prop_assert_eq!(xor(lt, ne).check((x, y)), (x < y) != (x != y));
        prop_assert_eq!(not(lt).check((x, y)), !(x < y));
    }

    #[test]
    fn ternary_arity_threads_all_arguments(
        x in -1000i64..1000,
        y in -1000i64..1000,
        z in -1000i64..1000,
    ) {
        let sum_positive = |a: i64, b: i64, c: i64| a + b + c > 0;
        let all_distinct = |a: i64, b: i64, c: i64| a != b && b != c && a != c;
        prop_assert_eq!(
            and(sum_positive, all_distinct).check((x, y, z)),
            x + y + z > 0 && (x != y && y != z && x != z)
        );
        prop_assert_eq!(
            or(sum_positive, all_distinct).check((x, y, z)),
            x + y + z > 0 || (x != y && y != z && x != z)
        );
        prop_assert_eq!(
            xor(sum_positive, all_distinct).check((x, y, z)),
            (x + y + z > 0) != (x != y && y != z && x != z)
        );
    }

    #[test]
    fn array_combinators_match_folds(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>(),
        x in any::<i32>(),
    ) {
        let constant = |v: bool| move |_: i32| v;
        prop_assert_eq!(all_of([constant(a), constant(b), constant(c)]).check((x,)), a && b && c);
        prop_assert_eq!(any_of([constant(a), constant(b), constant(c)]).check((x,)), a || b || c);
        prop_assert_eq!(
            none_of([constant(a), constant(b), constant(c)]).check((x,)),
            !(a || b || c)
        );
    }
}
