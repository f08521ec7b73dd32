//! End-to-end tests for the `Result` descriptor bundle.
//!
//! Every descriptor of the bundle is exercised through the derived
//! operations, the way a consumer would combine them.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::rc::Rc;

use lambars_dict::derived::{concat_map, count, fold_m, traverse};
use lambars_dict::descriptor::{Applicative, Eq, Functor, Monad, Ord, Show, Traversable};
use lambars_dict::instances::{
    Additive, Native, OptionApplicative, ResultApplicative, ResultEq, ResultFoldable,
    ResultFunctor, ResultMonad, ResultOrd, ResultShow, ResultTraversable, VecApplicative,
    VecFoldable, unwrap_err, unwrap_ok,
};
use proptest::prelude::*;
use rstest::rstest;

type Outcome = Result<i32, String>;

fn native_ord() -> ResultOrd<Native<i32>, Native<String>> {
    ResultOrd::new(Native::new(), Native::new())
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop::result::maybe_ok(-100i32..100, "[a-c]{0,2}")
}

// =============================================================================
// Eq / Ord / Show
// =============================================================================

proptest! {
    #[test]
    fn prop_ord_is_consistent_with_eq(left in outcome(), right in outcome()) {
        let ord = native_ord();
        prop_assert_eq!(ord.compare(&left, &right) == Ordering::Equal, ord.equality().eq(&left, &right));
    }

    #[test]
    fn prop_ord_is_antisymmetric(left in outcome(), right in outcome()) {
        let ord = native_ord();
        prop_assert_eq!(ord.compare(&left, &right), ord.compare(&right, &left).reverse());
    }

    #[test]
    fn prop_ok_always_sorts_before_err(value in any::<i32>(), error in ".{0,6}") {
        let ord = native_ord();
        prop_assert!(ord.lt(&Ok(value), &Err(error.clone())));
        prop_assert!(ord.gt(&Err(error), &Ok(value)));
    }

    #[test]
    fn prop_standalone_eq_matches_partial_eq(left in outcome(), right in outcome()) {
        let eq = ResultEq::new(Native::<i32>::new(), Native::<String>::new());
        prop_assert_eq!(eq.eq(&left, &right), left == right);
    }
}

#[rstest]
#[case(Ok(1), Ok(2), Ordering::Less)]
#[case(Ok(2), Ok(2), Ordering::Equal)]
#[case(Err("b".to_string()), Err("a".to_string()), Ordering::Greater)]
#[case(Ok(9), Err("a".to_string()), Ordering::Less)]
fn compare_samples(#[case] left: Outcome, #[case] right: Outcome, #[case] expected: Ordering) {
    assert_eq!(native_ord().compare(&left, &right), expected);
}

#[rstest]
fn min_and_max_follow_ok_before_err() {
    let ord = native_ord();
    assert_eq!(ord.min(Err("x".to_string()), Ok(100)), Ok(100));
    assert_eq!(ord.max(Err("x".to_string()), Ok(100)), Err("x".to_string()));
}

#[rstest]
fn show_delegates_to_payload_descriptors() {
    let show = ResultShow::new(Native::<f64>::new(), Native::<char>::new());
    assert_eq!(show.show(&Ok(1.5)), "Ok(1.5)");
    assert_eq!(show.show(&Err('x')), "Err(x)");
}

// =============================================================================
// Functor / Applicative / Monad
// =============================================================================

#[rstest]
fn flat_map_short_circuits_on_err() {
    let monad = ResultMonad::<&str>::new();
    assert_eq!(monad.flat_map(|x: i32| Ok(x + 1), Err("boom")), Err("boom"));
    assert_eq!(monad.flat_map(|x: i32| Ok(x + 1), Ok(1)), Ok(2));
}

#[rstest]
fn map_never_calls_function_on_err() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mapped = ResultFunctor::<&str>::new().map(
        move |x: i32| {
            counter.set(counter.get() + 1);
            x
        },
        Err("e"),
    );
    assert_eq!(mapped, Err("e"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Ok(2), Ok(3), Ok(6))]
#[case(Err("left"), Ok(3), Err("left"))]
#[case(Ok(2), Err("right"), Err("right"))]
#[case(Err("left"), Err("right"), Err("left"))]
fn map2_propagates_first_err(
    #[case] left: Result<i32, &'static str>,
    #[case] right: Result<i32, &'static str>,
    #[case] expected: Result<i32, &'static str>,
) {
    let applicative = ResultApplicative::<&'static str>::new();
    assert_eq!(applicative.map2(|a: i32, b: i32| a * b, left, right), expected);
}

#[rstest]
fn seq_right_and_seq_left_keep_errors() {
    let applicative = ResultApplicative::<&str>::new();
    assert_eq!(applicative.seq_right(Ok::<_, &str>(1), Ok::<_, &str>("kept")), Ok("kept"));
    assert_eq!(applicative.seq_left(Ok::<_, &str>(1), Err::<u8, _>("dropped")), Err("dropped"));
}

#[rstest]
fn join_flattens_nested_results() {
    let monad = ResultMonad::<&str>::new();
    assert_eq!(monad.join(Ok(Ok(3))), Ok(3));
    assert_eq!(monad.join(Ok(Err::<i32, _>("inner"))), Err("inner"));
    assert_eq!(monad.join(Err::<Result<i32, &str>, _>("outer")), Err("outer"));
}

// =============================================================================
// Foldable / Traversable
// =============================================================================

#[rstest]
fn traverse_calls_function_once_for_ok() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let traversed = ResultTraversable::<&str>::new().traverse(
        &OptionApplicative::new(),
        move |x: i32| {
            counter.set(counter.get() + 1);
            Some(x * 2)
        },
        Ok(5),
    );
    assert_eq!(traversed, Some(Ok(10)));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn traverse_over_err_wraps_without_calling() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let applicative = VecApplicative::new();
    let traversed = traverse(
        &ResultTraversable::<&str>::new(),
        &applicative,
        move |x: i32| {
            counter.set(counter.get() + 1);
            vec![x, x]
        },
        Err("e"),
    );
    assert_eq!(traversed, applicative.wrap(Err("e")));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Ok(4), 1, 4)]
#[case(Err("e"), 0, 0)]
fn result_folds_as_zero_or_one_element(
    #[case] value: Result<i32, &'static str>,
    #[case] expected_count: usize,
    #[case] expected_sum: i32,
) {
    let foldable = ResultFoldable::<&'static str>::new();
    assert_eq!(count(&foldable, value), expected_count);
    assert_eq!(
        concat_map(&foldable, &Additive::<i32>::new(), |x: i32| x, value),
        expected_sum
    );
}

#[rstest]
fn fold_m_stops_at_first_failure() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let result = fold_m(
        &VecFoldable,
        &ResultMonad::<&str>::new(),
        move |total: i32, n: i32| {
            log.borrow_mut().push(n);
            if n == 2 { Err("stop") } else { Ok(total + n) }
        },
        0,
        vec![1, 2, 3],
    );
    assert_eq!(result, Err("stop"));
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

// =============================================================================
// Partial accessors
// =============================================================================

#[rstest]
fn unwrap_accessors_return_matching_payload() {
    assert_eq!(unwrap_ok(Ok::<_, String>(7)), 7);
    assert_eq!(unwrap_err(Err::<u8, _>("bad")), "bad");
}

#[rstest]
fn unwrap_accessors_accept_payloads_without_debug() {
    #[derive(PartialEq)]
    struct Opaque(u8);

    assert!(unwrap_ok(Ok::<_, Opaque>(Opaque(1))) == Opaque(1));
    assert!(unwrap_err(Err::<Opaque, _>(Opaque(2))) == Opaque(2));
}

#[rstest]
#[should_panic(expected = "unwrap_ok called on Err")]
fn unwrap_ok_panics_without_formatting_the_error() {
    struct Opaque;

    let _ = unwrap_ok(Err::<u8, _>(Opaque));
}

#[rstest]
#[should_panic(expected = "unwrap_ok called on Err")]
fn unwrap_ok_on_err_names_the_variant() {
    unwrap_ok(Err::<i32, _>("missing"));
}

#[rstest]
#[should_panic(expected = "unwrap_err called on Ok")]
fn unwrap_err_on_ok_names_the_variant() {
    unwrap_err::<i32, &str>(Ok(3));
}
