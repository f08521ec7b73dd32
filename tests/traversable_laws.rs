//! Property-based tests for Traversable laws.
//!
//! - **Identity**: `traverse(Identity, |x| Identity(f(x)), t) == Identity(map(f, t))`
//! - **Wrap**: `traverse(G, wrap, t) == wrap(t)`
//! - **Order**: effects run left to right and the first failure wins.

use std::cell::RefCell;
use std::rc::Rc;

use lambars_dict::derived::{for_traverse, sequence, traverse};
use lambars_dict::descriptor::{Applicative, Functor, Traversable};
use lambars_dict::instances::{
    Identity, IdentityApplicative, OptionApplicative, OptionTraversable, ResultApplicative,
    ResultTraversable, State, StateApplicative, VecApplicative, VecTraversable,
};
use proptest::prelude::*;
use rstest::rstest;

fn triple(n: i32) -> i32 {
    n.wrapping_mul(3)
}

proptest! {
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let traversable = VecTraversable::new();
        let traversed = traversable.traverse(
            &IdentityApplicative::new(),
            |x: i32| Identity(triple(x)),
            values.clone(),
        );
        prop_assert_eq!(traversed, Identity(traversable.functor().map(triple, values)));
    }

    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        let traversable = OptionTraversable::new();
        let traversed = traversable.traverse(&IdentityApplicative::new(), |x: i32| Identity(triple(x)), value);
        prop_assert_eq!(traversed, Identity(value.map(triple)));
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let traversable = ResultTraversable::<String>::new();
        let traversed = traversable.traverse(
            &IdentityApplicative::new(),
            |x: i32| Identity(triple(x)),
            value.clone(),
        );
        prop_assert_eq!(traversed, Identity(value.map(triple)));
    }

    #[test]
    fn prop_vec_traverse_wrap_is_wrap(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let applicative = OptionApplicative::new();
        let traversed = traverse(&VecTraversable::new(), &applicative, Some, values.clone());
        prop_assert_eq!(traversed, applicative.wrap(values));
    }

    #[test]
    fn prop_sequence_of_all_some_is_some(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let wrapped: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
        prop_assert_eq!(
            sequence(&VecTraversable::new(), &OptionApplicative::new(), wrapped),
            Some(values)
        );
    }

    #[test]
    fn prop_sequence_result_reports_first_error(
        values in prop::collection::vec(prop::result::maybe_ok(any::<i32>(), any::<String>()), 0..30),
    ) {
        let expected: Result<Vec<i32>, String> = values.iter().cloned().collect();
        prop_assert_eq!(
            sequence(&VecTraversable::new(), &ResultApplicative::<String>::new(), values),
            expected
        );
    }
}

#[rstest]
fn traverse_runs_effects_left_to_right() {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&visited);
    let traversed = for_traverse(
        &VecTraversable::new(),
        &OptionApplicative::new(),
        vec![1, 2, 3],
        move |n: i32| {
            log.borrow_mut().push(n);
            Some(n * 10)
        },
    );
    assert_eq!(traversed, Some(vec![10, 20, 30]));
    assert_eq!(*visited.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn traverse_with_vec_applicative_builds_every_combination() {
    let traversed = traverse(
        &VecTraversable::new(),
        &VecApplicative::new(),
        |n: i32| vec![n, -n],
        vec![1, 2],
    );
    assert_eq!(traversed, vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]]);
}

#[rstest]
fn traverse_with_state_threads_the_counter() {
    let label = |name: &'static str| -> State<u32, String, String> {
        State::new(move |counter: u32| Ok((format!("{name}#{counter}"), counter + 1)))
    };
    let traversed = traverse(
        &VecTraversable::new(),
        &StateApplicative::<u32, String>::new(),
        label,
        vec!["x", "y", "z"],
    );
    assert_eq!(
        traversed.run(7),
        Ok((vec!["x#7".to_string(), "y#8".to_string(), "z#9".to_string()], 10))
    );
}
