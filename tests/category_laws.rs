//! Property-based tests for Category laws.
//!
//! - **Left Identity**: `compose(id, f) == f`
//! - **Right Identity**: `compose(f, id) == f`
//! - **Associativity**: `compose(h, compose(g, f)) == compose(compose(h, g), f)`
//!
//! Arrows are compared extensionally by calling both sides on the same input.

use lambars_dict::descriptor::Category;
use lambars_dict::instances::{
    Function, FunctionCategory, Kleisli, KleisliCategory, OptionConstructor, OptionMonad,
    ResultConstructor, ResultMonad, VecConstructor, VecMonad,
};
use proptest::prelude::*;

// =============================================================================
// Function
// =============================================================================

fn increment() -> Function<i32, i32> {
    Function::new(|n: i32| n.wrapping_add(1))
}

fn render() -> Function<i32, String> {
    Function::new(|n: i32| n.to_string())
}

fn length() -> Function<String, usize> {
    Function::new(|text: String| text.len())
}

proptest! {
    #[test]
    fn prop_function_identity_laws(value in any::<i32>()) {
        let category = FunctionCategory;
        let left = category.compose(category.id(), render());
        let right = category.compose(render(), category.id());
        prop_assert_eq!(left.call(value), render().call(value));
        prop_assert_eq!(right.call(value), render().call(value));
    }

    #[test]
    fn prop_function_associativity(value in any::<i32>()) {
        let category = FunctionCategory;
        let left = category.compose(length(), category.compose(render(), increment()));
        let right = category.compose(category.compose(length(), render()), increment());
        prop_assert_eq!(left.call(value), right.call(value));
    }
}

// =============================================================================
// Kleisli
// =============================================================================

type Checked<A, B> = Kleisli<ResultConstructor<String>, A, B>;

fn parse() -> Checked<String, i32> {
    Kleisli::new(|text: String| text.parse::<i32>().map_err(|error| error.to_string()))
}

fn non_negative() -> Checked<i32, u32> {
    Kleisli::new(|n: i32| u32::try_from(n).map_err(|_| format!("{n} is negative")))
}

fn even() -> Checked<u32, u32> {
    Kleisli::new(|n: u32| if n % 2 == 0 { Ok(n) } else { Err(format!("{n} is odd")) })
}

proptest! {
    #[test]
    fn prop_result_kleisli_identity_laws(text in "-?[0-9]{1,4}|[a-z]{1,3}") {
        let category = KleisliCategory::new(ResultMonad::<String>::new());
        let left = category.compose(category.id(), parse());
        let right = category.compose(parse(), category.id());
        prop_assert_eq!(left.call(text.clone()), parse().call(text.clone()));
        prop_assert_eq!(right.call(text.clone()), parse().call(text));
    }

    #[test]
    fn prop_result_kleisli_associativity(text in "-?[0-9]{1,4}|[a-z]{1,3}") {
        let category = KleisliCategory::new(ResultMonad::<String>::new());
        let left = category.compose(even(), category.compose(non_negative(), parse()));
        let right = category.compose(category.compose(even(), non_negative()), parse());
        prop_assert_eq!(left.call(text.clone()), right.call(text));
    }

    #[test]
    fn prop_option_kleisli_associativity(value in any::<i32>()) {
        let category = KleisliCategory::new(OptionMonad::new());
        let halve: Kleisli<OptionConstructor, i32, i32> =
            Kleisli::new(|n: i32| (n % 2 == 0).then_some(n / 2));
        let root: Kleisli<OptionConstructor, i32, i32> = Kleisli::new(|n: i32| (n >= 0).then(|| n.isqrt()));
        let left = category.compose(halve.clone(), category.compose(root.clone(), halve.clone()));
        let right = category.compose(category.compose(halve.clone(), root), halve);
        prop_assert_eq!(left.call(value), right.call(value));
    }

    #[test]
    fn prop_vec_kleisli_identity_laws(value in any::<i32>()) {
        let category = KleisliCategory::new(VecMonad::new());
        let split: Kleisli<VecConstructor, i32, i32> =
            Kleisli::new(|n: i32| vec![n, n.wrapping_neg()]);
        let left = category.compose(category.id(), split.clone());
        let right = category.compose(split.clone(), category.id());
        prop_assert_eq!(left.call(value), split.call(value));
        prop_assert_eq!(right.call(value), split.call(value));
    }
}
