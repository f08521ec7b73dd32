//! Foldable descriptor - reducing a container to a summary value.
//!
//! Only `foldr` and `foldl` are required. Every search and aggregation in
//! [`crate::derived`] (`find`, `all`, `count`, `concat`, `fold_m`, ...) is
//! built on them without knowing the container.
//!
//! Folds run strictly in container order: `foldl` visits elements left to
//! right, `foldr` right to left. Derived operations rely on this.
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Foldable;
//! use lambars_dict::instances::VecFoldable;
//!
//! let digits = vec![1, 2, 3];
//! assert_eq!(VecFoldable.foldl(|acc: String, n: i32| format!("{acc}{n}"), String::new(), digits.clone()), "123");
//! assert_eq!(VecFoldable.foldr(|n: i32, acc: String| format!("{acc}{n}"), String::new(), digits), "321");
//! ```

use super::higher::{Applied, TypeConstructor};

/// A descriptor for containers that can be folded.
///
/// # Laws
///
/// For associative `f` with identity `z`:
///
/// ```text
/// foldl(f, z, t) == foldr(|a, b| f(a, b), z, t)
/// ```
pub trait Foldable {
    /// The type constructor this descriptor folds.
    type Constructor: TypeConstructor;

    /// Folds from the right: `f(a1, f(a2, ... f(an, initial)))`.
    fn foldr<A, B, F>(&self, function: F, initial: B, container: Applied<Self::Constructor, A>) -> B
    where
        F: FnMut(A, B) -> B;

    /// Folds from the left: `f(... f(f(initial, a1), a2) ..., an)`.
    fn foldl<A, B, F>(&self, function: F, initial: B, container: Applied<Self::Constructor, A>) -> B
    where
        F: FnMut(B, A) -> B;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionFoldable, ResultFoldable};
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), 15)]
    #[case(None, 10)]
    fn option_folds_as_zero_or_one(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(OptionFoldable.foldl(|acc, n| acc + n, 10, input), expected);
        assert_eq!(OptionFoldable.foldr(|n, acc| acc + n, 10, input), expected);
    }

    #[rstest]
    fn result_err_folds_as_empty() {
        let foldable = ResultFoldable::<String>::new();
        let folded = foldable.foldl(|acc: Vec<i32>, n: i32| [acc, vec![n]].concat(), vec![0], Err("e".to_string()));
        assert_eq!(folded, vec![0]);
    }
}
