//! Category instances: plain functions and Kleisli arrows.
//!
//! Arrows are reference-counted so that composing does not consume the
//! arrows being composed; a single arrow may appear in several compositions.

use std::fmt;
use std::rc::Rc;

use crate::descriptor::{Applicative, Applied, Category, Monad, TypeConstructor};

// =============================================================================
// Function
// =============================================================================

/// A shared function arrow `A -> B`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::instances::Function;
///
/// let length = Function::new(|text: &str| text.len());
/// assert_eq!(length.call("four"), 4);
/// ```
pub struct Function<A, B> {
    function: Rc<dyn Fn(A) -> B>,
}

impl<A, B> Function<A, B> {
    /// Wraps `function` as an arrow.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Runs the arrow.
    pub fn call(&self, value: A) -> B {
        (self.function)(value)
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function(<fn>)")
    }
}

/// The category of functions: `id` is `|x| x`, `compose` is `g . f`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionCategory;

impl Category for FunctionCategory {
    type Arrow<A, B> = Function<A, B>;

    fn id<A: 'static>(&self) -> Function<A, A> {
        Function::new(|value| value)
    }

    fn compose<A, B, C>(&self, second: Function<B, C>, first: Function<A, B>) -> Function<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Function::new(move |value| second.call(first.call(value)))
    }
}

// =============================================================================
// Kleisli
// =============================================================================

/// A shared Kleisli arrow `A -> M<B>` for the monad constructor `M`.
pub struct Kleisli<M: TypeConstructor, A, B> {
    function: Rc<dyn Fn(A) -> Applied<M, B>>,
}

impl<M: TypeConstructor, A, B> Kleisli<M, A, B> {
    /// Wraps `function` as a Kleisli arrow.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> Applied<M, B> + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Runs the arrow.
    pub fn call(&self, value: A) -> Applied<M, B> {
        (self.function)(value)
    }
}

impl<M: TypeConstructor, A, B> Clone for Kleisli<M, A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<M: TypeConstructor, A, B> fmt::Debug for Kleisli<M, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Kleisli(<fn>)")
    }
}

/// The Kleisli category of a monad: `id` is `wrap`, `compose` chains with
/// `flat_map`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Category;
/// use lambars_dict::instances::{Kleisli, KleisliCategory, OptionConstructor, OptionMonad};
///
/// let category = KleisliCategory::new(OptionMonad::new());
/// let parse: Kleisli<OptionConstructor, &str, i32> = Kleisli::new(|text: &str| text.parse().ok());
/// let halve: Kleisli<OptionConstructor, i32, i32> =
///     Kleisli::new(|n: i32| (n % 2 == 0).then_some(n / 2));
///
/// let parse_then_halve = category.compose(halve, parse);
/// assert_eq!(parse_then_halve.call("10"), Some(5));
/// assert_eq!(parse_then_halve.call("7"), None);
/// assert_eq!(parse_then_halve.call("x"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KleisliCategory<M> {
    monad: M,
}

impl<M> KleisliCategory<M> {
    /// Builds the Kleisli category of `monad`.
    pub const fn new(monad: M) -> Self {
        Self { monad }
    }
}

impl<M> Category for KleisliCategory<M>
where
    M: Monad + Clone + 'static,
{
    type Arrow<A, B> = Kleisli<M::Constructor, A, B>;

    fn id<A: 'static>(&self) -> Kleisli<M::Constructor, A, A> {
        let monad = self.monad.clone();
        Kleisli::new(move |value: A| monad.applicative().wrap(value))
    }

    fn compose<A, B, C>(
        &self,
        second: Kleisli<M::Constructor, B, C>,
        first: Kleisli<M::Constructor, A, B>,
    ) -> Kleisli<M::Constructor, A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let monad = self.monad.clone();
        Kleisli::new(move |value: A| {
            let second = second.clone();
            monad.flat_map::<B, C, _>(move |middle| second.call(middle), first.call(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{ResultConstructor, ResultMonad, VecConstructor, VecMonad};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(41)]
    fn function_identity_is_neutral(#[case] value: i32) {
        let category = FunctionCategory;
        let negate = Function::new(|n: i32| -n);
        let left = category.compose(category.id(), negate.clone());
        let right = category.compose(negate.clone(), category.id());
        assert_eq!(left.call(value), negate.call(value));
        assert_eq!(right.call(value), negate.call(value));
    }

    #[rstest]
    fn kleisli_compose_short_circuits_on_err() {
        let category = KleisliCategory::new(ResultMonad::<String>::new());
        let checked: Kleisli<ResultConstructor<String>, i32, i32> = Kleisli::new(|n: i32| {
            if n < 0 { Err(format!("{n} < 0")) } else { Ok(n) }
        });
        let double: Kleisli<ResultConstructor<String>, i32, i32> = Kleisli::new(|n: i32| Ok(n * 2));

        let composed = category.compose(double, checked);
        assert_eq!(composed.call(4), Ok(8));
        assert_eq!(composed.call(-1), Err("-1 < 0".to_string()));
    }

    #[rstest]
    fn kleisli_id_wraps() {
        let category = KleisliCategory::new(VecMonad::new());
        let id: Kleisli<VecConstructor, char, char> = category.id();
        assert_eq!(id.call('x'), vec!['x']);
    }

    #[rstest]
    fn kleisli_compose_over_vec_branches() {
        let category = KleisliCategory::new(VecMonad::new());
        let neighbours: Kleisli<VecConstructor, i32, i32> = Kleisli::new(|n: i32| vec![n - 1, n + 1]);
        let twice = category.compose(neighbours.clone(), neighbours);
        assert_eq!(twice.call(0), vec![-2, 0, 0, 2]);
    }
}
