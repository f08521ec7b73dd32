//! Monad descriptor - sequencing dependent computations.
//!
//! A monad descriptor owns the [`Applicative`] descriptor of its constructor
//! and adds `flat_map`. `wrap` comes from the applicative.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(f, wrap(a)) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(wrap, m) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(g, flat_map(f, m)) == flat_map(|x| flat_map(g, f(x)), m)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Monad;
//! use lambars_dict::instances::ResultMonad;
//!
//! let monad = ResultMonad::<String>::new();
//! let halve = |n: i32| if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) };
//!
//! assert_eq!(monad.flat_map(halve, Ok(8)), Ok(4));
//! assert_eq!(monad.flat_map(halve, Ok(3)), Err("3 is odd".to_string()));
//! ```

use super::Applicative;
use super::higher::{Applied, TypeConstructor};

/// A descriptor for monads over `Constructor`.
pub trait Monad {
    /// The type constructor this monad sequences.
    type Constructor: TypeConstructor;

    /// The owned applicative descriptor.
    type Applicative: Applicative<Constructor = Self::Constructor>;

    /// Returns the owned applicative descriptor.
    fn applicative(&self) -> &Self::Applicative;

    /// Feeds the result of `container` into `function` and flattens.
    fn flat_map<A, B, F>(
        &self,
        function: F,
        container: Applied<Self::Constructor, A>,
    ) -> Applied<Self::Constructor, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Applied<Self::Constructor, B> + 'static;

    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::Monad;
    /// use lambars_dict::instances::OptionMonad;
    ///
    /// assert_eq!(OptionMonad::new().join(Some(Some(3))), Some(3));
    /// assert_eq!(OptionMonad::new().join(Some(None::<i32>)), None);
    /// ```
    fn join<A>(
        &self,
        nested: Applied<Self::Constructor, Applied<Self::Constructor, A>>,
    ) -> Applied<Self::Constructor, A>
    where
        A: 'static,
        Applied<Self::Constructor, A>: 'static,
    {
        self.flat_map::<Applied<Self::Constructor, A>, A, _>(|inner| inner, nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{ResultMonad, VecMonad};
    use rstest::rstest;

    #[rstest]
    #[case(Ok(2), Ok(3))]
    #[case(Err("boom"), Err("boom"))]
    fn result_flat_map_short_circuits(
        #[case] input: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        let monad = ResultMonad::<&'static str>::new();
        assert_eq!(monad.flat_map(|x: i32| Ok(x + 1), input), expected);
    }

    #[rstest]
    fn vec_flat_map_concatenates() {
        let monad = VecMonad::new();
        assert_eq!(monad.flat_map(|n: i32| vec![n; n as usize], vec![1, 2, 3]), vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn result_join_keeps_outer_error_first() {
        let monad = ResultMonad::<&'static str>::new();
        assert_eq!(monad.join(Ok::<Result<i32, &str>, &str>(Ok(1))), Ok(1));
        assert_eq!(monad.join(Ok::<Result<i32, &str>, &str>(Err("inner"))), Err("inner"));
        assert_eq!(monad.join(Err::<Result<i32, &str>, &str>("outer")), Err("outer"));
    }
}
