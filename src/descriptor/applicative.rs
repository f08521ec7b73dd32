//! Applicative descriptor - lifting values and applying wrapped functions.
//!
//! An applicative descriptor owns the [`Functor`] descriptor of its
//! constructor and adds `wrap` (pure) and `apply` (`<*>`). Everything else,
//! `map2`, `seq_left`, `seq_right`, is derived from those two.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! apply(wrap(|x| x), v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! apply(wrap(f), wrap(x)) == wrap(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! apply(u, wrap(y)) == apply(wrap(|f| f(y)), u)
//! ```
//!
//! ## Map agreement
//!
//! ```text
//! map(f, v) == apply(wrap(f), v)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Applicative;
//! use lambars_dict::instances::OptionApplicative;
//!
//! let applicative = OptionApplicative::new();
//! assert_eq!(applicative.map2(|a: i32, b: i32| a + b, Some(1), Some(2)), Some(3));
//! assert_eq!(applicative.map2(|a: i32, b: i32| a + b, Some(1), None), None);
//! ```

use super::Functor;
use super::higher::{Applied, TypeConstructor};

/// A descriptor for applicative functors over `Constructor`.
pub trait Applicative {
    /// The type constructor this applicative acts on.
    type Constructor: TypeConstructor;

    /// The owned functor descriptor.
    type Functor: Functor<Constructor = Self::Constructor>;

    /// Returns the owned functor descriptor.
    fn functor(&self) -> &Self::Functor;

    /// Lifts a plain value into the constructor.
    fn wrap<A>(&self, value: A) -> Applied<Self::Constructor, A>
    where
        A: 'static;

    /// Applies wrapped functions to wrapped values.
    ///
    /// Multi-element carriers apply every function to every value, which is
    /// why values must be `Clone`.
    fn apply<A, B, F>(
        &self,
        functions: Applied<Self::Constructor, F>,
        values: Applied<Self::Constructor, A>,
    ) -> Applied<Self::Constructor, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static;

    /// Combines two wrapped values with a binary function.
    ///
    /// The default goes through `map` and `apply`; single-element carriers
    /// override it to avoid cloning.
    fn map2<A, B, C, F>(
        &self,
        function: F,
        left: Applied<Self::Constructor, A>,
        right: Applied<Self::Constructor, B>,
    ) -> Applied<Self::Constructor, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        let partial = self.functor().map(
            move |first: A| {
                let mut function = function.clone();
                move |second: B| function(first.clone(), second)
            },
            left,
        );
        self.apply(partial, right)
    }

    /// Sequences both effects, keeping the right value (`*>`).
    fn seq_right<A, B>(
        &self,
        left: Applied<Self::Constructor, A>,
        right: Applied<Self::Constructor, B>,
    ) -> Applied<Self::Constructor, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(|_: A, second: B| second, left, right)
    }

    /// Sequences both effects, keeping the left value (`<*`).
    fn seq_left<A, B>(
        &self,
        left: Applied<Self::Constructor, A>,
        right: Applied<Self::Constructor, B>,
    ) -> Applied<Self::Constructor, A>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(|first: A, _: B| first, left, right)
    }
}
