//! Functor descriptor - mapping over the elements of a container.
//!
//! A functor descriptor knows how to apply a function to every element of
//! `Applied<Constructor, A>` while preserving its shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(|x| x, fa) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(|x| g(f(x)), fa) == map(g, map(f, fa))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Functor;
//! use lambars_dict::instances::ResultFunctor;
//!
//! let functor = ResultFunctor::<String>::new();
//! assert_eq!(functor.map(|n: i32| n * 2, Ok(21)), Ok(42));
//! assert_eq!(functor.map(|n: i32| n * 2, Err("e".to_string())), Err("e".to_string()));
//! ```

use super::higher::{Applied, TypeConstructor};

/// A descriptor for structure-preserving maps over `Constructor`.
///
/// Functions passed to `map` may be stored by lazy carriers (such as
/// [`State`](crate::instances::State)), hence the `'static` bounds; they may
/// be called once per element, hence `FnMut`.
pub trait Functor {
    /// The type constructor this functor maps over.
    type Constructor: TypeConstructor;

    /// Applies `function` to every element of `container`.
    fn map<A, B, F>(
        &self,
        function: F,
        container: Applied<Self::Constructor, A>,
    ) -> Applied<Self::Constructor, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static;

    /// Replaces every element with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::Functor;
    /// use lambars_dict::instances::VecFunctor;
    ///
    /// assert_eq!(VecFunctor.replace("x", vec![1, 2]), vec!["x", "x"]);
    /// ```
    fn replace<A, B>(
        &self,
        value: B,
        container: Applied<Self::Constructor, A>,
    ) -> Applied<Self::Constructor, B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        self.map(move |_: A| value.clone(), container)
    }

    /// Discards every element, keeping only the shape.
    fn void<A>(&self, container: Applied<Self::Constructor, A>) -> Applied<Self::Constructor, ()>
    where
        A: 'static,
    {
        self.replace((), container)
    }
}
