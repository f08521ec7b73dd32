//! Traversable descriptor - effectful maps that rebuild the container.
//!
//! A traversable descriptor owns both a [`Functor`] and a [`Foldable`]
//! descriptor for its constructor and adds `traverse`, which is generic over
//! *any* [`Applicative`] descriptor passed at the call site.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! traverse(IdentityApplicative, |x| Identity(f(x)), t) == Identity(map(f, t))
//! ```
//!
//! ## Naturality and Composition
//!
//! Hold for every lawful applicative; see `tests/traversable_laws.rs`.
//!
//! Effects are sequenced left to right in container order.
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Traversable;
//! use lambars_dict::instances::{ResultApplicative, VecTraversable};
//!
//! let traversable = VecTraversable::new();
//! let applicative = ResultApplicative::<String>::new();
//! let parse = |text: &'static str| text.parse::<i32>().map_err(|error| error.to_string());
//!
//! assert_eq!(traversable.traverse(&applicative, parse, vec!["1", "2"]), Ok(vec![1, 2]));
//! assert!(traversable.traverse(&applicative, parse, vec!["1", "x"]).is_err());
//! ```

use super::higher::{Applied, TypeConstructor};
use super::{Applicative, Foldable, Functor};

/// A descriptor for traversable containers.
pub trait Traversable {
    /// The type constructor being traversed.
    type Constructor: TypeConstructor;

    /// The owned functor descriptor.
    type Functor: Functor<Constructor = Self::Constructor>;

    /// The owned foldable descriptor.
    type Foldable: Foldable<Constructor = Self::Constructor>;

    /// Returns the owned functor descriptor.
    fn functor(&self) -> &Self::Functor;

    /// Returns the owned foldable descriptor.
    fn foldable(&self) -> &Self::Foldable;

    /// Applies `function` to every element, sequences the effects with
    /// `applicative`, and rebuilds the container inside the effect.
    fn traverse<G, A, B, F>(
        &self,
        applicative: &G,
        function: F,
        container: Applied<Self::Constructor, A>,
    ) -> Applied<G::Constructor, Applied<Self::Constructor, B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Applied<G::Constructor, B>;
}
