//! Identity wrapper type - the identity functor.
//!
//! `Identity<A>` holds exactly one value and adds no effect. Its descriptors
//! are the reference point for the laws of the other bundles: traversing with
//! [`IdentityApplicative`] must agree with a plain `map`.

use crate::descriptor::{
    Applicative, Applied, Foldable, Functor, Monad, Traversable, TypeConstructor,
};

/// The identity functor - wraps a value without adding any behavior.
///
/// With the `serde` feature the wrapper is transparent: `Identity(3)`
/// serializes as `3`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::instances::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(42).0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Type constructor marker for `Identity<_>`.
pub enum IdentityConstructor {}

impl TypeConstructor for IdentityConstructor {
    type Applied<A> = Identity<A>;
}

/// Applies the function to the wrapped value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFunctor;

impl Functor for IdentityFunctor {
    type Constructor = IdentityConstructor;

    fn map<A, B, F>(&self, mut function: F, container: Identity<A>) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        Identity(function(container.0))
    }
}

descriptor! {
    /// Pure function application.
    pub struct IdentityApplicative {
        functor: IdentityFunctor = IdentityFunctor,
    }
}

impl Applicative for IdentityApplicative {
    type Constructor = IdentityConstructor;
    type Functor = IdentityFunctor;

    fn functor(&self) -> &IdentityFunctor {
        &self.functor
    }

    fn wrap<A>(&self, value: A) -> Identity<A>
    where
        A: 'static,
    {
        Identity(value)
    }

    fn apply<A, B, F>(&self, functions: Identity<F>, values: Identity<A>) -> Identity<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let Identity(mut function) = functions;
        Identity(function(values.0))
    }

    fn map2<A, B, C, F>(
        &self,
        mut function: F,
        left: Identity<A>,
        right: Identity<B>,
    ) -> Identity<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        Identity(function(left.0, right.0))
    }
}

descriptor! {
    /// Plain function composition in monadic form.
    pub struct IdentityMonad {
        applicative: IdentityApplicative = IdentityApplicative::new(),
    }
}

impl Monad for IdentityMonad {
    type Constructor = IdentityConstructor;
    type Applicative = IdentityApplicative;

    fn applicative(&self) -> &IdentityApplicative {
        &self.applicative
    }

    fn flat_map<A, B, F>(&self, mut function: F, container: Identity<A>) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Identity<B> + 'static,
    {
        function(container.0)
    }
}

/// Folds the single wrapped value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFoldable;

impl Foldable for IdentityFoldable {
    type Constructor = IdentityConstructor;

    fn foldr<A, B, F>(&self, mut function: F, initial: B, container: Identity<A>) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(container.0, initial)
    }

    fn foldl<A, B, F>(&self, mut function: F, initial: B, container: Identity<A>) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, container.0)
    }
}

descriptor! {
    /// Runs the effect of the single element.
    pub struct IdentityTraversable {
        functor: IdentityFunctor = IdentityFunctor,
        foldable: IdentityFoldable = IdentityFoldable,
    }
}

impl Traversable for IdentityTraversable {
    type Constructor = IdentityConstructor;
    type Functor = IdentityFunctor;
    type Foldable = IdentityFoldable;

    fn functor(&self) -> &IdentityFunctor {
        &self.functor
    }

    fn foldable(&self) -> &IdentityFoldable {
        &self.foldable
    }

    fn traverse<G, A, B, F>(
        &self,
        applicative: &G,
        mut function: F,
        container: Identity<A>,
    ) -> Applied<G::Constructor, Identity<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Applied<G::Constructor, B>,
    {
        applicative
            .functor()
            .map::<B, Identity<B>, _>(Identity, function(container.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::ResultApplicative;
    use rstest::rstest;

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Identity<&str> = "value".into();
        assert_eq!(wrapped.as_inner(), &"value");
    }

    #[rstest]
    fn identity_orders_by_inner_value() {
        assert!(Identity::new(1) < Identity::new(2));
    }

    #[rstest]
    fn flat_map_unwraps_once() {
        let monad = IdentityMonad::new();
        assert_eq!(monad.flat_map(|n: i32| Identity(n * 3), Identity(5)), Identity(15));
    }

    #[rstest]
    fn apply_calls_wrapped_function() {
        let applicative = IdentityApplicative::new();
        let result = applicative.apply(Identity(|text: &'static str| text.len()), Identity("four"));
        assert_eq!(result, Identity(4));
    }

    #[rstest]
    #[case(3, Ok(Identity(6)))]
    #[case(-1, Err("negative".to_string()))]
    fn traverse_moves_effect_outside(
        #[case] value: i32,
        #[case] expected: Result<Identity<i32>, String>,
    ) {
        let traversed = IdentityTraversable::new().traverse(
            &ResultApplicative::<String>::new(),
            |n: i32| if n < 0 { Err("negative".to_string()) } else { Ok(n * 2) },
            Identity(value),
        );
        assert_eq!(traversed, expected);
    }
}
