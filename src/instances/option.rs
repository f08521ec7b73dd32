//! The `Option<A>` instance bundle.
//!
//! `None` is the empty container and the failed computation: it
//! short-circuits `apply` and `flat_map`, is the identity of `or`, and is
//! ordered before every `Some`.

use std::cmp::Ordering;
use std::fmt;

use crate::descriptor::{
    Alternative, Applicative, Applied, Eq, Foldable, Functor, Monad, Monoid, Ord, Semigroup,
    Show, Traversable, TypeConstructor,
};

/// Type constructor marker for `Option<_>`.
pub enum OptionConstructor {}

impl TypeConstructor for OptionConstructor {
    type Applied<A> = Option<A>;
}

// =============================================================================
// Eq / Ord / Show
// =============================================================================

/// Equality on `Option` from an equality on the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionEq<E>(E);

impl<E> OptionEq<E> {
    /// Lifts a payload equality.
    pub const fn new(equality: E) -> Self {
        Self(equality)
    }
}

impl<E: Eq> Eq for OptionEq<E> {
    type Carrier = Option<E::Carrier>;

    fn eq(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => self.0.eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Ordering on `Option` with `None` first.
pub struct OptionOrd<O: Ord> {
    ord: O,
    equality: OptionEq<O::Eq>,
}

impl<O> OptionOrd<O>
where
    O: Ord,
    O::Eq: Clone,
{
    /// Lifts a payload ordering.
    pub fn new(ord: O) -> Self {
        let equality = OptionEq::new(ord.equality().clone());
        Self { ord, equality }
    }
}

impl<O> Clone for OptionOrd<O>
where
    O: Ord + Clone,
    O::Eq: Clone,
{
    fn clone(&self) -> Self {
        Self {
            ord: self.ord.clone(),
            equality: self.equality.clone(),
        }
    }
}

impl<O: Ord + fmt::Debug> fmt::Debug for OptionOrd<O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OptionOrd")
            .field("ord", &self.ord)
            .finish_non_exhaustive()
    }
}

impl<O: Ord> Ord for OptionOrd<O> {
    type Carrier = Option<O::Carrier>;
    type Eq = OptionEq<O::Eq>;

    fn equality(&self) -> &Self::Eq {
        &self.equality
    }

    fn compare(&self, left: &Self::Carrier, right: &Self::Carrier) -> Ordering {
        match (left, right) {
            (Some(left), Some(right)) => self.ord.compare(left, right),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

/// Renders `Some(<payload>)` or `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionShow<S>(S);

impl<S> OptionShow<S> {
    /// Lifts a payload show descriptor.
    pub const fn new(show: S) -> Self {
        Self(show)
    }
}

impl<S: Show> Show for OptionShow<S> {
    type Carrier = Option<S::Carrier>;

    fn show(&self, value: &Self::Carrier) -> String {
        value.as_ref().map_or_else(
            || "None".to_string(),
            |value| format!("Some({})", self.0.show(value)),
        )
    }
}

/// Lifts a semigroup on `A` into a monoid on `Option<A>` with `None` as the
/// identity.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{Monoid, Semigroup};
/// use lambars_dict::instances::{Additive, OptionMonoid};
///
/// let monoid = OptionMonoid::new(Additive::<i32>::new());
/// assert_eq!(monoid.append(Some(1), Some(2)), Some(3));
/// assert_eq!(monoid.append(None, Some(2)), Some(2));
/// assert_eq!(monoid.empty(), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionMonoid<S>(S);

impl<S> OptionMonoid<S> {
    /// Lifts `semigroup`.
    pub const fn new(semigroup: S) -> Self {
        Self(semigroup)
    }
}

impl<S: Semigroup> Semigroup for OptionMonoid<S> {
    type Carrier = Option<S::Carrier>;

    fn append(&self, left: Option<S::Carrier>, right: Option<S::Carrier>) -> Option<S::Carrier> {
        match (left, right) {
            (Some(left), Some(right)) => Some(self.0.append(left, right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<S: Semigroup> Monoid for OptionMonoid<S> {
    type Carrier = Option<S::Carrier>;
    type Semigroup = Self;

    fn semigroup(&self) -> &Self {
        self
    }

    fn empty(&self) -> Option<S::Carrier> {
        None
    }
}

// =============================================================================
// Functor / Applicative / Alternative / Monad
// =============================================================================

/// Maps the `Some` payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionFunctor;

impl Functor for OptionFunctor {
    type Constructor = OptionConstructor;

    fn map<A, B, F>(&self, function: F, container: Option<A>) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        container.map(function)
    }
}

descriptor! {
    /// `wrap` is `Some`; any `None` makes the whole application `None`.
    pub struct OptionApplicative {
        functor: OptionFunctor = OptionFunctor,
    }
}

impl Applicative for OptionApplicative {
    type Constructor = OptionConstructor;
    type Functor = OptionFunctor;

    fn functor(&self) -> &OptionFunctor {
        &self.functor
    }

    fn wrap<A>(&self, value: A) -> Option<A>
    where
        A: 'static,
    {
        Some(value)
    }

    fn apply<A, B, F>(&self, functions: Option<F>, values: Option<A>) -> Option<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let mut function = functions?;
        values.map(&mut function)
    }

    fn map2<A, B, C, F>(&self, mut function: F, left: Option<A>, right: Option<B>) -> Option<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        Some(function(left?, right?))
    }
}

descriptor! {
    /// Picks the first `Some`.
    pub struct OptionAlternative {
        applicative: OptionApplicative = OptionApplicative::new(),
    }
}

impl Alternative for OptionAlternative {
    type Constructor = OptionConstructor;
    type Applicative = OptionApplicative;

    fn applicative(&self) -> &OptionApplicative {
        &self.applicative
    }

    fn empty<A>(&self) -> Option<A>
    where
        A: 'static,
    {
        None
    }

    fn or<A>(&self, left: Option<A>, right: Option<A>) -> Option<A>
    where
        A: 'static,
    {
        left.or(right)
    }
}

descriptor! {
    /// Chains optional steps, stopping at the first `None`.
    pub struct OptionMonad {
        applicative: OptionApplicative = OptionApplicative::new(),
    }
}

impl Monad for OptionMonad {
    type Constructor = OptionConstructor;
    type Applicative = OptionApplicative;

    fn applicative(&self) -> &OptionApplicative {
        &self.applicative
    }

    fn flat_map<A, B, F>(&self, function: F, container: Option<A>) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B> + 'static,
    {
        container.and_then(function)
    }
}

// =============================================================================
// Foldable / Traversable
// =============================================================================

/// Folds `Some(a)` as `[a]` and `None` as `[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionFoldable;

impl Foldable for OptionFoldable {
    type Constructor = OptionConstructor;

    fn foldr<A, B, F>(&self, mut function: F, initial: B, container: Option<A>) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match container {
            Some(value) => function(value, initial),
            None => initial,
        }
    }

    fn foldl<A, B, F>(&self, mut function: F, initial: B, container: Option<A>) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match container {
            Some(value) => function(initial, value),
            None => initial,
        }
    }
}

descriptor! {
    /// Traverses the `Some` payload; `None` is wrapped as is.
    pub struct OptionTraversable {
        functor: OptionFunctor = OptionFunctor,
        foldable: OptionFoldable = OptionFoldable,
    }
}

impl Traversable for OptionTraversable {
    type Constructor = OptionConstructor;
    type Functor = OptionFunctor;
    type Foldable = OptionFoldable;

    fn functor(&self) -> &OptionFunctor {
        &self.functor
    }

    fn foldable(&self) -> &OptionFoldable {
        &self.foldable
    }

    fn traverse<G, A, B, F>(
        &self,
        applicative: &G,
        mut function: F,
        container: Option<A>,
    ) -> Applied<G::Constructor, Option<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Applied<G::Constructor, B>,
    {
        match container {
            Some(value) => applicative
                .functor()
                .map::<B, Option<B>, _>(Some, function(value)),
            None => applicative.wrap::<Option<B>>(None),
        }
    }
}
