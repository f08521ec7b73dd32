//! The `Vec<A>` instance bundle.
//!
//! `Vec` is the many-results carrier: `apply` and `map2` take the cartesian
//! product in row-major order, `flat_map` concatenates, and `or` appends.

use std::cmp::Ordering;
use std::fmt;

use crate::descriptor::{
    Alternative, Applicative, Applied, Eq, Foldable, Functor, Monad, Ord, Show, Traversable,
    TypeConstructor,
};

/// Type constructor marker for `Vec<_>`.
pub enum VecConstructor {}

impl TypeConstructor for VecConstructor {
    type Applied<A> = Vec<A>;
}

// =============================================================================
// Eq / Ord / Show
// =============================================================================

/// Element-wise equality; vectors of different lengths are never equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecEq<E>(E);

impl<E> VecEq<E> {
    /// Lifts an element equality.
    pub const fn new(equality: E) -> Self {
        Self(equality)
    }
}

impl<E: Eq> Eq for VecEq<E> {
    type Carrier = Vec<E::Carrier>;

    fn eq(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(left, right)| self.0.eq(left, right))
    }
}

/// Lexicographic ordering; a proper prefix sorts first.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Ord;
/// use lambars_dict::instances::{Native, VecOrd};
///
/// let ord = VecOrd::new(Native::<i32>::new());
/// assert!(ord.lt(&vec![1, 2], &vec![1, 3]));
/// assert!(ord.lt(&vec![1], &vec![1, 0]));
/// ```
pub struct VecOrd<O: Ord> {
    ord: O,
    equality: VecEq<O::Eq>,
}

impl<O> VecOrd<O>
where
    O: Ord,
    O::Eq: Clone,
{
    /// Lifts an element ordering.
    pub fn new(ord: O) -> Self {
        let equality = VecEq::new(ord.equality().clone());
        Self { ord, equality }
    }
}

impl<O> Clone for VecOrd<O>
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

impl<O: Ord + fmt::Debug> fmt::Debug for VecOrd<O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VecOrd")
            .field("ord", &self.ord)
            .finish_non_exhaustive()
    }
}

impl<O: Ord> Ord for VecOrd<O> {
    type Carrier = Vec<O::Carrier>;
    type Eq = VecEq<O::Eq>;

    fn equality(&self) -> &Self::Eq {
        &self.equality
    }

    fn compare(&self, left: &Self::Carrier, right: &Self::Carrier) -> Ordering {
        left.iter()
            .zip(right)
            .map(|(left, right)| self.ord.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len()))
    }
}

/// Renders `[a, b, c]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecShow<S>(S);

impl<S> VecShow<S> {
    /// Lifts an element show descriptor.
    pub const fn new(show: S) -> Self {
        Self(show)
    }
}

impl<S: Show> Show for VecShow<S> {
    type Carrier = Vec<S::Carrier>;

    fn show(&self, value: &Self::Carrier) -> String {
        let elements: Vec<String> = value.iter().map(|element| self.0.show(element)).collect();
        format!("[{}]", elements.join(", "))
    }
}

// =============================================================================
// Functor / Applicative / Alternative / Monad
// =============================================================================

/// Maps every element in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecFunctor;

impl Functor for VecFunctor {
    type Constructor = VecConstructor;

    fn map<A, B, F>(&self, function: F, container: Vec<A>) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        container.into_iter().map(function).collect()
    }
}

descriptor! {
    /// Cartesian application: every function meets every value.
    pub struct VecApplicative {
        functor: VecFunctor = VecFunctor,
    }
}

impl Applicative for VecApplicative {
    type Constructor = VecConstructor;
    type Functor = VecFunctor;

    fn functor(&self) -> &VecFunctor {
        &self.functor
    }

    fn wrap<A>(&self, value: A) -> Vec<A>
    where
        A: 'static,
    {
        vec![value]
    }

    fn apply<A, B, F>(&self, functions: Vec<F>, values: Vec<A>) -> Vec<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let mut results = Vec::with_capacity(functions.len() * values.len());
        for mut function in functions {
            results.extend(values.iter().cloned().map(&mut function));
        }
        results
    }

    fn map2<A, B, C, F>(&self, mut function: F, left: Vec<A>, right: Vec<B>) -> Vec<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        let mut results = Vec::with_capacity(left.len() * right.len());
        for first in left {
            for second in &right {
                results.push(function(first.clone(), second.clone()));
            }
        }
        results
    }
}

descriptor! {
    /// Concatenation; `empty` is the empty vector.
    pub struct VecAlternative {
        applicative: VecApplicative = VecApplicative::new(),
    }
}

impl Alternative for VecAlternative {
    type Constructor = VecConstructor;
    type Applicative = VecApplicative;

    fn applicative(&self) -> &VecApplicative {
        &self.applicative
    }

    fn empty<A>(&self) -> Vec<A>
    where
        A: 'static,
    {
        Vec::new()
    }

    fn or<A>(&self, mut left: Vec<A>, right: Vec<A>) -> Vec<A>
    where
        A: 'static,
    {
        left.extend(right);
        left
    }
}

descriptor! {
    /// Non-deterministic sequencing: results are concatenated in order.
    pub struct VecMonad {
        applicative: VecApplicative = VecApplicative::new(),
    }
}

impl Monad for VecMonad {
    type Constructor = VecConstructor;
    type Applicative = VecApplicative;

    fn applicative(&self) -> &VecApplicative {
        &self.applicative
    }

    fn flat_map<A, B, F>(&self, function: F, container: Vec<A>) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Vec<B> + 'static,
    {
        container.into_iter().flat_map(function).collect()
    }
}

// =============================================================================
// Foldable / Traversable
// =============================================================================

/// Folds a vector in index order (`foldl`) or reverse index order (`foldr`).
#[derive(Debug, Clone, Copy, Default)]
pub struct VecFoldable;

impl Foldable for VecFoldable {
    type Constructor = VecConstructor;

    fn foldr<A, B, F>(&self, mut function: F, initial: B, container: Vec<A>) -> B
    where
        F: FnMut(A, B) -> B,
    {
        container
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }

    fn foldl<A, B, F>(&self, function: F, initial: B, container: Vec<A>) -> B
    where
        F: FnMut(B, A) -> B,
    {
        container.into_iter().fold(initial, function)
    }
}

descriptor! {
    /// Traverses elements left to right, collecting results with `map2`.
    pub struct VecTraversable {
        functor: VecFunctor = VecFunctor,
        foldable: VecFoldable = VecFoldable,
    }
}

impl Traversable for VecTraversable {
    type Constructor = VecConstructor;
    type Functor = VecFunctor;
    type Foldable = VecFoldable;

    fn functor(&self) -> &VecFunctor {
        &self.functor
    }

    fn foldable(&self) -> &VecFoldable {
        &self.foldable
    }

    fn traverse<G, A, B, F>(
        &self,
        applicative: &G,
        mut function: F,
        container: Vec<A>,
    ) -> Applied<G::Constructor, Vec<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Applied<G::Constructor, B>,
    {
        let capacity = container.len();
        container.into_iter().fold(
            applicative.wrap::<Vec<B>>(Vec::with_capacity(capacity)),
            |accumulator, element| {
                applicative.map2::<Vec<B>, B, Vec<B>, _>(
                    |mut collected: Vec<B>, value: B| {
                        collected.push(value);
                        collected
                    },
                    accumulator,
                    function(element),
                )
            },
        )
    }
}
