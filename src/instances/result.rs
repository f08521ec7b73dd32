//! The `Result<A, E>` instance bundle.
//!
//! `Result` is the canonical carrier of this crate: it has a descriptor for
//! every unary capability, so it exercises each layer of the hierarchy.
//!
//! - [`ResultEq`], [`ResultOrd`] and [`ResultShow`] are assembled from the
//!   descriptors of both payloads.
//! - [`ResultFunctor`], [`ResultApplicative`] and [`ResultMonad`]
//!   short-circuit on `Err`: the first error is propagated unchanged and no
//!   later function is called.
//! - [`ResultFoldable`] and [`ResultTraversable`] treat `Ok(a)` as a
//!   one-element container and `Err(e)` as an empty one.
//!
//! # Ordering Convention
//!
//! Every `Ok` is ordered before every `Err`, whatever the payloads.
//!
//! ```rust
//! use lambars_dict::descriptor::Ord;
//! use lambars_dict::instances::{Native, ResultOrd};
//!
//! let ord = ResultOrd::new(Native::<i32>::new(), Native::<i32>::new());
//! assert!(ord.lt(&Ok(100), &Err(0)));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::descriptor::{
    Applicative, Applied, Eq, Foldable, Functor, Monad, Ord, Show, Traversable, TypeConstructor,
};

/// Type constructor marker for `Result<_, E>`.
pub struct ResultConstructor<E>(PhantomData<fn() -> E>);

impl<E> TypeConstructor for ResultConstructor<E> {
    type Applied<A> = Result<A, E>;
}

// =============================================================================
// Partial Accessors
// =============================================================================

/// Returns the `Ok` payload.
///
/// # Panics
///
/// Panics with the caller's location when `result` is `Err`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::instances::unwrap_ok;
///
/// assert_eq!(unwrap_ok(Ok::<i32, String>(3)), 3);
/// ```
#[track_caller]
pub fn unwrap_ok<A, E>(result: Result<A, E>) -> A {
    match result {
        Ok(value) => value,
        Err(_) => panic!("unwrap_ok called on Err"),
    }
}

/// Returns the `Err` payload.
///
/// # Panics
///
/// Panics with the caller's location when `result` is `Ok`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::instances::unwrap_err;
///
/// assert_eq!(unwrap_err(Err::<i32, &str>("boom")), "boom");
/// ```
#[track_caller]
pub fn unwrap_err<A, E>(result: Result<A, E>) -> E {
    match result {
        Ok(_) => panic!("unwrap_err called on Ok"),
        Err(error) => error,
    }
}

// =============================================================================
// Eq / Ord / Show
// =============================================================================

/// Equality on `Result` from the equalities of both payloads.
///
/// `Ok` and `Err` are never equal to each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultEq<A, E> {
    ok: A,
    err: E,
}

impl<A, E> ResultEq<A, E> {
    /// Pairs an `Ok` payload equality with an `Err` payload equality.
    pub const fn new(ok: A, err: E) -> Self {
        Self { ok, err }
    }
}

impl<A, E> Eq for ResultEq<A, E>
where
    A: Eq,
    E: Eq,
{
    type Carrier = Result<A::Carrier, E::Carrier>;

    fn eq(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        match (left, right) {
            (Ok(left), Ok(right)) => self.ok.eq(left, right),
            (Err(left), Err(right)) => self.err.eq(left, right),
            _ => false,
        }
    }
}

/// Ordering on `Result`: payload order within a variant, `Ok < Err` across.
///
/// The owned [`ResultEq`] is built from the payload orderings' own
/// equalities, so it agrees with `compare` by construction.
pub struct ResultOrd<A, E>
where
    A: Ord,
    E: Ord,
{
    ok: A,
    err: E,
    equality: ResultEq<A::Eq, E::Eq>,
}

impl<A, E> ResultOrd<A, E>
where
    A: Ord,
    E: Ord,
    A::Eq: Clone,
    E::Eq: Clone,
{
    /// Pairs an `Ok` payload ordering with an `Err` payload ordering.
    pub fn new(ok: A, err: E) -> Self {
        let equality = ResultEq::new(ok.equality().clone(), err.equality().clone());
        Self { ok, err, equality }
    }
}

impl<A, E> Clone for ResultOrd<A, E>
where
    A: Ord + Clone,
    E: Ord + Clone,
    A::Eq: Clone,
    E::Eq: Clone,
{
    fn clone(&self) -> Self {
        Self {
            ok: self.ok.clone(),
            err: self.err.clone(),
            equality: self.equality.clone(),
        }
    }
}

impl<A, E> fmt::Debug for ResultOrd<A, E>
where
    A: Ord + fmt::Debug,
    E: Ord + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResultOrd")
            .field("ok", &self.ok)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

impl<A, E> Ord for ResultOrd<A, E>
where
    A: Ord,
    E: Ord,
{
    type Carrier = Result<A::Carrier, E::Carrier>;
    type Eq = ResultEq<A::Eq, E::Eq>;

    fn equality(&self) -> &Self::Eq {
        &self.equality
    }

    fn compare(&self, left: &Self::Carrier, right: &Self::Carrier) -> Ordering {
        match (left, right) {
            (Ok(left), Ok(right)) => self.ok.compare(left, right),
            (Err(left), Err(right)) => self.err.compare(left, right),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
        }
    }
}

/// Renders `Ok(<payload>)` or `Err(<payload>)`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Show;
/// use lambars_dict::instances::{Native, ResultShow};
///
/// let show = ResultShow::new(Native::<i32>::new(), Native::<String>::new());
/// assert_eq!(show.show(&Ok(3)), "Ok(3)");
/// assert_eq!(show.show(&Err("bad".to_string())), "Err(bad)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultShow<A, E> {
    ok: A,
    err: E,
}

impl<A, E> ResultShow<A, E> {
    /// Pairs the payload show descriptors.
    pub const fn new(ok: A, err: E) -> Self {
        Self { ok, err }
    }
}

impl<A, E> Show for ResultShow<A, E>
where
    A: Show,
    E: Show,
{
    type Carrier = Result<A::Carrier, E::Carrier>;

    fn show(&self, value: &Self::Carrier) -> String {
        match value {
            Ok(value) => format!("Ok({})", self.ok.show(value)),
            Err(error) => format!("Err({})", self.err.show(error)),
        }
    }
}

// =============================================================================
// Functor / Applicative / Monad
// =============================================================================

descriptor! {
    /// Maps the `Ok` payload; `Err` passes through.
    pub struct ResultFunctor<E>;
}

impl<E> Functor for ResultFunctor<E> {
    type Constructor = ResultConstructor<E>;

    fn map<A, B, F>(&self, function: F, container: Result<A, E>) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        container.map(function)
    }
}

descriptor! {
    /// `wrap` is `Ok`; the first `Err` wins.
    pub struct ResultApplicative<E> {
        functor: ResultFunctor<E> = ResultFunctor::new(),
    }
}

impl<E> Applicative for ResultApplicative<E> {
    type Constructor = ResultConstructor<E>;
    type Functor = ResultFunctor<E>;

    fn functor(&self) -> &ResultFunctor<E> {
        &self.functor
    }

    fn wrap<A>(&self, value: A) -> Result<A, E>
    where
        A: 'static,
    {
        Ok(value)
    }

    fn apply<A, B, F>(&self, functions: Result<F, E>, values: Result<A, E>) -> Result<B, E>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let mut function = functions?;
        values.map(&mut function)
    }

    fn map2<A, B, C, F>(
        &self,
        mut function: F,
        left: Result<A, E>,
        right: Result<B, E>,
    ) -> Result<C, E>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        Ok(function(left?, right?))
    }
}

descriptor! {
    /// Sequences fallible steps, stopping at the first `Err`.
    pub struct ResultMonad<E> {
        applicative: ResultApplicative<E> = ResultApplicative::new(),
    }
}

impl<E> Monad for ResultMonad<E> {
    type Constructor = ResultConstructor<E>;
    type Applicative = ResultApplicative<E>;

    fn applicative(&self) -> &ResultApplicative<E> {
        &self.applicative
    }

    fn flat_map<A, B, F>(&self, function: F, container: Result<A, E>) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Result<B, E> + 'static,
    {
        container.and_then(function)
    }
}

// =============================================================================
// Foldable / Traversable
// =============================================================================

descriptor! {
    /// Folds `Ok(a)` as `[a]` and `Err(_)` as `[]`.
    pub struct ResultFoldable<E>;
}

impl<E> Foldable for ResultFoldable<E> {
    type Constructor = ResultConstructor<E>;

    fn foldr<A, B, F>(&self, mut function: F, initial: B, container: Result<A, E>) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match container {
            Ok(value) => function(value, initial),
            Err(_) => initial,
        }
    }

    fn foldl<A, B, F>(&self, mut function: F, initial: B, container: Result<A, E>) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match container {
            Ok(value) => function(initial, value),
            Err(_) => initial,
        }
    }
}

descriptor! {
    /// Traverses the `Ok` payload; an `Err` is wrapped without calling the
    /// function.
    pub struct ResultTraversable<E> {
        functor: ResultFunctor<E> = ResultFunctor::new(),
        foldable: ResultFoldable<E> = ResultFoldable::new(),
    }
}

impl<E: 'static> Traversable for ResultTraversable<E> {
    type Constructor = ResultConstructor<E>;
    type Functor = ResultFunctor<E>;
    type Foldable = ResultFoldable<E>;

    fn functor(&self) -> &ResultFunctor<E> {
        &self.functor
    }

    fn foldable(&self) -> &ResultFoldable<E> {
        &self.foldable
    }

    fn traverse<G, A, B, F>(
        &self,
        applicative: &G,
        mut function: F,
        container: Result<A, E>,
    ) -> Applied<G::Constructor, Result<B, E>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Applied<G::Constructor, B>,
    {
        match container {
            Ok(value) => applicative
                .functor()
                .map::<B, Result<B, E>, _>(Ok, function(value)),
            Err(error) => applicative.wrap::<Result<B, E>>(Err(error)),
        }
    }
}
