//! Generic operations derived from descriptor interfaces.
//!
//! Everything here is written against descriptor traits only: the same
//! `find` works on `Vec`, `Option`, `Result` or any other carrier with a
//! [`Foldable`] descriptor. Descriptors are passed explicitly as the leading
//! arguments.
//!
//! # Evaluation order
//!
//! Folds and traversals run strictly left to right. Searches stop consulting
//! their predicate after the first match, and `fold_m` stops calling its
//! function as soon as the monad short-circuits.
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::derived::{count, find, traverse};
//! use lambars_dict::instances::{ResultApplicative, VecFoldable, VecTraversable};
//!
//! assert_eq!(find(&VecFoldable, |n: &i32| *n > 1, vec![1, 2, 3]), Some(2));
//! assert_eq!(count(&VecFoldable, Vec::<u8>::new()), 0);
//!
//! let checked = traverse(
//!     &VecTraversable::new(),
//!     &ResultApplicative::<String>::new(),
//!     |n: i32| if n >= 0 { Ok(n) } else { Err(format!("{n} is negative")) },
//!     vec![3, -1, 2],
//! );
//! assert_eq!(checked, Err("-1 is negative".to_string()));
//! ```

use crate::descriptor::{
    Applicative, Applied, Eq, Foldable, Monad, Monoid, Semigroup, Traversable,
};

// =============================================================================
// Foldable
// =============================================================================

/// Combines every element with the monoid, starting from `empty`.
pub fn concat<T, M>(foldable: &T, monoid: &M, container: Applied<T::Constructor, M::Carrier>) -> M::Carrier
where
    T: Foldable,
    M: Monoid,
{
    let semigroup = monoid.semigroup();
    foldable.foldl::<M::Carrier, M::Carrier, _>(
        |accumulator, element| semigroup.append(accumulator, element),
        monoid.empty(),
        container,
    )
}

/// Maps every element into the monoid, then combines them.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::concat_map;
/// use lambars_dict::instances::{StringMonoid, VecFoldable};
///
/// let joined = concat_map(&VecFoldable, &StringMonoid, |n: u8| n.to_string(), vec![1, 2, 3]);
/// assert_eq!(joined, "123");
/// ```
pub fn concat_map<T, M, A, F>(
    foldable: &T,
    monoid: &M,
    mut function: F,
    container: Applied<T::Constructor, A>,
) -> M::Carrier
where
    T: Foldable,
    M: Monoid,
    F: FnMut(A) -> M::Carrier,
{
    let semigroup = monoid.semigroup();
    foldable.foldl::<A, M::Carrier, _>(
        |accumulator, element| semigroup.append(accumulator, function(element)),
        monoid.empty(),
        container,
    )
}

/// Left fold whose step function returns a monadic value.
///
/// Starts from `wrap(initial)` and chains one `flat_map` per element in
/// container order. When the monad short-circuits (an `Err`, a `None`), the
/// function is not called for any later element.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::fold_m;
/// use lambars_dict::instances::{ResultMonad, VecFoldable};
///
/// let checked_sum = |total: i32, n: i32| total.checked_add(n).ok_or("overflow");
/// let monad = ResultMonad::<&str>::new();
///
/// assert_eq!(fold_m(&VecFoldable, &monad, checked_sum, 0, vec![1, 2, 3]), Ok(6));
/// assert_eq!(fold_m(&VecFoldable, &monad, checked_sum, 0, vec![i32::MAX, 1]), Err("overflow"));
/// ```
pub fn fold_m<T, M, A, B, F>(
    foldable: &T,
    monad: &M,
    function: F,
    initial: B,
    container: Applied<T::Constructor, A>,
) -> Applied<M::Constructor, B>
where
    T: Foldable,
    M: Monad,
    A: Clone + 'static,
    B: 'static,
    F: FnMut(B, A) -> Applied<M::Constructor, B> + Clone + 'static,
{
    foldable.foldl::<A, Applied<M::Constructor, B>, _>(
        |accumulator, element| {
            let mut function = function.clone();
            monad.flat_map::<B, B, _>(
                move |value| function(value, element.clone()),
                accumulator,
            )
        },
        monad.applicative().wrap(initial),
        container,
    )
}

/// Returns the first element satisfying `predicate`.
///
/// The predicate is not called again once an element matched.
pub fn find<T, A, P>(foldable: &T, mut predicate: P, container: Applied<T::Constructor, A>) -> Option<A>
where
    T: Foldable,
    P: FnMut(&A) -> bool,
{
    foldable.foldl::<A, Option<A>, _>(
        |found, element| match found {
            Some(_) => found,
            None => predicate(&element).then_some(element),
        },
        None,
        container,
    )
}

/// Returns the first `Some` produced by `function`.
///
/// The function is not called again once it returned `Some`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::find_map;
/// use lambars_dict::instances::VecFoldable;
///
/// let first_number = find_map(&VecFoldable, |text: &str| text.parse::<i32>().ok(), vec!["a", "7", "9"]);
/// assert_eq!(first_number, Some(7));
/// ```
pub fn find_map<T, A, B, F>(
    foldable: &T,
    mut function: F,
    container: Applied<T::Constructor, A>,
) -> Option<B>
where
    T: Foldable,
    F: FnMut(A) -> Option<B>,
{
    foldable.foldl::<A, Option<B>, _>(
        |found, element| match found {
            Some(_) => found,
            None => function(element),
        },
        None,
        container,
    )
}

/// Returns `true` when every element satisfies `predicate`; `true` on empty.
pub fn all<T, A, P>(foldable: &T, mut predicate: P, container: Applied<T::Constructor, A>) -> bool
where
    T: Foldable,
    P: FnMut(A) -> bool,
{
    foldable.foldl::<A, bool, _>(
        |holds, element| holds && predicate(element),
        true,
        container,
    )
}

/// Returns `true` when some element satisfies `predicate`; `false` on empty.
pub fn any<T, A, P>(foldable: &T, mut predicate: P, container: Applied<T::Constructor, A>) -> bool
where
    T: Foldable,
    P: FnMut(A) -> bool,
{
    foldable.foldl::<A, bool, _>(
        |found, element| found || predicate(element),
        false,
        container,
    )
}

/// Returns `true` when `value` is equal to some element under `equality`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::elem;
/// use lambars_dict::descriptor::EqBy;
/// use lambars_dict::instances::VecFoldable;
///
/// let case_insensitive = EqBy::new(|left: &String, right: &String| left.eq_ignore_ascii_case(right));
/// let words = vec!["Let".to_string(), "Lambda".to_string()];
/// assert!(elem(&VecFoldable, &case_insensitive, &"LAMBDA".to_string(), words));
/// ```
pub fn elem<T, E>(
    foldable: &T,
    equality: &E,
    value: &E::Carrier,
    container: Applied<T::Constructor, E::Carrier>,
) -> bool
where
    T: Foldable,
    E: Eq,
{
    any(foldable, |element| equality.eq(value, &element), container)
}

/// Returns the number of elements.
pub fn count<T, A>(foldable: &T, container: Applied<T::Constructor, A>) -> usize
where
    T: Foldable,
{
    foldable.foldl::<A, usize, _>(|total, _| total + 1, 0, container)
}

// =============================================================================
// Traversable
// =============================================================================

/// Applies an effectful `function` to every element and collects the results
/// inside the effect, preserving order.
pub fn traverse<T, G, A, B, F>(
    traversable: &T,
    applicative: &G,
    function: F,
    container: Applied<T::Constructor, A>,
) -> Applied<G::Constructor, Applied<T::Constructor, B>>
where
    T: Traversable,
    G: Applicative,
    A: 'static,
    B: Clone + 'static,
    F: FnMut(A) -> Applied<G::Constructor, B>,
{
    traversable.traverse(applicative, function, container)
}

/// Turns a container of effects into an effect of a container.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::sequence;
/// use lambars_dict::instances::{OptionApplicative, VecTraversable};
///
/// let traversable = VecTraversable::new();
/// let applicative = OptionApplicative::new();
/// assert_eq!(sequence(&traversable, &applicative, vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence(&traversable, &applicative, vec![Some(1), None]), None);
/// ```
pub fn sequence<T, G, A>(
    traversable: &T,
    applicative: &G,
    container: Applied<T::Constructor, Applied<G::Constructor, A>>,
) -> Applied<G::Constructor, Applied<T::Constructor, A>>
where
    T: Traversable,
    G: Applicative,
    A: Clone + 'static,
    Applied<G::Constructor, A>: 'static,
{
    traversable.traverse::<G, Applied<G::Constructor, A>, A, _>(applicative, |effect| effect, container)
}

/// [`traverse`] with the container first, for call sites where the function
/// is the long argument.
pub fn for_traverse<T, G, A, B, F>(
    traversable: &T,
    applicative: &G,
    container: Applied<T::Constructor, A>,
    function: F,
) -> Applied<G::Constructor, Applied<T::Constructor, B>>
where
    T: Traversable,
    G: Applicative,
    A: 'static,
    B: Clone + 'static,
    F: FnMut(A) -> Applied<G::Constructor, B>,
{
    traversable.traverse(applicative, function, container)
}

// =============================================================================
// Monad
// =============================================================================

/// Collapses one level of monadic nesting.
pub fn join<M, A>(
    monad: &M,
    nested: Applied<M::Constructor, Applied<M::Constructor, A>>,
) -> Applied<M::Constructor, A>
where
    M: Monad,
    A: 'static,
    Applied<M::Constructor, A>: 'static,
{
    monad.join(nested)
}

/// `>>=`: `flat_map` with the monadic value first.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::bind;
/// use lambars_dict::instances::OptionMonad;
///
/// let monad = OptionMonad::new();
/// assert_eq!(bind(&monad, Some(4), |n: i32| n.checked_sub(5)), Some(-1));
/// ```
pub fn bind<M, A, B, F>(
    monad: &M,
    container: Applied<M::Constructor, A>,
    function: F,
) -> Applied<M::Constructor, B>
where
    M: Monad,
    A: 'static,
    B: 'static,
    F: FnMut(A) -> Applied<M::Constructor, B> + 'static,
{
    monad.flat_map(function, container)
}

// =============================================================================
// Parallel Reduction
// =============================================================================

/// Combines `values` with the monoid on the rayon thread pool.
///
/// Associativity and the identity law make the result equal to a sequential
/// [`concat`], including the element order. The crate has no float monoids,
/// since float addition is not associative.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::derived::par_concat;
/// use lambars_dict::instances::StringMonoid;
///
/// let letters: Vec<String> = ('a'..='e').map(String::from).collect();
/// assert_eq!(par_concat(&StringMonoid, letters), "abcde");
/// ```
#[cfg(feature = "rayon")]
pub fn par_concat<M>(monoid: &M, values: Vec<M::Carrier>) -> M::Carrier
where
    M: Monoid + Sync,
    M::Semigroup: Sync,
    M::Carrier: Send,
{
    use rayon::prelude::*;

    let semigroup = monoid.semigroup();
    values
        .into_par_iter()
        .reduce(|| monoid.empty(), |left, right| semigroup.append(left, right))
}

/// Maps `values` into the monoid and combines them on the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn par_concat_map<M, A, F>(monoid: &M, function: F, values: Vec<A>) -> M::Carrier
where
    M: Monoid + Sync,
    M::Semigroup: Sync,
    M::Carrier: Send,
    A: Send,
    F: Fn(A) -> M::Carrier + Sync + Send,
{
    use rayon::prelude::*;

    let semigroup = monoid.semigroup();
    values
        .into_par_iter()
        .map(function)
        .reduce(|| monoid.empty(), |left, right| semigroup.append(left, right))
}
