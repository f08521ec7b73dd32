//! Eq descriptor - an equivalence relation.
//!
//! Naming note: this trait shares its name with `std::cmp::Eq`. A glob import
//! of the prelude shadows the std trait in bounds; derives are unaffected.

use std::fmt;
use std::marker::PhantomData;

/// A descriptor for an equivalence relation on `Carrier`.
///
/// # Laws
///
/// ```text
/// eq(x, x)                              (reflexivity)
/// eq(x, y) == eq(y, x)                  (symmetry)
/// eq(x, y) && eq(y, z) implies eq(x, z) (transitivity)
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Eq;
/// use lambars_dict::instances::Native;
///
/// let eq = Native::<i32>::new();
/// assert!(eq.eq(&1, &1));
/// assert!(eq.ne(&1, &2));
/// ```
pub trait Eq {
    /// The type being compared.
    type Carrier;

    /// Returns `true` when both values are equivalent.
    fn eq(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool;

    /// Negation of [`Eq::eq`].
    fn ne(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        !self.eq(left, right)
    }
}

/// An [`Eq`] descriptor built from a closure.
///
/// The closure must satisfy the equivalence laws.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{Eq, EqBy};
///
/// let case_insensitive = EqBy::new(|left: &String, right: &String| {
///     left.eq_ignore_ascii_case(right)
/// });
/// assert!(case_insensitive.eq(&"Lisp".to_string(), &"LISP".to_string()));
/// ```
pub struct EqBy<A, F> {
    function: F,
    carrier: PhantomData<fn(&A)>,
}

impl<A, F> EqBy<A, F>
where
    F: Fn(&A, &A) -> bool,
{
    /// Wraps `function` as an equality descriptor.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            carrier: PhantomData,
        }
    }
}

impl<A, F> Eq for EqBy<A, F>
where
    F: Fn(&A, &A) -> bool,
{
    type Carrier = A;

    fn eq(&self, left: &A, right: &A) -> bool {
        (self.function)(left, right)
    }
}

impl<A, F: Clone> Clone for EqBy<A, F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            carrier: PhantomData,
        }
    }
}

impl<A, F> fmt::Debug for EqBy<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EqBy")
    }
}
