//! Ord descriptor - a total ordering consistent with an owned [`Eq`].
//!
//! Every `compare` returns a [`std::cmp::Ordering`]. Orderings themselves form
//! a monoid ([`OrderingMonoid`]) which is how lexicographic comparisons are
//! assembled: the first non-`Equal` result wins.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::{Eq, Monoid, Semigroup};

/// A descriptor for a total ordering on `Carrier`.
///
/// The ordering owns the [`Eq`] descriptor it must agree with.
///
/// # Laws
///
/// ```text
/// compare(x, y) == Equal  iff  equality().eq(x, y)
/// compare(x, y) == compare(y, x).reverse()
/// compare(x, y) != Greater && compare(y, z) != Greater
///     implies compare(x, z) != Greater
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Ord;
/// use lambars_dict::instances::Native;
/// use std::cmp::Ordering;
///
/// let ord = Native::<i32>::new();
/// assert_eq!(ord.compare(&1, &2), Ordering::Less);
/// assert_eq!(ord.max(3, 7), 7);
/// ```
pub trait Ord {
    /// The type being ordered.
    type Carrier;

    /// The owned equality descriptor.
    type Eq: Eq<Carrier = Self::Carrier>;

    /// Returns the owned equality descriptor.
    fn equality(&self) -> &Self::Eq;

    /// Compares two values.
    fn compare(&self, left: &Self::Carrier, right: &Self::Carrier) -> Ordering;

    /// `left < right`
    fn lt(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// `left <= right`
    fn le(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// `left > right`
    fn gt(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// `left >= right`
    fn ge(&self, left: &Self::Carrier, right: &Self::Carrier) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    /// The smaller value; `left` on ties.
    fn min(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        if self.le(&left, &right) { left } else { right }
    }

    /// The larger value; `right` on ties.
    fn max(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        if self.gt(&left, &right) { left } else { right }
    }
}

// =============================================================================
// Ordering Monoid
// =============================================================================

/// The left-biased monoid on [`Ordering`].
///
/// `Equal` is the identity and any other value short-circuits, which is
/// exactly [`Ordering::then`].
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{OrderingMonoid, Semigroup};
/// use std::cmp::Ordering;
///
/// assert_eq!(OrderingMonoid.append(Ordering::Equal, Ordering::Less), Ordering::Less);
/// assert_eq!(OrderingMonoid.append(Ordering::Greater, Ordering::Less), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderingMonoid;

impl Semigroup for OrderingMonoid {
    type Carrier = Ordering;

    fn append(&self, left: Ordering, right: Ordering) -> Ordering {
        left.then(right)
    }
}

impl Monoid for OrderingMonoid {
    type Carrier = Ordering;
    type Semigroup = Self;

    fn semigroup(&self) -> &Self {
        self
    }

    fn empty(&self) -> Ordering {
        Ordering::Equal
    }
}

// =============================================================================
// OrdBy
// =============================================================================

/// An [`Ord`] descriptor built from a comparison closure.
///
/// `OrdBy` is its own [`Eq`]: two values are equal exactly when the closure
/// returns `Equal`, so the consistency law holds by construction.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{Eq, Ord, OrdBy};
///
/// let by_length = OrdBy::new(|left: &String, right: &String| left.len().cmp(&right.len()));
/// assert!(by_length.lt(&"ab".to_string(), &"abc".to_string()));
/// assert!(by_length.equality().eq(&"ab".to_string(), &"xy".to_string()));
/// ```
pub struct OrdBy<A, F> {
    function: F,
    carrier: PhantomData<fn(&A)>,
}

impl<A, F> OrdBy<A, F>
where
    F: Fn(&A, &A) -> Ordering,
{
    /// Wraps `function` as an ordering descriptor.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            carrier: PhantomData,
        }
    }
}

impl<A, F> Eq for OrdBy<A, F>
where
    F: Fn(&A, &A) -> Ordering,
{
    type Carrier = A;

    fn eq(&self, left: &A, right: &A) -> bool {
        (self.function)(left, right) == Ordering::Equal
    }
}

impl<A, F> Ord for OrdBy<A, F>
where
    F: Fn(&A, &A) -> Ordering,
{
    type Carrier = A;
    type Eq = Self;

    fn equality(&self) -> &Self {
        self
    }

    fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.function)(left, right)
    }
}

impl<A, F: Clone> Clone for OrdBy<A, F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            carrier: PhantomData,
        }
    }
}

impl<A, F> fmt::Debug for OrdBy<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OrdBy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::Native;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, true, true, false, false)]
    #[case(2, 2, false, true, false, true)]
    #[case(3, 2, false, false, true, true)]
    fn derived_comparisons_follow_compare(
        #[case] left: i32,
        #[case] right: i32,
        #[case] lt: bool,
        #[case] le: bool,
        #[case] gt: bool,
        #[case] ge: bool,
    ) {
        let ord = Native::<i32>::new();
        assert_eq!(ord.lt(&left, &right), lt);
        assert_eq!(ord.le(&left, &right), le);
        assert_eq!(ord.gt(&left, &right), gt);
        assert_eq!(ord.ge(&left, &right), ge);
    }

    #[rstest]
    fn min_and_max_break_ties_by_position() {
        let by_first = OrdBy::new(|left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0));
        assert_eq!(by_first.min((1, 'l'), (1, 'r')), (1, 'l'));
        assert_eq!(by_first.max((1, 'l'), (1, 'r')), (1, 'r'));
    }

    #[rstest]
    fn ord_by_equality_agrees_with_compare() {
        let by_abs = OrdBy::new(|left: &i32, right: &i32| left.abs().cmp(&right.abs()));
        for (left, right) in [(1, -1), (2, 3), (-5, 4), (0, 0)] {
            assert_eq!(
                by_abs.compare(&left, &right) == Ordering::Equal,
                by_abs.equality().eq(&left, &right)
            );
        }
    }

    #[rstest]
    fn ordering_monoid_builds_lexicographic_comparison() {
        let ord = Native::<i32>::new();
        let compare_pairs = |left: &(i32, i32), right: &(i32, i32)| {
            OrderingMonoid.append(ord.compare(&left.0, &right.0), ord.compare(&left.1, &right.1))
        };
        assert_eq!(compare_pairs(&(1, 9), &(2, 0)), Ordering::Less);
        assert_eq!(compare_pairs(&(2, 1), &(2, 0)), Ordering::Greater);
        assert_eq!(compare_pairs(&(2, 0), &(2, 0)), Ordering::Equal);
    }
}
