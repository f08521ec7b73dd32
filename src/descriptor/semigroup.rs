//! Semigroup descriptor - an associative binary operation.
//!
//! A semigroup descriptor bundles one operation, `append`, over its
//! `Carrier` type. Unlike a trait implemented by the carrier itself, the
//! descriptor is a value: `i64` can be appended by [`Additive`] or by
//! [`Multiplicative`], and the caller picks one at the call site.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! append(append(a, b), c) == append(a, append(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Semigroup;
//! use lambars_dict::instances::{Additive, Multiplicative};
//!
//! assert_eq!(Additive::<i64>::new().append(3, 4), 7);
//! assert_eq!(Multiplicative::<i64>::new().append(3, 4), 12);
//! ```
//!
//! [`Additive`]: crate::instances::Additive
//! [`Multiplicative`]: crate::instances::Multiplicative

/// A descriptor for an associative binary operation on `Carrier`.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ```text
/// append(append(a, b), c) == append(a, append(b, c))
/// ```
pub trait Semigroup {
    /// The type the operation acts on.
    type Carrier;

    /// Combines two values. Must be associative.
    fn append(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;

    /// Reduces every value left to right, or returns `None` when there is
    /// nothing to reduce.
    ///
    /// For a total version see [`Monoid::concat_all`](super::Monoid::concat_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::Semigroup;
    /// use lambars_dict::instances::StringMonoid;
    ///
    /// let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    /// assert_eq!(StringMonoid.append_all(words), Some("abc".to_string()));
    /// assert_eq!(StringMonoid.append_all(Vec::new()), None);
    /// ```
    fn append_all<I>(&self, values: I) -> Option<Self::Carrier>
    where
        I: IntoIterator<Item = Self::Carrier>,
    {
        values
            .into_iter()
            .reduce(|accumulator, value| self.append(accumulator, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::OrderingMonoid;
    use crate::instances::{Additive, StringMonoid, VecMonoid};
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    fn string_append_concatenates() {
        let result = StringMonoid.append("Hello, ".to_string(), "World!".to_string());
        assert_eq!(result, "Hello, World!");
    }

    #[rstest]
    fn vec_append_concatenates_in_order() {
        let semigroup = VecMonoid::<i32>::new();
        assert_eq!(semigroup.append(vec![1, 2], vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Ordering::Less, Ordering::Greater, Ordering::Less)]
    #[case(Ordering::Equal, Ordering::Greater, Ordering::Greater)]
    #[case(Ordering::Greater, Ordering::Less, Ordering::Greater)]
    #[case(Ordering::Equal, Ordering::Equal, Ordering::Equal)]
    fn ordering_append_is_left_biased(
        #[case] left: Ordering,
        #[case] right: Ordering,
        #[case] expected: Ordering,
    ) {
        assert_eq!(OrderingMonoid.append(left, right), expected);
    }

    #[rstest]
    fn ordering_append_is_associative_on_mixed_sample() {
        let semigroup = OrderingMonoid;
        let right_nested = semigroup.append(
            Ordering::Less,
            semigroup.append(Ordering::Equal, Ordering::Greater),
        );
        let left_nested = semigroup.append(
            semigroup.append(Ordering::Less, Ordering::Equal),
            Ordering::Greater,
        );
        assert_eq!(right_nested, left_nested);
        assert_eq!(left_nested, Ordering::Less);
    }

    #[rstest]
    fn append_all_reduces_left_to_right() {
        let semigroup = VecMonoid::<&str>::new();
        let result = semigroup.append_all(vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
        assert_eq!(result, Some(vec!["a", "b", "c", "d"]));
    }

    #[rstest]
    fn append_all_on_empty_is_none() {
        assert_eq!(Additive::<i32>::new().append_all(Vec::new()), None);
    }
}
