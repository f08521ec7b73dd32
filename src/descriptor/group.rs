//! Group descriptor - a monoid where every element has an inverse.

use super::{Monoid, Semigroup};

/// A descriptor for a monoid with inverses.
///
/// # Laws
///
/// ```text
/// append(x, inverse(x)) == empty
/// append(inverse(x), x) == empty
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Group;
/// use lambars_dict::instances::Additive;
///
/// let group = Additive::<i32>::new();
/// assert_eq!(group.inverse(5), -5);
/// assert_eq!(group.subtract(10, 3), 7);
/// ```
pub trait Group {
    /// The type the operations act on.
    type Carrier;

    /// The owned monoid descriptor.
    type Monoid: Monoid<Carrier = Self::Carrier>;

    /// Returns the owned monoid descriptor.
    fn monoid(&self) -> &Self::Monoid;

    /// Returns the inverse of `value`.
    fn inverse(&self, value: Self::Carrier) -> Self::Carrier;

    /// Appends the inverse of `right` to `left`.
    fn subtract(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        self.monoid().semigroup().append(left, self.inverse(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::Additive;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(17)]
    #[case(-4)]
    #[case(i32::MIN)]
    fn additive_inverse_cancels(#[case] value: i32) {
        let group = Additive::<i32>::new();
        let monoid = group.monoid();
        assert_eq!(
            monoid.semigroup().append(value, group.inverse(value)),
            monoid.empty()
        );
        assert_eq!(
            monoid.semigroup().append(group.inverse(value), value),
            monoid.empty()
        );
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn inverse_law_holds_at_the_bounds(#[case] value: i64) {
        let group = Additive::<i64>::new();
        assert_eq!(group.subtract(value, value), group.monoid().empty());
    }
}
