//! Monoid descriptor - a semigroup with an identity element.
//!
//! A monoid descriptor owns the [`Semigroup`] descriptor it extends and adds
//! `empty`, the identity of `append`.
//!
//! # Laws
//!
//! ```text
//! append(empty, x) == x          (left identity)
//! append(x, empty) == x          (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::{Monoid, Semigroup};
//! use lambars_dict::instances::StringMonoid;
//!
//! let monoid = StringMonoid;
//! let value = "hello".to_string();
//! assert_eq!(monoid.semigroup().append(monoid.empty(), value.clone()), value);
//! ```

use super::Semigroup;

/// A descriptor for a semigroup with an identity element.
///
/// The semigroup is not a supertrait: the monoid *owns* a semigroup
/// descriptor and exposes it through [`Monoid::semigroup`].
pub trait Monoid {
    /// The type the operations act on.
    type Carrier;

    /// The owned semigroup descriptor.
    type Semigroup: Semigroup<Carrier = Self::Carrier>;

    /// Returns the owned semigroup descriptor.
    fn semigroup(&self) -> &Self::Semigroup;

    /// The identity element of `append`.
    fn empty(&self) -> Self::Carrier;

    /// Folds every value left to right starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::Monoid;
    /// use lambars_dict::instances::Additive;
    ///
    /// assert_eq!(Additive::<i32>::new().concat_all(vec![1, 2, 3]), 6);
    /// assert_eq!(Additive::<i32>::new().concat_all(Vec::new()), 0);
    /// ```
    fn concat_all<I>(&self, values: I) -> Self::Carrier
    where
        I: IntoIterator<Item = Self::Carrier>,
    {
        let semigroup = self.semigroup();
        values
            .into_iter()
            .fold(self.empty(), |accumulator, value| {
                semigroup.append(accumulator, value)
            })
    }
}
