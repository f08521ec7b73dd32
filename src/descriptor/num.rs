//! Num descriptor - ordered arithmetic.

use super::Ord;

/// A descriptor for numeric carriers.
///
/// Owns the [`Ord`] descriptor of the carrier. Operations follow the usual
/// ring-like laws for integers (`add` and `mul` associative, `add`
/// commutative with identity `0`, `negate` its inverse). Floating point
/// carriers satisfy them only up to rounding.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{Num, Ord};
/// use lambars_dict::instances::Native;
///
/// let num = Native::<i64>::new();
/// assert_eq!(num.add(2, 3), 5);
/// assert_eq!(num.negate(4), -4);
/// assert!(num.ord().lt(&1, &2));
/// ```
pub trait Num {
    /// The numeric type.
    type Carrier;

    /// The owned ordering descriptor.
    type Ord: Ord<Carrier = Self::Carrier>;

    /// Returns the owned ordering descriptor.
    fn ord(&self) -> &Self::Ord;

    /// `left + right`
    fn add(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;

    /// `left - right`
    fn sub(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;

    /// `left * right`
    fn mul(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;

    /// `left / right`
    ///
    /// # Panics
    ///
    /// Integer carriers panic when `right` is zero.
    fn div(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;

    /// `-value`
    fn negate(&self, value: Self::Carrier) -> Self::Carrier;
}
