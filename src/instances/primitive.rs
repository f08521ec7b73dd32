//! Descriptors for primitive carriers and the standard monoids.
//!
//! - [`Native<A>`] reuses the std traits of `A`: [`Eq`] from `PartialEq`,
//!   [`Ord`] from `std::cmp::Ord`, [`Show`] from `Display`, and [`Num`] for
//!   every integer type.
//! - [`Float<A>`] covers `f32` and `f64` with a total order.
//! - [`Additive`], [`Multiplicative`], [`StringMonoid`] and [`VecMonoid`] are
//!   the monoids used throughout the crate.
//!
//! Integer arithmetic wraps on overflow so that every operation except
//! division by zero is total.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::descriptor::{Eq, Group, Monoid, Num, Ord, Semigroup, Show};

descriptor! {
    /// Descriptors derived from the std traits of `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::{Eq, Ord, Show};
    /// use lambars_dict::instances::Native;
    /// use std::cmp::Ordering;
    ///
    /// let native = Native::<char>::new();
    /// assert!(native.eq(&'a', &'a'));
    /// assert_eq!(native.compare(&'a', &'b'), Ordering::Less);
    /// assert_eq!(native.show(&'a'), "a");
    /// ```
    pub struct Native<A>;
}

impl<A: PartialEq> Eq for Native<A> {
    type Carrier = A;

    fn eq(&self, left: &A, right: &A) -> bool {
        left == right
    }
}

impl<A: std::cmp::Ord> Ord for Native<A> {
    type Carrier = A;
    type Eq = Self;

    fn equality(&self) -> &Self {
        self
    }

    fn compare(&self, left: &A, right: &A) -> Ordering {
        left.cmp(right)
    }
}

impl<A: Display> Show for Native<A> {
    type Carrier = A;

    fn show(&self, value: &A) -> String {
        value.to_string()
    }
}

macro_rules! impl_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Num for Native<$integer> {
                type Carrier = $integer;
                type Ord = Self;

                fn ord(&self) -> &Self {
                    self
                }

                fn add(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_add(right)
                }

                fn sub(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_sub(right)
                }

                fn mul(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_mul(right)
                }

                fn div(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_div(right)
                }

                fn negate(&self, value: $integer) -> $integer {
                    value.wrapping_neg()
                }
            }

            impl Semigroup for Additive<$integer> {
                type Carrier = $integer;

                fn append(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_add(right)
                }
            }

            impl Monoid for Additive<$integer> {
                type Carrier = $integer;
                type Semigroup = Self;

                fn semigroup(&self) -> &Self {
                    self
                }

                fn empty(&self) -> $integer {
                    0
                }
            }

            impl Group for Additive<$integer> {
                type Carrier = $integer;
                type Monoid = Self;

                fn monoid(&self) -> &Self {
                    self
                }

                fn inverse(&self, value: $integer) -> $integer {
                    value.wrapping_neg()
                }
            }

            impl Semigroup for Multiplicative<$integer> {
                type Carrier = $integer;

                fn append(&self, left: $integer, right: $integer) -> $integer {
                    left.wrapping_mul(right)
                }
            }

            impl Monoid for Multiplicative<$integer> {
                type Carrier = $integer;
                type Semigroup = Self;

                fn semigroup(&self) -> &Self {
                    self
                }

                fn empty(&self) -> $integer {
                    1
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Eq for Float<$float> {
                type Carrier = $float;

                fn eq(&self, left: &$float, right: &$float) -> bool {
                    left.total_cmp(right) == Ordering::Equal
                }
            }

            impl Ord for Float<$float> {
                type Carrier = $float;
                type Eq = Self;

                fn equality(&self) -> &Self {
                    self
                }

                fn compare(&self, left: &$float, right: &$float) -> Ordering {
                    left.total_cmp(right)
                }
            }

            impl Show for Float<$float> {
                type Carrier = $float;

                fn show(&self, value: &$float) -> String {
                    value.to_string()
                }
            }

            impl Num for Float<$float> {
                type Carrier = $float;
                type Ord = Self;

                fn ord(&self) -> &Self {
                    self
                }

                fn add(&self, left: $float, right: $float) -> $float {
                    left + right
                }

                fn sub(&self, left: $float, right: $float) -> $float {
                    left - right
                }

                fn mul(&self, left: $float, right: $float) -> $float {
                    left * right
                }

                fn div(&self, left: $float, right: $float) -> $float {
                    left / right
                }

                fn negate(&self, value: $float) -> $float {
                    -value
                }
            }
        )+
    };
}

descriptor! {
    /// Descriptors for `f32` and `f64` ordered by `total_cmp`.
    ///
    /// `total_cmp` makes `NaN` equal to itself and `-0.0` less than `0.0`,
    /// so equality and ordering stay consistent where `PartialEq` would not.
    ///
    /// Floating-point addition and multiplication round, so they are not
    /// associative and `inf + -inf` is `NaN`. [`Additive`] and
    /// [`Multiplicative`] therefore have no float instances; fold floats
    /// with [`Num`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::descriptor::{Eq, Ord};
    /// use lambars_dict::instances::Float;
    ///
    /// let float = Float::<f64>::new();
    /// assert!(float.eq(&f64::NAN, &f64::NAN));
    /// assert!(float.lt(&-0.0, &0.0));
    /// ```
    pub struct Float<A>;
}

descriptor! {
    /// The sum monoid over integers, also a group. Sums wrap on overflow.
    pub struct Additive<A>;
}

descriptor! {
    /// The product monoid over integers. Products wrap on overflow.
    pub struct Multiplicative<A>;
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

// =============================================================================
// Collection Monoids
// =============================================================================

/// The concatenation monoid on `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMonoid;

impl Semigroup for StringMonoid {
    type Carrier = String;

    fn append(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

impl Monoid for StringMonoid {
    type Carrier = String;
    type Semigroup = Self;

    fn semigroup(&self) -> &Self {
        self
    }

    fn empty(&self) -> String {
        String::new()
    }
}

descriptor! {
    /// The concatenation monoid on `Vec<A>`.
    pub struct VecMonoid<A>;
}

impl<A> Semigroup for VecMonoid<A> {
    type Carrier = Vec<A>;

    fn append(&self, mut left: Vec<A>, right: Vec<A>) -> Vec<A> {
        left.extend(right);
        left
    }
}

impl<A> Monoid for VecMonoid<A> {
    type Carrier = Vec<A>;
    type Semigroup = Self;

    fn semigroup(&self) -> &Self {
        self
    }

    fn empty(&self) -> Vec<A> {
        Vec::new()
    }
}
