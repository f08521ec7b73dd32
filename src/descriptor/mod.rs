//! Capability descriptors.
//!
//! A descriptor is an ordinary value whose type implements one of the traits
//! in this module. Generic code receives descriptors explicitly as `&D`
//! arguments instead of resolving them from the carrier type, so one carrier
//! may have several descriptors (sum and product monoids on `i32`, ordering
//! by length or lexicographically on `String`).
//!
//! # Hierarchy
//!
//! Composite descriptors own the descriptor they build on and expose it
//! through an accessor:
//!
//! ```text
//! Semigroup <- Monoid <- Group
//! Eq <- Ord <- Num
//! Functor <- Applicative <- Monad
//!                        <- Alternative
//! Functor + Foldable <- Traversable
//! Show, Category (leaves)
//! ```
//!
//! First-order descriptors name their carrier with an associated `Carrier`
//! type. Descriptors over containers name a [`TypeConstructor`] marker.

mod alternative;
mod applicative;
mod category;
mod eq;
mod foldable;
mod functor;
mod group;
mod higher;
mod monad;
mod monoid;
mod num;
mod ord;
mod semigroup;
mod show;
mod traversable;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use category::Category;
pub use eq::{Eq, EqBy};
pub use foldable::Foldable;
pub use functor::Functor;
pub use group::Group;
pub use higher::{Applied, TypeConstructor};
pub use monad::Monad;
pub use monoid::Monoid;
pub use num::Num;
pub use ord::{Ord, OrdBy, OrderingMonoid};
pub use semigroup::Semigroup;
pub use show::{Show, ShowBy};
pub use traversable::Traversable;
