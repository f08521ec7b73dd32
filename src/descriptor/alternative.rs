//! Alternative descriptor - a monoid on applicative values.
//!
//! # Laws
//!
//! ```text
//! or(empty, x) == x
//! or(x, empty) == x
//! or(or(x, y), z) == or(x, or(y, z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::Alternative;
//! use lambars_dict::instances::OptionAlternative;
//!
//! let alternative = OptionAlternative::new();
//! assert_eq!(alternative.or(None, Some(2)), Some(2));
//! assert_eq!(alternative.or(Some(1), Some(2)), Some(1));
//! ```

use super::Applicative;
use super::higher::{Applied, TypeConstructor};

/// A descriptor for applicatives with a choice operation (`<|>`).
pub trait Alternative {
    /// The type constructor this alternative acts on.
    type Constructor: TypeConstructor;

    /// The owned applicative descriptor.
    type Applicative: Applicative<Constructor = Self::Constructor>;

    /// Returns the owned applicative descriptor.
    fn applicative(&self) -> &Self::Applicative;

    /// The identity of `or`: a computation with no result.
    fn empty<A>(&self) -> Applied<Self::Constructor, A>
    where
        A: 'static;

    /// Chooses between two computations.
    fn or<A>(
        &self,
        left: Applied<Self::Constructor, A>,
        right: Applied<Self::Constructor, A>,
    ) -> Applied<Self::Constructor, A>
    where
        A: 'static;
}
