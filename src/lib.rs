//! # lambars-dict
//!
//! Algebraic capabilities as explicit, composable values.
//!
//! ## Overview
//!
//! Rust's typeclass mechanism (traits implemented by the carrier type) gives
//! every type at most one `Ord`, one `Monoid`, one `Functor`. This library
//! takes the other road: a capability is a *descriptor*, an ordinary value
//! whose type implements one descriptor trait, and generic code receives it
//! as an argument.
//!
//! - **Descriptors** ([`descriptor`]): Semigroup, Monoid, Group, Eq, Ord, Num,
//!   Show, Category, Functor, Applicative, Alternative, Monad, Foldable,
//!   Traversable. Composite descriptors own the descriptor they extend.
//! - **Derived operations** ([`derived`]): `concat`, `fold_m`, `find`, `all`,
//!   `traverse`, `sequence`, `join`, ... written once against the traits.
//! - **Instances** ([`instances`]): bundles for `Result`, `Option`, `Vec`,
//!   `Identity`, functions, `State`, and the primitive types.
//! - **Checks** ([`check`]): an assertion recorder driven by Eq and Show
//!   descriptors.
//!
//! ## Feature Flags
//!
//! - `check` (default): the [`check`] module, logging through `log`
//! - `rayon`: parallel monoidal reduction in [`derived`]
//! - `serde`: `Serialize`/`Deserialize` for `Identity` and check reports
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_dict::prelude::*;
//!
//! // Two monoids on the same carrier, chosen at the call site.
//! assert_eq!(concat(&VecFoldable, &Additive::<i32>::new(), vec![2, 3, 4]), 9);
//! assert_eq!(concat(&VecFoldable, &Multiplicative::<i32>::new(), vec![2, 3, 4]), 24);
//!
//! // Result short-circuits, whatever the derived operation.
//! let monad = ResultMonad::<&str>::new();
//! assert_eq!(monad.flat_map(|x: i32| Ok(x + 1), Err("boom")), Err("boom"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]
// Descriptor methods take `&self` even when the descriptor is zero-sized.
#![allow(clippy::unused_self)]

/// Prelude module for convenient imports.
///
/// Re-exports every descriptor trait, every instance and the derived
/// operations. Note that the `Eq` and `Ord` descriptor traits shadow the std
/// prelude traits of the same name; derives are unaffected.
///
/// # Usage
///
/// ```rust
/// use lambars_dict::prelude::*;
/// ```
pub mod prelude {
    pub use crate::derived::*;
    pub use crate::descriptor::*;
    pub use crate::instances::*;

    #[cfg(feature = "check")]
    pub use crate::check::{Checks, run};
}

pub mod derived;
pub mod descriptor;
pub mod instances;

#[cfg(feature = "check")]
pub mod check;
