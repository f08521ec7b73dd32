//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Descriptors such as [`Functor`](super::Functor) and [`Monad`](super::Monad)
//! abstract over a *type constructor* (`Option<_>`, `Vec<_>`, `Result<_, E>`)
//! rather than over a concrete type. Rust has no native higher-kinded
//! generics, so each constructor is named by an uninhabited marker type that
//! implements [`TypeConstructor`]:
//!
//! | Marker                    | `Applied<A>`        |
//! |---------------------------|---------------------|
//! | `OptionConstructor`       | `Option<A>`         |
//! | `VecConstructor`          | `Vec<A>`            |
//! | `ResultConstructor<E>`    | `Result<A, E>`      |
//! | `IdentityConstructor`     | `Identity<A>`       |
//! | `StateConstructor<S, E>`  | `State<S, E, A>`    |
//!
//! Markers are never instantiated; they only appear as the
//! `Constructor` associated type of a descriptor.
//!
//! # Example
//!
//! ```rust
//! use lambars_dict::descriptor::{Applied, TypeConstructor};
//! use lambars_dict::instances::VecConstructor;
//!
//! let values: Applied<VecConstructor, i32> = vec![1, 2, 3];
//! assert_eq!(values.len(), 3);
//! ```

/// A marker naming a unary type constructor.
///
/// # Laws
///
/// `Applied<A>` must be the same constructor for every `A`; only the element
/// type may vary.
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    type Applied<A>;
}

/// Shorthand for `<F as TypeConstructor>::Applied<A>`.
pub type Applied<F, A> = <F as TypeConstructor>::Applied<A>;
