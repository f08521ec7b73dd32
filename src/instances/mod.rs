//! Concrete descriptors for std and crate-provided types.
//!
//! Each submodule bundles the descriptors for one carrier:
//!
//! - [`result`]: `Result<A, E>`, the canonical end-to-end instance
//! - [`option`]: `Option<A>`
//! - [`vec`]: `Vec<A>`
//! - [`identity`]: [`Identity<A>`]
//! - [`function`]: function and Kleisli arrows
//! - [`state`]: [`State<S, E, A>`], state threading with failure
//! - [`primitive`]: numbers, `bool`, `char`, `String` and the standard monoids
//!
//! Every type here is re-exported at this level, so
//! `lambars_dict::instances::ResultMonad` and
//! `lambars_dict::instances::result::ResultMonad` are the same item.

/// Declares a descriptor type with `new`, `Clone`, `Copy`, `Default` and
/// `Debug` implementations that place no bounds on its type parameters.
///
/// Two forms are accepted:
///
/// - `struct Name<A, B>;` declares a zero-sized descriptor over phantom
///   parameters.
/// - `struct Name<A> { field: Type = initializer, .. }` declares a descriptor
///   owning other descriptors.
macro_rules! descriptor {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$($param:ident),+>;
    ) => {
        $(#[$meta])*
        $vis struct $name<$($param),+>(::std::marker::PhantomData<fn() -> ($($param,)+)>);

        impl<$($param),+> $name<$($param),+> {
            /// Creates the descriptor.
            #[must_use]
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> ::std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$($param:ident),+>)? {
            $($field:ident: $field_type:ty = $initializer:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name $(<$($param),+>)? {
            $($field: $field_type),+
        }

        impl $(<$($param),+>)? $name $(<$($param),+>)? {
            /// Creates the descriptor.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    $($field: $initializer),+
                }
            }
        }

        impl $(<$($param),+>)? Clone for $name $(<$($param),+>)? {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl $(<$($param),+>)? Copy for $name $(<$($param),+>)? {}

        impl $(<$($param),+>)? Default for $name $(<$($param),+>)? {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $(<$($param),+>)? ::std::fmt::Debug for $name $(<$($param),+>)? {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }
    };
}

pub mod function;
pub mod identity;
pub mod option;
pub mod primitive;
pub mod result;
pub mod state;
pub mod vec;

pub use function::{Function, FunctionCategory, Kleisli, KleisliCategory};
pub use identity::{
    Identity, IdentityApplicative, IdentityConstructor, IdentityFoldable, IdentityFunctor,
    IdentityMonad, IdentityTraversable,
};
pub use option::{
    OptionAlternative, OptionApplicative, OptionConstructor, OptionEq, OptionFoldable,
    OptionFunctor, OptionMonad, OptionMonoid, OptionOrd, OptionShow, OptionTraversable,
};
pub use primitive::{Additive, Float, Multiplicative, Native, StringMonoid, VecMonoid};
pub use result::{
    ResultApplicative, ResultConstructor, ResultEq, ResultFoldable, ResultFunctor, ResultMonad,
    ResultOrd, ResultShow, ResultTraversable, unwrap_err, unwrap_ok,
};
pub use state::{State, StateApplicative, StateConstructor, StateFunctor, StateMonad};
pub use vec::{
    VecAlternative, VecApplicative, VecConstructor, VecEq, VecFoldable, VecFunctor, VecMonad,
    VecOrd, VecShow, VecTraversable,
};
