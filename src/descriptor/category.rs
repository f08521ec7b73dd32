//! Category descriptor - identity and composition of arrows.
//!
//! Category is the one descriptor keyed by a *binary* type constructor: an
//! arrow `Arrow<A, B>` from `A` to `B`. It is independent of the unary
//! [`TypeConstructor`](super::TypeConstructor) machinery.
//!
//! # Laws
//!
//! ```text
//! compose(id, f) == f                                  (left identity)
//! compose(f, id) == f                                  (right identity)
//! compose(f, compose(g, h)) == compose(compose(f, g), h) (associativity)
//! ```
//!
//! Arrows are usually functions, so the laws are checked extensionally by
//! running both sides on sample inputs.

/// A descriptor for a category whose arrows are `Arrow<A, B>`.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Category;
/// use lambars_dict::instances::{Function, FunctionCategory};
///
/// let category = FunctionCategory;
/// let increment = Function::new(|value: i32| value + 1);
/// let double = Function::new(|value: i32| value * 2);
///
/// // compose(f, g) runs g first
/// let composed = category.compose(double, increment);
/// assert_eq!(composed.call(3), 8);
/// assert_eq!(category.id::<i32>().call(5), 5);
/// ```
pub trait Category {
    /// An arrow from `A` to `B`.
    type Arrow<A, B>;

    /// The identity arrow on `A`.
    fn id<A: 'static>(&self) -> Self::Arrow<A, A>;

    /// `second . first`: the arrow running `first` then `second`.
    fn compose<A, B, C>(
        &self,
        second: Self::Arrow<B, C>,
        first: Self::Arrow<A, B>,
    ) -> Self::Arrow<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static;
}
