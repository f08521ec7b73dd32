//! Show descriptor - rendering values as text.
//!
//! Show never stringifies a type implicitly: a container's Show descriptor
//! is always assembled from the Show descriptors of its payloads.

use std::fmt;
use std::marker::PhantomData;

/// A descriptor rendering `Carrier` values as strings.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::Show;
/// use lambars_dict::instances::Native;
///
/// assert_eq!(Native::<i32>::new().show(&42), "42");
/// ```
pub trait Show {
    /// The type being rendered.
    type Carrier;

    /// Renders `value`.
    fn show(&self, value: &Self::Carrier) -> String;
}

/// A [`Show`] descriptor built from a closure.
///
/// # Examples
///
/// ```rust
/// use lambars_dict::descriptor::{Show, ShowBy};
///
/// let quoted = ShowBy::new(|value: &String| format!("{value:?}"));
/// assert_eq!(quoted.show(&"lisp".to_string()), "\"lisp\"");
/// ```
pub struct ShowBy<A, F> {
    function: F,
    carrier: PhantomData<fn(&A)>,
}

impl<A, F> ShowBy<A, F>
where
    F: Fn(&A) -> String,
{
    /// Wraps `function` as a show descriptor.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            carrier: PhantomData,
        }
    }
}

impl<A, F> Show for ShowBy<A, F>
where
    F: Fn(&A) -> String,
{
    type Carrier = A;

    fn show(&self, value: &A) -> String {
        (self.function)(value)
    }
}

impl<A, F: Clone> Clone for ShowBy<A, F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            carrier: PhantomData,
        }
    }
}

impl<A, F> fmt::Debug for ShowBy<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ShowBy")
    }
}
