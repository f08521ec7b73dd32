//! State monad with failure - stateful computation that may abort.
//!
//! # Overview
//!
//! A `State<S, E, A>` encapsulates a function `S -> Result<(A, S), E>`: it
//! takes the current state and either produces a result with the next state
//! or fails with an error. Once a step fails, no later step runs and the
//! state at the point of failure is dropped.
//!
//! This is the carrier an interpreter threads through evaluation: the
//! environment is the state, evaluation errors are the failure.
//!
//! Computations are single-shot: `run` consumes the value. This lets every
//! step own its continuation without reference counting.
//!
//! # Laws
//!
//! Besides the Functor, Applicative and Monad laws (checked in
//! `tests/monad_laws.rs`), the state operations satisfy:
//!
//! - Get Put: `flat_map(put, get())` leaves the state unchanged
//! - Put Get: `seq_right(put(s), get())` returns `s`
//! - Put Put: `seq_right(put(s1), put(s2))` equals `put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use lambars_dict::descriptor::{Applicative, Monad};
//! use lambars_dict::instances::{State, StateMonad};
//!
//! let monad = StateMonad::<i32, String>::new();
//! let next_id = monad.flat_map(
//!     move |current: i32| {
//!         let applicative = monad.applicative();
//!         applicative.seq_right(State::put(current + 1), applicative.wrap(current))
//!     },
//!     State::get(),
//! );
//! assert_eq!(next_id.run(10), Ok((10, 11)));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::descriptor::{Applicative, Functor, Monad, TypeConstructor};

/// A single-shot stateful computation that may fail.
pub struct State<S, E, A> {
    run_function: Box<dyn FnOnce(S) -> Result<(A, S), E>>,
}

impl<S, E, A> State<S, E, A> {
    /// Creates a new State from a fallible state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::instances::State;
    ///
    /// let state: State<i32, String, i32> = State::new(|s: i32| Ok((s * 2, s + 1)));
    /// assert_eq!(state.run(10), Ok((20, 11)));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(S) -> Result<(A, S), E> + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn run(self, initial_state: S) -> Result<(A, S), E> {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn eval(self, initial_state: S) -> Result<A, E> {
        self.run(initial_state).map(|(result, _)| result)
    }

    /// Runs the computation and keeps only the final state.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn exec(self, initial_state: S) -> Result<S, E> {
        self.run(initial_state).map(|(_, state)| state)
    }
}

impl<S, E, A> State<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    /// Fails without touching the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::instances::State;
    ///
    /// let failing: State<i32, &str, ()> = State::fail("unbound symbol");
    /// assert_eq!(failing.run(0), Err("unbound symbol"));
    /// ```
    pub fn fail(error: E) -> Self {
        Self::new(move |_| Err(error))
    }

    /// Lifts a plain `Result` into a computation that leaves the state alone.
    pub fn lift(result: Result<A, E>) -> Self {
        Self::new(move |state| result.map(|value| (value, state)))
    }

    /// Projects a value from the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_dict::instances::State;
    ///
    /// let depth: State<Vec<u8>, (), usize> = State::gets(|stack: &Vec<u8>| stack.len());
    /// assert_eq!(depth.eval(vec![1, 2]), Ok(2));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: FnOnce(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            Ok((result, state))
        })
    }
}

impl<S, E> State<S, E, S>
where
    S: Clone + 'static,
    E: 'static,
{
    /// Returns the current state without modifying it.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| Ok((state.clone(), state)))
    }
}

impl<S, E> State<S, E, ()>
where
    S: 'static,
    E: 'static,
{
    /// Replaces the current state.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| Ok(((), new_state)))
    }

    /// Transforms the current state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::new(move |state| Ok(((), modifier(state))))
    }
}

impl<S, E, A> fmt::Debug for State<S, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<computation>)")
    }
}

/// Type constructor marker for `State<S, E, _>`.
pub struct StateConstructor<S, E>(PhantomData<fn() -> (S, E)>);

impl<S, E> TypeConstructor for StateConstructor<S, E> {
    type Applied<A> = State<S, E, A>;
}

// =============================================================================
// Descriptors
// =============================================================================

descriptor! {
    /// Maps the result, leaving state and failure untouched.
    pub struct StateFunctor<S, E>;
}

impl<S: 'static, E: 'static> Functor for StateFunctor<S, E> {
    type Constructor = StateConstructor<S, E>;

    fn map<A, B, F>(&self, mut function: F, container: State<S, E, A>) -> State<S, E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        State::new(move |state| {
            let (value, state) = container.run(state)?;
            Ok((function(value), state))
        })
    }
}

descriptor! {
    /// Runs the function step, then the argument step.
    pub struct StateApplicative<S, E> {
        functor: StateFunctor<S, E> = StateFunctor::new(),
    }
}

impl<S: 'static, E: 'static> Applicative for StateApplicative<S, E> {
    type Constructor = StateConstructor<S, E>;
    type Functor = StateFunctor<S, E>;

    fn functor(&self) -> &StateFunctor<S, E> {
        &self.functor
    }

    fn wrap<A>(&self, value: A) -> State<S, E, A>
    where
        A: 'static,
    {
        State::new(move |state| Ok((value, state)))
    }

    fn apply<A, B, F>(
        &self,
        functions: State<S, E, F>,
        values: State<S, E, A>,
    ) -> State<S, E, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        State::new(move |state| {
            let (mut function, state) = functions.run(state)?;
            let (value, state) = values.run(state)?;
            Ok((function(value), state))
        })
    }

    fn map2<A, B, C, F>(
        &self,
        mut function: F,
        left: State<S, E, A>,
        right: State<S, E, B>,
    ) -> State<S, E, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: FnMut(A, B) -> C + Clone + 'static,
    {
        State::new(move |state| {
            let (first, state) = left.run(state)?;
            let (second, state) = right.run(state)?;
            Ok((function(first, second), state))
        })
    }
}

descriptor! {
    /// Threads the state through dependent steps; the first `Err` aborts.
    pub struct StateMonad<S, E> {
        applicative: StateApplicative<S, E> = StateApplicative::new(),
    }
}

impl<S: 'static, E: 'static> Monad for StateMonad<S, E> {
    type Constructor = StateConstructor<S, E>;
    type Applicative = StateApplicative<S, E>;

    fn applicative(&self) -> &StateApplicative<S, E> {
        &self.applicative
    }

    fn flat_map<A, B, F>(&self, mut function: F, container: State<S, E, A>) -> State<S, E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> State<S, E, B> + 'static,
    {
        State::new(move |state| {
            let (value, state) = container.run(state)?;
            function(value).run(state)
        })
    }
}
