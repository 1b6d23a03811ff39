//! # Girder State
//!
//! A reactive container for exactly one value, with synchronous and
//! asynchronous commits, shallow patching, and ordered change notification.
//!
//! ## Commit model
//!
//! - [`State::set_value`] commits and notifies every listener before it
//!   returns (same turn).
//! - [`State::set_value_async`] commits only once the supplied future
//!   settles; until then [`State::value`] keeps reading the previous commit.
//! - Overlapping asynchronous writes commit in the order they **settle**,
//!   each overwriting the previous commit and notifying once. The write that
//!   settles last in real time wins, regardless of issue order.
//! - A failed asynchronous write ([`State::try_set_value_async`]) leaves the
//!   committed value untouched and returns the error to the awaiter; nothing
//!   is swallowed or retried.
//!
//! ## Invariants
//!
//! 1. Listeners observe only fully-settled values, in commit order, in their
//!    registration order.
//! 2. [`State::version`] increments exactly once per commit.
//! 3. Dropping a [`Subscription`] removes the listener; [`Subscription::forget`]
//!    keeps it for the container's lifetime.
//!
//! ## Example
//!
//! ```rust
//! use girder_state::State;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let state = State::new(String::from("Hello"));
//! assert_eq!(state.value(), "Hello");
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let _sub = state.on_change({
//!     let seen = seen.clone();
//!     move |value: &String| seen.borrow_mut().push(value.clone())
//! });
//!
//! state.set_value(String::from("Hello World"));
//! assert_eq!(seen.borrow().as_slice(), ["Hello World"]);
//! ```

mod patch;
mod state;

pub use patch::Patchable;
pub use state::{State, Subscription};
