//! Reactive state container module.
//!
//! This module provides [`State`], a reactive holder of a single value with
//! synchronous and settlement-ordered asynchronous commits, shallow patching,
//! and ordered change notification.
//!
//! # Examples
//!
//! ```rust
//! use girder::state::State;
//!
//! let state = State::new(String::from("Hello"));
//! let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//! let sub = state.on_change({
//!     let seen = seen.clone();
//!     move |value: &String| seen.borrow_mut().push(value.clone())
//! });
//! state.set_value(String::from("Hello World"));
//! assert_eq!(seen.borrow().as_slice(), ["Hello World"]);
//! drop(sub);
//! ```

pub use girder_state::*;
