//! # Girder Dependency Injection
//!
//! Hierarchical, token-keyed dependency injection for the Girder component
//! runtime.
//!
//! ## Features
//!
//! - **Token-keyed**: bindings are looked up by identity ([`Token`]), never by
//!   name, so two tokens of the same value type stay independent.
//! - **Scoped singletons**: each [`Injector`] materializes a provider at most
//!   once and caches the instance for its own scope.
//! - **Parent fallthrough**: resolution walks the parent chain when a scope
//!   has no binding of its own; a child binding shadows its parent's.
//! - **Eager bootstrap**: a builder-declared subset of tokens is materialized
//!   immediately after construction, for providers whose side effects must
//!   run even if nothing ever injects them.
//! - **Cycle detection**: class-provider cycles fail with a
//!   [`InjectError::CircularDependency`] carrying the resolution path instead
//!   of recursing forever.
//!
//! ## Example
//!
//! ```rust
//! use girder_di::{Injectable, InjectError, Injector, ProviderEntry, Token};
//! use std::rc::Rc;
//!
//! struct Config {
//!     greeting: &'static str,
//! }
//!
//! struct Greeter {
//!     config: Rc<Config>,
//! }
//!
//! impl Injectable for Greeter {
//!     fn construct(injector: &Injector) -> Result<Self, InjectError> {
//!         Ok(Self {
//!             config: injector.get(Token::of())?,
//!         })
//!     }
//! }
//!
//! let injector = Injector::builder()
//!     .provide(ProviderEntry::value(Token::of(), Config { greeting: "hello" }))
//!     .provide(ProviderEntry::class_of::<Greeter>())
//!     .build()
//!     .unwrap();
//!
//! let greeter = injector.get(Token::<Greeter>::of()).unwrap();
//! assert_eq!(greeter.config.greeting, "hello");
//! ```

mod cycle;
mod error;
mod injector;
mod provider;
mod root;
mod token;

pub use error::InjectError;
pub use injector::{Injector, InjectorBuilder};
pub use provider::{Injectable, ProviderEntry};
pub use root::{bootstrap_root, clear_root, root_injector, try_root_injector};
pub use token::{Token, TokenId};
