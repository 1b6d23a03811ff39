//! Hierarchical dependency injection module.
//!
//! This module provides provider tokens, injector scopes with per-scope
//! singleton caching and parent fallthrough, and the process-wide root
//! injector handle.
//!
//! # Examples
//!
//! ```rust
//! use girder::di::{Injector, ProviderEntry, Token};
//!
//! let greeting = Token::<String>::unique("greeting");
//! let injector = Injector::builder()
//!     .provide(ProviderEntry::value(greeting, String::from("hello")))
//!     .build()
//!     .unwrap();
//! assert_eq!(*injector.get(greeting).unwrap(), "hello");
//! ```

pub use girder_di::*;
