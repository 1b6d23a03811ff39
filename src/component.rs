//! Component runtime module.
//!
//! This module provides the component declaration surface, the element
//! lifecycle binder, validated reactive properties, events, and the
//! process-wide tag registry.
//!
//! # Examples
//!
//! ```rust
//! use girder::component::{ComponentDef, ComponentLogic, RenderCtx, Template};
//! use girder::di::{InjectError, Injectable, Injector};
//!
//! #[derive(Clone)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! struct GreetingLogic;
//!
//! impl Injectable for GreetingLogic {
//!     fn construct(_injector: &Injector) -> Result<Self, InjectError> {
//!         Ok(Self)
//!     }
//! }
//!
//! impl ComponentLogic for GreetingLogic {}
//!
//! let def: ComponentDef<Greeting, GreetingLogic> = ComponentDef::new(
//!     "app-greeting",
//!     Greeting { name: "world".into() },
//!     |ctx: &RenderCtx<Greeting>| Template::new(format!("Hello, {}!", ctx.state().name)),
//! );
//! ```

pub use girder_component::*;
