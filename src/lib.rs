//! # Girder
//!
//! A declarative component runtime for Rust.
//!
//! Girder wires class-like component definitions to a reactive state
//! container, a scoped dependency-injection graph, validated properties, and
//! a render-on-change loop. It deliberately does not render anything itself:
//! templating and native event delivery stay behind the [`component::Renderer`]
//! and [`component::EventTarget`] seams so the same core drives any host
//! toolkit.
//!
//! ## Core Principles
//!
//! - **Explicit over ambient**: providers, handlers, observed attributes, and
//!   reactive properties are all declared on a [`component::ComponentDef`],
//!   not discovered through runtime metadata.
//! - **Scoped singletons**: every element owns an injector chained to one
//!   process-wide root; a token resolves to at most one instance per scope.
//! - **Settlement-ordered state**: asynchronous writes commit in the order
//!   they settle, each notifying listeners exactly once.
//!
//! ## Feature Flags
//!
//! - `di` - Hierarchical dependency injection
//! - `state` - Reactive state container
//! - `component` - Component definitions, lifecycle binding, and rendering
//! - `full` (default) - Everything above
//!
//! ## Example
//!
//! ```ignore
//! use girder::component::{ComponentDef, RenderCtx, Template};
//!
//! let def = ComponentDef::new("app-counter", 0_i32, |ctx: &RenderCtx<i32>| {
//!     Template::new(format!("count: {}", ctx.state()))
//!         .bind("click", ctx.run("increment", serde_json::json!(1)))
//! });
//! ```

#[cfg(feature = "component")]
pub mod component;
#[cfg(feature = "di")]
pub mod di;
#[cfg(feature = "state")]
pub mod state;
