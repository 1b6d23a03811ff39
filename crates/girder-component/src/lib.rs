//! # Girder Component
//!
//! The lifecycle half of the Girder runtime: component definitions, mounted
//! elements, validated properties, and the seams (renderer, event target)
//! through which a host drives them.
//!
//! ## Model
//!
//! A [`ComponentDef`] declares a component once: tag, render function,
//! default state, scoped providers, observed attributes, event handlers, and
//! properties. Each [`ComponentElement`] created from it gets its own
//! injector scope (a child of the process root) holding its own `State`
//! service, and its own logic instance constructed through that scope.
//!
//! Rendering is bound to attachment: the first render happens on `connect`,
//! one render follows each state commit while connected, and nothing renders
//! while detached. The render function is a plain function of the state
//! snapshot; event wiring flows through [`RenderCtx::run`] and
//! [`RenderCtx::dispatch`].
//!
//! ## Example
//!
//! ```rust
//! use girder_component::{
//! 	ComponentDef, ComponentElement, ComponentLogic, CustomEvent, EventTarget, RenderCtx,
//! 	Renderer, Template,
//! };
//! use girder_di::{InjectError, Injectable, Injector, Token};
//! use girder_state::State;
//! use serde_json::json;
//! use std::rc::Rc;
//!
//! struct Counter {
//! 	state: Rc<State<i32>>,
//! }
//!
//! impl Injectable for Counter {
//! 	fn construct(injector: &Injector) -> Result<Self, InjectError> {
//! 		Ok(Self {
//! 			state: injector.get(Token::of())?,
//! 		})
//! 	}
//! }
//!
//! impl ComponentLogic for Counter {}
//!
//! struct NullRenderer;
//!
//! impl Renderer for NullRenderer {
//! 	fn apply(&self, _template: &Template) {}
//! }
//!
//! struct NullTarget;
//!
//! impl EventTarget for NullTarget {
//! 	fn dispatch_event(&self, _event: CustomEvent) {}
//! }
//!
//! let def = ComponentDef::new("app-counter", 0_i32, |ctx: &RenderCtx<i32>| {
//! 	Template::new(format!("<p>count: {}</p>", ctx.state()))
//! 		.bind("click", ctx.run("increment", json!(1)))
//! })
//! .on("increment", |logic: &mut Counter, _event, payload| {
//! 	let step = payload.as_i64().unwrap_or(1) as i32;
//! 	logic.state.set_value(logic.state.value() + step);
//! });
//!
//! let element =
//! 	ComponentElement::new(Rc::new(def), Rc::new(NullRenderer), Rc::new(NullTarget)).unwrap();
//! element.connect();
//!
//! element.state().set_value(41);
//! assert_eq!(element.state().value(), 41);
//! ```

mod definition;
mod element;
mod error;
mod events;
mod lifecycle;
mod property;
mod registry;
mod template;

pub use definition::{ComponentDef, Dispatch, RenderCtx};
pub use element::{ComponentElement, Element};
pub use error::{ComponentError, PropertyError};
pub use events::{CustomEvent, Event, EventInit, EventTarget};
pub use lifecycle::{ComponentLogic, Status};
pub use property::{Prop, PropChange, PropSpec};
pub use registry::{clear_registry, create_element, define, is_defined};
pub use template::{EventBinding, EventHandler, Renderer, Template};
