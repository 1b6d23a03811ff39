//! The component declaration surface.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use girder_di::ProviderEntry;

use crate::events::{Event, EventInit};
use crate::property::PropSpec;
use crate::template::{EventHandler, Template};

/// A zero-argument closure that emits one configured
/// [`CustomEvent`](crate::CustomEvent) through the element's target.
pub type Dispatch = Rc<dyn Fn()>;

pub(crate) type HandlerFn<L> = Rc<dyn Fn(&mut L, &Event, &Value)>;
pub(crate) type RunFn = Rc<dyn Fn(&str, Value) -> EventHandler>;
pub(crate) type DispatchFn = Rc<dyn Fn(&str, EventInit) -> Dispatch>;

/// What a render function sees: a state snapshot plus the element's wiring
/// helpers.
///
/// `run` and `dispatch` produce closures meant to be bound into the returned
/// [`Template`]; they stay valid for the element's lifetime, not just this
/// render.
pub struct RenderCtx<S> {
	state: S,
	tag: &'static str,
	run: RunFn,
	dispatch: DispatchFn,
}

impl<S> RenderCtx<S> {
	pub(crate) fn new(state: S, tag: &'static str, run: RunFn, dispatch: DispatchFn) -> Self {
		Self {
			state,
			tag,
			run,
			dispatch,
		}
	}

	/// The state snapshot this render is a function of.
	pub fn state(&self) -> &S {
		&self.state
	}

	/// The host tag the element was created under.
	pub fn tag(&self) -> &'static str {
		self.tag
	}

	/// A handler that routes a host event to the handlers registered under
	/// `event` ([`ComponentDef::on`]), passing `payload` along.
	pub fn run(&self, event: &str, payload: Value) -> EventHandler {
		(self.run)(event, payload)
	}

	/// A closure that dispatches a custom `event` with `init` through the
	/// element's [`EventTarget`](crate::EventTarget).
	pub fn dispatch(&self, event: &str, init: EventInit) -> Dispatch {
		(self.dispatch)(event, init)
	}
}

impl<S: fmt::Debug> fmt::Debug for RenderCtx<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderCtx")
			.field("tag", &self.tag)
			.field("state", &self.state)
			.finish()
	}
}

/// Everything the runtime needs to know about one component.
///
/// A definition couples a tag, a render function, the default state the
/// element's `State` service is seeded with, scoped providers, observed
/// attributes, an optional style fragment, named event handlers, and the
/// registered properties. Definitions are immutable once built; the registry
/// stamps one shared definition into every element instance.
///
/// ## Example
///
/// ```rust
/// use girder_component::{ComponentDef, RenderCtx, Template};
/// use girder_di::{InjectError, Injectable, Injector};
/// use serde_json::json;
///
/// struct CounterLogic;
///
/// impl Injectable for CounterLogic {
/// 	fn construct(_injector: &Injector) -> Result<Self, InjectError> {
/// 		Ok(Self)
/// 	}
/// }
///
/// # impl girder_component::ComponentLogic for CounterLogic {}
/// let def: ComponentDef<i32, CounterLogic> =
/// 	ComponentDef::new("app-counter", 0, |ctx: &RenderCtx<i32>| {
/// 		Template::new(format!("<p>{}</p>", ctx.state()))
/// 			.bind("click", ctx.run("increment", json!(1)))
/// 	})
/// 	.on("increment", |_logic, _event, _payload| {});
/// ```
pub struct ComponentDef<S, L> {
	tag: &'static str,
	render: Rc<dyn Fn(&RenderCtx<S>) -> Template>,
	default_state: S,
	providers: Vec<ProviderEntry>,
	observed_attributes: Vec<&'static str>,
	style: Option<Template>,
	handlers: HashMap<String, Vec<HandlerFn<L>>>,
	props: Vec<PropSpec<L>>,
}

impl<S: Clone + 'static, L> ComponentDef<S, L> {
	/// A definition with the three required pieces: tag, default state, and
	/// render function.
	pub fn new(
		tag: &'static str,
		default_state: S,
		render: impl Fn(&RenderCtx<S>) -> Template + 'static,
	) -> Self {
		Self {
			tag,
			render: Rc::new(render),
			default_state,
			providers: Vec::new(),
			observed_attributes: Vec::new(),
			style: None,
			handlers: HashMap::new(),
			props: Vec::new(),
		}
	}

	/// Adds a provider bound in every element's own injector scope.
	pub fn provide(mut self, entry: ProviderEntry) -> Self {
		self.providers.push(entry);
		self
	}

	/// Adds a host attribute whose changes reach
	/// [`ComponentLogic::on_attribute_changed`](crate::ComponentLogic::on_attribute_changed).
	pub fn observe(mut self, attribute: &'static str) -> Self {
		self.observed_attributes.push(attribute);
		self
	}

	/// Sets a fragment merged into every rendered template, ahead of the
	/// render output.
	pub fn style(mut self, style: Template) -> Self {
		self.style = Some(style);
		self
	}

	/// Registers a handler for the named component event.
	///
	/// Several handlers may share one name; they run in registration order
	/// when a [`RenderCtx::run`] binding fires.
	pub fn on(
		mut self,
		event: impl Into<String>,
		handler: impl Fn(&mut L, &Event, &Value) + 'static,
	) -> Self {
		self.handlers
			.entry(event.into())
			.or_default()
			.push(Rc::new(handler));
		self
	}

	/// Registers a property of the logic type with the element.
	pub fn prop(mut self, spec: PropSpec<L>) -> Self {
		self.props.push(spec);
		self
	}

	/// The tag elements of this component are created under.
	pub fn tag(&self) -> &'static str {
		self.tag
	}

	/// The attributes whose changes are forwarded to the logic.
	pub fn observed_attributes(&self) -> &[&'static str] {
		&self.observed_attributes
	}

	pub(crate) fn default_state(&self) -> S {
		self.default_state.clone()
	}

	pub(crate) fn render_fn(&self) -> Rc<dyn Fn(&RenderCtx<S>) -> Template> {
		self.render.clone()
	}

	pub(crate) fn providers(&self) -> &[ProviderEntry] {
		&self.providers
	}

	pub(crate) fn style_fragment(&self) -> Option<&Template> {
		self.style.as_ref()
	}

	pub(crate) fn handlers_for(&self, event: &str) -> &[HandlerFn<L>] {
		self.handlers.get(event).map(Vec::as_slice).unwrap_or(&[])
	}

	pub(crate) fn find_prop(&self, key: &str) -> Option<&PropSpec<L>> {
		self.props.iter().find(|spec| spec.key() == key)
	}
}

impl<S, L> fmt::Debug for ComponentDef<S, L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentDef")
			.field("tag", &self.tag)
			.field("providers", &self.providers.len())
			.field("observed_attributes", &self.observed_attributes)
			.field("handlers", &self.handlers.len())
			.field("props", &self.props.len())
			.finish()
	}
}
