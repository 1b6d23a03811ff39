//! The element shell: one injector scope, one state service, one logic
//! instance, rendered while attached.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;
use tracing::debug;

use girder_di::{Injector, ProviderEntry, Token, root_injector};
use girder_state::{State, Subscription};

use crate::definition::{ComponentDef, DispatchFn, RenderCtx, RunFn};
use crate::error::{ComponentError, PropertyError};
use crate::events::{CustomEvent, Event, EventInit, EventTarget};
use crate::lifecycle::{ComponentLogic, Status};
use crate::template::{EventHandler, Renderer};

/// The erased element surface host shims talk to.
///
/// The registry hands elements out behind this trait so a host can manage a
/// page of heterogeneous components without knowing their state or logic
/// types.
pub trait Element {
	/// The tag this element was created under.
	fn tag(&self) -> &'static str;

	/// Current attachment status.
	fn status(&self) -> Status;

	/// Host attach callback.
	fn connect(&self);

	/// Host detach callback.
	fn disconnect(&self);

	/// Host attribute-change callback.
	fn attribute_changed(&self, name: &str, old: Option<&str>, new: Option<&str>);

	/// Writes a property by key, in host form.
	fn set_prop(&self, key: &str, value: Value) -> Result<(), ComponentError>;

	/// Reads a property by key, in host form.
	fn get_prop(&self, key: &str) -> Result<Value, ComponentError>;
}

impl fmt::Debug for dyn Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag())
			.field("status", &self.status())
			.finish()
	}
}

/// One mounted instance of a [`ComponentDef`].
///
/// Creation builds the element's injector as a child of the root injector,
/// binding a fresh `State<S>` seeded with the definition's default state plus
/// the definition's providers, then constructs the logic through it. Sibling
/// elements therefore never share scoped services, while root bindings reach
/// them all.
///
/// Rendering is lifecycle-bound: the first render happens on
/// [`connect`](ComponentElement::connect), one render follows each state
/// commit while connected, and a detached element renders nothing until it
/// reconnects (from the state's current value, not the default).
pub struct ComponentElement<S, L>
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	def: Rc<ComponentDef<S, L>>,
	injector: Rc<Injector>,
	state: Rc<State<S>>,
	logic: RefCell<L>,
	status: Cell<Status>,
	renderer: Rc<dyn Renderer>,
	target: Rc<dyn EventTarget>,
	render_sub: RefCell<Option<Subscription>>,
	this: RefCell<Weak<Self>>,
}

impl<S, L> ComponentElement<S, L>
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	/// Builds an unattached element for `def`.
	///
	/// # Errors
	///
	/// Any [`InjectError`](girder_di::InjectError) raised while building the
	/// element's injector scope or constructing the logic instance.
	pub fn new(
		def: Rc<ComponentDef<S, L>>,
		renderer: Rc<dyn Renderer>,
		target: Rc<dyn EventTarget>,
	) -> Result<Rc<Self>, ComponentError> {
		let default_state = def.default_state();
		let injector = Injector::builder()
			.parent(root_injector())
			.provide(ProviderEntry::factory(Token::<State<S>>::of(), move |_| {
				Ok(State::new(default_state.clone()))
			}))
			.provide_all(def.providers().iter().cloned())
			.build()?;

		let state = injector.get(Token::<State<S>>::of())?;
		let logic = injector.create::<L>()?;

		let element = Rc::new(Self {
			def,
			injector,
			state,
			logic: RefCell::new(logic),
			status: Cell::new(Status::Unattached),
			renderer,
			target,
			render_sub: RefCell::new(None),
			this: RefCell::new(Weak::new()),
		});
		*element.this.borrow_mut() = Rc::downgrade(&element);
		Ok(element)
	}

	/// The tag this element was created under.
	pub fn tag(&self) -> &'static str {
		self.def.tag()
	}

	/// Current attachment status.
	pub fn status(&self) -> Status {
		self.status.get()
	}

	/// The element's injector scope.
	///
	/// Resolutions fall through to the root injector for anything the
	/// definition did not bind locally.
	pub fn injector(&self) -> Rc<Injector> {
		self.injector.clone()
	}

	/// The element's state service, shared with the logic instance.
	pub fn state(&self) -> Rc<State<S>> {
		self.state.clone()
	}

	/// Attaches the element: fires `on_connected`, renders once, then
	/// re-renders on every state commit until [`disconnect`](Self::disconnect).
	///
	/// Connecting an already-connected element is a no-op.
	pub fn connect(&self) {
		if self.status.get() == Status::Connected {
			return;
		}
		self.status.set(Status::Connected);
		debug!(tag = self.def.tag(), "element connected");

		self.logic.borrow_mut().on_connected();
		self.render();

		let this = self.this.borrow().clone();
		let sub = self.state.on_change(move |_: &S| {
			if let Some(element) = this.upgrade() {
				element.render();
			}
		});
		*self.render_sub.borrow_mut() = Some(sub);
	}

	/// Detaches the element: stops rendering, then fires `on_disconnected`.
	///
	/// State commits while detached still land in the state service; the next
	/// [`connect`](Self::connect) renders from the current value.
	pub fn disconnect(&self) {
		if self.status.get() != Status::Connected {
			return;
		}
		self.status.set(Status::Disconnected);
		debug!(tag = self.def.tag(), "element disconnected");

		// Dropping the subscription detaches the render loop.
		self.render_sub.borrow_mut().take();
		self.logic.borrow_mut().on_disconnected();
	}

	/// Forwards a host attribute change to the logic, if observed.
	pub fn attribute_changed(&self, name: &str, old: Option<&str>, new: Option<&str>) {
		if !self.def.observed_attributes().iter().any(|a| *a == name) {
			return;
		}
		self.logic.borrow_mut().on_attribute_changed(name, old, new);
	}

	/// Writes the property registered under `key`.
	///
	/// A committed change fires `on_prop_changes` exactly once; rejected and
	/// no-op writes fire nothing.
	///
	/// # Errors
	///
	/// [`PropertyError::UnknownProperty`] for an unregistered key, or the
	/// write's own validation/conversion error.
	pub fn set_prop(&self, key: &str, value: Value) -> Result<(), ComponentError> {
		let spec = self
			.def
			.find_prop(key)
			.ok_or_else(|| PropertyError::UnknownProperty { key: key.to_string() })?;

		let mut logic = self.logic.borrow_mut();
		if let Some(change) = spec.write(&mut logic, value)? {
			logic.on_prop_changes(&change);
		}
		Ok(())
	}

	/// Reads the property registered under `key`, in host form.
	pub fn get_prop(&self, key: &str) -> Result<Value, ComponentError> {
		let spec = self
			.def
			.find_prop(key)
			.ok_or_else(|| PropertyError::UnknownProperty { key: key.to_string() })?;
		Ok(spec.read(&self.logic.borrow())?)
	}

	/// Builds the render context, runs the render function, merges the style
	/// fragment, and hands the result to the renderer.
	fn render(&self) {
		let run: RunFn = Rc::new({
			let this = self.this.borrow().clone();
			move |event: &str, payload: Value| -> EventHandler {
				let this = this.clone();
				let event = event.to_string();
				Rc::new(move |host_event: &Event| {
					if let Some(element) = this.upgrade() {
						element.run_handlers(&event, host_event, &payload);
					}
				})
			}
		});

		let dispatch: DispatchFn = Rc::new({
			let target = self.target.clone();
			move |event: &str, init: EventInit| {
				let target = target.clone();
				let name = event.to_string();
				Rc::new(move || {
					target.dispatch_event(CustomEvent {
						name: name.clone(),
						init: init.clone(),
					});
				}) as Rc<dyn Fn()>
			}
		});

		let ctx = RenderCtx::new(self.state.value(), self.def.tag(), run, dispatch);
		let template = (self.def.render_fn())(&ctx);
		let template = match self.def.style_fragment() {
			Some(style) => style.merge(&template),
			None => template,
		};
		self.renderer.apply(&template);
	}

	/// Runs every handler registered under `event`, in registration order.
	fn run_handlers(&self, event: &str, host_event: &Event, payload: &Value) {
		let handlers: Vec<_> = self.def.handlers_for(event).to_vec();
		let mut logic = self.logic.borrow_mut();
		for handler in &handlers {
			handler(&mut logic, host_event, payload);
		}
	}
}

impl<S, L> Element for ComponentElement<S, L>
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	fn tag(&self) -> &'static str {
		ComponentElement::tag(self)
	}

	fn status(&self) -> Status {
		ComponentElement::status(self)
	}

	fn connect(&self) {
		ComponentElement::connect(self);
	}

	fn disconnect(&self) {
		ComponentElement::disconnect(self);
	}

	fn attribute_changed(&self, name: &str, old: Option<&str>, new: Option<&str>) {
		ComponentElement::attribute_changed(self, name, old, new);
	}

	fn set_prop(&self, key: &str, value: Value) -> Result<(), ComponentError> {
		ComponentElement::set_prop(self, key, value)
	}

	fn get_prop(&self, key: &str) -> Result<Value, ComponentError> {
		ComponentElement::get_prop(self, key)
	}
}

impl<S, L> fmt::Debug for ComponentElement<S, L>
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentElement")
			.field("tag", &self.def.tag())
			.field("status", &self.status.get())
			.finish()
	}
}
