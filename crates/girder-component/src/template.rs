//! Opaque render output and the external templating seam.

use std::fmt;
use std::rc::Rc;

use crate::events::Event;

/// A callback wired to a named trigger in a rendered template.
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// One trigger-to-handler wire inside a [`Template`].
#[derive(Clone)]
pub struct EventBinding {
	trigger: String,
	handler: EventHandler,
}

impl EventBinding {
	/// The trigger name the host matches events against.
	pub fn trigger(&self) -> &str {
		&self.trigger
	}

	/// Invokes the bound handler with `event`.
	pub fn fire(&self, event: &Event) {
		(self.handler)(event);
	}
}

impl fmt::Debug for EventBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventBinding")
			.field("trigger", &self.trigger)
			.finish()
	}
}

/// What a render function produces.
///
/// The runtime treats templates as opaque: a text body plus a list of named
/// event bindings. Interpreting the body is the [`Renderer`]'s job; the
/// runtime only builds, merges, and hands templates over.
#[derive(Debug, Clone, Default)]
pub struct Template {
	body: String,
	bindings: Vec<EventBinding>,
}

impl Template {
	/// A template with `body` and no bindings.
	pub fn new(body: impl Into<String>) -> Self {
		Self {
			body: body.into(),
			bindings: Vec::new(),
		}
	}

	/// Adds a handler for `trigger`.
	pub fn bind(mut self, trigger: impl Into<String>, handler: EventHandler) -> Self {
		self.bindings.push(EventBinding {
			trigger: trigger.into(),
			handler,
		});
		self
	}

	/// The text body.
	pub fn body(&self) -> &str {
		&self.body
	}

	/// The event bindings, in declaration order.
	pub fn bindings(&self) -> &[EventBinding] {
		&self.bindings
	}

	/// Concatenates `self` and `other` into one fragment, `self` first.
	///
	/// Used to fold a definition's style fragment into every rendered
	/// template.
	pub fn merge(&self, other: &Template) -> Template {
		let mut merged = self.clone();
		merged.body.push_str(&other.body);
		merged.bindings.extend(other.bindings.iter().cloned());
		merged
	}

	/// Fires every binding registered for `trigger` with `event`.
	///
	/// This is how a host shim routes a native event into the template's
	/// handlers.
	pub fn trigger(&self, trigger: &str, event: &Event) {
		for binding in self.bindings.iter().filter(|b| b.trigger == trigger) {
			binding.fire(event);
		}
	}
}

/// The external templating capability.
///
/// Called once per render with the complete template for the element.
/// Applying the same template twice must be observably idempotent; the
/// runtime relies on that to keep "render" a plain function of state.
pub trait Renderer {
	/// Applies `template` to whatever surface this renderer draws on.
	fn apply(&self, template: &Template);
}
