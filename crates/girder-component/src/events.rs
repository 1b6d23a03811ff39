//! Host event surface: incoming native events and outgoing custom events.

use serde_json::Value;

/// A host event as seen by component handlers.
///
/// The runtime never inspects the payload; it is carried as a
/// [`serde_json::Value`] the way the host delivered it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	/// Host-level event name (`"click"`, `"input"`, ...).
	pub name: String,
	/// Host-supplied payload; [`Value::Null`] when the event carries none.
	pub detail: Value,
}

impl Event {
	/// An event with no payload.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			detail: Value::Null,
		}
	}

	/// An event carrying `detail`.
	pub fn with_detail(name: impl Into<String>, detail: Value) -> Self {
		Self {
			name: name.into(),
			detail,
		}
	}
}

/// Construction options for an outgoing [`CustomEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventInit {
	/// Arbitrary payload attached to the event.
	pub detail: Value,
	/// Whether the host should propagate the event up the tree.
	pub bubbles: bool,
	/// Whether a host listener may cancel the event.
	pub cancelable: bool,
}

impl EventInit {
	/// An init carrying `detail`, non-bubbling and non-cancelable.
	pub fn with_detail(detail: Value) -> Self {
		Self {
			detail,
			..Self::default()
		}
	}
}

impl Default for EventInit {
	fn default() -> Self {
		Self {
			detail: Value::Null,
			bubbles: false,
			cancelable: false,
		}
	}
}

/// An event a component emits outward through its [`EventTarget`].
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEvent {
	/// Event name as the host will observe it.
	pub name: String,
	/// Payload and propagation options.
	pub init: EventInit,
}

/// The outward-facing half of the host shim.
///
/// An element hands every [`CustomEvent`] produced by a `dispatch` binding to
/// its target; what "dispatching" means (DOM event, message bus, test log) is
/// entirely the host's business.
pub trait EventTarget {
	/// Delivers `event` to the host.
	fn dispatch_event(&self, event: CustomEvent);
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_named_event_has_null_detail() {
		let event = Event::named("click");
		assert_eq!(event.name, "click");
		assert_eq!(event.detail, Value::Null);
	}

	#[test]
	fn test_init_defaults_are_inert() {
		let init = EventInit::with_detail(json!({ "count": 3 }));
		assert!(!init.bubbles);
		assert!(!init.cancelable);
		assert_eq!(init.detail["count"], 3);
	}
}
