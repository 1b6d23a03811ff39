//! The attachment state machine and the component logic contract.

use girder_di::Injectable;

use crate::property::PropChange;

/// Where an element currently sits in its attachment lifecycle.
///
/// Transitions: `Unattached -> Connected`, then `Connected <-> Disconnected`
/// as the host attaches and detaches the element. There is no terminal state;
/// a disconnected element reconnects cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// Created but never attached; nothing has rendered.
	Unattached,
	/// Attached: rendered, and re-rendering on every state commit.
	Connected,
	/// Detached: subscription dropped, no renders until reconnect.
	Disconnected,
}

/// The behavior half of a component.
///
/// Logic instances are built through the element's injector
/// ([`Injectable::construct`]), so they receive their scoped services —
/// typically the element's `State` — as constructor dependencies.
///
/// Every hook has an empty default body; implement only the ones the
/// component cares about.
pub trait ComponentLogic: Injectable {
	/// Runs each time the element attaches, before the attach render.
	fn on_connected(&mut self) {}

	/// Runs each time the element detaches, after rendering stops.
	fn on_disconnected(&mut self) {}

	/// Runs when an observed attribute changes on the host element.
	///
	/// Only attributes listed in the definition's observed set reach this
	/// hook.
	fn on_attribute_changed(&mut self, _name: &str, _old: Option<&str>, _new: Option<&str>) {}

	/// Runs once per committed property change.
	///
	/// Rejected and no-op assignments never reach this hook.
	fn on_prop_changes(&mut self, _change: &PropChange) {}
}
