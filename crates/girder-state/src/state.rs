//! The state container.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use tracing::trace;

use crate::patch::Patchable;

type Listener<T> = Rc<dyn Fn(&T)>;
type ListenerList<T> = Rc<RefCell<Vec<(usize, Listener<T>)>>>;

/// A reactive holder of one value of type `T`.
///
/// The container owns the current committed value, an ordered listener list
/// (insertion order is notification order), and a monotonic commit counter.
/// It is single-threaded; share it with `Rc`.
pub struct State<T> {
	value: RefCell<T>,
	listeners: ListenerList<T>,
	next_listener_id: Cell<usize>,
	version: Cell<u64>,
}

impl<T: Clone + 'static> State<T> {
	/// Creates a container holding `initial`.
	pub fn new(initial: T) -> Self {
		Self {
			value: RefCell::new(initial),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_listener_id: Cell::new(0),
			version: Cell::new(0),
		}
	}

	/// Returns a clone of the current committed value.
	pub fn value(&self) -> T {
		self.value.borrow().clone()
	}

	/// Returns the number of commits so far.
	pub fn version(&self) -> u64 {
		self.version.get()
	}

	/// Commits `next` and notifies every listener before returning.
	pub fn set_value(&self, next: T) {
		self.commit(next);
	}

	/// Commits the future's output once it settles.
	///
	/// The caller gets the committed value back. Until settlement,
	/// [`State::value`] keeps reading the previous commit. A future that
	/// never settles never commits; no timeout or cancellation is applied,
	/// and the captured value is simply held until the future is dropped.
	pub async fn set_value_async(&self, next: impl Future<Output = T>) -> T {
		let settled = next.await;
		self.commit(settled.clone());
		settled
	}

	/// Commits the future's output if it settles with `Ok`.
	///
	/// On `Err` the committed value is left untouched and the error is
	/// returned to the awaiter - reported, not retried.
	pub async fn try_set_value_async<E>(
		&self,
		next: impl Future<Output = Result<T, E>>,
	) -> Result<T, E> {
		let settled = next.await?;
		self.commit(settled.clone());
		Ok(settled)
	}

	/// Registers `listener` to run after every commit.
	///
	/// The listener is not replayed with the current value at registration.
	/// Dropping the returned [`Subscription`] removes the listener.
	#[must_use = "dropping the subscription immediately unsubscribes the listener"]
	pub fn on_change(&self, listener: impl Fn(&T) + 'static) -> Subscription {
		let id = self.next_listener_id.get();
		self.next_listener_id.set(id + 1);
		self.listeners.borrow_mut().push((id, Rc::new(listener)));

		let listeners = Rc::downgrade(&self.listeners);
		Subscription {
			cancel: Some(Box::new(move || {
				if let Some(listeners) = listeners.upgrade() {
					listeners.borrow_mut().retain(|(entry, _)| *entry != id);
				}
			})),
		}
	}

	fn commit(&self, next: T) {
		*self.value.borrow_mut() = next.clone();
		self.version.set(self.version.get() + 1);
		trace!(version = self.version.get(), "state committed");
		self.notify(&next);
	}

	/// Notifies from a snapshot so listeners may subscribe or unsubscribe
	/// re-entrantly, and with the value borrow already released so they may
	/// read `value()` or issue further writes.
	fn notify(&self, value: &T) {
		let snapshot: Vec<Listener<T>> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect();
		for listener in snapshot {
			listener(value);
		}
	}
}

impl<T: Patchable + Clone + 'static> State<T> {
	/// Shallow-merges `patch` onto the current value and commits the result.
	///
	/// Only the keys named by the patch are replaced; everything else keeps
	/// its current value. Notification follows the same rules as
	/// [`State::set_value`].
	pub fn patch_value(&self, patch: T::Patch) {
		let mut next = self.value();
		next.merge(patch);
		self.commit(next);
	}

	/// Shallow-merges the future's output once it settles.
	pub async fn patch_value_async(&self, patch: impl Future<Output = T::Patch>) -> T {
		let settled = patch.await;
		let mut next = self.value();
		next.merge(settled);
		self.commit(next.clone());
		next
	}

	/// Shallow-merges the future's output if it settles with `Ok`; on `Err`
	/// the committed value is left untouched.
	pub async fn try_patch_value_async<E>(
		&self,
		patch: impl Future<Output = Result<T::Patch, E>>,
	) -> Result<T, E> {
		let settled = patch.await?;
		let mut next = self.value();
		next.merge(settled);
		self.commit(next.clone());
		Ok(next)
	}
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("State")
			.field("value", &*self.value.borrow())
			.field("listeners", &self.listeners.borrow().len())
			.field("version", &self.version.get())
			.finish()
	}
}

/// RAII guard for a registered change listener.
///
/// Dropping the subscription removes the listener. [`Subscription::forget`]
/// leaves the listener registered for the container's lifetime.
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Removes the listener now. Idempotent: removing twice is a no-op.
	pub fn unsubscribe(mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}

	/// Keeps the listener registered for the container's lifetime.
	pub fn forget(mut self) {
		self.cancel = None;
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.cancel.is_some())
			.finish()
	}
}
