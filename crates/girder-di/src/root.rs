//! The process-wide root injector.
//!
//! Every component's injector chains to one shared root. The root is seeded
//! once at application bootstrap, before any component resolves against it,
//! and is read-only afterwards. Under the single-threaded runtime model the
//! handle is thread-local; there is no cross-thread root.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::InjectError;
use crate::injector::{Injector, InjectorBuilder};

thread_local! {
	static ROOT: RefCell<Option<Rc<Injector>>> = const { RefCell::new(None) };
}

/// Installs the root injector from `builder`.
///
/// Call exactly once, before any component mounts. The builder must not have
/// a parent; the root is the top of every chain.
///
/// # Errors
///
/// [`InjectError::RootAlreadyBootstrapped`] when a root (explicit or
/// auto-initialized through [`root_injector`]) is already installed; any
/// error raised by the builder's own `build()`.
pub fn bootstrap_root(builder: InjectorBuilder) -> Result<Rc<Injector>, InjectError> {
	ROOT.with(|slot| {
		if slot.borrow().is_some() {
			return Err(InjectError::RootAlreadyBootstrapped);
		}
		let injector = builder.build()?;
		debug!("root injector bootstrapped");
		*slot.borrow_mut() = Some(injector.clone());
		Ok(injector)
	})
}

/// Returns the root injector, installing an empty one on first use.
///
/// Applications that need root-level providers should call
/// [`bootstrap_root`] before anything calls this.
pub fn root_injector() -> Rc<Injector> {
	ROOT.with(|slot| {
		if let Some(root) = slot.borrow().as_ref() {
			return root.clone();
		}
		// First use without explicit bootstrap: empty root.
		let injector = Injector::builder()
			.build()
			.expect("an empty injector always builds");
		*slot.borrow_mut() = Some(injector.clone());
		injector
	})
}

/// Returns the root injector only if one is installed.
pub fn try_root_injector() -> Option<Rc<Injector>> {
	ROOT.with(|slot| slot.borrow().clone())
}

/// Removes the installed root injector.
///
/// Intended for tests that need a fresh process-wide scope; a page session
/// never tears its root down.
pub fn clear_root() {
	ROOT.with(|slot| {
		*slot.borrow_mut() = None;
	});
}
