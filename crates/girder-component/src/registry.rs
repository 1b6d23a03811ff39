//! The process-wide element registry.
//!
//! Mirrors the host's custom-element registry: one definition per tag,
//! defined once, instantiated many times. Like the root injector, the
//! registry is thread-local under the single-threaded runtime model.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::definition::ComponentDef;
use crate::element::{ComponentElement, Element};
use crate::error::ComponentError;
use crate::events::EventTarget;
use crate::lifecycle::ComponentLogic;
use crate::template::Renderer;

type ElementFactory =
	Rc<dyn Fn(Rc<dyn Renderer>, Rc<dyn EventTarget>) -> Result<Rc<dyn Element>, ComponentError>>;

thread_local! {
	static REGISTRY: RefCell<HashMap<String, ElementFactory>> = RefCell::new(HashMap::new());
}

/// Registers `def` under its tag.
///
/// # Errors
///
/// [`ComponentError::DuplicateTag`] when the tag is already defined.
pub fn define<S, L>(def: ComponentDef<S, L>) -> Result<(), ComponentError>
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	let tag = def.tag();
	let def = Rc::new(def);
	REGISTRY.with(|slot| {
		let mut registry = slot.borrow_mut();
		if registry.contains_key(tag) {
			return Err(ComponentError::DuplicateTag {
				tag: tag.to_string(),
			});
		}
		debug!(tag, "component defined");
		registry.insert(
			tag.to_string(),
			Rc::new(move |renderer, target| {
				let element: Rc<dyn Element> =
					ComponentElement::new(def.clone(), renderer, target)?;
				Ok(element)
			}),
		);
		Ok(())
	})
}

/// Instantiates an unattached element for `tag`.
///
/// # Errors
///
/// [`ComponentError::UnknownTag`] when no definition is registered for `tag`,
/// or any error raised while building the element.
pub fn create_element(
	tag: &str,
	renderer: Rc<dyn Renderer>,
	target: Rc<dyn EventTarget>,
) -> Result<Rc<dyn Element>, ComponentError> {
	let factory = REGISTRY
		.with(|slot| slot.borrow().get(tag).cloned())
		.ok_or_else(|| ComponentError::UnknownTag {
			tag: tag.to_string(),
		})?;
	factory(renderer, target)
}

/// Whether a definition is registered for `tag`.
pub fn is_defined(tag: &str) -> bool {
	REGISTRY.with(|slot| slot.borrow().contains_key(tag))
}

/// Removes every registered definition.
///
/// Intended for tests that define the same tags repeatedly; a page session
/// never undefines its components.
pub fn clear_registry() {
	REGISTRY.with(|slot| slot.borrow_mut().clear());
}
