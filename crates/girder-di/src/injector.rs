//! The injector: an immutable-after-construction resolution scope.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::cycle::ResolutionState;
use crate::error::InjectError;
use crate::provider::{Injectable, ProviderEntry, ProviderKind};
use crate::token::{Token, TokenId};

/// A hierarchical resolution scope.
///
/// An injector owns a fixed provider mapping, a lazily-populated instance
/// cache (singleton-per-injector), and an optional parent used only for
/// lookup fallthrough. Resolution order:
///
/// 1. own cache
/// 2. own provider (materialize, cache, return)
/// 3. parent chain
/// 4. [`InjectError::TokenNotFound`]
///
/// Two injectors never share a cache: the same class provider bound on a
/// parent and a child yields two independent instances, one per scope.
///
/// ## Example
///
/// ```rust
/// use girder_di::{Injector, ProviderEntry, Token};
///
/// let token = Token::<u32>::unique("answer");
/// let parent = Injector::builder()
///     .provide(ProviderEntry::value(token, 42_u32))
///     .build()
///     .unwrap();
/// let child = Injector::builder().parent(parent).build().unwrap();
///
/// assert_eq!(*child.get(token).unwrap(), 42);
/// ```
pub struct Injector {
	providers: HashMap<TokenId, ProviderEntry>,
	cache: RefCell<HashMap<TokenId, Rc<dyn Any>>>,
	parent: Option<Rc<Injector>>,
	resolution: ResolutionState,
}

impl Injector {
	/// Returns a builder for a new injector scope.
	pub fn builder() -> InjectorBuilder {
		InjectorBuilder::default()
	}

	/// Resolves `token` to its instance.
	///
	/// Class and factory providers materialize at most once per injector; the
	/// cached instance is returned on every later call (reference equality).
	///
	/// # Errors
	///
	/// [`InjectError::TokenNotFound`] when the whole parent chain has no
	/// binding, [`InjectError::CircularDependency`] when a provider's
	/// dependency graph re-enters itself.
	pub fn get<T: 'static>(&self, token: Token<T>) -> Result<Rc<T>, InjectError> {
		let erased = self.lookup(token.id(), token.name())?;
		erased
			.downcast::<T>()
			.map_err(|_| InjectError::TypeMismatch { token: token.name() })
	}

	/// Whether this injector (ignoring parents) has a binding for `token`.
	pub fn provides_locally<T: 'static>(&self, token: Token<T>) -> bool {
		self.providers.contains_key(&token.id())
	}

	/// Constructs an [`Injectable`] through this injector without caching it.
	///
	/// The instance's dependencies resolve (and cache) through the chain as
	/// usual, but the instance itself belongs to the caller. Used for
	/// component logic instances, which the element owns directly.
	pub fn create<T: Injectable>(&self) -> Result<T, InjectError> {
		let token = Token::<T>::of();
		let _guard = self.resolution.begin(token.id(), token.name())?;
		T::construct(self)
	}

	fn lookup(&self, id: TokenId, name: &'static str) -> Result<Rc<dyn Any>, InjectError> {
		// Borrow released before materializing: a factory may recurse into
		// this same injector.
		let cached = self.cache.borrow().get(&id).cloned();
		if let Some(instance) = cached {
			trace!(token = name, "injector cache hit");
			return Ok(instance);
		}

		if let Some(entry) = self.providers.get(&id) {
			let instance = self.materialize(entry)?;
			self.cache.borrow_mut().insert(id, instance.clone());
			return Ok(instance);
		}

		match &self.parent {
			Some(parent) => parent.lookup(id, name),
			None => Err(InjectError::TokenNotFound { token: name }),
		}
	}

	fn materialize(&self, entry: &ProviderEntry) -> Result<Rc<dyn Any>, InjectError> {
		let _guard = self
			.resolution
			.begin(entry.token_id(), entry.token_name())?;
		trace!(token = entry.token_name(), "materializing provider");
		match entry.kind() {
			ProviderKind::Value(value) => Ok(value.clone()),
			ProviderKind::Factory(factory) => factory(self),
		}
	}
}

impl fmt::Debug for Injector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Injector")
			.field("providers", &self.providers.len())
			.field("cached", &self.cache.borrow().len())
			.field("has_parent", &self.parent.is_some())
			.finish()
	}
}

/// Builder for [`Injector`].
///
/// Collects providers, an optional parent, and a bootstrap list; `build()`
/// validates the provider list and eagerly materializes the bootstrap tokens.
#[derive(Default)]
pub struct InjectorBuilder {
	providers: Vec<ProviderEntry>,
	bootstrap: Vec<(TokenId, &'static str)>,
	parent: Option<Rc<Injector>>,
}

impl InjectorBuilder {
	/// Adds one provider binding.
	pub fn provide(mut self, entry: ProviderEntry) -> Self {
		self.providers.push(entry);
		self
	}

	/// Adds several provider bindings.
	pub fn provide_all(mut self, entries: impl IntoIterator<Item = ProviderEntry>) -> Self {
		self.providers.extend(entries);
		self
	}

	/// Marks `token` for eager materialization immediately after construction.
	///
	/// Bootstrap is for providers whose side effects must run even if nothing
	/// ever injects them. The token must be bound in this same builder.
	pub fn bootstrap<T: 'static>(mut self, token: Token<T>) -> Self {
		self.bootstrap.push((token.id(), token.name()));
		self
	}

	/// Sets the parent scope used for lookup fallthrough.
	pub fn parent(mut self, parent: Rc<Injector>) -> Self {
		self.parent = Some(parent);
		self
	}

	/// Builds the injector and eagerly resolves the bootstrap list.
	///
	/// # Errors
	///
	/// [`InjectError::DuplicateProvider`] when one token is bound twice in
	/// this builder; any resolution error raised by a bootstrap token.
	pub fn build(self) -> Result<Rc<Injector>, InjectError> {
		let mut providers = HashMap::with_capacity(self.providers.len());
		for entry in self.providers {
			let token = entry.token_name();
			if providers.insert(entry.token_id(), entry).is_some() {
				return Err(InjectError::DuplicateProvider { token });
			}
		}

		let injector = Rc::new(Injector {
			providers,
			cache: RefCell::new(HashMap::new()),
			parent: self.parent,
			resolution: ResolutionState::default(),
		});

		for (id, name) in self.bootstrap {
			injector.lookup(id, name)?;
		}

		Ok(injector)
	}
}

impl fmt::Debug for InjectorBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InjectorBuilder")
			.field("providers", &self.providers.len())
			.field("bootstrap", &self.bootstrap.len())
			.field("has_parent", &self.parent.is_some())
			.finish()
	}
}
