//! Provider definitions: how a token's value gets materialized.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::error::InjectError;
use crate::injector::Injector;
use crate::token::{Token, TokenId};

/// A type constructible through an [`Injector`].
///
/// Implementations resolve their own dependencies through the injector they
/// are handed, so a class provider's whole constructor graph flows through
/// one chain.
///
/// ## Example
///
/// ```rust
/// use girder_di::{Injectable, InjectError, Injector, Token};
/// use std::rc::Rc;
///
/// struct Clock;
///
/// struct Scheduler {
///     clock: Rc<Clock>,
/// }
///
/// impl Injectable for Scheduler {
///     fn construct(injector: &Injector) -> Result<Self, InjectError> {
///         Ok(Self {
///             clock: injector.get(Token::of())?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + 'static {
	/// Builds an instance, resolving constructor dependencies through
	/// `injector`.
	fn construct(injector: &Injector) -> Result<Self, InjectError>;
}

type FactoryFn = Rc<dyn Fn(&Injector) -> Result<Rc<dyn Any>, InjectError>>;

#[derive(Clone)]
pub(crate) enum ProviderKind {
	/// A precomputed value, returned as-is.
	Value(Rc<dyn Any>),
	/// A lazily-invoked producer (covers both factory and class providers).
	Factory(FactoryFn),
}

/// One token-to-provider binding, ready to hand to an
/// [`InjectorBuilder`](crate::InjectorBuilder).
///
/// Entries are cheaply cloneable so a component definition can stamp the same
/// provider list into every element's injector. Cloning a value entry shares
/// the value; cloning a factory or class entry shares the producer, and each
/// injector still materializes its own instance.
#[derive(Clone)]
pub struct ProviderEntry {
	token_id: TokenId,
	token_name: &'static str,
	kind: ProviderKind,
}

impl ProviderEntry {
	/// Binds `token` to a precomputed value.
	pub fn value<T: 'static>(token: Token<T>, value: T) -> Self {
		Self {
			token_id: token.id(),
			token_name: token.name(),
			kind: ProviderKind::Value(Rc::new(value)),
		}
	}

	/// Binds `token` to a lazily-invoked factory.
	///
	/// The factory receives the resolving injector, so it can look up its own
	/// dependencies. It runs at most once per injector; the result is cached.
	pub fn factory<T, F>(token: Token<T>, factory: F) -> Self
	where
		T: 'static,
		F: Fn(&Injector) -> Result<T, InjectError> + 'static,
	{
		Self {
			token_id: token.id(),
			token_name: token.name(),
			kind: ProviderKind::Factory(Rc::new(move |injector| {
				factory(injector).map(|value| Rc::new(value) as Rc<dyn Any>)
			})),
		}
	}

	/// Binds `token` to a class provider: an [`Injectable`] constructed with
	/// its dependencies resolved recursively.
	pub fn class<T: Injectable>(token: Token<T>) -> Self {
		Self::factory(token, |injector| T::construct(injector))
	}

	/// Binds `T`'s canonical token ([`Token::of`]) to a class provider.
	pub fn class_of<T: Injectable>() -> Self {
		Self::class(Token::<T>::of())
	}

	pub(crate) fn token_id(&self) -> TokenId {
		self.token_id
	}

	pub(crate) fn token_name(&self) -> &'static str {
		self.token_name
	}

	pub(crate) fn kind(&self) -> &ProviderKind {
		&self.kind
	}
}

impl fmt::Debug for ProviderEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let kind = match self.kind {
			ProviderKind::Value(_) => "value",
			ProviderKind::Factory(_) => "factory",
		};
		f.debug_struct("ProviderEntry")
			.field("token", &self.token_name)
			.field("kind", &kind)
			.finish()
	}
}
