//! Provider tokens: opaque identities used as injector lookup keys.

use core::any::{TypeId, type_name};
use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Erased identity of a [`Token`].
///
/// Tokens compare by identity, never by name: a type token is identified by
/// its `TypeId`, a unique token by a process-unique counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenId {
	/// Identity of a type token (one per Rust type).
	Type(TypeId),
	/// Identity of a counter-minted token (one per [`Token::unique`] call).
	Unique(usize),
}

/// A typed lookup key for an [`Injector`](crate::Injector) binding.
///
/// Two kinds of tokens exist:
///
/// - `Token::of()` - the canonical token for a type. Every call returns the
///   same identity, so it plays the role of a class token.
/// - `Token::unique(name)` - a fresh identity on every call, for binding
///   several independent values of the same type (a symbol token).
///
/// `Token<T>` is `Copy` regardless of `T`; it only carries identity and a
/// display name for error messages.
///
/// ## Example
///
/// ```rust
/// use girder_di::Token;
///
/// let canonical_a = Token::<u32>::of();
/// let canonical_b = Token::<u32>::of();
/// assert_eq!(canonical_a.id(), canonical_b.id());
///
/// let minted_a = Token::<u32>::unique("retry-limit");
/// let minted_b = Token::<u32>::unique("retry-limit");
/// assert_ne!(minted_a.id(), minted_b.id());
/// ```
pub struct Token<T> {
	id: TokenId,
	name: &'static str,
	_marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Token<T> {
	/// Returns the canonical token for `T`.
	///
	/// All calls for the same `T` share one identity.
	pub fn of() -> Self {
		Self {
			id: TokenId::Type(TypeId::of::<T>()),
			name: type_name::<T>(),
			_marker: PhantomData,
		}
	}

	/// Mints a token with a fresh identity.
	///
	/// The `name` is used only in error messages and debug output; two tokens
	/// minted with the same name remain distinct.
	pub fn unique(name: &'static str) -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self {
			id: TokenId::Unique(COUNTER.fetch_add(1, Ordering::Relaxed)),
			name,
			_marker: PhantomData,
		}
	}

	/// Returns this token's erased identity.
	pub fn id(&self) -> TokenId {
		self.id
	}

	/// Returns the display name used in error messages.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

// Manual impls: derive would put an unnecessary bound on `T`.
impl<T> Clone for Token<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Token<T> {}

impl<T> PartialEq for Token<T> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl<T> Eq for Token<T> {}

impl<T> fmt::Debug for Token<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Token")
			.field("id", &self.id)
			.field("name", &self.name)
			.finish()
	}
}
