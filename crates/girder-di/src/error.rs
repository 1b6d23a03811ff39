//! Error types for injector resolution.

use thiserror::Error;

/// Error type for injector construction and resolution.
///
/// Resolution errors are fatal to the resolving call and surface to the
/// caller; nothing is retried or silently recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
	/// The token has no binding anywhere along the parent chain.
	#[error("no provider bound for token `{token}` in this injector or any parent")]
	TokenNotFound {
		/// Display name of the unresolved token.
		token: &'static str,
	},

	/// A class or factory provider re-entered its own resolution.
	#[error("circular dependency detected while resolving `{token}`\n  Path: {path}")]
	CircularDependency {
		/// Display name of the token that closed the cycle.
		token: &'static str,
		/// Resolution path in `A -> B -> A` form.
		path: String,
	},

	/// The resolution stack grew past the depth limit.
	#[error("maximum resolution depth exceeded ({0}); the provider graph is too deep")]
	MaxDepthExceeded(usize),

	/// One injector received two bindings for the same token.
	#[error("token `{token}` is bound more than once in a single injector")]
	DuplicateProvider {
		/// Display name of the doubly-bound token.
		token: &'static str,
	},

	/// A cached or provided value failed to downcast to the token's type.
	#[error("provider for token `{token}` produced a value of an unexpected type")]
	TypeMismatch {
		/// Display name of the mismatched token.
		token: &'static str,
	},

	/// [`bootstrap_root`](crate::bootstrap_root) was called while a root
	/// injector was already installed.
	#[error("a root injector is already installed for this thread")]
	RootAlreadyBootstrapped,
}
