//! Error types for properties, the registry, and element construction.

use serde_json::Value;
use thiserror::Error;

use girder_di::InjectError;

/// Error type for property assignment through the host surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
	/// A validator in the property's chain rejected the assignment.
	///
	/// The stored value is untouched; the rejected value is reported back so
	/// the host can surface it.
	#[error("validation failed for property `{key}`: {message}")]
	Validation {
		/// Property key.
		key: &'static str,
		/// The failing validator's message.
		message: String,
		/// The value that was rejected, in host form.
		rejected: Value,
	},

	/// The component registered no property under this key.
	#[error("component has no property `{key}`")]
	UnknownProperty {
		/// The key the host asked for.
		key: String,
	},

	/// A host value could not cross the typed boundary in either direction.
	#[error("value for property `{key}` has the wrong shape: {message}")]
	InvalidValue {
		/// Property key.
		key: &'static str,
		/// Conversion failure detail.
		message: String,
	},
}

/// Error type for component definition and element operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
	/// The registry already holds a definition for this tag.
	#[error("tag `{tag}` is already defined")]
	DuplicateTag {
		/// The colliding tag.
		tag: String,
	},

	/// No definition is registered under this tag.
	#[error("no component defined for tag `{tag}`")]
	UnknownTag {
		/// The tag the host asked for.
		tag: String,
	},

	/// The element's injector failed to build or resolve.
	#[error(transparent)]
	Inject(#[from] InjectError),

	/// A property operation failed.
	#[error(transparent)]
	Property(#[from] PropertyError),
}
