//! Shallow patching for structured state types.

/// A structured (key-value) state type that accepts shallow patches.
///
/// `Patch` is a companion type carrying one optional slot per field; merging
/// replaces exactly the fields the patch names and leaves the rest alone.
/// Non-structured state (`State<String>`, `State<i32>`, ...) has no
/// `Patchable` impl, so patching it is a compile error rather than a runtime
/// one.
///
/// The [`patchable!`](crate::patchable) macro generates the struct, its patch
/// companion, and this impl in one go:
///
/// ```rust
/// use girder_state::{Patchable, State, patchable};
///
/// patchable! {
/// 	#[derive(Debug, Clone, PartialEq)]
/// 	pub struct Document {
/// 		pub title: String,
/// 		pub starred: bool,
/// 	}
/// 	patch pub DocumentPatch
/// }
///
/// let state = State::new(Document {
/// 	title: "Hello World".into(),
/// 	starred: true,
/// });
///
/// state.patch_value(DocumentPatch {
/// 	starred: Some(false),
/// 	..Default::default()
/// });
///
/// assert_eq!(state.value().title, "Hello World");
/// assert!(!state.value().starred);
/// ```
pub trait Patchable {
	/// The partial form of `Self`: one optional slot per field.
	type Patch;

	/// Replaces the fields named by `patch`, leaving the rest untouched.
	fn merge(&mut self, patch: Self::Patch);
}

/// Defines a struct together with its patch companion and [`Patchable`] impl.
///
/// The companion struct has the same fields wrapped in `Option` and derives
/// `Debug`, `Clone`, and `Default`, so call sites can use struct-update
/// syntax (`..Default::default()`) to name only the fields they patch.
#[macro_export]
macro_rules! patchable {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $ty:ty
			),* $(,)?
		}
		patch $patch_vis:vis $patch_name:ident
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $ty,
			)*
		}

		#[derive(Debug, Clone, Default)]
		$patch_vis struct $patch_name {
			$(
				$field_vis $field: ::core::option::Option<$ty>,
			)*
		}

		impl $crate::Patchable for $name {
			type Patch = $patch_name;

			fn merge(&mut self, patch: Self::Patch) {
				$(
					if let ::core::option::Option::Some(value) = patch.$field {
						self.$field = value;
					}
				)*
			}
		}
	};
}
