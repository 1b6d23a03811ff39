//! Circular dependency detection for provider resolution.
//!
//! Each injector keeps a resolution-in-progress set checked before a provider
//! materializes. Re-entering a token that is still resolving means a class or
//! factory provider depends, directly or transitively, on itself; that fails
//! immediately instead of recursing. A depth counter guards pathological
//! chains that never revisit a token.
//!
//! Cleanup is RAII: [`ResolutionGuard`] removes its token from the set when
//! dropped, so early returns through `?` unwind the bookkeeping correctly.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::InjectError;
use crate::token::TokenId;

/// Maximum resolution depth (prevents pathological provider graphs).
const MAX_RESOLUTION_DEPTH: usize = 100;

#[derive(Default)]
struct ResolutionInner {
	/// Tokens currently being resolved (O(1) cycle check).
	in_progress: HashSet<TokenId>,
	/// Resolution path, for the cycle error message.
	path: Vec<(TokenId, &'static str)>,
	/// Current resolution depth.
	depth: usize,
}

/// Per-injector resolution bookkeeping.
#[derive(Default)]
pub(crate) struct ResolutionState {
	inner: RefCell<ResolutionInner>,
}

impl ResolutionState {
	/// Records the start of resolving `id`, failing on a cycle or when the
	/// depth limit is exceeded. The returned guard unwinds the record on drop.
	pub(crate) fn begin(
		&self,
		id: TokenId,
		name: &'static str,
	) -> Result<ResolutionGuard<'_>, InjectError> {
		let mut inner = self.inner.borrow_mut();

		if inner.depth + 1 > MAX_RESOLUTION_DEPTH {
			return Err(InjectError::MaxDepthExceeded(inner.depth + 1));
		}

		if inner.in_progress.contains(&id) {
			let path = build_cycle_path(&inner.path, id, name);
			return Err(InjectError::CircularDependency { token: name, path });
		}

		inner.depth += 1;
		inner.in_progress.insert(id);
		inner.path.push((id, name));

		Ok(ResolutionGuard { state: self, id })
	}
}

/// RAII guard removing a token from the resolution-in-progress set on drop.
pub(crate) struct ResolutionGuard<'a> {
	state: &'a ResolutionState,
	id: TokenId,
}

impl std::fmt::Debug for ResolutionGuard<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolutionGuard").field("id", &self.id).finish()
	}
}

impl Drop for ResolutionGuard<'_> {
	fn drop(&mut self) {
		let mut inner = self.state.inner.borrow_mut();
		inner.in_progress.remove(&self.id);
		if let Some(pos) = inner.path.iter().rposition(|(id, _)| *id == self.id) {
			inner.path.remove(pos);
		}
		inner.depth = inner.depth.saturating_sub(1);
	}
}

/// Builds the `A -> B -> A` path shown in cycle errors.
fn build_cycle_path(path: &[(TokenId, &'static str)], id: TokenId, name: &'static str) -> String {
	match path.iter().position(|(entry, _)| *entry == id) {
		Some(start) => {
			let mut names: Vec<&str> = path[start..].iter().map(|(_, n)| *n).collect();
			names.push(name);
			names.join(" -> ")
		}
		None => name.to_string(),
	}
}
