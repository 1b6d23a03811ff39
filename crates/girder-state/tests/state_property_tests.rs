//! Property tests for commit ordering and patch semantics.

use std::cell::RefCell;
use std::rc::Rc;

use girder_state::{Patchable, State, patchable};
use proptest::prelude::*;

proptest! {
	/// Listeners observe every synchronous commit exactly once, in order,
	/// and the final observation equals the container's current value.
	#[test]
	fn sync_commits_notify_once_each_in_order(values in prop::collection::vec(any::<i32>(), 0..32)) {
		let state = State::new(0_i32);
		let seen = Rc::new(RefCell::new(Vec::new()));
		let _sub = state.on_change({
			let seen = seen.clone();
			move |value: &i32| seen.borrow_mut().push(*value)
		});

		for value in &values {
			state.set_value(*value);
		}

		let seen = seen.borrow();
		prop_assert_eq!(seen.as_slice(), values.as_slice());
		prop_assert_eq!(state.version(), values.len() as u64);
		if let Some(last) = values.last() {
			prop_assert_eq!(state.value(), *last);
		}
	}

	/// Every registered listener sees the same commit sequence.
	#[test]
	fn all_listeners_see_identical_sequences(
		values in prop::collection::vec(any::<i32>(), 1..16),
		listeners in 1_usize..5,
	) {
		let state = State::new(0_i32);
		let logs: Vec<Rc<RefCell<Vec<i32>>>> =
			(0..listeners).map(|_| Rc::new(RefCell::new(Vec::new()))).collect();
		let subs: Vec<_> = logs
			.iter()
			.map(|log| {
				state.on_change({
					let log = log.clone();
					move |value: &i32| log.borrow_mut().push(*value)
				})
			})
			.collect();

		for value in &values {
			state.set_value(*value);
		}

		for log in &logs {
			let log = log.borrow();
			prop_assert_eq!(log.as_slice(), values.as_slice());
		}
		drop(subs);
	}
}

patchable! {
	#[derive(Debug, Clone, PartialEq)]
	struct Model {
		label: String,
		count: i32,
		enabled: bool,
	}
	patch ModelPatch
}

fn arb_patch() -> impl Strategy<Value = ModelPatch> {
	(
		prop::option::of("[a-z]{0,8}"),
		prop::option::of(any::<i32>()),
		prop::option::of(any::<bool>()),
	)
		.prop_map(|(label, count, enabled)| ModelPatch {
			label,
			count,
			enabled,
		})
}

proptest! {
	/// A sequence of shallow patches applied through the container matches
	/// folding the same patches over a plain value.
	#[test]
	fn patch_sequence_matches_plain_fold(patches in prop::collection::vec(arb_patch(), 0..16)) {
		let initial = Model {
			label: "seed".into(),
			count: 0,
			enabled: false,
		};
		let state = State::new(initial.clone());

		let mut expected = initial;
		for patch in &patches {
			state.patch_value(patch.clone());
			expected.merge(patch.clone());
		}

		prop_assert_eq!(state.value(), expected);
		prop_assert_eq!(state.version(), patches.len() as u64);
	}
}
