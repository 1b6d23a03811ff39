//! Validated reactive properties and their host-facing registration.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PropertyError;

/// A committed property assignment, delivered to
/// [`ComponentLogic::on_prop_changes`](crate::ComponentLogic::on_prop_changes).
///
/// Values are carried in host form ([`serde_json::Value`]) so the hook stays
/// uniform across property types.
#[derive(Debug, Clone, PartialEq)]
pub struct PropChange {
	/// Property key.
	pub key: &'static str,
	/// The newly committed value.
	pub value: Value,
	/// The value the property held before this assignment.
	pub previous: Value,
	/// Whether this was the property's first assignment.
	pub first_change: bool,
}

type ValidatorFn<T> = Box<dyn Fn(&T) -> Result<(), String>>;

/// A component-logic field holding one validated, change-tracked value.
///
/// Assignment runs the validator chain in registration order and rejects on
/// the first failure, leaving the stored value untouched. An accepted
/// assignment reports a [`PropChange`] only when the value actually changed
/// by strict inequality; the change carries whether it came from the field's
/// first-ever assignment.
///
/// ## Example
///
/// ```rust
/// use girder_component::Prop;
///
/// let mut color = Prop::new("color", String::from("red"))
/// 	.with_validator(|value: &String| {
/// 		if value.is_empty() {
/// 			Err(String::from("color must not be empty"))
/// 		} else {
/// 			Ok(())
/// 		}
/// 	});
///
/// assert!(color.set(String::new()).is_err());
/// assert_eq!(color.get(), "red");
///
/// let change = color.set(String::from("blue")).unwrap().unwrap();
/// assert!(change.first_change);
/// ```
pub struct Prop<T> {
	key: &'static str,
	value: T,
	assigned: bool,
	validators: Vec<ValidatorFn<T>>,
}

impl<T> Prop<T>
where
	T: Clone + PartialEq + Serialize + 'static,
{
	/// A property holding `initial`, with no validators.
	///
	/// The initial value does not count as an assignment; the first accepted
	/// `set` is the one flagged `first_change`.
	pub fn new(key: &'static str, initial: T) -> Self {
		Self {
			key,
			value: initial,
			assigned: false,
			validators: Vec::new(),
		}
	}

	/// Appends a validator to the chain.
	pub fn with_validator(
		mut self,
		validator: impl Fn(&T) -> Result<(), String> + 'static,
	) -> Self {
		self.validators.push(Box::new(validator));
		self
	}

	/// The property key.
	pub fn key(&self) -> &'static str {
		self.key
	}

	/// The current value.
	pub fn get(&self) -> &T {
		&self.value
	}

	/// Assigns `next`, returning the change it produced.
	///
	/// `Ok(None)` means the assignment was accepted but the value did not
	/// change, so no hook should fire.
	///
	/// # Errors
	///
	/// [`PropertyError::Validation`] from the first failing validator; the
	/// stored value is left untouched.
	pub fn set(&mut self, next: T) -> Result<Option<PropChange>, PropertyError> {
		for validator in &self.validators {
			if let Err(message) = validator(&next) {
				return Err(PropertyError::Validation {
					key: self.key,
					message,
					rejected: serde_json::to_value(&next).unwrap_or(Value::Null),
				});
			}
		}

		let first_change = !self.assigned;
		self.assigned = true;
		if next == self.value {
			return Ok(None);
		}

		let previous = encode(self.key, &self.value)?;
		let value = encode(self.key, &next)?;
		self.value = next;

		Ok(Some(PropChange {
			key: self.key,
			value,
			previous,
			first_change,
		}))
	}

	/// The current value in host form.
	pub fn to_value(&self) -> Result<Value, PropertyError> {
		encode(self.key, &self.value)
	}
}

fn encode<T: Serialize>(key: &'static str, value: &T) -> Result<Value, PropertyError> {
	serde_json::to_value(value).map_err(|source| PropertyError::InvalidValue {
		key,
		message: source.to_string(),
	})
}

impl<T: fmt::Debug> fmt::Debug for Prop<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Prop")
			.field("key", &self.key)
			.field("value", &self.value)
			.field("assigned", &self.assigned)
			.field("validators", &self.validators.len())
			.finish()
	}
}

type ReadFn<L> = Rc<dyn Fn(&L) -> Result<Value, PropertyError>>;
type WriteFn<L> = Rc<dyn Fn(&mut L, Value) -> Result<Option<PropChange>, PropertyError>>;

/// Registers one [`Prop`] field of a logic type with its element.
///
/// A `PropSpec` erases the field's value type behind host-form accessors so the
/// element can proxy `set_prop`/`get_prop` calls by key. A host write is
/// deserialized into the field's type, then assigned through the field's own
/// validator chain.
pub struct PropSpec<L> {
	key: &'static str,
	read: ReadFn<L>,
	write: WriteFn<L>,
}

impl<L> PropSpec<L> {
	/// Exposes the `Prop` field reached by the accessor pair as `key`.
	pub fn new<T>(
		key: &'static str,
		read: impl Fn(&L) -> &Prop<T> + 'static,
		write: impl Fn(&mut L) -> &mut Prop<T> + 'static,
	) -> Self
	where
		T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
	{
		Self {
			key,
			read: Rc::new(move |logic| read(logic).to_value()),
			write: Rc::new(move |logic, raw| {
				let typed: T = serde_json::from_value(raw).map_err(|source| {
					PropertyError::InvalidValue {
						key,
						message: source.to_string(),
					}
				})?;
				write(logic).set(typed)
			}),
		}
	}

	/// The property key.
	pub fn key(&self) -> &'static str {
		self.key
	}

	pub(crate) fn read(&self, logic: &L) -> Result<Value, PropertyError> {
		(self.read)(logic)
	}

	pub(crate) fn write(
		&self,
		logic: &mut L,
		raw: Value,
	) -> Result<Option<PropChange>, PropertyError> {
		(self.write)(logic, raw)
	}
}

impl<L> Clone for PropSpec<L> {
	fn clone(&self) -> Self {
		Self {
			key: self.key,
			read: self.read.clone(),
			write: self.write.clone(),
		}
	}
}

impl<L> fmt::Debug for PropSpec<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PropSpec").field("key", &self.key).finish()
	}
}
