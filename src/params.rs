//! Parameter collection for operations.
//!
//! A [`ParameterSource`] answers "what value did the host supply for parameter `name` on item
//! `index`?" with an explicit `Option`, so a supplied `false` or `0` is never confused with an
//! absent value. [`resolve`] turns those answers into the path, query, and body pieces of one
//! request according to an [`OperationDescriptor`](crate::registry::OperationDescriptor).

mod resolver;

pub use resolver::*;

// self
use crate::_prelude::*;

/// Read access to raw host parameters, per item.
pub trait ParameterSource {
	/// Returns the raw value of `name` for `item_index`, or `None` when it was not supplied.
	fn parameter(&self, item_index: usize, name: &str) -> Option<&Value>;
}
impl ParameterSource for Map<String, Value> {
	fn parameter(&self, _item_index: usize, name: &str) -> Option<&Value> {
		self.get(name)
	}
}
impl ParameterSource for [Map<String, Value>] {
	fn parameter(&self, item_index: usize, name: &str) -> Option<&Value> {
		self.get(item_index).and_then(|params| params.get(name))
	}
}
impl ParameterSource for Vec<Map<String, Value>> {
	fn parameter(&self, item_index: usize, name: &str) -> Option<&Value> {
		self.as_slice().parameter(item_index, name)
	}
}

/// Parameters shared by every item, with optional per-item overrides.
///
/// Mirrors how workflow hosts evaluate node parameters: most values are constant across a batch,
/// while expressions can produce a different value for each input item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
	/// Values applied to every item.
	#[serde(default)]
	pub shared: Map<String, Value>,
	/// Per-item overrides, indexed by item position.
	#[serde(default)]
	pub items: Vec<Map<String, Value>>,
}
impl ParameterSet {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a value shared by every item.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.shared.insert(name.into(), value.into());

		self
	}

	/// Sets a value for a single item, overriding any shared value.
	pub fn with_item(
		mut self,
		item_index: usize,
		name: impl Into<String>,
		value: impl Into<Value>,
	) -> Self {
		if self.items.len() <= item_index {
			self.items.resize_with(item_index + 1, Map::new);
		}

		self.items[item_index].insert(name.into(), value.into());

		self
	}
}
impl ParameterSource for ParameterSet {
	fn parameter(&self, item_index: usize, name: &str) -> Option<&Value> {
		self.items
			.get(item_index)
			.and_then(|params| params.get(name))
			.or_else(|| self.shared.get(name))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn item_overrides_take_precedence_over_shared_values() {
		let params = ParameterSet::new()
			.with("userId", "user_shared")
			.with_item(2, "userId", "user_two")
			.with_item(2, "verified", false);

		assert_eq!(params.parameter(0, "userId"), Some(&Value::from("user_shared")));
		assert_eq!(params.parameter(2, "userId"), Some(&Value::from("user_two")));
		assert_eq!(params.parameter(2, "verified"), Some(&Value::from(false)));
		assert_eq!(params.parameter(1, "verified"), None);
		assert_eq!(params.items.len(), 3);
	}

	#[test]
	fn per_item_maps_answer_by_position() {
		let mut first = Map::new();

		first.insert("sessionId".into(), Value::from("sess_1"));

		let items = vec![first, Map::new()];

		assert_eq!(items.parameter(0, "sessionId"), Some(&Value::from("sess_1")));
		assert_eq!(items.parameter(1, "sessionId"), None);
		assert_eq!(items.parameter(5, "sessionId"), None);
	}
}
