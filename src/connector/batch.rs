//! Item loop: runs one operation over every input item under a failure policy.

// self
use crate::{
	_prelude::*,
	connector::Connector,
	http::ApiHttpClient,
	obs::{self, OperationSpan},
	params::ParameterSource,
	registry::Resource,
};

/// What the item loop does when an item fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
	/// Abort the batch with the first item failure.
	#[default]
	Halt,
	/// Record the failure as an output item and keep going.
	Continue,
}
impl FailurePolicy {
	/// Maps the host's continue-on-failure switch onto a policy.
	pub fn from_continue_on_fail(continue_on_fail: bool) -> Self {
		if continue_on_fail { Self::Continue } else { Self::Halt }
	}
}

/// One output record, paired with the input item that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
	/// Decoded response body, or `{"error": "<message>"}` for a recorded failure.
	pub payload: Value,
	/// Position of the originating input item.
	pub source_index: usize,
}
impl ResultItem {
	/// Wraps a successful response.
	pub fn success(source_index: usize, payload: Value) -> Self {
		Self { payload, source_index }
	}

	/// Records a failure as an error object.
	pub fn failure(source_index: usize, error: &Error) -> Self {
		let mut payload = Map::new();

		payload.insert("error".into(), Value::String(error.to_string()));

		Self { payload: Value::Object(payload), source_index }
	}

	/// Returns true when the item records a failure.
	pub fn is_failure(&self) -> bool {
		self.payload
			.as_object()
			.is_some_and(|object| object.len() == 1 && object.contains_key("error"))
	}
}

impl<C> Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Runs `operation` for items `0..item_count`, in order, one request per item.
	///
	/// The operation is looked up once before the loop, so an unknown `(resource, operation)`
	/// pair fails the whole call without sending anything, whatever the policy. Under
	/// [`FailurePolicy::Halt`] the first failure is returned as [`Error::Item`]; under
	/// [`FailurePolicy::Continue`] it becomes a [`ResultItem::failure`] at the same position.
	pub async fn process<S>(
		&self,
		resource: Resource,
		operation: &str,
		item_count: usize,
		source: &S,
		policy: FailurePolicy,
	) -> Result<Vec<ResultItem>>
	where
		S: ?Sized + ParameterSource,
	{
		let descriptor = self.registry.lookup(resource, operation)?;
		let span = OperationSpan::new(resource, descriptor.operation, "process");

		span.instrument(async move {
			let mut items = Vec::with_capacity(item_count);

			for item_index in 0..item_count {
				match self.execute(descriptor, item_index, source).await {
					Ok(payload) => items.push(ResultItem::success(item_index, payload)),
					Err(e) if policy == FailurePolicy::Continue => {
						obs::record_item_failure(item_index, &e);

						items.push(ResultItem::failure(item_index, &e));
					},
					Err(e) => return Err(Error::item(item_index, e)),
				}
			}

			Ok(items)
		})
		.await
	}
}
