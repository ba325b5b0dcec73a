// self
use crate::{_prelude::*, registry::Resource};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by the dispatcher and the item loop.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the resource, operation, and stage.
	pub fn new(resource: Resource, operation: &'static str, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"clerk_connector.operation",
				resource = resource.as_str(),
				operation,
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (resource, operation, stage);

			Self {}
		}
	}

	/// Runs `fut` inside the operation span; a no-op wrapper without the `tracing` feature.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning for an item recorded as a failure instead of halting the batch.
pub fn record_item_failure(item_index: usize, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(item_index, error = %error, "Item failed; continuing with the next item.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (item_index, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn operation_span_noop_without_tracing() {
		let _span = OperationSpan::new(Resource::Sessions, "getSession", "test");
		let error = Error::Api { status: 404, message: "Not Found".into(), body: None };

		record_item_failure(0, &error);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = OperationSpan::new(Resource::Users, "getUser", "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
