// self
use crate::{obs::OperationOutcome, registry::Resource};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(
	resource: Resource,
	operation: &'static str,
	outcome: OperationOutcome,
) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"clerk_connector_operation_total",
			"resource" => resource.as_str(),
			"operation" => operation,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (resource, operation, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_operation_outcome_noop_without_metrics() {
		record_operation_outcome(Resource::Users, "getUser", OperationOutcome::Failure);
	}
}
