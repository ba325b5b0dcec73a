//! Optional observability helpers for connector operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `clerk_connector.operation` with the
//!   `resource`, `operation`, and `stage` (call site) fields, plus a warning event for every item
//!   recorded as a failure under continue-on-failure.
//! - Enable `metrics` to increment the `clerk_connector_operation_total` counter for every
//!   attempt/success/failure, labeled by `resource` + `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// 2xx response decoded.
	Success,
	/// Failure propagated back to the caller or recorded as an item error.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
