//! Connector-level error types shared by the registry, resolver, dispatcher, and item loop.

// self
use crate::{_prelude::*, registry::Resource};

/// Connector-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical connector error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (unknown operation, bad credentials, client setup).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Operation parameters could not be resolved for an item.
	#[error(transparent)]
	Parameter(#[from] ParameterError),
	/// Transport failure (DNS, TCP, TLS) before a response was obtained.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Clerk answered with a non-2xx status.
	#[error("Clerk API responded with status {status}: {message}")]
	Api {
		/// HTTP status code returned by Clerk.
		status: u16,
		/// Most specific message extracted from the error envelope.
		message: String,
		/// Decoded response body, when it was valid JSON.
		body: Option<Value>,
	},
	/// A batch halted because one of its items failed.
	#[error("Item {index} failed: {source}")]
	Item {
		/// Position of the failing item in the input sequence.
		index: usize,
		/// Underlying per-item failure.
		#[source]
		source: Box<Error>,
	},
}
impl Error {
	/// Wraps a per-item failure with the item's position.
	pub fn item(index: usize, source: Error) -> Self {
		Self::Item { index, source: Box::new(source) }
	}

	/// Returns the upstream HTTP status, when the failure came from Clerk.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Item { source, .. } => source.status(),
			_ => None,
		}
	}

	/// Returns true when the failure happened before any request was sent.
	pub fn is_local(&self) -> bool {
		match self {
			Self::Config(_) | Self::Parameter(_) => true,
			Self::Item { source, .. } => source.is_local(),
			Self::Api { .. } | Self::Transport(_) => false,
		}
	}
}

/// Configuration and validation failures raised before any request is attempted.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Credentials carry an empty secret key.
	#[error("Credentials are missing the Clerk secret key.")]
	MissingSecretKey,
	/// Base URL cannot be used to address the API.
	#[error("Base URL `{url}` is invalid: {reason}.")]
	InvalidBaseUrl {
		/// Offending URL text.
		url: String,
		/// Why the URL was rejected.
		reason: String,
	},

	/// Resource identifier is not part of the API surface.
	#[error("The resource `{resource}` is not supported.")]
	UnsupportedResource {
		/// Identifier that failed to parse.
		resource: String,
	},
	/// Operation identifier is not registered for the resource.
	#[error("The operation `{operation}` is not supported for resource `{resource}`.")]
	UnsupportedOperation {
		/// Resource the lookup was scoped to.
		resource: Resource,
		/// Operation identifier that was not found.
		operation: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Per-item parameter failures raised by the resolver.
#[derive(Debug, ThisError)]
pub enum ParameterError {
	/// A required parameter was absent and declares no default.
	#[error("Missing required parameter `{field}`.")]
	MissingRequired {
		/// Host parameter name.
		field: &'static str,
	},
	/// A metadata or claims parameter is not valid JSON.
	#[error("Invalid JSON parameter `{field}`: {source}.")]
	InvalidJson {
		/// Host parameter name.
		field: &'static str,
		/// Parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// A parameter has a JSON type the field cannot accept.
	#[error("Parameter `{field}` must be {expected}.")]
	InvalidType {
		/// Host parameter name.
		field: &'static str,
		/// Human-readable description of the accepted shape.
		expected: &'static str,
	},
	/// A date-time parameter could not be parsed.
	#[error("Parameter `{field}` is not a valid date-time: {value}.")]
	InvalidTimestamp {
		/// Host parameter name.
		field: &'static str,
		/// Raw text that failed to parse.
		value: String,
	},
}
impl ParameterError {
	/// Host parameter name the failure refers to.
	pub fn field(&self) -> &'static str {
		match self {
			Self::MissingRequired { field }
			| Self::InvalidJson { field, .. }
			| Self::InvalidType { field, .. }
			| Self::InvalidTimestamp { field, .. } => field,
		}
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Clerk API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Clerk API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
