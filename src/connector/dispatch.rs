//! Request dispatcher: one resolved request per call, with response and error normalization.

// self
use crate::{
	_prelude::*,
	connector::Connector,
	error::{ConfigError, TransportError},
	http::{ApiHttpClient, ApiRequest, ApiResponse},
	obs::{self, OperationOutcome, OperationSpan},
	params::{self, ParameterSource, ResolvedParameters},
	registry::{OperationDescriptor, Resource, descriptor::placeholder},
};

impl<C> Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Resolves the request for `item_index` without sending it.
	pub fn prepare<S>(
		&self,
		resource: Resource,
		operation: &str,
		item_index: usize,
		source: &S,
	) -> Result<ApiRequest>
	where
		S: ?Sized + ParameterSource,
	{
		let descriptor = self.registry.lookup(resource, operation)?;

		self.prepare_with(descriptor, item_index, source)
	}

	/// Sends exactly one request for `item_index` and returns the decoded response body.
	pub async fn dispatch<S>(
		&self,
		resource: Resource,
		operation: &str,
		item_index: usize,
		source: &S,
	) -> Result<Value>
	where
		S: ?Sized + ParameterSource,
	{
		let descriptor = self.registry.lookup(resource, operation)?;
		let span = OperationSpan::new(resource, descriptor.operation, "dispatch");

		span.instrument(self.execute(descriptor, item_index, source)).await
	}

	pub(crate) fn prepare_with<S>(
		&self,
		descriptor: &OperationDescriptor,
		item_index: usize,
		source: &S,
	) -> Result<ApiRequest>
	where
		S: ?Sized + ParameterSource,
	{
		let resolved = params::resolve(descriptor, item_index, source)?;
		let url = build_url(&self.credentials.base_url, descriptor, &resolved)?;

		Ok(ApiRequest {
			method: descriptor.method,
			url,
			secret: self.credentials.secret_key.clone(),
			body: resolved.body.map(Value::Object),
		})
	}

	pub(crate) async fn execute<S>(
		&self,
		descriptor: &OperationDescriptor,
		item_index: usize,
		source: &S,
	) -> Result<Value>
	where
		S: ?Sized + ParameterSource,
	{
		obs::record_operation_outcome(
			descriptor.resource,
			descriptor.operation,
			OperationOutcome::Attempt,
		);

		let result = self.send(descriptor, item_index, source).await;

		match &result {
			Ok(_) => obs::record_operation_outcome(
				descriptor.resource,
				descriptor.operation,
				OperationOutcome::Success,
			),
			Err(_) => obs::record_operation_outcome(
				descriptor.resource,
				descriptor.operation,
				OperationOutcome::Failure,
			),
		}

		result
	}

	async fn send<S>(
		&self,
		descriptor: &OperationDescriptor,
		item_index: usize,
		source: &S,
	) -> Result<Value>
	where
		S: ?Sized + ParameterSource,
	{
		let request = self.prepare_with(descriptor, item_index, source)?;
		let response = <C as ApiHttpClient>::execute(self.http_client.as_ref(), request)
			.await
			.map_err(TransportError::network)?;

		if response.is_success() {
			Ok(decode_success(&response.body))
		} else {
			Err(api_error(response))
		}
	}
}

/// Appends the substituted path template and the query string to `base`.
fn build_url(
	base: &Url,
	descriptor: &OperationDescriptor,
	resolved: &ResolvedParameters,
) -> Result<Url, ConfigError> {
	let mut url = base.clone();

	{
		let mut segments = url.path_segments_mut().map_err(|_| ConfigError::InvalidBaseUrl {
			url: base.to_string(),
			reason: "URL cannot be used as a base".into(),
		})?;

		segments.pop_if_empty();

		for segment in descriptor.path.split('/').filter(|segment| !segment.is_empty()) {
			match placeholder(segment) {
				Some(name) => segments.push(resolved.path_value(name).unwrap_or_default()),
				None => segments.push(segment),
			};
		}
	}

	url.set_query(None);

	if !resolved.query.is_empty() {
		url.query_pairs_mut()
			.extend_pairs(resolved.query.iter().map(|(key, value)| (*key, value.as_str())));
	}

	Ok(url)
}

/// Decodes a 2xx body: empty becomes `null`, non-JSON text is returned as a string.
fn decode_success(body: &[u8]) -> Value {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Value::Null;
	}

	serde_json::from_slice(body)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn api_error(response: ApiResponse) -> Error {
	let body = serde_json::from_slice::<Value>(&response.body).ok();
	let message = body
		.as_ref()
		.and_then(envelope_message)
		.unwrap_or_else(|| status_reason(response.status).to_owned());

	Error::Api { status: response.status, message, body }
}

/// Picks the most specific message from a Clerk error envelope
/// (`{"errors": [{"message", "long_message", "code"}]}`) or a plain `{"message"}` body.
fn envelope_message(body: &Value) -> Option<String> {
	fn non_empty(value: Option<&Value>) -> Option<&str> {
		value.and_then(Value::as_str).filter(|text| !text.is_empty())
	}

	let first = body.get("errors").and_then(|errors| errors.get(0));

	non_empty(first.and_then(|error| error.get("long_message")))
		.or_else(|| non_empty(first.and_then(|error| error.get("message"))))
		.or_else(|| non_empty(body.get("message")))
		.map(str::to_owned)
}

fn status_reason(status: u16) -> &'static str {
	match status {
		400 => "Bad Request",
		401 => "Unauthorized",
		402 => "Payment Required",
		403 => "Forbidden",
		404 => "Not Found",
		405 => "Method Not Allowed",
		409 => "Conflict",
		410 => "Gone",
		413 => "Payload Too Large",
		422 => "Unprocessable Entity",
		429 => "Too Many Requests",
		500 => "Internal Server Error",
		502 => "Bad Gateway",
		503 => "Service Unavailable",
		504 => "Gateway Timeout",
		_ => "Unexpected response status",
	}
}
