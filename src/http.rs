//! Transport primitives for Clerk API calls.
//!
//! The connector depends on an HTTP stack only through [`ApiHttpClient`]: it hands the transport
//! a fully built [`ApiRequest`] and receives the raw [`ApiResponse`] back, so status handling and
//! body decoding stay in one place regardless of which client executes the call.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, auth::SecretKey, registry::HttpMethod};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Header value sent as both `Content-Type` and `Accept`.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Abstraction over HTTP transports capable of executing Clerk API requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// connector clone, and the futures they return must be `Send` so hosts can drive item loops on
/// multi-threaded runtimes.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and returns the status code and raw body, whatever the status.
	///
	/// Only failures that prevent a response from being obtained (DNS, TCP, TLS, timeouts) should
	/// surface as `Err`; non-2xx responses must be returned as [`ApiResponse`] values.
	fn execute(
		&self,
		request: ApiRequest,
	) -> HttpFuture<'_, Result<ApiResponse, Self::TransportError>>;
}

/// Fully built request ready for a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: HttpMethod,
	/// Absolute URL including the encoded query string.
	pub url: Url,
	/// Secret key sent as the bearer token.
	pub secret: SecretKey,
	/// JSON body, when the operation declares body fields.
	pub body: Option<Value>,
}
impl ApiRequest {
	/// Returns the headers every Clerk request carries.
	pub fn headers(&self) -> [(&'static str, String); 3] {
		[
			("Authorization", self.secret.bearer()),
			("Content-Type", JSON_CONTENT_TYPE.into()),
			("Accept", JSON_CONTENT_TYPE.into()),
		]
	}

	/// Serializes the JSON body, if any.
	pub fn encoded_body(&self) -> Option<String> {
		self.body.as_ref().map(Value::to_string)
	}
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response from a status code and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(
		&self,
		request: ApiRequest,
	) -> HttpFuture<'_, Result<ApiResponse, Self::TransportError>> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(request.method.into(), request.url.clone());

			for (name, value) in request.headers() {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.encoded_body() {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}

#[cfg(feature = "reqwest")]
impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => reqwest::Method::GET,
			HttpMethod::Post => reqwest::Method::POST,
			HttpMethod::Patch => reqwest::Method::PATCH,
			HttpMethod::Delete => reqwest::Method::DELETE,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn requests_carry_bearer_and_json_headers() {
		let request = ApiRequest {
			method: HttpMethod::Post,
			url: Url::parse("https://api.clerk.com/v1/users").expect("Fixture URL should parse."),
			secret: SecretKey::new("sk_test_123"),
			body: Some(serde_json::json!({ "first_name": "Ada" })),
		};
		let headers = request.headers();

		assert_eq!(headers[0], ("Authorization", "Bearer sk_test_123".to_owned()));
		assert_eq!(headers[1].1, JSON_CONTENT_TYPE);
		assert_eq!(headers[2].1, JSON_CONTENT_TYPE);
		assert_eq!(request.encoded_body().as_deref(), Some("{\"first_name\":\"Ada\"}"));
		assert!(!format!("{request:?}").contains("sk_test_123"));
	}

	#[test]
	fn success_covers_the_2xx_range() {
		assert!(ApiResponse::new(204, "").is_success());
		assert!(!ApiResponse::new(302, "").is_success());
		assert!(!ApiResponse::new(422, "{}").is_success());
	}
}
