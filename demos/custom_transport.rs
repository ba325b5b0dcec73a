//! Demonstrates plugging a custom [`ApiHttpClient`] into the connector.
//!
//! 1. Implement [`ApiHttpClient`] and return raw [`ApiResponse`] values, including non-2xx ones.
//! 2. Pass the transport to [`Connector::with_http_client`].
//! 3. Inspect the prepared request without sending it via [`Connector::prepare`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use color_eyre::Result;
// self
use clerk_connector::{
	auth::Credentials,
	connector::{Connector, FailurePolicy},
	http::{ApiHttpClient, ApiRequest, ApiResponse, HttpFuture},
	params::ParameterSet,
	registry::Resource,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let credentials = Credentials::new("sk_test_demo")?;
	let connector: Connector<CannedHttpClient> =
		Connector::with_http_client(credentials, Arc::new(CannedHttpClient));
	let params = ParameterSet::new()
		.with("name", "hasura")
		.with("claims", "{\"https://hasura.io/jwt/claims\":{\"x-hasura-role\":\"user\"}}")
		.with("lifetime", 60);
	let request = connector.prepare(Resource::JwtTemplates, "createJwtTemplate", 0, &params)?;

	println!("{} {}", request.method, request.url);
	println!("Body: {}.", request.encoded_body().unwrap_or_default());

	let template =
		connector.dispatch(Resource::JwtTemplates, "createJwtTemplate", 0, &params).await?;

	println!("Created template: {template}.");

	let empty = ParameterSet::new();
	let items = connector
		.process(Resource::Sessions, "revokeSession", 1, &empty, FailurePolicy::Continue)
		.await?;

	println!("Missing session id recorded as: {}.", items[0].payload);

	Ok(())
}

#[derive(Debug)]
struct CannedTransportError;
impl Display for CannedTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Canned transport never fails")
	}
}
impl StdError for CannedTransportError {}

struct CannedHttpClient;
impl ApiHttpClient for CannedHttpClient {
	type TransportError = CannedTransportError;

	fn execute(
		&self,
		request: ApiRequest,
	) -> HttpFuture<'_, Result<ApiResponse, Self::TransportError>> {
		Box::pin(async move {
			let body = request.encoded_body().unwrap_or_default();

			Ok::<_, CannedTransportError>(ApiResponse::new(
				200,
				format!("{{\"object\":\"jwt_template\",\"echo\":{body}}}"),
			))
		})
	}
}
