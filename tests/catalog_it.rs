// std
use std::convert::Infallible;
// crates.io
use parking_lot::Mutex;
use serde_json::json;
// self
use clerk_connector::{
	_preludet::*,
	auth::Credentials,
	connector::{Connector, FailurePolicy},
	error::ParameterError,
	http::{ApiHttpClient, ApiRequest, ApiResponse, HttpFuture},
	params::ParameterSet,
	registry::{HttpMethod, OperationDescriptor, Presence, Registry, Resource},
};

#[derive(Default)]
struct RecordingClient {
	requests: Mutex<Vec<ApiRequest>>,
}
impl RecordingClient {
	fn take(&self) -> Vec<ApiRequest> {
		std::mem::take(&mut *self.requests.lock())
	}
}
impl ApiHttpClient for RecordingClient {
	type TransportError = Infallible;

	fn execute(
		&self,
		request: ApiRequest,
	) -> HttpFuture<'_, Result<ApiResponse, Self::TransportError>> {
		self.requests.lock().push(request);

		Box::pin(async { Ok::<_, Infallible>(ApiResponse::new(200, "{\"ok\":true}")) })
	}
}

fn recording_connector() -> (Connector<RecordingClient>, Arc<RecordingClient>) {
	let credentials =
		Credentials::new(TEST_SECRET_KEY).expect("Fixture secret key should be accepted.");
	let client = Arc::new(RecordingClient::default());

	(Connector::with_http_client(credentials, client.clone()), client)
}

/// Supplies a value for every path field and every required field.
fn required_parameters(descriptor: &OperationDescriptor) -> ParameterSet {
	let required = descriptor
		.query_fields
		.iter()
		.chain(&descriptor.body_fields)
		.filter(|field| field.presence == Presence::Required);

	descriptor
		.path_fields
		.iter()
		.chain(required)
		.fold(ParameterSet::new(), |params, field| {
			params.with(field.param, format!("v_{}", field.param))
		})
}

fn expected_path(descriptor: &OperationDescriptor) -> String {
	let substituted = descriptor
		.path
		.split('/')
		.map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
			Some(name) => format!("v_{name}"),
			None => segment.to_owned(),
		})
		.collect::<Vec<_>>()
		.join("/");

	format!("/v1{substituted}")
}

#[tokio::test]
async fn every_catalog_operation_sends_one_request_with_its_method_and_path() {
	let (connector, client) = recording_connector();
	let registry = Registry::default();

	assert_eq!(registry.descriptors().count(), 49);

	for descriptor in registry.descriptors() {
		let params = required_parameters(descriptor);
		let response = connector
			.dispatch(descriptor.resource, descriptor.operation, 0, &params)
			.await
			.unwrap_or_else(|e| panic!("{} should dispatch: {e}.", descriptor.operation));
		let requests = client.take();

		assert_eq!(response, json!({ "ok": true }));
		assert_eq!(requests.len(), 1, "{} should send exactly one request.", descriptor.operation);

		let request = &requests[0];

		assert_eq!(request.method, descriptor.method, "{} method mismatch.", descriptor.operation);
		assert_eq!(
			request.url.path(),
			expected_path(descriptor),
			"{} path mismatch.",
			descriptor.operation
		);
		assert_eq!(request.url.host_str(), Some("api.clerk.com"));
		assert_eq!(request.body.is_some(), descriptor.has_body());
		assert_eq!(request.headers()[0].1, format!("Bearer {TEST_SECRET_KEY}"));
	}
}

#[tokio::test]
async fn resolution_failures_and_unknown_operations_send_nothing() {
	let (connector, client) = recording_connector();
	let items = connector
		.process(Resource::Users, "getUser", 2, &ParameterSet::new(), FailurePolicy::Continue)
		.await
		.expect("Missing identifiers become per-item failures.");

	assert_eq!(items.len(), 2);
	assert!(items.iter().all(|item| item.is_failure()));
	assert!(client.take().is_empty());

	let err = connector
		.process(Resource::Users, "archiveUser", 2, &ParameterSet::new(), FailurePolicy::Continue)
		.await
		.expect_err("Unknown operations should fail the batch.");

	assert!(err.is_local());
	assert!(client.take().is_empty());

	let params = ParameterSet::new().with("userId", "user_1");
	let err = connector
		.dispatch(Resource::EmailAddresses, "createEmailAddress", 0, &params)
		.await
		.expect_err("The email address is required.");

	assert!(matches!(
		err,
		Error::Parameter(ParameterError::MissingRequired { field: "emailAddress" })
	));
	assert!(client.take().is_empty());
}

#[tokio::test]
async fn phone_numbers_keep_explicit_false_flags() {
	let (connector, client) = recording_connector();
	let params = ParameterSet::new()
		.with("userId", "user_1")
		.with("phoneNumber", "+15555550100")
		.with("verified", false);

	connector
		.dispatch(Resource::PhoneNumbers, "createPhoneNumber", 0, &params)
		.await
		.expect("createPhoneNumber should dispatch.");

	let requests = client.take();

	assert_eq!(requests[0].method, HttpMethod::Post);
	assert_eq!(
		requests[0].body,
		Some(json!({ "user_id": "user_1", "phone_number": "+15555550100", "verified": false }))
	);
}

#[tokio::test]
async fn email_addresses_default_their_flags() {
	let (connector, client) = recording_connector();
	let params =
		ParameterSet::new().with("userId", "user_1").with("emailAddress", "ada@example.com");

	connector
		.dispatch(Resource::EmailAddresses, "createEmailAddress", 0, &params)
		.await
		.expect("createEmailAddress should dispatch.");

	assert_eq!(
		client.take().remove(0).body,
		Some(json!({
			"user_id": "user_1",
			"email_address": "ada@example.com",
			"verified": false,
			"primary": false,
		}))
	);
}

#[tokio::test]
async fn per_item_parameters_drive_each_request() {
	let (connector, client) = recording_connector();
	let params = ParameterSet::new()
		.with("identifier", "blocked@example.com")
		.with_item(1, "identifier", "*@spam.example.com");
	let items = connector
		.process(
			Resource::BlocklistIdentifiers,
			"createBlocklistIdentifier",
			2,
			&params,
			FailurePolicy::Halt,
		)
		.await
		.expect("Both items should succeed.");
	let bodies = client.take().into_iter().map(|request| request.body).collect::<Vec<_>>();

	assert_eq!(items.len(), 2);
	assert_eq!(
		bodies,
		[
			Some(json!({ "identifier": "blocked@example.com" })),
			Some(json!({ "identifier": "*@spam.example.com" })),
		]
	);
}
