// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use clerk_connector::{
	_preludet::*,
	connector::{FailurePolicy, ResultItem},
	error::ParameterError,
	params::ParameterSet,
	registry::Resource,
};

async fn mock_sessions(server: &MockServer) -> [httpmock::Mock<'_>; 3] {
	let first = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/sessions/sess_a");
			then.status(200).header("content-type", "application/json").body("{\"id\":\"sess_a\"}");
		})
		.await;
	let second = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/sessions/sess_missing");
			then.status(404).header("content-type", "application/json").body(
				"{\"errors\":[{\"message\":\"not found\",\"long_message\":\"Session not found.\"}]}",
			);
		})
		.await;
	let third = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/sessions/sess_c");
			then.status(200).header("content-type", "application/json").body("{\"id\":\"sess_c\"}");
		})
		.await;

	[first, second, third]
}

fn three_sessions() -> ParameterSet {
	ParameterSet::new()
		.with_item(0, "sessionId", "sess_a")
		.with_item(1, "sessionId", "sess_missing")
		.with_item(2, "sessionId", "sess_c")
}

#[tokio::test]
async fn continue_on_failure_keeps_order_and_length() {
	let server = MockServer::start_async().await;
	let connector = build_reqwest_test_connector(&server.url("/v1"));
	let mocks = mock_sessions(&server).await;
	let items = connector
		.process(Resource::Sessions, "getSession", 3, &three_sessions(), FailurePolicy::Continue)
		.await
		.expect("Continue policy should never fail the batch on item errors.");

	assert_eq!(items.len(), 3);
	assert_eq!(items[0], ResultItem::success(0, json!({ "id": "sess_a" })));
	assert_eq!(items[1].source_index, 1);
	assert!(items[1].is_failure());
	assert!(
		items[1].payload["error"]
			.as_str()
			.is_some_and(|message| message.contains("Session not found."))
	);
	assert_eq!(items[2], ResultItem::success(2, json!({ "id": "sess_c" })));

	for mock in &mocks {
		mock.assert_calls_async(1).await;
	}
}

#[tokio::test]
async fn halt_stops_at_the_first_failure() {
	let server = MockServer::start_async().await;
	let connector = build_reqwest_test_connector(&server.url("/v1"));
	let [first, second, third] = mock_sessions(&server).await;
	let err = connector
		.process(Resource::Sessions, "getSession", 3, &three_sessions(), FailurePolicy::Halt)
		.await
		.expect_err("Halt policy should surface the failing item.");

	assert!(matches!(err, Error::Item { index: 1, .. }));
	assert_eq!(err.status(), Some(404));

	first.assert_calls_async(1).await;
	second.assert_calls_async(1).await;
	third.assert_calls_async(0).await;
}

#[tokio::test]
async fn invalid_metadata_fails_the_item_before_sending() {
	let server = MockServer::start_async().await;
	let connector = build_reqwest_test_connector(&server.url("/v1"));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/users");
			then.status(200).header("content-type", "application/json").body("{\"id\":\"user_1\"}");
		})
		.await;
	let params = ParameterSet::new()
		.with("firstName", "Grace")
		.with_item(0, "privateMetadata", "not json")
		.with_item(1, "privateMetadata", "{\"tier\":\"gold\"}");
	let items = connector
		.process(Resource::Users, "createUser", 2, &params, FailurePolicy::Continue)
		.await
		.expect("Continue policy should record the invalid item.");

	assert!(items[0].is_failure());
	assert!(
		items[0].payload["error"]
			.as_str()
			.is_some_and(|message| message.contains("privateMetadata"))
	);
	assert_eq!(items[1], ResultItem::success(1, json!({ "id": "user_1" })));

	mock.assert_calls_async(1).await;

	let err = connector
		.process(Resource::Users, "createUser", 2, &params, FailurePolicy::Halt)
		.await
		.expect_err("Halt policy should stop at the invalid item.");

	assert!(matches!(
		err,
		Error::Item { index: 0, ref source }
			if matches!(**source, Error::Parameter(ParameterError::InvalidJson { .. }))
	));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn configuration_errors_are_fatal_even_when_continuing() {
	let server = MockServer::start_async().await;
	let connector = build_reqwest_test_connector(&server.url("/v1"));
	let mock = server
		.mock_async(|_, then| {
			then.status(200).body("{}");
		})
		.await;
	let err = connector
		.process(
			Resource::Invitations,
			"deleteInvitation",
			3,
			&ParameterSet::new(),
			FailurePolicy::Continue,
		)
		.await
		.expect_err("Unknown operations should fail the whole batch.");

	assert!(matches!(err, Error::Config(_)));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn empty_batches_send_nothing() {
	let server = MockServer::start_async().await;
	let connector = build_reqwest_test_connector(&server.url("/v1"));
	let params = ParameterSet::new();
	let items = connector
		.process(Resource::JwtTemplates, "getJwtTemplates", 0, &params, FailurePolicy::Halt)
		.await
		.expect("Empty batches should succeed.");

	assert!(items.is_empty());
}
