//! Demonstrates dispatching `users/getUser` with the default reqwest transport against a mock
//! Clerk API, then running a small continue-on-failure batch.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use clerk_connector::{
	auth::Credentials,
	connector::{FailurePolicy, ReqwestConnector},
	params::ParameterSet,
	registry::Resource,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let user_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/users/user_ada")
				.header("authorization", "Bearer sk_test_demo");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"user_ada\",\"first_name\":\"Ada\",\"last_name\":\"Lovelace\"}");
		})
		.await;
	let missing_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/users/user_missing");
			then.status(404).header("content-type", "application/json").body(
				"{\"errors\":[{\"message\":\"not found\",\"long_message\":\"User not found.\"}]}",
			);
		})
		.await;
	let credentials = Credentials::new("sk_test_demo")?.with_base_url(&server.url("/v1"))?;
	let connector = ReqwestConnector::new(credentials)?;
	let params = ParameterSet::new().with("userId", "user_ada");
	let user = connector.dispatch(Resource::Users, "getUser", 0, &params).await?;

	println!("Fetched user: {user}.");

	let batch = ParameterSet::new()
		.with_item(0, "userId", "user_ada")
		.with_item(1, "userId", "user_missing");
	let policy = FailurePolicy::from_continue_on_fail(true);
	let items = connector.process(Resource::Users, "getUser", 2, &batch, policy).await?;

	for item in items {
		println!("Item {}: {}.", item.source_index, item.payload);
	}

	user_mock.assert_calls_async(2).await;
	missing_mock.assert_async().await;

	Ok(())
}
