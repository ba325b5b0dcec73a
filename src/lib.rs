//! Table-driven Clerk Backend API connector for workflow hosts: a declarative operation registry,
//! explicit-presence parameter resolution, and an item loop with a continue-on-failure policy.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod connector;
pub mod error;
pub mod http;
pub mod obs;
pub mod params;
pub mod registry;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{auth::Credentials, connector::ReqwestConnector, http::ReqwestHttpClient};

	/// Secret key used by every test fixture.
	pub const TEST_SECRET_KEY: &str = "sk_test_connector";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`ReqwestConnector`] whose base URL points at a mock server.
	pub fn build_reqwest_test_connector(base_url: &str) -> ReqwestConnector {
		let credentials = Credentials::new(TEST_SECRET_KEY)
			.and_then(|credentials| credentials.with_base_url(base_url))
			.expect("Mock server URL should be a valid base URL.");

		ReqwestConnector::with_http_client(credentials, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _};
