//! Connector entry point: the request dispatcher and the item loop built on top of it.
//!
//! [`Connector`] owns the transport, the credential snapshot, and the operation registry.
//! `dispatch` turns one `(resource, operation, item)` triple into exactly one HTTP call, while
//! `process` runs a whole batch sequentially under a [`FailurePolicy`].

pub mod batch;
pub mod dispatch;

pub use batch::*;

// self
use crate::{_prelude::*, auth::Credentials, http::ApiHttpClient, registry::Registry};
#[cfg(feature = "reqwest")]
use crate::{error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Connector specialized for the crate's default reqwest transport.
pub type ReqwestConnector = Connector<ReqwestHttpClient>;

/// Executes Clerk operations for a workflow host.
///
/// The connector holds no mutable state: clones share the transport and the registry, and every
/// call reads the credentials it was built with.
pub struct Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Secret key and base URL applied to every request.
	pub credentials: Credentials,
	/// Operation table consulted for every lookup.
	pub registry: Arc<Registry>,
}
impl<C> Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a connector that reuses the caller-provided transport and the built-in catalog.
	pub fn with_http_client(credentials: Credentials, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			credentials,
			registry: Arc::new(Registry::default()),
		}
	}

	/// Replaces the operation registry.
	pub fn with_registry(mut self, registry: impl Into<Arc<Registry>>) -> Self {
		self.registry = registry.into();

		self
	}
}
#[cfg(feature = "reqwest")]
impl Connector<ReqwestHttpClient> {
	/// Creates a connector backed by a freshly built reqwest client.
	pub fn new(credentials: Credentials) -> Result<Self> {
		let client = ReqwestClient::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self::with_http_client(credentials, ReqwestHttpClient::with_client(client)))
	}
}
impl<C> Clone for Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			credentials: self.credentials.clone(),
			registry: self.registry.clone(),
		}
	}
}
impl<C> Debug for Connector<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Connector")
			.field("base_url", &self.credentials.base_url.as_str())
			.field("secret_key", &self.credentials.secret_key)
			.field("operations", &self.registry.len())
			.finish()
	}
}
